use crate::core::domain::Configuration;

// setup_tracing installs the global subscriber. Logs go to stderr so they never
// interleave with the menu written to stdout.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    // a subscriber may already be installed (tests, embedding); keep it.
    let _ = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
