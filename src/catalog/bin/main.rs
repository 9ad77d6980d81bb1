use std::io;
use lms_catalog::catalog::console::Console;
use lms_catalog::core::domain::Configuration;
use lms_catalog::core::library::LibraryError;
use lms_catalog::utils::logging::setup_tracing;

fn main() -> Result<(), LibraryError> {
    let config = Configuration::new("").with_env();
    setup_tracing(&config);

    println!();
    println!("Execution of program starts from here : ");
    println!();

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    console.run(&config)
}
