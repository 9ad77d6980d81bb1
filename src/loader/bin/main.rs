use clap::Parser;
use lms_catalog::books::dto::BookDto;
use lms_catalog::core::domain::Configuration;
use lms_catalog::core::library::LibraryError;
use lms_catalog::loader::client::HttpBookSource;
use lms_catalog::loader::load_books_from_url;
use lms_catalog::utils::logging::setup_tracing;

/// Fetches a JSON list of books from a URL and prints them.
#[derive(Debug, Parser)]
#[command(name = "load_books", version)]
struct Args {
    /// URL serving a JSON array of book objects
    url: String,

    /// Print the raw records instead of formatted books
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let args = Args::parse();
    let mut config = Configuration::new("").with_env();
    // the outcome of a load is reported through the log
    if config.tracing_level() < tracing::Level::INFO {
        config.log_level = "info".to_string();
    }
    setup_tracing(&config);

    let source = HttpBookSource::new(&config)?;
    let records = load_books_from_url(&source, args.url.as_str()).await;
    for record in &records {
        if args.raw {
            println!("{}", serde_json::to_string(record)?);
            continue;
        }
        match BookDto::try_from(record) {
            Ok(book) => println!("{}", book),
            Err(err) => eprintln!("skipping record: {}", err),
        }
    }
    Ok(())
}
