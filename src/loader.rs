pub mod client;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, warn};
use crate::core::library::{LibraryError, LibraryResult};

// BookSource fetches the raw body of a book listing.
#[async_trait]
pub trait BookSource: Sync + Send {
    async fn fetch(&self, url: &str) -> LibraryResult<String>;
}

// load_books_from_url never fails: fetch and decode errors are logged and
// degrade to an empty list.
pub async fn load_books_from_url(source: &dyn BookSource, url: &str) -> Vec<Map<String, Value>> {
    let body = match source.fetch(url).await {
        Ok(body) => body,
        Err(err) => {
            warn!("Error fetching data from {}: {}", url, err);
            return vec![];
        }
    };
    match parse_books(&body) {
        Ok(books) => {
            info!("Successfully fetched {} books from {}", books.len(), url);
            books
        }
        Err(err) => {
            warn!("Error decoding JSON from {}: {}", url, err);
            vec![]
        }
    }
}

pub fn parse_books(body: &str) -> LibraryResult<Vec<Map<String, Value>>> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => items.into_iter().map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(LibraryError::serialization(
                format!("expected a book object but found {}", other).as_str())),
        }).collect(),
        other => Err(LibraryError::serialization(
            format!("expected a list of books but found {}", kind_of(&other)).as_str())),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
