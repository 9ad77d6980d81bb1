use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable {
    fn id(&self) -> String;
}

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub library_name: String,
    pub log_level: String,
    pub json_logs: bool,
    pub http_timeout_secs: u64,
    // events go to the logs unless a caller wires in another publisher
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(library_name: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            publisher: GatewayPublisherVia::Logs,
        }
    }

    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    pub fn with_library_name(mut self, library_name: &str) -> Self {
        self.library_name = library_name.to_string();
        self
    }

    // unparsable values keep the current setting
    fn with_vars<F: Fn(&str) -> Option<String>>(mut self, lookup: F) -> Self {
        if let Some(level) = lookup("LMS_LOG_LEVEL") {
            if level.parse::<tracing::Level>().is_ok() {
                self.log_level = level.to_lowercase();
            }
        }
        if let Some(json) = lookup("LMS_LOG_JSON") {
            if let Ok(json) = json.parse::<bool>() {
                self.json_logs = json;
            }
        }
        if let Some(timeout) = lookup("LMS_HTTP_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                self.http_timeout_secs = timeout;
            }
        }
        self
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::WARN)
    }
}
