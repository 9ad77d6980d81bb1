use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}
