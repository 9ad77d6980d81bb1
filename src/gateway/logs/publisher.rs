use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let json = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), name = event.name.as_str(), "published event {}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish() {
        let publisher = LogPublisher::new();
        let event = DomainEvent::added("books", "catalog", "123", &HashMap::new(), &"data").expect("build event");
        publisher.publish(&event).expect("should publish");
    }
}
