use std::sync::{Arc, Mutex};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher records published events. Clones share the same journal so
// a caller can keep a handle while the service owns the boxed publisher.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        let events = self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("event journal poisoned {}", err).as_str()))?;
        Ok(events.clone())
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let mut events = self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("event journal poisoned {}", err).as_str()))?;
        events.push(event.clone());
        Ok(())
    }
}
