use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

pub trait EventPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;
}
