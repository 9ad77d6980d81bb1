use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn status(&self) -> BookStatus;

    fn is_borrowed(&self) -> bool {
        self.status() == BookStatus::Borrowed
    }
}
