use crate::core::domain::Identifiable;

pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

pub trait Member: Identifiable {
    fn borrowed_isbns(&self) -> &[String];

    fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_isbns().iter().any(|b| b == isbn)
    }

    fn num_borrowed(&self) -> usize {
        self.borrowed_isbns().len()
    }
}
