pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::{BookStatus, LibraryResult};
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    fn find_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookEntity>>;
}
