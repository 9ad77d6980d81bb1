use std::collections::HashMap;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryBookRepository {
    store: MemoryStore<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new("Book with ISBN"),
        }
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        debug!("creating book {}", entity.isbn);
        self.store.insert(entity)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        debug!("updating book {} to {}", entity.isbn, entity.book_status);
        self.store.replace(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.store.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        debug!("deleting book {}", id);
        self.store.remove(id)
    }

    // supported predicate keys: book_status
    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.store.filter(|book| {
            predicate.iter().all(|(k, v)| match k.as_str() {
                "book_status" => book.book_status == BookStatus::from(v.to_string()),
                _ => false,
            })
        }))
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookEntity>> {
        let predicate = HashMap::from([
            ("book_status".to_string(), status.to_string()),
        ]);
        self.query(&predicate)
    }
}
