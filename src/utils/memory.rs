use indexmap::IndexMap;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryStore keeps entities keyed by id in insertion order, which is also the
// order listings are produced in.
#[derive(Debug, Clone)]
pub struct MemoryStore<Entity> {
    label: String,
    items: IndexMap<String, Entity>,
}

impl<Entity: Identifiable + Clone> MemoryStore<Entity> {
    // label names the key in messages, e.g. "Book with ISBN"
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            items: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, entity: &Entity) -> LibraryResult<usize> {
        let id = entity.id();
        if self.items.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("{} {} already exists.", self.label, id).as_str()));
        }
        self.items.insert(id, entity.clone());
        Ok(1)
    }

    pub fn replace(&mut self, entity: &Entity) -> LibraryResult<usize> {
        let id = entity.id();
        match self.items.get_mut(&id) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(1)
            }
            None => Err(self.not_found(&id)),
        }
    }

    pub fn get(&self, id: &str) -> LibraryResult<Entity> {
        self.items.get(id).cloned().ok_or_else(|| self.not_found(id))
    }

    pub fn remove(&mut self, id: &str) -> LibraryResult<Entity> {
        // shift_remove keeps the remaining entries in insertion order
        self.items.shift_remove(id).ok_or_else(|| self.not_found(id))
    }

    pub fn filter<P: Fn(&Entity) -> bool>(&self, predicate: P) -> Vec<Entity> {
        self.items.values().filter(|e| predicate(e)).cloned().collect()
    }

    fn not_found(&self, id: &str) -> LibraryError {
        LibraryError::not_found(format!("{} {} not found.", self.label, id).as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::utils::memory::MemoryStore;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: String,
        value: i32,
    }

    impl Item {
        fn new(key: &str, value: i32) -> Self {
            Self { key: key.to_string(), value }
        }
    }

    impl Identifiable for Item {
        fn id(&self) -> String {
            self.key.to_string()
        }
    }

    #[test]
    fn test_should_insert_and_get() {
        let mut store: MemoryStore<Item> = MemoryStore::new("Item with key");
        assert!(store.filter(|_| true).is_empty());
        assert_eq!(1, store.insert(&Item::new("a", 1)).expect("should insert"));
        assert_eq!(Item::new("a", 1), store.get("a").expect("should get"));
        assert_eq!(vec![Item::new("a", 1)], store.filter(|_| true));
    }

    #[test]
    fn test_should_reject_duplicate_key() {
        let mut store: MemoryStore<Item> = MemoryStore::new("Item with key");
        store.insert(&Item::new("a", 1)).expect("should insert");
        let err = store.insert(&Item::new("a", 2)).expect_err("should reject");
        assert_eq!(LibraryError::duplicate_key("Item with key a already exists."), err);
        assert_eq!(1, store.get("a").expect("should get").value);
    }

    #[test]
    fn test_should_replace_existing_only() {
        let mut store: MemoryStore<Item> = MemoryStore::new("Item with key");
        store.insert(&Item::new("a", 1)).expect("should insert");
        store.replace(&Item::new("a", 5)).expect("should replace");
        assert_eq!(5, store.get("a").expect("should get").value);
        let err = store.replace(&Item::new("b", 1)).expect_err("should not replace");
        assert_eq!(LibraryError::not_found("Item with key b not found."), err);
    }

    #[test]
    fn test_should_keep_insertion_order_after_remove() {
        let mut store: MemoryStore<Item> = MemoryStore::new("Item with key");
        for (i, key) in ["c", "a", "d", "b"].iter().enumerate() {
            store.insert(&Item::new(key, i as i32)).expect("should insert");
        }
        let removed = store.remove("a").expect("should remove");
        assert_eq!("a", removed.key.as_str());
        let keys: Vec<String> = store.filter(|_| true).into_iter().map(|i| i.key).collect();
        assert_eq!(vec!["c", "d", "b"], keys);
        assert!(store.remove("a").is_err());
    }

    #[test]
    fn test_should_filter() {
        let mut store: MemoryStore<Item> = MemoryStore::new("Item with key");
        for i in 0..6 {
            store.insert(&Item::new(format!("k{}", i).as_str(), i)).expect("should insert");
        }
        let even = store.filter(|i| i.value % 2 == 0);
        assert_eq!(3, even.len());
        assert_eq!("k0", even[0].key.as_str());
    }
}
