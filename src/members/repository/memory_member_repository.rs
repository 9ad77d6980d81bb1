use std::collections::HashMap;
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;
use crate::members::Member;
use crate::members::repository::MemberRepository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryMemberRepository {
    store: MemoryStore<MemberEntity>,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new("Member with ID"),
        }
    }
}

impl Default for MemoryMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository<MemberEntity> for MemoryMemberRepository {
    fn create(&mut self, entity: &MemberEntity) -> LibraryResult<usize> {
        debug!("creating member {}", entity.member_id);
        self.store.insert(entity)
    }

    fn update(&mut self, entity: &MemberEntity) -> LibraryResult<usize> {
        debug!("updating member {} with {} borrowed", entity.member_id, entity.num_borrowed());
        self.store.replace(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<MemberEntity> {
        self.store.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<MemberEntity> {
        debug!("deleting member {}", id);
        self.store.remove(id)
    }

    // members have no queryable attributes, only the empty predicate matches
    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<MemberEntity>> {
        Ok(self.store.filter(|_| predicate.is_empty()))
    }
}

impl MemberRepository for MemoryMemberRepository {}
