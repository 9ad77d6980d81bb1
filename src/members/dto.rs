use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::Member;

// MemberDto is a data transfer object for library members.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub member_id: String,
    pub name: String,
    pub borrowed_books: Vec<String>,
}

impl MemberDto {
    pub fn new(name: &str, member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            borrowed_books: vec![],
        }
    }
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Member for MemberDto {
    fn borrowed_isbns(&self) -> &[String] {
        &self.borrowed_books
    }
}

impl Display for MemberDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Member: {} (ID: {}) - Borrowed Books: {}", self.name, self.member_id, self.num_borrowed())
    }
}
