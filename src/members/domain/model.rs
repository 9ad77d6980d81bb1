use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::Member;

// MemberEntity abstracts a registered library member. Borrowed books are held
// by ISBN in the order they were borrowed; the book state itself stays with
// the book repository.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: String,
    pub name: String,
    pub borrowed_books: Vec<String>,
}

impl MemberEntity {
    pub fn new(name: &str, member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            borrowed_books: vec![],
        }
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Member for MemberEntity {
    fn borrowed_isbns(&self) -> &[String] {
        &self.borrowed_books
    }
}

#[cfg(test)]
mod tests {
    use crate::members::domain::model::MemberEntity;
    use crate::members::Member;

    #[test]
    fn test_should_build_member() {
        let mut member = MemberEntity::new("Alice", "M1");
        assert_eq!("M1", member.member_id.as_str());
        assert_eq!("Alice", member.name.as_str());
        assert_eq!(0, member.num_borrowed());
        member.borrowed_books.push("123".to_string());
        assert!(member.has_borrowed("123"));
        assert!(!member.has_borrowed("456"));
    }
}
