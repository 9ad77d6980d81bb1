use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::members::dto::MemberDto;

// LoanDto is the outcome of a borrow or return: both sides after the change.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub book: BookDto,
    pub member: MemberDto,
}

impl LoanDto {
    pub fn new(book: BookDto, member: MemberDto) -> Self {
        Self {
            book,
            member,
        }
    }
}

// MemberLoansDto annotates a member with the books currently borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberLoansDto {
    pub member: MemberDto,
    pub borrowed: Vec<BookDto>,
}

impl MemberLoansDto {
    pub fn new(member: MemberDto, borrowed: Vec<BookDto>) -> Self {
        Self {
            member,
            borrowed,
        }
    }

    pub fn borrowed_titles(&self) -> Vec<&str> {
        self.borrowed.iter().map(|b| b.title.as_str()).collect()
    }
}
