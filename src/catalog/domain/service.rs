use std::collections::HashMap;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{BookFilter, CatalogService};
use crate::catalog::dto::{LoanDto, MemberLoansDto};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;
use crate::members::Member;
use crate::members::repository::MemberRepository;

// Library owns all book state. Members only hold the ISBNs they borrowed, so a
// book is borrowed exactly when one member lists its ISBN.
pub struct Library {
    name: String,
    book_repository: Box<dyn BookRepository>,
    member_repository: Box<dyn MemberRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               member_repository: Box<dyn MemberRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            name: config.library_name.to_string(),
            book_repository,
            member_repository,
            events_publisher,
        }
    }

    fn loan_metadata(member: &MemberEntity) -> HashMap<String, String> {
        HashMap::from([("member_id".to_string(), member.member_id.to_string())])
    }

    // events are built before the change is stored; a failed publish does not
    // undo or fail an operation that already took effect
    fn publish(&self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event) {
            warn!("failed to publish {} event for {}: {}", event.name, event.key, err);
        }
    }
}

impl CatalogService for Library {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        let mut entity = BookEntity::from(book);
        entity.book_status = BookStatus::Available;
        let added = BookDto::from(&entity);
        let event = DomainEvent::added("books", "catalog", added.isbn.as_str(), &HashMap::new(), &added)?;
        self.book_repository.create(&entity)?;
        self.publish(&event);
        info!("added book {} to {}", added.isbn, self.name);
        Ok(added)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.book_repository.get(isbn)?;
        if book.is_borrowed() {
            return Err(LibraryError::already_borrowed(
                format!("'{}' is currently borrowed and cannot be removed.", book.title).as_str()));
        }
        let removed = BookDto::from(&book);
        let event = DomainEvent::deleted("books", "catalog", isbn, &HashMap::new(), &removed)?;
        self.book_repository.delete(isbn)?;
        self.publish(&event);
        info!("removed book {} from {}", isbn, self.name);
        Ok(removed)
    }

    fn add_member(&mut self, member: &MemberDto) -> LibraryResult<MemberDto> {
        let mut entity = MemberEntity::from(member);
        entity.borrowed_books.clear();
        let added = MemberDto::from(&entity);
        let event = DomainEvent::added("members", "catalog", added.member_id.as_str(), &HashMap::new(), &added)?;
        self.member_repository.create(&entity)?;
        self.publish(&event);
        info!("added member {} to {}", added.member_id, self.name);
        Ok(added)
    }

    fn remove_member(&mut self, member_id: &str) -> LibraryResult<MemberDto> {
        let member = self.member_repository.get(member_id)?;
        if member.num_borrowed() > 0 {
            return Err(LibraryError::validation(
                format!("{} still has {} borrowed book(s) and cannot be removed.",
                        member.name, member.num_borrowed()).as_str()));
        }
        let removed = MemberDto::from(&member);
        let event = DomainEvent::deleted("members", "catalog", member_id, &HashMap::new(), &removed)?;
        self.member_repository.delete(member_id)?;
        self.publish(&event);
        info!("removed member {} from {}", member_id, self.name);
        Ok(removed)
    }

    fn borrow_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let mut member = self.member_repository.get(member_id)?;
        let mut book = self.book_repository.get(isbn)?;
        if book.is_borrowed() {
            return Err(LibraryError::already_borrowed(
                format!("'{}' is already borrowed.", book.title).as_str()));
        }
        book.book_status = BookStatus::Borrowed;
        member.borrowed_books.push(book.isbn.to_string());
        let loan = LoanDto::new(BookDto::from(&book), MemberDto::from(&member));
        let event = DomainEvent::added("book_borrowed", "checkout", isbn, &Library::loan_metadata(&member), &loan)?;
        self.book_repository.update(&book)?;
        self.member_repository.update(&member)?;
        self.publish(&event);
        info!("book {} borrowed by {}", isbn, member_id);
        Ok(loan)
    }

    fn return_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let mut member = self.member_repository.get(member_id)?;
        let mut book = self.book_repository.get(isbn)?;
        if !book.is_borrowed() {
            return Err(LibraryError::not_borrowed(
                format!("'{}' was not borrowed.", book.title).as_str()));
        }
        if !member.has_borrowed(&book.isbn) {
            return Err(LibraryError::ownership_mismatch(
                format!("'{}' was not borrowed by {}.", book.title, member.name).as_str()));
        }
        book.book_status = BookStatus::Available;
        member.borrowed_books.retain(|b| b != &book.isbn);
        let loan = LoanDto::new(BookDto::from(&book), MemberDto::from(&member));
        let event = DomainEvent::deleted("book_returned", "checkout", isbn, &Library::loan_metadata(&member), &loan)?;
        self.book_repository.update(&book)?;
        self.member_repository.update(&member)?;
        self.publish(&event);
        info!("book {} returned by {}", isbn, member_id);
        Ok(loan)
    }

    fn find_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).map(|b| BookDto::from(&b))
    }

    fn find_member(&self, member_id: &str) -> LibraryResult<MemberDto> {
        self.member_repository.get(member_id).map(|m| MemberDto::from(&m))
    }

    fn list_books(&self, filter: BookFilter) -> LibraryResult<Vec<BookDto>> {
        let books = match filter {
            BookFilter::All => self.book_repository.query(&HashMap::new())?,
            BookFilter::Available => self.book_repository.find_by_status(BookStatus::Available)?,
            BookFilter::Borrowed => self.book_repository.find_by_status(BookStatus::Borrowed)?,
        };
        Ok(books.iter().map(BookDto::from).collect())
    }

    fn list_all_members(&self) -> LibraryResult<Vec<MemberLoansDto>> {
        let members = self.member_repository.query(&HashMap::new())?;
        members.iter().map(|member| -> LibraryResult<MemberLoansDto> {
            let borrowed = member.borrowed_books.iter()
                .map(|isbn| self.book_repository.get(isbn).map(|b| BookDto::from(&b)))
                .collect::<LibraryResult<Vec<BookDto>>>()?;
            Ok(MemberLoansDto::new(MemberDto::from(member), borrowed))
        }).collect()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
        }
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            member_id: other.member_id.to_string(),
            name: other.name.to_string(),
            borrowed_books: other.borrowed_books.clone(),
        }
    }
}

impl From<&MemberDto> for MemberEntity {
    fn from(other: &MemberDto) -> Self {
        Self {
            member_id: other.member_id.to_string(),
            name: other.name.to_string(),
            borrowed_books: other.borrowed_books.clone(),
        }
    }
}
