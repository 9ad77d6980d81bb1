use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::remove_member_cmd::{RemoveMemberCommand, RemoveMemberCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::{BookFilter, CatalogService};
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

const MENU: &str = "\n--- Library Menu ---
1. Add Book
2. Add Member
3. Borrow Book
4. Return Book
5. List All Books
6. List Available Books
7. List Borrowed Books
8. List All Members
9. Remove Book
10. Remove Member
11. Exit";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    AddMember,
    BorrowBook,
    ReturnBook,
    ListAllBooks,
    ListAvailableBooks,
    ListBorrowedBooks,
    ListAllMembers,
    RemoveBook,
    RemoveMember,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddBook),
            "2" => Ok(MenuChoice::AddMember),
            "3" => Ok(MenuChoice::BorrowBook),
            "4" => Ok(MenuChoice::ReturnBook),
            "5" => Ok(MenuChoice::ListAllBooks),
            "6" => Ok(MenuChoice::ListAvailableBooks),
            "7" => Ok(MenuChoice::ListBorrowedBooks),
            "8" => Ok(MenuChoice::ListAllMembers),
            "9" => Ok(MenuChoice::RemoveBook),
            "10" => Ok(MenuChoice::RemoveMember),
            "11" => Ok(MenuChoice::Exit),
            other => Err(LibraryError::validation(format!("unknown menu choice {:?}", other).as_str())),
        }
    }
}

fn listing_header(filter: BookFilter) -> &'static str {
    match filter {
        BookFilter::All => "--- All Books ---",
        BookFilter::Available => "--- Available Books ---",
        BookFilter::Borrowed => "--- Borrowed Books ---",
    }
}

fn empty_listing(filter: BookFilter) -> &'static str {
    match filter {
        BookFilter::All => "No books in the library.",
        BookFilter::Available => "No books currently available.",
        BookFilter::Borrowed => "No books currently borrowed.",
    }
}

// Console drives the interactive menu over any line reader and writer. Domain
// failures are reported and the loop continues; only I/O failures end it.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // run asks for the library name, then serves the menu until exit or end of input
    pub fn run(&mut self, config: &Configuration) -> LibraryResult<()> {
        let Some(name) = self.prompt("Enter the name of the library: ")? else {
            return Ok(());
        };
        let config = config.clone().with_library_name(name.trim());
        let mut library = factory::create_catalog_service(&config);
        self.serve(library.as_mut())
    }

    pub fn serve(&mut self, library: &mut dyn CatalogService) -> LibraryResult<()> {
        info!("serving library {}", library.name());
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                debug!("input closed");
                return Ok(());
            };
            let proceed = match MenuChoice::from_str(&choice) {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting Library Management System. Goodbye!")?;
                    false
                }
                Ok(choice) => self.dispatch(library, choice)?,
                Err(err) => {
                    debug!("{}", err);
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            if !proceed {
                return Ok(());
            }
        }
    }

    // dispatch returns false when input ended while collecting fields
    fn dispatch(&mut self, library: &mut dyn CatalogService, choice: MenuChoice) -> LibraryResult<bool> {
        match choice {
            MenuChoice::AddBook => {
                let Some(fields) = self.prompt_all(&["Enter book title: ", "Enter book author: ", "Enter book ISBN: "])? else {
                    return Ok(false);
                };
                let req = AddBookCommandRequest::new(&fields[0], &fields[1], &fields[2]);
                match AddBookCommand::new(library).execute(req) {
                    Ok(res) => writeln!(self.output, "Added book: {}", res.book.title)?,
                    Err(err) => self.report(err)?,
                }
            }
            MenuChoice::AddMember => {
                let Some(fields) = self.prompt_all(&["Enter member name: ", "Enter member ID: "])? else {
                    return Ok(false);
                };
                let req = AddMemberCommandRequest::new(&fields[0], &fields[1]);
                match AddMemberCommand::new(library).execute(req) {
                    Ok(res) => writeln!(self.output, "Added member: {}", res.member.name)?,
                    Err(err) => self.report(err)?,
                }
            }
            MenuChoice::BorrowBook => {
                let Some(fields) = self.prompt_all(&["Enter member ID: ", "Enter book ISBN to borrow: "])? else {
                    return Ok(false);
                };
                let req = BorrowBookCommandRequest::new(&fields[0], &fields[1]);
                match BorrowBookCommand::new(library).execute(req) {
                    Ok(res) => writeln!(self.output, "'{}' borrowed by {}.", res.loan.book.title, res.loan.member.name)?,
                    Err(err) => self.report(err)?,
                }
            }
            MenuChoice::ReturnBook => {
                let Some(fields) = self.prompt_all(&["Enter member ID: ", "Enter book ISBN to return: "])? else {
                    return Ok(false);
                };
                let req = ReturnBookCommandRequest::new(&fields[0], &fields[1]);
                match ReturnBookCommand::new(library).execute(req) {
                    Ok(res) => writeln!(self.output, "'{}' returned by {}.", res.loan.book.title, res.loan.member.name)?,
                    Err(err) => self.report(err)?,
                }
            }
            MenuChoice::ListAllBooks => self.print_books(library, BookFilter::All)?,
            MenuChoice::ListAvailableBooks => self.print_books(library, BookFilter::Available)?,
            MenuChoice::ListBorrowedBooks => self.print_books(library, BookFilter::Borrowed)?,
            MenuChoice::ListAllMembers => self.print_members(library)?,
            MenuChoice::RemoveBook => {
                let Some(isbn) = self.prompt("Enter ISBN of the book to remove: ")? else {
                    return Ok(false);
                };
                match RemoveBookCommand::new(library).execute(RemoveBookCommandRequest::new(&isbn)) {
                    Ok(res) => writeln!(self.output, "Removed book: {}", res.book.title)?,
                    Err(err) => self.report(err)?,
                }
            }
            MenuChoice::RemoveMember => {
                let Some(member_id) = self.prompt("Enter ID of the member to remove: ")? else {
                    return Ok(false);
                };
                match RemoveMemberCommand::new(library).execute(RemoveMemberCommandRequest::new(&member_id)) {
                    Ok(res) => writeln!(self.output, "Removed member: {}", res.member.name)?,
                    Err(err) => self.report(err)?,
                }
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn print_books(&mut self, library: &dyn CatalogService, filter: BookFilter) -> LibraryResult<()> {
        writeln!(self.output, "\n{}", listing_header(filter))?;
        match ListBooksCommand::new(library).execute(ListBooksCommandRequest::new(filter)) {
            Ok(res) => {
                if res.books.is_empty() {
                    writeln!(self.output, "{}", empty_listing(filter))?;
                }
                for book in res.books {
                    writeln!(self.output, "{}", book)?;
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn print_members(&mut self, library: &dyn CatalogService) -> LibraryResult<()> {
        writeln!(self.output, "\n--- All Members ---")?;
        match ListMembersCommand::new(library).execute(ListMembersCommandRequest::new()) {
            Ok(res) => {
                if res.members.is_empty() {
                    writeln!(self.output, "No members registered.")?;
                }
                for loans in res.members {
                    writeln!(self.output, "{}", loans.member)?;
                    if !loans.borrowed.is_empty() {
                        writeln!(self.output, "  Borrowed:")?;
                        for title in loans.borrowed_titles() {
                            writeln!(self.output, "    - {}", title)?;
                        }
                    }
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: LibraryError) -> LibraryResult<()> {
        debug!("operation failed {:?}", err);
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    // prompt returns None once the input is exhausted
    fn prompt(&mut self, message: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        // invalid UTF-8 is replaced rather than failing the session
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_all(&mut self, messages: &[&str]) -> LibraryResult<Option<Vec<String>>> {
        let mut fields = Vec::with_capacity(messages.len());
        for message in messages {
            match self.prompt(message)? {
                Some(field) => fields.push(field),
                None => return Ok(None),
            }
        }
        Ok(Some(fields))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::str::FromStr;
    use crate::books::dto::BookDto;
    use crate::catalog::command::tests::build_catalog_service;
    use crate::catalog::console::{Console, MenuChoice};
    use crate::catalog::domain::CatalogService;
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;

    fn run_session(library: &mut dyn CatalogService, lines: &[&str]) -> String {
        let input = Cursor::new(lines.join("\n"));
        let mut console = Console::new(input, Vec::new());
        console.serve(library).expect("session should end cleanly");
        String::from_utf8(console.into_output()).expect("utf8 output")
    }

    #[test]
    fn test_should_parse_menu_choices() {
        assert_eq!(MenuChoice::AddBook, MenuChoice::from_str("1").expect("valid"));
        assert_eq!(MenuChoice::RemoveMember, MenuChoice::from_str(" 10 ").expect("valid"));
        assert_eq!(MenuChoice::Exit, MenuChoice::from_str("11").expect("valid"));
        assert!(MenuChoice::from_str("0").is_err());
        assert!(MenuChoice::from_str("12").is_err());
        assert!(MenuChoice::from_str("exit").is_err());
    }

    #[test]
    fn test_should_borrow_and_return_through_menu() {
        let mut library = build_catalog_service();
        let output = run_session(library.as_mut(), &[
            "1", "1984", "Orwell", "123",
            "2", "Alice", "M1",
            "3", "M1", "123",
            "5",
            "4", "M1", "123",
            "5",
            "11",
        ]);
        assert!(output.contains("Added book: 1984"));
        assert!(output.contains("Added member: Alice"));
        assert!(output.contains("'1984' borrowed by Alice."));
        assert!(output.contains("'1984' by Orwell (ISBN: 123) (Borrowed)"));
        assert!(output.contains("'1984' returned by Alice."));
        assert!(output.contains("'1984' by Orwell (ISBN: 123) (Available)"));
        assert!(output.ends_with("Exiting Library Management System. Goodbye!\n"));
        assert_eq!(BookStatus::Available, library.find_book("123").expect("should find book").book_status);
    }

    #[test]
    fn test_should_report_errors_and_continue() {
        let mut library = build_catalog_service();
        let output = run_session(library.as_mut(), &[
            "1", "1984", "Orwell", "123",
            "1", "Animal Farm", "Orwell", "123",
            "3", "M9", "123",
            "9", "000",
            "42",
            "11",
        ]);
        assert!(output.contains("Error: Book with ISBN 123 already exists."));
        assert!(output.contains("Error: Member with ID M9 not found."));
        assert!(output.contains("Error: Book with ISBN 000 not found."));
        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(1, library.list_all_books().expect("should list").len());
    }

    #[test]
    fn test_should_print_empty_listings() {
        let mut library = build_catalog_service();
        let output = run_session(library.as_mut(), &["5", "6", "7", "8", "11"]);
        assert!(output.contains("--- All Books ---\nNo books in the library."));
        assert!(output.contains("--- Available Books ---\nNo books currently available."));
        assert!(output.contains("--- Borrowed Books ---\nNo books currently borrowed."));
        assert!(output.contains("--- All Members ---\nNo members registered."));
    }

    #[test]
    fn test_should_list_members_with_borrowed_titles() {
        let mut library = build_catalog_service();
        library.add_book(&BookDto::new("Dune", "Herbert", "789")).expect("should add book");
        let output = run_session(library.as_mut(), &[
            "2", "Alice", "M1",
            "2", "Bob", "M2",
            "3", "M1", "789",
            "7",
            "8",
            "11",
        ]);
        assert!(output.contains("--- Borrowed Books ---\n'Dune' by Herbert (ISBN: 789) (Borrowed)"));
        assert!(output.contains("Member: Alice (ID: M1) - Borrowed Books: 1\n  Borrowed:\n    - Dune\nMember: Bob (ID: M2) - Borrowed Books: 0\n"));
    }

    #[test]
    fn test_should_remove_through_menu() {
        let mut library = build_catalog_service();
        let output = run_session(library.as_mut(), &[
            "1", "1984", "Orwell", "123",
            "2", "Alice", "M1",
            "9", "123",
            "10", "M1",
            "10", "M1",
            "11",
        ]);
        assert!(output.contains("Removed book: 1984"));
        assert!(output.contains("Removed member: Alice"));
        assert!(output.contains("Error: Member with ID M1 not found."));
    }

    #[test]
    fn test_should_reject_blank_fields() {
        let mut library = build_catalog_service();
        let output = run_session(library.as_mut(), &["2", "", "M1", "11"]);
        assert!(output.contains("Error: Member name must not be empty."));
        assert!(library.list_all_members().expect("should list").is_empty());
    }

    #[test]
    fn test_should_stop_at_end_of_input() {
        let mut library = build_catalog_service();
        let output = run_session(library.as_mut(), &["1", "1984"]);
        assert!(!output.contains("Goodbye"));
        assert!(library.list_all_books().expect("should list").is_empty());
    }

    #[test]
    fn test_should_survive_invalid_utf8_input() {
        let mut library = build_catalog_service();
        let mut input = b"1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"Orwell\n123\n5\n11\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());
        console.serve(library.as_mut()).expect("session should end cleanly");
        let output = String::from_utf8(console.into_output()).expect("utf8 output");
        assert!(output.contains("(ISBN: 123) (Available)"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!("\u{FFFD}\u{FFFD}", library.find_book("123").expect("should find book").title.as_str());
    }

    #[test]
    fn test_should_prompt_for_library_name() {
        let input = Cursor::new("City Library\n11\n");
        let mut console = Console::new(input, Vec::new());
        console.run(&Configuration::new("")).expect("session should end cleanly");
        let output = String::from_utf8(console.into_output()).expect("utf8 output");
        assert!(output.starts_with("Enter the name of the library: \n--- Library Menu ---\n1. Add Book\n"));
        assert!(output.contains("11. Exit\nEnter your choice: Exiting Library Management System. Goodbye!"));
    }
}
