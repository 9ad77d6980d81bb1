pub mod add_book_cmd;
pub mod add_member_cmd;
pub mod borrow_book_cmd;
pub mod list_books_cmd;
pub mod list_members_cmd;
pub mod remove_book_cmd;
pub mod remove_member_cmd;
pub mod return_book_cmd;
