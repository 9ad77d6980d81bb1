pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod loader;
pub mod members;
pub mod utils;
