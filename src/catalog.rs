pub mod command;
pub mod console;
pub mod domain;
pub mod dto;
pub mod factory;
