//! Shell command execution.

pub mod command;
pub mod quote;

pub use command::{execute, CommandOptions, CommandResult};
pub use quote::quote_word;
