//! Commands implemented inside the shell: `cd` and `exit`.

pub mod commands;
pub mod manager;

pub use manager::{BuiltinCommand, BuiltinDispatcher, Dispatch};
