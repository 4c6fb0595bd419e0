pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod executor;
pub mod io;
pub mod prompt;
pub mod repl;
pub mod tokenizer;
