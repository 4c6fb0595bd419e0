use std::io;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures that end the shell loop.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading a line failed for a reason other than end of input.
    #[error("read error: {0}")]
    Input(#[source] io::Error),
    #[error("cannot write diagnostic: {0}")]
    Diagnostic(#[source] io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Failures while resolving or running an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{0}: command not found")]
    NotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("fork: {0}")]
    Spawn(#[source] nix::Error),
    #[error("wait: {0}")]
    Wait(#[source] nix::Error),
}

/// Bad usage of a builtin. Reported, never fatal.
#[derive(Debug, Error)]
pub enum BuiltinError {
    #[error("{0}: expected argument")]
    MissingArgument(&'static str),
    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),
    #[error("cd: {path}: {source}")]
    ChangeDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("exit: {0}: numeric argument required")]
    InvalidExitCode(String),
}

impl BuiltinError {
    /// Status recorded for the failed builtin.
    pub fn status(&self) -> i32 {
        match self {
            BuiltinError::InvalidExitCode(_) => 2,
            _ => 1,
        }
    }
}
