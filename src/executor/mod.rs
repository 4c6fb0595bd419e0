pub mod builtin;
mod path_resolver;
mod process;


pub use builtin::{BuiltinCommand, BuiltinDispatcher, Dispatch};
pub use path_resolver::PathResolver;
pub use process::{ExecutionResult, ProcessExecutor};

use crate::error::ExecError;

pub type ExecStatus = Result<ExecutionResult, ExecError>;

/// Recorded when no executable matched the command name.
pub const STATUS_NOT_FOUND: i32 = 127;
/// Exit code of a child whose exec failed.
pub const STATUS_EXEC_FAILED: i32 = 126;
/// Added to the signal number when a child is killed by a signal.
pub const STATUS_SIGNAL_BASE: i32 = 128;
pub const STATUS_FAILURE: i32 = 1;
