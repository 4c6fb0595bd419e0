use std::collections::HashMap;
use std::ffi::OsString;

use crate::command::Command;
use crate::error::BuiltinError;
use crate::executor::builtin::commands::{CdCommand, ExitCommand};

/// What the dispatcher decided for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Empty line; nothing ran and the last status is unchanged.
    Noop,
    /// A builtin ran and produced this status.
    Status(i32),
    /// The shell must stop with this exit code.
    Exit(i32),
    /// Not a builtin; resolve and execute it.
    PassThrough,
}

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    fn run(&self, args: &[OsString], last_status: i32) -> Result<Dispatch, BuiltinError>;
}

pub struct BuiltinDispatcher {
    commands: HashMap<&'static str, Box<dyn BuiltinCommand>>,
}

impl BuiltinDispatcher {
    pub fn new() -> Self {
        let mut dispatcher = BuiltinDispatcher {
            commands: HashMap::new(),
        };
        dispatcher.register(Box::new(CdCommand));
        dispatcher.register(Box::new(ExitCommand));
        dispatcher
    }

    pub fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name(), cmd);
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn dispatch(&self, cmd: &Command, last_status: i32) -> Result<Dispatch, BuiltinError> {
        let Some(name) = cmd.program() else {
            return Ok(Dispatch::Noop);
        };
        // Builtin names are ASCII; anything else is an external program.
        match name.to_str().and_then(|name| self.commands.get(name)) {
            Some(builtin) => builtin.run(cmd.args(), last_status),
            None => Ok(Dispatch::PassThrough),
        }
    }
}

impl Default for BuiltinDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
