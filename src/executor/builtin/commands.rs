use std::ffi::OsString;

use log::debug;

use crate::error::BuiltinError;
use crate::executor::builtin::manager::{BuiltinCommand, Dispatch};

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn run(&self, args: &[OsString], _last_status: i32) -> Result<Dispatch, BuiltinError> {
        let target = match args {
            [] => return Err(BuiltinError::MissingArgument("cd")),
            [target] => target,
            _ => return Err(BuiltinError::TooManyArguments("cd")),
        };
        std::env::set_current_dir(target).map_err(|source| BuiltinError::ChangeDir {
            path: target.to_string_lossy().into_owned(),
            source,
        })?;
        debug!("working directory is now {}", target.to_string_lossy());
        Ok(Dispatch::Status(0))
    }
}

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn run(&self, args: &[OsString], last_status: i32) -> Result<Dispatch, BuiltinError> {
        match args {
            [] => Ok(Dispatch::Exit(last_status)),
            [code] => code
                .to_str()
                .and_then(|c| c.parse::<i32>().ok())
                .map(|n| Dispatch::Exit(n & 0xff))
                .ok_or_else(|| BuiltinError::InvalidExitCode(code.to_string_lossy().into_owned())),
            _ => Err(BuiltinError::TooManyArguments("exit")),
        }
    }
}
