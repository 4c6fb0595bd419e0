use std::fmt::Display;
use std::io::Write;

use log::{debug, info, warn};

use crate::command::Command;
use crate::config::Config;
use crate::environment::Environment;
use crate::error::ShellError;
use crate::executor::{
    BuiltinDispatcher, Dispatch, ExecutionResult, PathResolver, ProcessExecutor, STATUS_NOT_FOUND,
};
use crate::io::LineSource;
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// The shell is done and the process should exit with this code.
    Terminating(i32),
}

/// The read / dispatch / execute loop.
///
/// Lines come from `input`; diagnostics go to `err`, one line per error.
pub struct Shell<I, E> {
    config: Config,
    env: Environment,
    builtins: BuiltinDispatcher,
    resolver: PathResolver,
    executor: ProcessExecutor,
    input: I,
    err: E,
    last_status: i32,
    state: LoopState,
}

impl<I: LineSource, E: Write> Shell<I, E> {
    pub fn new(config: Config, env: Environment, input: I, err: E) -> Self {
        Shell {
            config,
            env,
            builtins: BuiltinDispatcher::new(),
            resolver: PathResolver,
            executor: ProcessExecutor,
            input,
            err,
            last_status: 0,
            state: LoopState::Running,
        }
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Runs until `exit` or end of input and returns the exit code.
    /// End of input always exits with 0; only `exit` carries a status out.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        info!("{} started", self.config.name);
        loop {
            if let LoopState::Terminating(code) = self.step()? {
                info!("{} terminating with status {}", self.config.name, code);
                return Ok(code);
            }
        }
    }

    /// Reads and handles a single line.
    pub fn step(&mut self) -> Result<LoopState, ShellError> {
        if let LoopState::Terminating(_) = self.state {
            return Ok(self.state);
        }

        let Some(line) = self.input.read_line().map_err(ShellError::Input)? else {
            debug!("end of input");
            self.state = LoopState::Terminating(0);
            return Ok(self.state);
        };

        let cmd = tokenize(&line);
        self.eval(&cmd)
    }

    /// Handles one already tokenized command.
    pub fn eval(&mut self, cmd: &Command) -> Result<LoopState, ShellError> {
        match self.builtins.dispatch(cmd, self.last_status) {
            Ok(Dispatch::Noop) => {}
            Ok(Dispatch::Status(status)) => self.last_status = status,
            Ok(Dispatch::Exit(code)) => self.state = LoopState::Terminating(code),
            Ok(Dispatch::PassThrough) => self.last_status = self.run_external(cmd)?,
            Err(e) => {
                self.report(&e)?;
                self.last_status = e.status();
            }
        }
        Ok(self.state)
    }

    fn run_external(&mut self, cmd: &Command) -> Result<i32, ShellError> {
        let program = cmd.program().unwrap_or_default();

        let path = match self.resolver.resolve(program, &self.env) {
            Ok(path) => path,
            Err(e) => {
                self.report(&e)?;
                return Ok(STATUS_NOT_FOUND);
            }
        };

        let result = match self.executor.execute(&path, cmd.argv()) {
            Ok(result) => result,
            Err(e) => {
                warn!("could not run {}: {}", path.display(), e);
                let msg = format!("{}: {}", self.config.name, e);
                self.report(&msg)?;
                ExecutionResult::SpawnFailed
            }
        };
        debug!("{} finished: {:?}", program.to_string_lossy(), result);
        Ok(result.status_code())
    }

    fn report(&mut self, msg: &dyn Display) -> Result<(), ShellError> {
        writeln!(self.err, "{}", msg).map_err(ShellError::Diagnostic)
    }
}
