use std::ffi::{CStr, CString, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use log::debug;
use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{execv, fork, ForkResult, Pid};

use super::{ExecStatus, STATUS_EXEC_FAILED, STATUS_FAILURE, STATUS_SIGNAL_BASE};
use crate::error::ExecError;

/// How a single external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    Exited(i32),
    Signaled(i32),
    SpawnFailed,
}

impl ExecutionResult {
    /// The integer recorded as the shell's last status.
    pub fn status_code(&self) -> i32 {
        match *self {
            ExecutionResult::Exited(code) => code,
            ExecutionResult::Signaled(signal) => STATUS_SIGNAL_BASE + signal,
            ExecutionResult::SpawnFailed => STATUS_FAILURE,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ExecutionResult::Exited(0))
    }
}

/// Runs a resolved program in a child process and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    /// Forks, execs `path` with `argv` in the child and blocks until the
    /// child exits or is killed by a signal.
    ///
    /// `argv[0]` is passed through as-is, so the child sees the name it was
    /// invoked by rather than the resolved path. If exec fails the child
    /// prints the reason and exits with [`STATUS_EXEC_FAILED`], which the
    /// parent cannot tell apart from the program itself exiting with that
    /// code.
    pub fn execute<S: AsRef<OsStr>>(&self, path: &Path, argv: &[S]) -> ExecStatus {
        let Some(program) = argv.first().map(|p| p.as_ref()).filter(|p| !p.is_empty()) else {
            return Err(ExecError::InvalidArgument("empty program name".to_string()));
        };
        let name = program.to_string_lossy();

        // Everything the child needs is allocated before fork.
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| ExecError::InvalidArgument(path.display().to_string()))?;
        let c_argv = argv
            .iter()
            .map(|arg| CString::new(arg.as_ref().as_bytes()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ExecError::InvalidArgument(name.to_string()))?;
        let mut prefix = program.as_bytes().to_vec();
        prefix.extend_from_slice(b": ");

        // SAFETY: the child only calls execv, write(2) and _exit, all of
        // which are async-signal-safe.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => exec_child(&c_path, &c_argv, &prefix),
            Ok(ForkResult::Parent { child }) => {
                debug!("spawned {} as pid {}", path.display(), child);
                self.wait_for(child)
            }
            Err(e) => Err(ExecError::Spawn(e)),
        }
    }

    fn wait_for(&self, child: Pid) -> ExecStatus {
        loop {
            match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
                Ok(WaitStatus::Exited(_, code)) => {
                    debug!("pid {} exited with {}", child, code);
                    return Ok(ExecutionResult::Exited(code));
                }
                Ok(WaitStatus::Signaled(_, signal, _)) => {
                    debug!("pid {} killed by {:?}", child, signal);
                    return Ok(ExecutionResult::Signaled(signal as i32));
                }
                // Stopped or continued: the child is still alive.
                Ok(status) => debug!("pid {} not finished: {:?}", child, status),
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(ExecError::Wait(e)),
            }
        }
    }
}

fn exec_child(path: &CStr, argv: &[CString], prefix: &[u8]) -> ! {
    let err = match execv(path, argv) {
        Ok(never) => match never {},
        Err(e) => e,
    };
    write_stderr(prefix);
    write_stderr(err.desc().as_bytes());
    write_stderr(b"\n");
    // SAFETY: _exit skips atexit handlers and stdio flushing inherited from
    // the parent.
    unsafe { libc::_exit(STATUS_EXEC_FAILED) }
}

fn write_stderr(buf: &[u8]) {
    // SAFETY: buf is a valid slice for its whole length.
    unsafe {
        libc::write(libc::STDERR_FILENO, buf.as_ptr().cast(), buf.len());
    }
}
