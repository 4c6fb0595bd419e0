use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::debug;
use nix::unistd::{access, AccessFlags};

use crate::environment::Environment;
use crate::error::ExecError;

/// Turns a program name into the path that will be executed.
///
/// Executability is checked when `resolve` is called; the file may still
/// change before it is exec'd. That window is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Resolves `command` in this order:
    ///
    /// 1. a name containing `/` is an explicit path and is never searched for;
    /// 2. a bare name that is executable in the current working directory is
    ///    used as-is, ahead of any `PATH` entry;
    /// 3. otherwise the `PATH` directories are tried in listed order and the
    ///    first executable match wins.
    pub fn resolve<S: AsRef<OsStr> + ?Sized>(
        &self,
        command: &S,
        env: &Environment,
    ) -> Result<PathBuf, ExecError> {
        let command = command.as_ref();
        let not_found = || ExecError::NotFound(command.to_string_lossy().into_owned());

        if command.is_empty() {
            return Err(not_found());
        }

        let path = Path::new(command);
        if command.as_bytes().contains(&b'/') {
            if is_executable(path) {
                debug!("resolved {} as explicit path", path.display());
                return Ok(path.to_path_buf());
            }
            return Err(not_found());
        }

        if is_executable(path) {
            debug!("resolved {} relative to the working directory", path.display());
            return Ok(path.to_path_buf());
        }

        let Some(paths) = env.path() else {
            debug!("PATH is unset, cannot resolve {}", path.display());
            return Err(not_found());
        };

        for dir in std::env::split_paths(&paths).filter(|d| !d.as_os_str().is_empty()) {
            let full_path = dir.join(command);
            if is_executable(&full_path) {
                debug!("resolved {} to {}", path.display(), full_path.display());
                return Ok(full_path);
            }
        }

        Err(not_found())
    }
}

fn is_executable(path: &Path) -> bool {
    access(path, AccessFlags::X_OK).is_ok() && !path.is_dir()
}
