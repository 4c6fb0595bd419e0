use std::ffi::{OsStr, OsString};

/// One tokenized input line: program name followed by its arguments.
///
/// Tokens are raw OS strings, so names that are not valid UTF-8 reach
/// `execv` and `chdir` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    argv: Vec<OsString>,
}

impl Command {
    pub fn new(argv: Vec<OsString>) -> Self {
        Command { argv }
    }

    /// The program name, or `None` for an empty line.
    pub fn program(&self) -> Option<&OsStr> {
        self.argv.first().map(|s| s.as_os_str())
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[OsString] {
        self.argv.get(1..).unwrap_or(&[])
    }

    /// The full argument vector, program name included.
    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    pub fn into_argv(self) -> Vec<OsString> {
        self.argv
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    pub fn len(&self) -> usize {
        self.argv.len()
    }
}

impl<S: Into<OsString>> FromIterator<S> for Command {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Command::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_and_args() {
        let cmd: Command = ["ls", "-l", "/tmp"].into_iter().collect();
        assert_eq!(cmd.program(), Some(OsStr::new("ls")));
        assert_eq!(cmd.args(), &["-l", "/tmp"]);
        assert_eq!(cmd.len(), 3);
    }

    #[test]
    fn test_empty_command() {
        let cmd = Command::default();
        assert!(cmd.is_empty());
        assert_eq!(cmd.program(), None);
        assert!(cmd.args().is_empty());
    }
}
