use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use crate::command::Command;

/// Bytes that separate tokens on a command line.
///
/// The bell character (`\x07`) has always been part of this set. It is kept
/// so that lines split the same way they historically did.
pub const DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', b'\x07'];

fn is_delimiter(byte: &u8) -> bool {
    DELIMITERS.contains(byte)
}

/// Splits a raw input line into a [`Command`].
///
/// Works on bytes: tokens need not be valid UTF-8. Runs of delimiters
/// collapse, so no empty tokens are produced. A line made only of
/// delimiters (or an empty line) yields an empty command.
pub fn tokenize<L: AsRef<[u8]> + ?Sized>(line: &L) -> Command {
    line.as_ref()
        .split(is_delimiter)
        .filter(|s| !s.is_empty())
        .map(|s| OsStr::from_bytes(s).to_os_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn words<L: AsRef<[u8]> + ?Sized>(line: &L) -> Vec<OsString> {
        tokenize(line).into_argv()
    }

    #[test]
    fn test_collapses_surrounding_whitespace() {
        assert_eq!(words("  ls   -la  "), vec!["ls", "-la"]);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("\t\r\n").is_empty());
    }

    #[test]
    fn test_trailing_newline_is_not_a_token() {
        assert_eq!(words("echo hello\n"), vec!["echo", "hello"]);
        assert_eq!(words("echo hello\r\n"), vec!["echo", "hello"]);
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(words("a\tb\x07c d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_quoting() {
        assert_eq!(words("echo \"a b\""), vec!["echo", "\"a", "b\""]);
    }

    #[test]
    fn test_other_whitespace_is_kept() {
        // Only the fixed delimiter set splits; a vertical tab stays inside the token.
        assert_eq!(words("a\x0bb"), vec!["a\x0bb"]);
    }

    #[test]
    fn test_non_utf8_bytes_are_preserved() {
        let argv = words(b"cd /tmp/d\xff\n");
        assert_eq!(argv.len(), 2);
        assert_eq!(argv[1].as_bytes(), b"/tmp/d\xff");
    }

    #[test]
    fn test_input_is_untouched() {
        let line = String::from("ls  /tmp");
        let cmd = tokenize(&line);
        assert_eq!(line, "ls  /tmp");
        assert_eq!(cmd.program(), Some(OsStr::new("ls")));
    }
}
