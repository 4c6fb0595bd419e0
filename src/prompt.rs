use std::io::{self, Write};

/// The fixed string shown before each line is read.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellPrompt {
    text: String,
}

impl ShellPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        ShellPrompt { text: text.into() }
    }

    pub fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.text.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_writes_text_verbatim() {
        let mut out = Vec::new();
        ShellPrompt::new("($) ").show(&mut out).unwrap();
        assert_eq!(out, b"($) ");
    }
}
