use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crate::config::{Config, Interactive};
use crate::prompt::ShellPrompt;

/// Where the shell loop gets its lines from.
pub trait LineSource {
    /// Returns the next raw line, bytes as read, or `None` once input is
    /// exhausted. End of input is not an error.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Reads lines from a buffered reader, showing a prompt first when one is set.
pub struct InputHandler<R, W> {
    reader: R,
    out: W,
    prompt: Option<ShellPrompt>,
}

impl<R: BufRead, W: Write> InputHandler<R, W> {
    pub fn new(reader: R, out: W, prompt: Option<ShellPrompt>) -> Self {
        InputHandler { reader, out, prompt }
    }
}

impl InputHandler<StdinLock<'static>, Stdout> {
    /// Standard input, prompting on stdout when the session is interactive.
    pub fn stdin(config: &Config) -> Self {
        let stdin = io::stdin();
        let interactive = match config.interactive {
            Interactive::Auto => stdin.is_terminal(),
            Interactive::Always => true,
            Interactive::Never => false,
        };
        let prompt = interactive.then(|| ShellPrompt::new(config.prompt.clone()));
        InputHandler::new(stdin.lock(), io::stdout(), prompt)
    }
}

impl<R: BufRead, W: Write> LineSource for InputHandler<R, W> {
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        if let Some(prompt) = &self.prompt {
            prompt.show(&mut self.out)?;
        }

        let mut buf = Vec::new();
        let bytes_read = loop {
            match self.reader.read_until(b'\n', &mut buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                result => break result?,
            }
        };
        if bytes_read == 0 {
            // EOF (e.g. Ctrl-D): move past the prompt.
            if self.prompt.is_some() {
                writeln!(self.out)?;
            }
            return Ok(None);
        }
        Ok(Some(buf))
    }
}
