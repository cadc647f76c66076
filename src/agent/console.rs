#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use super::ShotInput;

/// `ShotInput` over a reader and a writer, stdin/stdout by default.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> ShotInput for Console<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.writer, "{}", prompt);
        let _ = self.writer.flush();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::warn!("failed to read input: {}", e);
                None
            }
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{}", message);
    }
}
