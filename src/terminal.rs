//! Line-oriented terminal output using crossterm

use std::io::{self, Stdout, Write};

use crossterm::{queue, style::Print, tty::IsTty};

use crate::error::Result;

/// Output wrapper that writes whole lines to any writer
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<Stdout> {
    /// Create a terminal writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Check whether stdout is attached to a terminal
    pub fn is_tty(&self) -> bool {
        self.out.is_tty()
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a string followed by a newline
    pub fn line(&mut self, s: &str) -> Result<()> {
        queue!(self.out, Print(s), Print('\n'))?;
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&mut self) -> Result<()> {
        queue!(self.out, Print('\n'))?;
        Ok(())
    }

    /// Write a horizontal rule of `width` equals signs
    pub fn rule(&mut self, width: usize) -> Result<()> {
        self.line(&"=".repeat(width))
    }

    /// Flush output buffer to the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_rule() {
        let mut term = Terminal::new(Vec::new());
        term.line("hello").unwrap();
        term.blank().unwrap();
        term.rule(5).unwrap();
        term.flush().unwrap();

        let text = String::from_utf8(term.into_inner()).unwrap();
        assert_eq!(text, "hello\n\n=====\n");
    }
}
