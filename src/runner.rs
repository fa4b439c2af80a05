//! Demo orchestration
//!
//! Styled rendering runs first. Any error it raises is caught once, reported,
//! and followed by a complete plain rendering. There is no way back from
//! plain mode within one run.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::keyboard::{render_layout, render_legend, render_plain_layout};
use crate::terminal::Terminal;

const INSTRUCTIONS: [&str; 4] = [
    "1. Run: ./create_xcode_project.sh",
    "2. Open ProgrammerKeyboard.xcodeproj in Xcode",
    "3. Build and run on your iOS device",
    "4. Enable the keyboard in Settings > Keyboard",
];

/// Rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Styled,
    Plain,
}

/// Runs the demo according to a resolved configuration
#[derive(Debug, Clone)]
pub struct DemoRunner {
    start: Mode,
    show_legend: bool,
    show_instructions: bool,
}

impl DemoRunner {
    pub fn new(config: &Config, is_tty: bool) -> Self {
        let start = if config.color.enabled(is_tty) {
            Mode::Styled
        } else {
            Mode::Plain
        };
        Self {
            start,
            show_legend: config.show_legend,
            show_instructions: config.show_instructions,
        }
    }

    /// Render the demo and return the mode it finished in
    pub fn run<W: Write>(&self, term: &mut Terminal<W>) -> Result<Mode> {
        tracing::debug!(mode = ?self.start, "starting demo");

        if self.start == Mode::Plain {
            self.render_plain(term)?;
            return Ok(Mode::Plain);
        }

        match self.render_styled(term) {
            Ok(()) => Ok(Mode::Styled),
            Err(e) => {
                tracing::warn!(error = %e, "styled rendering failed, falling back to plain");
                term.line("❌ Error occurred. Running without colors...")?;
                term.line(&format!("Error: {}", e))?;
                self.render_plain(term)?;
                tracing::info!("plain rendering complete");
                Ok(Mode::Plain)
            }
        }
    }

    fn render_styled<W: Write>(&self, term: &mut Terminal<W>) -> Result<()> {
        render_layout(term)?;
        if self.show_legend {
            render_legend(term)?;
        }
        self.render_instructions(term)?;
        term.flush()
    }

    fn render_plain<W: Write>(&self, term: &mut Terminal<W>) -> Result<()> {
        render_plain_layout(term)?;
        self.render_instructions(term)?;
        term.flush()
    }

    fn render_instructions<W: Write>(&self, term: &mut Terminal<W>) -> Result<()> {
        if !self.show_instructions {
            return Ok(());
        }
        term.blank()?;
        term.line("🚀 To use this keyboard:")?;
        for step in INSTRUCTIONS {
            term.line(step)?;
        }
        Ok(())
    }
}
