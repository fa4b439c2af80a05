//! Color coding legend

use std::io::Write;

use super::palette;
use crate::error::Result;
use crate::style::{Style, RESET};
use crate::terminal::Terminal;

const RULE_WIDTH: usize = 30;

/// One legend line
#[derive(Debug, Clone, Copy)]
pub struct LegendEntry {
    pub description: &'static str,
    pub style: Style,
}

impl LegendEntry {
    /// Swatch is background only, padded by a space on each side
    pub fn line(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.style.background(),
            self.description,
            RESET,
            self.style.name
        )
    }
}

pub static LEGEND: [LegendEntry; 6] = [
    LegendEntry {
        description: "Numbers (0-9)",
        style: palette::NUMBERS,
    },
    LegendEntry {
        description: "Operators (+-*/=)",
        style: palette::OPERATORS,
    },
    LegendEntry {
        description: "Brackets ([{<>}])",
        style: palette::BRACKETS,
    },
    LegendEntry {
        description: "Punctuation (.,;:)",
        style: palette::PUNCTUATION,
    },
    LegendEntry {
        description: "Underscore (_)",
        style: palette::UNDERSCORE,
    },
    LegendEntry {
        description: "Quotes (\", ')",
        style: palette::QUOTES,
    },
];

pub fn render_legend<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.blank()?;
    term.line("🎨 Color Coding System:")?;
    term.rule(RULE_WIDTH)?;
    for entry in &LEGEND {
        term.line(&entry.line())?;
    }
    Ok(())
}
