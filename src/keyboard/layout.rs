//! Styled keyboard layout rendering

use std::io::Write;

use super::groups::{Group, Paint, GROUPS, TITLE};
use crate::error::Result;
use crate::style::paint;
use crate::terminal::Terminal;

pub(crate) const RULE_WIDTH: usize = 50;

const FEATURES: [&str; 5] = [
    "• All programming symbols on one page",
    "• Python-inspired color coding",
    "• Standard iOS keyboard appearance",
    "• Easy access to numbers and operators",
    "• No need to switch between keyboard pages",
];

/// Style each whitespace-separated symbol of `line` and join with single spaces.
///
/// Raw paint returns the line untouched, keeping its indentation.
pub fn paint_symbols(line: &str, scheme: &Paint) -> String {
    match scheme {
        Paint::Raw => line.to_string(),
        Paint::Uniform(style) => line
            .split_whitespace()
            .map(|symbol| paint(symbol, Some(style)))
            .collect::<Vec<_>>()
            .join(" "),
        Paint::PerSymbol(styles) => line
            .split_whitespace()
            .enumerate()
            .map(|(i, symbol)| paint(symbol, styles.get(i)))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn render_group<W: Write>(term: &mut Terminal<W>, group: &Group) -> Result<()> {
    term.line(group.heading)?;
    for row in group.rows {
        term.line(&paint_symbols(row, &group.paint))?;
    }
    term.blank()
}

/// Print the title, every group in order, and the feature list
pub fn render_layout<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.line(TITLE)?;
    term.rule(RULE_WIDTH)?;
    term.blank()?;

    for group in &GROUPS {
        tracing::trace!(group = %group.kind, symbols = group.symbols().count(), "rendering styled group");
        render_group(term, group)?;
    }

    term.rule(RULE_WIDTH)?;
    term.line("🎯 Key Features:")?;
    for feature in FEATURES {
        term.line(feature)?;
    }
    Ok(())
}
