//! Plain fallback rendering
//!
//! Never touches the style formatter, so nothing here emits escape codes.

use std::io::Write;

use super::groups::{Group, PlainForm, GROUPS, TITLE};
use super::layout::RULE_WIDTH;
use crate::error::Result;
use crate::terminal::Terminal;

fn render_group<W: Write>(term: &mut Terminal<W>, group: &Group, gap: bool) -> Result<()> {
    if gap {
        term.blank()?;
    }
    match group.plain {
        PlainForm::Block { label } => {
            term.line(label)?;
            for row in group.rows {
                term.line(row)?;
            }
        }
        PlainForm::Inline { label, text } => {
            let text = text.or_else(|| group.rows.first().copied()).unwrap_or("");
            term.line(&format!("{} {}", label, text))?;
        }
    }
    Ok(())
}

/// Print the title and every group without color
pub fn render_plain_layout<W: Write>(term: &mut Terminal<W>) -> Result<()> {
    term.line(TITLE)?;
    term.rule(RULE_WIDTH)?;

    let mut prev_block = true;
    for group in &GROUPS {
        let block = matches!(group.plain, PlainForm::Block { .. });
        // A blank line separates blocks from whatever precedes or follows them
        render_group(term, group, block || prev_block)?;
        prev_block = block;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut term = Terminal::new(Vec::new());
        render_plain_layout(&mut term).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_layout() {
        let expected = format!(
            "{}\n{}\n\n📝 Alphabet Keys:\nQ W E R T Y U I O P\n A S D F G H J K L\n  Z X C V B N M\n\n\
             🔢 Numbers: 0 1 2 3 4 5 6 7 8 9\n\
             ➕ Operators: + - * / =\n\
             🔗 Brackets: ( ) [ ] {{ }} < >\n\
             📝 Punctuation: . , ; :\n\
             ✨ Special: _ \" '\n\
             🔧 Function Keys: 🌐 [space] ⌫ ↵\n",
            TITLE,
            "=".repeat(RULE_WIDTH)
        );
        assert_eq!(render(), expected);
    }

    #[test]
    fn test_no_escape_codes() {
        assert!(!render().contains('\x1b'));
    }

    #[test]
    fn test_contains_every_symbol() {
        let text = render();
        for group in &GROUPS {
            for symbol in group.symbols() {
                assert!(text.contains(symbol), "{} missing {}", group.kind, symbol);
            }
        }
    }
}
