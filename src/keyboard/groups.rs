//! Key group definitions
//!
//! Order in [`GROUPS`] is the order the layout is printed in.

use std::fmt;

use super::palette;
use crate::style::Style;

/// Title line shared by both renderers
pub const TITLE: &str = "🎹 Programmer Keyboard Layout Demo";

/// Key categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Alphabet,
    Numbers,
    Operators,
    Brackets,
    Punctuation,
    Special,
    Function,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKind::Alphabet => "alphabet",
            GroupKind::Numbers => "numbers",
            GroupKind::Operators => "operators",
            GroupKind::Brackets => "brackets",
            GroupKind::Punctuation => "punctuation",
            GroupKind::Special => "special",
            GroupKind::Function => "function",
        };
        f.write_str(name)
    }
}

/// How a group's rows are styled
#[derive(Debug, Clone, Copy)]
pub enum Paint {
    /// Rows are printed as-is
    Raw,
    /// Every symbol gets the same style
    Uniform(Style),
    /// Symbol `i` gets style `i`
    PerSymbol(&'static [Style]),
}

/// How a group appears in the plain fallback
#[derive(Debug, Clone, Copy)]
pub enum PlainForm {
    /// Label on its own line followed by the rows
    Block { label: &'static str },
    /// `label text` on one line; `text` defaults to the first row
    Inline {
        label: &'static str,
        text: Option<&'static str>,
    },
}

/// A labeled group of keys
#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub kind: GroupKind,
    /// Section header in the styled layout
    pub heading: &'static str,
    /// Raw text lines, symbols separated by whitespace
    pub rows: &'static [&'static str],
    pub paint: Paint,
    pub plain: PlainForm,
}

impl Group {
    /// Whitespace-separated symbols across all rows
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        let rows: &'static [&'static str] = self.rows;
        rows.iter().copied().flat_map(str::split_whitespace)
    }
}

pub static GROUPS: [Group; 7] = [
    Group {
        kind: GroupKind::Alphabet,
        heading: "📝 Alphabet Keys (Standard Gray):",
        rows: &["Q W E R T Y U I O P", " A S D F G H J K L", "  Z X C V B N M"],
        paint: Paint::Raw,
        plain: PlainForm::Block {
            label: "📝 Alphabet Keys:",
        },
    },
    Group {
        kind: GroupKind::Numbers,
        heading: "🔢 Numbers (Orange):",
        rows: &["0 1 2 3 4 5 6 7 8 9"],
        paint: Paint::Uniform(palette::NUMBERS),
        plain: PlainForm::Inline {
            label: "🔢 Numbers:",
            text: None,
        },
    },
    Group {
        kind: GroupKind::Operators,
        heading: "➕ Operators (Red):",
        rows: &["+ - * / ="],
        paint: Paint::Uniform(palette::OPERATORS),
        plain: PlainForm::Inline {
            label: "➕ Operators:",
            text: None,
        },
    },
    Group {
        kind: GroupKind::Brackets,
        heading: "🔗 Brackets (Blue):",
        rows: &["( ) [ ] { } < >"],
        paint: Paint::Uniform(palette::BRACKETS),
        plain: PlainForm::Inline {
            label: "🔗 Brackets:",
            text: None,
        },
    },
    Group {
        kind: GroupKind::Punctuation,
        heading: "📝 Punctuation (Purple):",
        rows: &[". , ; :"],
        paint: Paint::Uniform(palette::PUNCTUATION),
        plain: PlainForm::Inline {
            label: "📝 Punctuation:",
            text: None,
        },
    },
    Group {
        kind: GroupKind::Special,
        heading: "✨ Special Characters:",
        rows: &["_ \" '"],
        paint: Paint::PerSymbol(&[palette::UNDERSCORE, palette::QUOTES, palette::QUOTES]),
        plain: PlainForm::Inline {
            label: "✨ Special:",
            text: None,
        },
    },
    Group {
        kind: GroupKind::Function,
        heading: "🔧 Function Keys (Gray):",
        rows: &["🌐 [    space    ] ⌫ ↵"],
        paint: Paint::Raw,
        plain: PlainForm::Inline {
            label: "🔧 Function Keys:",
            text: Some("🌐 [space] ⌫ ↵"),
        },
    },
];
