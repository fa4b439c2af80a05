//! Key category styles

use crate::style::{Color, Style};

pub const NUMBERS: Style = Style::fg(Color::White, "Orange").with_bg(Color::Yellow);
pub const OPERATORS: Style = Style::fg(Color::White, "Red").with_bg(Color::Red);
pub const BRACKETS: Style = Style::fg(Color::White, "Blue").with_bg(Color::Blue);
pub const PUNCTUATION: Style = Style::fg(Color::White, "Purple").with_bg(Color::Magenta);
pub const UNDERSCORE: Style = Style::fg(Color::White, "Green").with_bg(Color::Green);
pub const QUOTES: Style = Style::fg(Color::White, "Yellow").with_bg(Color::Yellow);
