//! Style types for styled key rendering
//!
//! Styles map onto the ANSI 8-color palette so the output matches what
//! any SGR-capable terminal shows.

/// SGR reset sequence
pub const RESET: &str = "\x1b[0m";

const FG_CODES: [&str; 8] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
];

const BG_CODES: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
];

/// Terminal colors (ANSI base palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    White,
}

impl Color {
    const fn index(self) -> usize {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::White => 7,
        }
    }

    /// SGR sequence selecting this color as foreground
    pub const fn fg_code(self) -> &'static str {
        FG_CODES[self.index()]
    }

    /// SGR sequence selecting this color as background
    pub const fn bg_code(self) -> &'static str {
        BG_CODES[self.index()]
    }
}

/// A display style for one key category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color, if any
    pub bg: Option<Color>,
    /// Human-readable color name shown in the legend
    pub name: &'static str,
}

impl Style {
    /// Create a style with just a foreground color
    pub const fn fg(color: Color, name: &'static str) -> Self {
        Self {
            fg: color,
            bg: None,
            name,
        }
    }

    /// Builder: set background color
    pub const fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Background SGR sequence, or an empty string
    pub fn background(&self) -> &'static str {
        self.bg.map_or("", Color::bg_code)
    }
}

/// Wrap `text` in the style's codes followed by a reset.
///
/// Without a style the text comes back untouched.
pub fn paint(text: &str, style: Option<&Style>) -> String {
    match style {
        Some(style) => format!("{}{}{}{}", style.fg.fg_code(), style.background(), text, RESET),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::White.fg_code(), "\x1b[37m");
        assert_eq!(Color::Red.bg_code(), "\x1b[41m");
        assert_eq!(Color::Magenta.bg_code(), "\x1b[45m");
    }

    #[test]
    fn test_paint_with_background() {
        let style = Style::fg(Color::White, "Orange").with_bg(Color::Yellow);
        let painted = paint("7", Some(&style));
        assert_eq!(painted, "\x1b[37m\x1b[43m7\x1b[0m");
        assert!(painted.starts_with(style.fg.fg_code()));
        assert!(painted.ends_with(RESET));
    }

    #[test]
    fn test_paint_foreground_only() {
        let style = Style::fg(Color::Green, "Green");
        assert_eq!(paint("x", Some(&style)), "\x1b[32mx\x1b[0m");
        assert_eq!(style.background(), "");
    }

    #[test]
    fn test_paint_without_style() {
        assert_eq!(paint("Q W E", None), "Q W E");
    }
}
