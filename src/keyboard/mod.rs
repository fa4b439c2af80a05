//! Keyboard layout tables and renderers
//!
//! This module provides the static key groups and the two independent
//! ways of printing them:
//! - Styled layout and color legend
//! - Plain fallback with no escape codes

mod groups;
mod layout;
mod legend;
mod palette;
mod plain;

pub use layout::render_layout;
pub use legend::render_legend;
pub use plain::render_plain_layout;

#[cfg(test)]
pub use groups::GROUPS;
