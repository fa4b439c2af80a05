//! Configuration file support
//!
//! Loads settings from ~/.keydemo.conf (or %USERPROFILE%\.keydemo.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # keydemo configuration
//! color = auto
//! legend = true
//! instructions = false
//! ```
//!
//! A non-empty `NO_COLOR` environment variable forces `color = never`.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// When to emit ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    /// Only when stdout is a terminal
    Auto,
}

impl ColorMode {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            "auto" => Some(ColorMode::Auto),
            _ => None,
        }
    }

    /// Resolve to a yes/no decision for the given output
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty,
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output policy
    pub color: ColorMode,
    /// Whether to print the color legend
    pub show_legend: bool,
    /// Whether to print the build instructions
    pub show_instructions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Always,
            show_legend: true,
            show_instructions: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".keydemo.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".keydemo.conf"))
        }
    }

    /// Load configuration from file and environment
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        if let Ok(value) = std::env::var("NO_COLOR") {
            config.apply_no_color(&value);
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(mode) = settings.get("color").and_then(|v| ColorMode::from_name(v)) {
            self.color = mode;
        }

        if let Some(value) = settings.get("legend") {
            self.show_legend = parse_bool(value);
        }

        if let Some(value) = settings.get("instructions") {
            self.show_instructions = parse_bool(value);
        }
    }

    /// NO_COLOR only counts when non-empty
    fn apply_no_color(&mut self, value: &str) {
        if !value.is_empty() {
            self.color = ColorMode::Never;
        }
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
color = auto
legend = false
instructions=yes
        "#;

        let settings = Config::parse(contents);
        assert_eq!(settings.get("color"), Some(&"auto".to_string()));
        assert_eq!(settings.get("legend"), Some(&"false".to_string()));
        assert_eq!(settings.get("instructions"), Some(&"yes".to_string()));
        assert_eq!(settings.len(), 3);
    }

    #[test]
    fn test_apply_settings() {
        let mut config = Config::default();
        let mut settings = HashMap::new();
        settings.insert("color".to_string(), "Never".to_string());
        settings.insert("legend".to_string(), "off".to_string());
        settings.insert("instructions".to_string(), "0".to_string());

        config.apply(&settings);

        assert_eq!(config.color, ColorMode::Never);
        assert!(!config.show_legend);
        assert!(!config.show_instructions);
    }

    #[test]
    fn test_unknown_color_mode_keeps_default() {
        let mut config = Config::default();
        let settings = Config::parse("color = sometimes\nbogus = 1\n");
        config.apply(&settings);
        assert_eq!(config.color, ColorMode::Always);
        assert!(config.show_legend);
    }

    #[test]
    fn test_no_color() {
        let mut config = Config::default();
        config.apply_no_color("");
        assert_eq!(config.color, ColorMode::Always);
        config.apply_no_color("1");
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_color_mode_enabled() {
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("YES"));
        assert!(parse_bool("on"));
        assert!(parse_bool("1"));

        assert!(!parse_bool("false"));
        assert!(!parse_bool("off"));
        assert!(!parse_bool("anything"));
    }
}
