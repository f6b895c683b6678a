//! ANSI styling for text output

use crate::config::ColorMode;

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";

/// Styles used by the text renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Section labels
    Bold,
    /// Query heading
    Heading,
    /// Reference numbers
    Number,
    /// URLs
    Link,
}

impl Style {
    /// The escape sequence that turns this style on
    pub fn code(&self) -> &'static str {
        match self {
            Style::Bold => "\x1b[1m",
            Style::Heading => "\x1b[1;34m",
            Style::Number => "\x1b[33m",
            Style::Link => "\x1b[36m",
        }
    }
}

/// Decide whether output gets ANSI styling
pub fn should_use_color(mode: ColorMode, stdout_is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_is_terminal,
    }
}

/// Wrap `text` in `style` and a reset, or return it untouched.
///
/// Empty text is still wrapped when color is on.
pub fn colorize(text: &str, style: Style, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    format!("{}{}{}", style.code(), text, RESET)
}
