//! Light and dark colour palettes.

use crate::error::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the button that switches away from this mode.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark Mode",
            Self::Dark => "Switch to Light Mode",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = DeskError;

    fn from_str(s: &str) -> DeskResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(DeskError::UnknownTheme(other.to_string())),
        }
    }
}

/// CSS colour strings, as shipped with the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
    pub table_header_background: &'static str,
    pub table_hover_background: &'static str,
    pub modal_background: &'static str,
    pub modal_content_background: &'static str,
    pub modal_shadow: &'static str,
    pub button_border_color: &'static str,
    pub button_background: &'static str,
    pub button_hover_background: &'static str,
    pub button_text_color: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#FFD3B6",
    color: "#000000",
    border: "#DCA47C",
    table_header_background: "#DCA47C",
    table_hover_background: "#e0e0e0",
    modal_background: "rgba(255, 211, 182, 0.7)",
    modal_content_background: "#DCA47C",
    modal_shadow: "0 0 10px rgba(0, 0, 0, 0.3)",
    button_border_color: "#DCA47C",
    button_background: "#FFD3B6",
    button_hover_background: "#DCA47C",
    button_text_color: "#000",
};

pub const DARK: Palette = Palette {
    background: "#333333",
    color: "#FFD3B6",
    border: "#FFD3B6",
    table_header_background: "#DCA47C",
    table_hover_background: "#666666",
    modal_background: "rgba(0, 0, 0, 0.3)",
    modal_content_background: "#333333",
    modal_shadow: "0 0 10px rgba(255, 255, 255, 0.1)",
    button_border_color: "#FFD3B6",
    button_background: "#333",
    button_hover_background: "#DCA47C",
    button_text_color: "#FFD3B6",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(hex: &str) -> DeskResult<Self> {
        let invalid = || DeskError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::from_hex("#DCA47C").unwrap(), Rgb(0xDC, 0xA4, 0x7C));
        assert_eq!(Rgb::from_hex("#333").unwrap(), Rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn rejects_css_functions() {
        assert!(Rgb::from_hex("rgba(0, 0, 0, 0.3)").is_err());
        assert!(Rgb::from_hex("#12345").is_err());
    }
}
