use ratatui::style::Color;
use thiserror::Error;

/// Error raised when a theme color string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must be a '#RRGGBB' string, got '{0}'")]
    BadFormat(String),
    #[error("color '{0}' contains a non-hexadecimal digit")]
    BadHexDigit(String),
}

/// Convert a `#RRGGBB` string to a terminal color
pub fn parse_hex_color(value: &str) -> Result<Color, ColorParseError> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::BadFormat(value.to_string()))?;

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorParseError::BadFormat(value.to_string()));
    }

    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError::BadHexDigit(value.to_string()))
    };

    Ok(Color::Rgb(component(0..2)?, component(2..4)?, component(4..6)?))
}
