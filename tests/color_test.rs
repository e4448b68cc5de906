use droplist::utils::color::{parse_hex_color, ColorParseError};
use ratatui::style::Color;

#[test]
fn test_parse_valid_colors() {
    assert_eq!(parse_hex_color("#20CC20"), Ok(Color::Rgb(32, 204, 32)));
    assert_eq!(parse_hex_color("#20CCCC"), Ok(Color::Rgb(32, 204, 204)));
    assert_eq!(parse_hex_color("#000000"), Ok(Color::Rgb(0, 0, 0)));
    assert_eq!(parse_hex_color("#FFFFFF"), Ok(Color::Rgb(255, 255, 255)));
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(parse_hex_color("#ffffff"), Ok(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_hex_color("#20cc20"), Ok(Color::Rgb(32, 204, 32)));
}

#[test]
fn test_missing_hash_is_rejected() {
    assert_eq!(
        parse_hex_color("20CC20"),
        Err(ColorParseError::BadFormat("20CC20".to_string()))
    );
}

#[test]
fn test_wrong_length_is_rejected() {
    assert!(matches!(parse_hex_color("#20CC2"), Err(ColorParseError::BadFormat(_))));
    assert!(matches!(parse_hex_color("#20CC200"), Err(ColorParseError::BadFormat(_))));
    assert!(matches!(parse_hex_color("#"), Err(ColorParseError::BadFormat(_))));
    assert!(matches!(parse_hex_color(""), Err(ColorParseError::BadFormat(_))));
}

#[test]
fn test_non_hex_digits_are_rejected() {
    assert!(matches!(parse_hex_color("#20CG20"), Err(ColorParseError::BadHexDigit(_))));
    assert!(matches!(parse_hex_color("#zzzzzz"), Err(ColorParseError::BadHexDigit(_))));
}

#[test]
fn test_non_ascii_input_is_rejected() {
    // Multi-byte characters must not slip past the length check
    assert!(matches!(parse_hex_color("#ééé"), Err(ColorParseError::BadFormat(_))));
}
