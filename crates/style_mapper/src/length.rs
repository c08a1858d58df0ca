//! Pixel magnitudes from computed length strings.

use cssparser::{Parser, ParserInput, Token};
use log::trace;

/// Parse the leading number of a computed length (`12.5px`, `0`, `-3px`,
/// `1e2px`, `50%`) and return it as a plain pixel value.
///
/// The unit suffix is ignored. Empty input, keywords (`auto`, `normal`),
/// functions and anything without a numeric prefix yield `0.0`, as does a
/// number too large to be finite.
pub fn parse_pixel_value(value: &str) -> f32 {
    if value.is_empty() {
        return 0.0;
    }
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let start = parser.position();
    let magnitude = match parser.next().cloned() {
        Ok(Token::Number { value: number, .. } | Token::Dimension { value: number, .. }) => number,
        // `unit_value` is already divided by 100; reparse the source to keep
        // the written digits exact.
        Ok(Token::Percentage { unit_value, .. }) => parser
            .slice_from(start)
            .trim()
            .trim_end_matches('%')
            .parse()
            .unwrap_or(unit_value * 100.0),
        _ => {
            trace!("no numeric prefix in {value:?}, using 0");
            0.0
        }
    };
    if magnitude.is_finite() { magnitude } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_px(value: &str, expected: f32) {
        let actual = parse_pixel_value(value);
        assert!(
            (actual - expected).abs() < 1e-6,
            "{value:?}: {actual} != {expected}"
        );
    }

    /// # Panics
    /// Panics if the leading number of a length is not returned.
    #[test]
    fn numeric_prefix() {
        assert_px("12.5px", 12.5);
        assert_px("16px", 16.0);
        assert_px("0", 0.0);
        assert_px("-3px", -3.0);
        assert_px(".5em", 0.5);
        assert_px("1e2px", 100.0);
        assert_px("24", 24.0);
        assert_px("50%", 50.0);
        assert_px("  8px", 8.0);
        assert_px("4px 8px", 4.0);
    }

    /// # Panics
    /// Panics if input without a numeric prefix does not degrade to zero.
    #[test]
    fn unparseable_is_zero() {
        assert_px("", 0.0);
        assert_px("abc", 0.0);
        assert_px("auto", 0.0);
        assert_px("normal", 0.0);
        assert_px("px12", 0.0);
        assert_px("calc(10px + 2px)", 0.0);
        assert_px("1e999px", 0.0);
    }
}
