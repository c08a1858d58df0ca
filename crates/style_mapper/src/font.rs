//! Font weight and family.

use cssparser::{Parser, ParserInput, Token};
use log::trace;

/// Numeric weight of the `normal` keyword.
pub const NORMAL_WEIGHT: i32 = 400;
/// Numeric weight of the `bold` keyword.
pub const BOLD_WEIGHT: i32 = 700;

/// Map a computed `font-weight` to the 100–900 scale.
///
/// Integer strings are returned as written, without clamping. `bold` maps to
/// 700; `normal` and anything else map to 400.
pub fn map_font_weight(value: &str) -> i32 {
    if let Ok(weight) = value.parse::<i32>() {
        return weight;
    }
    match value {
        "bold" => BOLD_WEIGHT,
        "normal" => NORMAL_WEIGHT,
        _ => {
            trace!("unknown font-weight {value:?}, using {NORMAL_WEIGHT}");
            NORMAL_WEIGHT
        }
    }
}

/// The first family of a computed `font-family` list, unquoted.
///
/// `"Helvetica Neue", Arial` yields `Helvetica Neue`; unquoted multi-word
/// names are joined with single spaces. Returns `None` when the list does
/// not start with a family name.
pub fn first_font_family(value: &str) -> Option<String> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut words: Vec<String> = Vec::new();
    while let Ok(token) = parser.next() {
        match token {
            Token::QuotedString(name) if words.is_empty() => return Some(name.to_string()),
            Token::Ident(word) => words.push(word.to_string()),
            _ => break,
        }
    }
    (!words.is_empty()).then(|| words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if weights do not map per the numeric/keyword rules.
    #[test]
    fn weights() {
        assert_eq!(map_font_weight("700"), 700);
        assert_eq!(map_font_weight("350"), 350);
        assert_eq!(map_font_weight("1000"), 1000);
        assert_eq!(map_font_weight("bold"), 700);
        assert_eq!(map_font_weight("normal"), 400);
        assert_eq!(map_font_weight("xyz"), 400);
        assert_eq!(map_font_weight(""), 400);
        assert_eq!(map_font_weight("bolder"), 400);
    }

    /// # Panics
    /// Panics if the first family is not extracted.
    #[test]
    fn families() {
        assert_eq!(
            first_font_family("\"Helvetica Neue\", Arial, sans-serif").as_deref(),
            Some("Helvetica Neue")
        );
        assert_eq!(
            first_font_family("Times New Roman, serif").as_deref(),
            Some("Times New Roman")
        );
        assert_eq!(first_font_family("'Inter'").as_deref(), Some("Inter"));
        assert_eq!(first_font_family("monospace").as_deref(), Some("monospace"));
        assert_eq!(first_font_family(""), None);
        assert_eq!(first_font_family(", Arial"), None);
    }
}
