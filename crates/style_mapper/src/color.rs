//! Colors as serialized by `getComputedStyle`.
//!
//! Only `rgb(R, G, B)`, `rgba(R, G, B, A)` and `#RRGGBB` are recognized. Named
//! colors, short or 8-digit hex and other color functions are reported as
//! absent, the same as `transparent`.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};
use log::trace;
use serde::Serialize;

/// Bit count used to combine two hex nibbles into a byte.
const NIBBLE_SHIFT: u32 = 4;

/// Largest 8-bit channel value; channels are divided by this.
const CHANNEL_MAX: f32 = 255.0;

/// The computed value browsers report for an unset background.
const TRANSPARENT_BLACK: &str = "rgba(0, 0, 0, 0)";

/// An RGBA color with channels normalized to `0.0..=1.0`.
///
/// Serializes with the design schema's short field names (`r`, `g`, `b`, `a`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    #[serde(rename = "r")]
    pub red: f32,
    #[serde(rename = "g")]
    pub green: f32,
    #[serde(rename = "b")]
    pub blue: f32,
    #[serde(rename = "a")]
    pub alpha: f32,
}

impl Color {
    /// Build an opaque color from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, 1.0)
    }

    /// Build a color from 8-bit channels and an alpha used as is.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red: f32::from(red) / CHANNEL_MAX,
            green: f32::from(green) / CHANNEL_MAX,
            blue: f32::from(blue) / CHANNEL_MAX,
            alpha,
        }
    }
}

/// Convert an ASCII hex digit to its numeric value.
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse the six digits of a `#RRGGBB` color (without the `#`).
fn parse_hex_color(digits: &str) -> Option<Color> {
    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let mut channels = [0u8; 3];
    for (channel, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
        let high = pair.first().copied().and_then(hex_value)?;
        let low = pair.get(1).copied().and_then(hex_value)?;
        *channel = high.wrapping_shl(NIBBLE_SHIFT) | low;
    }
    let [red, green, blue] = channels;
    Some(Color::from_rgb8(red, green, blue))
}

/// One numeric argument of `rgb()`/`rgba()` together with its source text.
struct Argument<'i> {
    value: f32,
    int_value: Option<i32>,
    source: &'i str,
}

impl Argument<'_> {
    /// An unsigned integer channel in `0..=255`.
    fn channel(&self) -> Option<u8> {
        self.int_value.and_then(|int_val| u8::try_from(int_val).ok())
    }

    /// A plain decimal alpha (digits and dots only, no sign or exponent).
    fn opacity(&self) -> Option<f32> {
        let plain = self
            .source
            .bytes()
            .all(|byte_val| byte_val.is_ascii_digit() || byte_val == b'.');
        (plain && self.value.is_finite()).then_some(self.value)
    }
}

/// Read the next argument, skipping whitespace. Anything other than an
/// unsigned number (including comments) ends the match.
fn next_argument<'i>(input: &mut Parser<'i, '_>) -> Option<Argument<'i>> {
    loop {
        let start = input.position();
        let token = input.next_including_whitespace_and_comments().ok()?.clone();
        match token {
            Token::WhiteSpace(_) => {}
            Token::Number {
                has_sign: false,
                value,
                int_value,
            } => {
                return Some(Argument {
                    value,
                    int_value,
                    source: input.slice_from(start).trim_start(),
                });
            }
            _ => return None,
        }
    }
}

/// Consume what follows an argument: `Some(true)` for a comma, `Some(false)`
/// at the end of the block, `None` for anything else.
fn next_separator(input: &mut Parser<'_, '_>) -> Option<bool> {
    loop {
        match input.next_including_whitespace_and_comments() {
            Ok(Token::WhiteSpace(_)) => {}
            Ok(Token::Comma) => return Some(true),
            Ok(_) => return None,
            Err(_) => return Some(false),
        }
    }
}

/// Collect the comma-separated arguments of a color function block.
fn parse_arguments<'i>(input: &mut Parser<'i, '_>) -> Option<Vec<Argument<'i>>> {
    let mut arguments = Vec::with_capacity(4);
    loop {
        arguments.push(next_argument(input)?);
        if !next_separator(input)? {
            return Some(arguments);
        }
    }
}

/// Build a color from `rgb()` (three channels) or `rgba()` (three channels
/// and a decimal alpha). Function names are matched case-sensitively.
fn color_from_arguments(name: &str, arguments: &[Argument<'_>]) -> Option<Color> {
    match (name, arguments) {
        ("rgb", [red, green, blue]) => Some(Color::from_rgb8(
            red.channel()?,
            green.channel()?,
            blue.channel()?,
        )),
        ("rgba", [red, green, blue, alpha]) => Some(Color::from_rgba8(
            red.channel()?,
            green.channel()?,
            blue.channel()?,
            alpha.opacity()?,
        )),
        _ => None,
    }
}

/// Match the whole string against one of the supported color forms.
fn parse_color_value(value: &str) -> Option<Color> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let start = parser.position();
    let first = parser.next_including_whitespace_and_comments().ok()?.clone();
    // Tokens carry unescaped text; the source must spell the form literally.
    let source = parser.slice_from(start);
    let color = match first {
        Token::Hash(_) | Token::IDHash(_) => source.strip_prefix('#').and_then(parse_hex_color),
        Token::Function(name) => {
            if source.strip_suffix('(') != Some(name.as_ref()) {
                return None;
            }
            // The tokenizer closes an unterminated block at end of input.
            if !value.ends_with(')') {
                return None;
            }
            let result: Result<Option<Color>, CssParseError<'_, ()>> =
                parser.parse_nested_block(|nested| {
                    Ok(parse_arguments(nested)
                        .and_then(|arguments| color_from_arguments(name.as_ref(), &arguments)))
                });
            result.ok().flatten()
        }
        _ => None,
    }?;
    // Nothing may follow the color, not even whitespace.
    parser
        .next_including_whitespace_and_comments()
        .is_err()
        .then_some(color)
}

/// Parse a computed color into a normalized [`Color`].
///
/// Returns `None` ("no fill") for empty input, `transparent`, the computed
/// transparent black `rgba(0, 0, 0, 0)` and every unsupported form. Channels
/// must be integers in `0..=255`; the `rgba()` alpha is kept verbatim and
/// is not clamped.
pub fn parse_color(value: &str) -> Option<Color> {
    if value.is_empty() || value == "transparent" || value == TRANSPARENT_BLACK {
        return None;
    }
    let color = parse_color_value(value);
    if color.is_none() {
        trace!("unsupported color value {value:?}, treating as no fill");
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_color(actual: Option<Color>, expected: [f32; 4]) {
        assert!(actual.is_some(), "expected {expected:?}, got None");
        if let Some(color) = actual {
            let channels = [color.red, color.green, color.blue, color.alpha];
            for (got, want) in channels.iter().zip(expected) {
                assert!((got - want).abs() < 1e-6, "{channels:?} != {expected:?}");
            }
        }
    }

    /// # Panics
    /// Panics if `rgb()` channels are not divided by 255 with an opaque alpha.
    #[test]
    fn rgb_channels_normalized() {
        assert_color(parse_color("rgb(255, 128, 0)"), [1.0, 128.0 / 255.0, 0.0, 1.0]);
        assert_color(parse_color("rgb(0,0,0)"), [0.0, 0.0, 0.0, 1.0]);
        assert_color(
            parse_color("rgb( 10 , 20 , 30 )"),
            [10.0 / 255.0, 20.0 / 255.0, 30.0 / 255.0, 1.0],
        );
    }

    /// # Panics
    /// Panics if the `rgba()` alpha is altered.
    #[test]
    fn rgba_alpha_is_verbatim() {
        assert_color(parse_color("rgba(255, 0, 0, 0.5)"), [1.0, 0.0, 0.0, 0.5]);
        assert_color(parse_color("rgba(0, 0, 255, .25)"), [0.0, 0.0, 1.0, 0.25]);
        assert_color(parse_color("rgba(0, 0, 255, 2.5)"), [0.0, 0.0, 1.0, 2.5]);
        // Same channels as the computed transparent value, but not that literal.
        assert_color(parse_color("rgba(0,0,0,0)"), [0.0, 0.0, 0.0, 0.0]);
    }

    /// # Panics
    /// Panics if six-digit hex colors are not decoded in either case.
    #[test]
    fn hex_colors() {
        assert_color(parse_color("#FF0000"), [1.0, 0.0, 0.0, 1.0]);
        assert_color(parse_color("#00ff80"), [0.0, 1.0, 128.0 / 255.0, 1.0]);
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#ff000080"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    /// # Panics
    /// Panics if an absent marker value yields a color.
    #[test]
    fn no_fill_values() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("transparent"), None);
        assert_eq!(parse_color("rgba(0, 0, 0, 0)"), None);
    }

    /// # Panics
    /// Panics if an unsupported or malformed value yields a color.
    #[test]
    fn unsupported_forms_are_absent() {
        for value in [
            "red",
            "hsl(0,100%,50%)",
            "rgb(1, 2)",
            "rgb(1 2 3)",
            "rgb(1, 2, 3, 4)",
            "rgba(1, 2, 3)",
            "rgb(1, 2, 3,)",
            "rgb(1.5, 2, 3)",
            "rgb(-1, 2, 3)",
            "rgb(256, 0, 0)",
            "rgb(50%, 0, 0)",
            "rgba(1, 2, 3, 50%)",
            "rgba(1, 2, 3, 1e-1)",
            "rgb(1, /* c */ 2, 3)",
            "RGB(1, 2, 3)",
            "rgb (1, 2, 3)",
            "rgb(1, 2, 3",
            " rgb(1, 2, 3)",
            "rgb(1, 2, 3) ",
            "rgb(1, 2, 3)x",
            "#FF0000 ",
            "#\\46 F0000",
            "#\\46\\46 0000",
            "rg\\62(1, 2, 3)",
            "\\72gba(1, 2, 3, 0.5)",
        ] {
            assert_eq!(parse_color(value), None, "{value}");
        }
    }
}
