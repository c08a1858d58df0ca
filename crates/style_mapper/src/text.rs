//! Text keyword mappings: alignment, decoration and case.
//!
//! Each mapper returns a member of a closed enum and falls back to the
//! schema's default member for anything it does not recognize.

use log::trace;
use serde::Serialize;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// Text decoration line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

/// Letter case transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
}

/// Map a computed `text-align`.
pub fn map_text_align(value: &str) -> TextAlign {
    match value {
        "center" => TextAlign::Center,
        "right" => TextAlign::Right,
        "justify" => TextAlign::Justified,
        "left" => TextAlign::Left,
        _ => {
            trace!("text-align {value:?} mapped to LEFT");
            TextAlign::Left
        }
    }
}

/// Map a computed `text-decoration` (possibly several keywords).
///
/// An underline wins over a line-through when both are present.
pub fn map_text_decoration(value: &str) -> TextDecoration {
    if value.contains("underline") {
        TextDecoration::Underline
    } else if value.contains("line-through") {
        TextDecoration::Strikethrough
    } else {
        TextDecoration::None
    }
}

/// Map a computed `text-transform`.
pub fn map_text_transform(value: &str) -> TextCase {
    match value {
        "uppercase" => TextCase::Upper,
        "lowercase" => TextCase::Lower,
        "capitalize" => TextCase::Title,
        _ => TextCase::Original,
    }
}
