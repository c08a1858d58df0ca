//! Vertical text alignment.

use log::trace;
use serde::Serialize;

/// Vertical alignment of text within its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Map a computed `vertical-align`. `baseline`, lengths and unknown keywords
/// fall back to [`VerticalAlign::Top`].
pub fn map_vertical_align(value: &str) -> VerticalAlign {
    match value {
        "middle" => VerticalAlign::Center,
        "bottom" | "text-bottom" | "sub" => VerticalAlign::Bottom,
        "top" | "text-top" | "super" => VerticalAlign::Top,
        _ => {
            trace!("vertical-align {value:?} mapped to TOP");
            VerticalAlign::Top
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if a keyword maps to the wrong alignment.
    #[test]
    fn keywords() {
        assert_eq!(map_vertical_align("middle"), VerticalAlign::Center);
        for bottom in ["bottom", "text-bottom", "sub"] {
            assert_eq!(map_vertical_align(bottom), VerticalAlign::Bottom, "{bottom}");
        }
        for top in ["top", "text-top", "super"] {
            assert_eq!(map_vertical_align(top), VerticalAlign::Top, "{top}");
        }
    }

    /// # Panics
    /// Panics if an unknown value does not fall back to the top.
    #[test]
    fn fallback() {
        assert_eq!(map_vertical_align("baseline"), VerticalAlign::Top);
        assert_eq!(map_vertical_align("weird"), VerticalAlign::Top);
        assert_eq!(map_vertical_align("4px"), VerticalAlign::Top);
        assert_eq!(map_vertical_align(""), VerticalAlign::Top);
    }
}
