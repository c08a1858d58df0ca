//! Computed style to design schema mapping.
//!
//! Turns the strings a browser reports from `getComputedStyle` (over CDP) into
//! the values a design tool's node schema expects: normalized colors, pixel
//! magnitudes, numeric font weights and closed keyword enums. Every function
//! is total; unsupported input degrades to a documented default instead of
//! an error.

#![forbid(unsafe_code)]

pub mod color;
pub mod font;
pub mod length;
pub mod snapshot;
pub mod text;
pub mod vertical_align;

// Re-exports for ergonomic access from other crates.
pub use color::{Color, parse_color};
pub use font::{first_font_family, map_font_weight};
pub use length::parse_pixel_value;
pub use snapshot::{DesignStyle, Stroke, StyleSnapshot, map_snapshot};
pub use text::{
    TextAlign, TextCase, TextDecoration, map_text_align, map_text_decoration, map_text_transform,
};
pub use vertical_align::{VerticalAlign, map_vertical_align};
