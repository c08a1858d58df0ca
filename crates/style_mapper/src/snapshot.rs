//! Per-element mapping from a computed style object to design properties.
//!
//! [`StyleSnapshot`] mirrors the object a CDP script builds from
//! `getComputedStyle(el)`: camelCase keys, string values, any of them missing.
//! [`map_snapshot`] runs every field through its mapper.

use serde::{Deserialize, Serialize};

use crate::color::{Color, parse_color};
use crate::font::{first_font_family, map_font_weight};
use crate::length::parse_pixel_value;
use crate::text::{TextAlign, TextCase, TextDecoration};
use crate::text::{map_text_align, map_text_decoration, map_text_transform};
use crate::vertical_align::{VerticalAlign, map_vertical_align};

/// Computed style strings for one element. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSnapshot {
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub border_top_color: Option<String>,
    pub border_top_width: Option<String>,
    pub border_top_left_radius: Option<String>,
    pub opacity: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub line_height: Option<String>,
    pub letter_spacing: Option<String>,
    pub text_align: Option<String>,
    pub vertical_align: Option<String>,
    pub text_decoration_line: Option<String>,
    pub text_decoration: Option<String>,
    pub text_transform: Option<String>,
}

/// A solid stroke around the node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub color: Color,
    pub weight: f32,
}

/// Design-tool properties derived from a [`StyleSnapshot`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    pub corner_radius: f32,
    pub opacity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    pub font_size: f32,
    pub font_weight: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    pub letter_spacing: f32,
    pub text_align_horizontal: TextAlign,
    pub text_align_vertical: VerticalAlign,
    pub text_decoration: TextDecoration,
    pub text_case: TextCase,
}

fn field(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

/// Map every field of `snapshot` to its design value.
///
/// Missing fields are treated as empty strings, so each takes its mapper's
/// default, except `opacity` (1.0) and `lineHeight` (absent for `normal`).
/// A border with no width or no visible color produces no stroke.
pub fn map_snapshot(snapshot: &StyleSnapshot) -> DesignStyle {
    let stroke_weight = parse_pixel_value(field(snapshot.border_top_width.as_ref()));
    let stroke = parse_color(field(snapshot.border_top_color.as_ref()))
        .filter(|_| stroke_weight > 0.0)
        .map(|color| Stroke {
            color,
            weight: stroke_weight,
        });
    let opacity = match field(snapshot.opacity.as_ref()) {
        "" => 1.0,
        written => parse_pixel_value(written),
    };
    let line_height = match field(snapshot.line_height.as_ref()) {
        "" | "normal" => None,
        written => Some(parse_pixel_value(written)),
    };
    let decoration = snapshot
        .text_decoration_line
        .as_ref()
        .or(snapshot.text_decoration.as_ref());

    DesignStyle {
        fill: parse_color(field(snapshot.background_color.as_ref())),
        text_color: parse_color(field(snapshot.color.as_ref())),
        stroke,
        corner_radius: parse_pixel_value(field(snapshot.border_top_left_radius.as_ref())),
        opacity,
        font_family: first_font_family(field(snapshot.font_family.as_ref())),
        font_size: parse_pixel_value(field(snapshot.font_size.as_ref())),
        font_weight: map_font_weight(field(snapshot.font_weight.as_ref())),
        line_height,
        letter_spacing: parse_pixel_value(field(snapshot.letter_spacing.as_ref())),
        text_align_horizontal: map_text_align(field(snapshot.text_align.as_ref())),
        text_align_vertical: map_vertical_align(field(snapshot.vertical_align.as_ref())),
        text_decoration: map_text_decoration(field(decoration)),
        text_case: map_text_transform(field(snapshot.text_transform.as_ref())),
    }
}
