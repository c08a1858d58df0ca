//! Standard and aggressive compression passes over a whole payload.

use log::info;
use serde_json::{Map, Value, json};

use crate::assets::{compress_images, compress_svgs};
use crate::tokens::compress_design_tokens;
use crate::tree::simplify_tree;

/// Top-level keys the aggressive pass drops outright.
const OPTIONAL_KEYS: [&str; 3] = ["cssVariables", "variants", "extractionSummary"];

/// Limits applied by one pass.
struct PassLimits {
    image_kb: u32,
    svg_kb: u32,
    aggressive_tokens: bool,
    tree_depth: usize,
}

const STANDARD: PassLimits = PassLimits {
    image_kb: 75,
    svg_kb: 30,
    aggressive_tokens: false,
    tree_depth: 10,
};

const AGGRESSIVE: PassLimits = PassLimits {
    image_kb: 25,
    svg_kb: 10,
    aggressive_tokens: true,
    tree_depth: 6,
};

fn apply_limits(payload: &mut Map<String, Value>, limits: &PassLimits) {
    if let Some(Value::Object(assets)) = payload.get_mut("assets") {
        compress_images(assets, limits.image_kb);
        compress_svgs(assets, limits.svg_kb);
    }
    if let Some(Value::Object(tokens)) = payload.get_mut("designTokens") {
        compress_design_tokens(tokens, limits.aggressive_tokens);
    }
}

/// Moderate compression: large assets, token surplus, deep trees and
/// per-node metadata.
pub fn compress_standard(payload: &mut Value) {
    let Value::Object(fields) = payload else {
        return;
    };
    info!("Applying standard compression");
    apply_limits(fields, &STANDARD);
    if let Some(tree) = fields.get_mut("tree") {
        simplify_tree(tree, STANDARD.tree_depth);
    }
}

/// Heavy compression: tighter limits than [`compress_standard`], plus the
/// screenshot, component definitions and optional summaries are dropped.
pub fn compress_aggressive(payload: &mut Value) {
    let Value::Object(fields) = payload else {
        return;
    };
    info!("Applying aggressive compression");
    apply_limits(fields, &AGGRESSIVE);
    if fields.remove("screenshot").is_some() {
        info!("Removed screenshot");
    }
    if let Some(components) = fields.get_mut("components") {
        info!("Removed components data");
        *components = json!({ "definitions": {} });
    }
    if let Some(tree) = fields.get_mut("tree") {
        simplify_tree(tree, AGGRESSIVE.tree_depth);
    }
    for key in OPTIONAL_KEYS {
        if fields.remove(key).is_some() {
            info!("Removed {key}");
        }
    }
}
