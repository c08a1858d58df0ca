//! Element tree simplification.

use log::debug;
use serde_json::Value;

/// Per-node keys the design-tool import never reads.
const METADATA_KEYS: [&str; 6] = [
    "htmlMetadata",
    "debugInfo",
    "sourceSelector",
    "componentSignature",
    "contentHash",
    "cssVariables",
];

fn simplify_at(node: &mut Value, max_depth: usize, depth: usize) {
    let Value::Object(fields) = node else {
        return;
    };
    for key in METADATA_KEYS {
        fields.remove(key);
    }
    if depth >= max_depth {
        if let Some(children) = fields.get_mut("children") {
            debug!("Truncating tree at depth {depth}");
            *children = Value::Array(Vec::new());
        }
        return;
    }
    if let Some(Value::Array(children)) = fields.get_mut("children") {
        for child in children {
            simplify_at(child, max_depth, depth + 1);
        }
    }
}

/// Strip import-irrelevant metadata from every node and cut the tree off
/// below `max_depth` (the root is depth 0; nodes at `max_depth` keep an
/// empty `children` list).
pub fn simplify_tree(root: &mut Value, max_depth: usize) {
    simplify_at(root, max_depth, 0);
}
