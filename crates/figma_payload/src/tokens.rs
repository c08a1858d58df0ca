//! Design token trimming.

use log::info;
use serde_json::{Map, Value};
use std::mem;

/// How many tokens of each kind survive a trim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TokenLimits {
    colors: usize,
    typography: usize,
    spacing: usize,
}

const STANDARD_LIMITS: TokenLimits = TokenLimits {
    colors: 30,
    typography: 20,
    spacing: 25,
};

const AGGRESSIVE_LIMITS: TokenLimits = TokenLimits {
    colors: 15,
    typography: 10,
    spacing: 10,
};

fn usage(token: &Value) -> f64 {
    token.get("usage").and_then(Value::as_f64).unwrap_or(0.0)
}

/// Keep the first `limit` entries of `tokens[kind]`, optionally after a stable
/// sort by descending `usage`.
fn keep_first(tokens: &mut Map<String, Value>, kind: &str, limit: usize, by_usage: bool) -> usize {
    let Some(Value::Object(entries)) = tokens.get_mut(kind) else {
        return 0;
    };
    let mut items: Vec<(String, Value)> = mem::take(entries).into_iter().collect();
    if by_usage {
        items.sort_by(|left, right| usage(&right.1).total_cmp(&usage(&left.1)));
    }
    items.truncate(limit);
    entries.extend(items);
    entries.len()
}

/// Reduce design tokens to the most relevant ones.
///
/// Colors are ranked by `usage` (missing counts as zero); typography and
/// spacing keep their first entries. Limits are 30/20/25, or 15/10/10 when
/// `aggressive`.
pub fn compress_design_tokens(tokens: &mut Map<String, Value>, aggressive: bool) {
    if tokens.is_empty() {
        return;
    }
    let limits = if aggressive {
        AGGRESSIVE_LIMITS
    } else {
        STANDARD_LIMITS
    };
    let colors = keep_first(tokens, "colors", limits.colors, true);
    let typography = keep_first(tokens, "typography", limits.typography, false);
    let spacing = keep_first(tokens, "spacing", limits.spacing, false);
    info!(
        "Compressed design tokens (colors: {colors}, typography: {typography}, spacing: {spacing})"
    );
}
