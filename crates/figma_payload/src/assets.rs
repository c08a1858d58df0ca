//! Oversized image and SVG removal.

use log::info;
use serde_json::{Map, Value};

/// Bytes per kibibyte.
const BYTES_PER_KB: f64 = 1024.0;

/// Decoded bytes per base64 character.
const BASE64_RATIO: f64 = 0.75;

/// Remove the entries of `assets[collection]` whose measured size (in KiB)
/// exceeds `max_size_kb`. Entries `measure` cannot size are kept.
fn remove_oversized(
    assets: &mut Map<String, Value>,
    collection: &str,
    max_size_kb: u32,
    measure: impl Fn(&Value) -> Option<f64>,
) -> usize {
    let Some(Value::Object(entries)) = assets.get_mut(collection) else {
        return 0;
    };
    let before = entries.len();
    entries.retain(|_, asset| {
        measure(asset).is_none_or(|size_kb| size_kb <= f64::from(max_size_kb))
    });
    before - entries.len()
}

/// Drop images whose `base64` data decodes to more than `max_size_kb` KiB.
///
/// Returns the number of images removed.
pub fn compress_images(assets: &mut Map<String, Value>, max_size_kb: u32) -> usize {
    let removed = remove_oversized(assets, "images", max_size_kb, |asset| {
        asset
            .get("base64")
            .and_then(Value::as_str)
            .map(|data| data.len() as f64 * BASE64_RATIO / BYTES_PER_KB)
    });
    if removed > 0 {
        info!("Removed {removed} images over {max_size_kb}KB");
    }
    removed
}

/// Drop SVGs whose `svgCode` is longer than `max_size_kb` KiB.
///
/// Returns the number of SVGs removed.
pub fn compress_svgs(assets: &mut Map<String, Value>, max_size_kb: u32) -> usize {
    let removed = remove_oversized(assets, "svgs", max_size_kb, |asset| {
        asset
            .get("svgCode")
            .and_then(Value::as_str)
            .map(|code| code.len() as f64 / BYTES_PER_KB)
    });
    if removed > 0 {
        info!("Removed {removed} SVGs over {max_size_kb}KB");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// # Panics
    /// Panics if images are not filtered by estimated decoded size.
    #[test]
    fn images_over_limit_are_removed() {
        // 2048 base64 chars decode to 1.5 KiB.
        let mut assets = object(json!({
            "images": {
                "big": { "base64": "A".repeat(2048) },
                "small": { "base64": "A".repeat(1024) },
                "url_only": { "url": "https://example.com/a.png" }
            }
        }));
        assert_eq!(compress_images(&mut assets, 1), 1);
        let images = assets.get("images").and_then(Value::as_object);
        assert!(images.is_some_and(|map| !map.contains_key("big")));
        assert!(images.is_some_and(|map| map.contains_key("small") && map.contains_key("url_only")));
    }

    /// # Panics
    /// Panics if SVGs are not filtered by source length.
    #[test]
    fn svgs_over_limit_are_removed() {
        let mut assets = object(json!({
            "svgs": {
                "icon": { "svgCode": "<svg/>" },
                "map": { "svgCode": "x".repeat(3 * 1024 + 1) }
            }
        }));
        assert_eq!(compress_svgs(&mut assets, 3), 1);
        assert_eq!(compress_svgs(&mut assets, 3), 0);
    }

    /// # Panics
    /// Panics if missing collections are not treated as empty.
    #[test]
    fn missing_collections() {
        let mut assets = Map::new();
        assert_eq!(compress_images(&mut assets, 1), 0);
        assert_eq!(compress_svgs(&mut assets, 1), 0);
    }
}
