//! Item list and page list I/O
//!
//! The upstream gallery endpoint wraps its item array in an envelope whose
//! shape has varied over time; all known shapes are accepted here.

use crate::types::*;
use serde_json::Value;
use std::path::Path;

/// Parse an item list from JSON.
///
/// Accepts `{"data": {"gallery": [...]}}`, `{"gallery": [...]}` or a bare
/// array of items.
pub fn parse_items(bytes: &[u8]) -> Result<Vec<Item>> {
    let mut root: Value = serde_json::from_slice(bytes)?;

    let gallery = if root.is_array() {
        root
    } else if let Some(gallery) = root.pointer_mut("/data/gallery").filter(|v| v.is_array()) {
        gallery.take()
    } else if let Some(gallery) = root.get_mut("gallery").filter(|v| v.is_array()) {
        gallery.take()
    } else {
        return Err(GalleryError::UnexpectedShape(describe(&root)));
    };

    Ok(serde_json::from_value(gallery)?)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
    }
}

/// Load an item list from a JSON file
pub async fn load_items(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let items = tokio::task::spawn_blocking(move || parse_items(&bytes)).await??;
    log::debug!("Loaded {} item(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Write page layouts as pretty-printed JSON
pub async fn save_layouts(layouts: &[PageLayout], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(layouts)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
