//! Manifest loading and per-entry decoding.
//!
//! The manifest is a flat JSON object mapping relative filenames to
//! base64-encoded UTF-8 text. Document order is preserved (serde_json
//! `preserve_order`), so the written-file report is deterministic.
//!
//! Values are NOT base64-decoded at load time: decoding happens per entry
//! while materializing, so a bad payload fails only when its entry is
//! reached and everything written before it stays on disk.

use anyhow::{anyhow, Context, Result};
use base64::Engine;
use std::fs;
use std::path::Path;

/// One manifest entry: target filename plus still-encoded content.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    /// Relative path under the bundle base directory. May contain
    /// subdirectory components; parent directories are never created.
    pub name: String,
    /// Base64 (standard alphabet) of UTF-8 text.
    pub content_b64: String,
}

/// Parsed manifest, entries in document order.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// The file must contain a flat JSON object whose values are all
    /// strings; anything else (array root, nested objects, numbers) is a
    /// parse failure before any file is written.
    pub fn load(path: &Path) -> Result<Manifest> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        let doc: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("parse manifest {}", path.display()))?;
        let obj = doc
            .as_object()
            .ok_or_else(|| anyhow!("manifest root must be a JSON object"))?;

        let mut entries = Vec::with_capacity(obj.len());
        for (name, value) in obj {
            let b64 = value.as_str().ok_or_else(|| {
                anyhow!("manifest value for '{}' must be a base64 string", name)
            })?;
            entries.push(ManifestEntry {
                name: name.clone(),
                content_b64: b64.to_string(),
            });
        }
        Ok(Manifest { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode one entry: strict standard-alphabet base64, then UTF-8.
pub fn decode_entry(entry: &ManifestEntry) -> Result<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(entry.content_b64.as_bytes())
        .map_err(|e| anyhow!("base64 decode for '{}': {}", entry.name, e))?;
    String::from_utf8(bytes)
        .map_err(|e| anyhow!("decoded content for '{}' is not UTF-8: {}", entry.name, e))
}
