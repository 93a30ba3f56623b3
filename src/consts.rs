//! Общие константы раскладки бандла (manifest + sentinel).

// -------- Manifest --------
/// Flat JSON object: relative filename -> base64-encoded UTF-8 text.
pub const MANIFEST_FILE: &str = "_files_data.json";

// -------- One-shot sentinel --------
// Present while the bundle is unconsumed; removed as the very last cleanup
// step. A missing sentinel at cleanup time is a fatal error.
pub const SENTINEL_FILE: &str = "_oneshot.sentinel";
