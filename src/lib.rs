// Базовые модули
pub mod consts;
pub mod manifest;
pub mod materialize;

// CLI (используется бинарником `sower`)
pub mod cli;

// Удобные реэкспорты
pub use manifest::{decode_entry, Manifest, ManifestEntry};
pub use materialize::{materialize, Report, WrittenFile};
