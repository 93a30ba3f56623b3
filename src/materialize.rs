//! The materializer: one straight-line pass over the manifest.
//!
//! Per entry: decode -> write -> count newlines -> report line on stdout.
//! After the last entry the bundle is consumed: manifest removed, then
//! sentinel removed. No rollback anywhere — a mid-run failure leaves the
//! files already written on disk and keeps the manifest and sentinel, so
//! the failure is inspectable.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::consts::{MANIFEST_FILE, SENTINEL_FILE};
use crate::manifest::{decode_entry, Manifest};

/// One written file in the final report.
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub name: String,
    /// Exact count of '\n' bytes in the decoded content. Off by one versus
    /// the visual line count when the content lacks a trailing newline.
    pub newlines: usize,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub written: Vec<WrittenFile>,
}

/// Materialize the bundle rooted at `base`.
///
/// Writes every manifest entry in document order, then deletes the manifest
/// and the sentinel. One-shot by construction: a second call against the
/// same `base` fails on the missing manifest before touching anything.
pub fn materialize(base: &Path) -> Result<Report> {
    let manifest_path = base.join(MANIFEST_FILE);
    let manifest = Manifest::load(&manifest_path)?;
    info!(
        "materialize: {} entries under {}",
        manifest.len(),
        base.display()
    );

    let mut report = Report::default();
    for entry in &manifest.entries {
        let text = decode_entry(entry)?;
        let dest = base.join(&entry.name);
        // Parent directories are not created: a key pointing into a missing
        // directory fails the write.
        fs::write(&dest, text.as_bytes())
            .with_context(|| format!("write {}", dest.display()))?;
        let newlines = count_newlines(&text);
        debug!(
            "wrote {} ({} B, {} newlines)",
            dest.display(),
            text.len(),
            newlines
        );
        println!("Written: {} ({} lines)", entry.name, newlines);
        report.written.push(WrittenFile {
            name: entry.name.clone(),
            newlines,
        });
    }

    // Consume the bundle. Manifest first: once it is gone, a re-run cannot
    // start over even if sentinel removal fails below.
    fs::remove_file(&manifest_path)
        .with_context(|| format!("remove manifest {}", manifest_path.display()))?;
    let sentinel_path = base.join(SENTINEL_FILE);
    fs::remove_file(&sentinel_path)
        .with_context(|| format!("remove sentinel {}", sentinel_path.display()))?;
    println!("Cleanup done");

    Ok(report)
}

fn count_newlines(s: &str) -> usize {
    s.as_bytes().iter().filter(|&&b| b == b'\n').count()
}
