//! File staging for the tree builder
//!
//! Parses `localPath[:targetPath]` specifiers and loads the named files as
//! blob entries. The remote service materializes the actual tree and
//! preserves paths not listed here; no tree diffing happens locally.

use crate::error::{Error, Result};
use crate::types::{FileSpec, TreeEntry};
use std::path::PathBuf;

/// Parse a comma-separated list of `localPath[:targetPath]` specifiers
///
/// When no target is given the file keeps its local path in the repository.
pub fn parse_file_specs(raw: &str) -> Result<Vec<FileSpec>> {
    if raw.trim().is_empty() {
        return Err(Error::Config("`--files` must not be empty".to_string()));
    }
    raw.split(',').map(parse_spec).collect()
}

fn parse_spec(spec: &str) -> Result<FileSpec> {
    let parts: Vec<&str> = spec.split(':').collect();
    let (local, target) = match parts.as_slice() {
        [single] => (*single, *single),
        [local, target, ..] => (*local, *target),
        [] => ("", ""),
    };

    if local.is_empty() || target.is_empty() {
        return Err(Error::Config(format!("empty file specifier: {spec:?}")));
    }

    Ok(FileSpec {
        local: PathBuf::from(local),
        target: target.to_string(),
    })
}

/// Read each specified file and stage it as a regular-file blob entry
pub async fn load_entries(specs: &[FileSpec]) -> Result<Vec<TreeEntry>> {
    let mut entries = Vec::with_capacity(specs.len());
    for spec in specs {
        let content = tokio::fs::read_to_string(&spec.local)
            .await
            .map_err(|e| Error::FileNotFound {
                path: spec.local.clone(),
                reason: e.to_string(),
            })?;
        entries.push(TreeEntry::blob(spec.target.clone(), content));
    }
    Ok(entries)
}
