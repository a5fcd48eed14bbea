//! Compose file discovery.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Check whether a file name looks like a Compose file.
///
/// Matches `docker-compose*.yml|yaml` and `compose*.yml|yaml`.
pub fn is_compose_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    let has_prefix = lower.starts_with("docker-compose") || lower.starts_with("compose");
    let has_ext = lower.ends_with(".yml") || lower.ends_with(".yaml");
    has_prefix && has_ext
}

/// Find Compose files at the top of `folder`, sorted by name.
pub fn discover_compose_files(folder: &Path) -> Result<Vec<String>> {
    let mut files: Vec<String> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .filter(|name| is_compose_file(name))
        .collect();

    files.sort();
    tracing::debug!("Found {} compose file(s) in {}", files.len(), folder.display());
    Ok(files)
}
