//! Platform detection from marker files.

use std::fs;
use std::path::Path;

use super::Platform;

/// Marker files checked in order. The first match wins.
const MARKERS: &[(&str, Platform)] = &[
    ("package.json", Platform::Node),
    ("requirements.txt", Platform::Python),
    ("pyproject.toml", Platform::Python),
    ("go.mod", Platform::Go),
    ("pom.xml", Platform::Java),
    ("build.gradle", Platform::Java),
    ("build.gradle.kts", Platform::Java),
    ("Gemfile", Platform::Ruby),
];

/// Guess the platform of the workspace at `root`.
///
/// Returns `None` when nothing recognisable is present.
pub fn detect_platform(root: &Path) -> Option<Platform> {
    for (file, platform) in MARKERS {
        if root.join(file).exists() {
            tracing::debug!("Detected {} from {}", platform.label(), file);
            return Some(*platform);
        }
    }

    if has_extension(root, "csproj") || has_extension(root, "fsproj") {
        tracing::debug!("Detected .NET from project file");
        return Some(Platform::Dotnet);
    }

    None
}

fn has_extension(root: &Path, ext: &str) -> bool {
    let Ok(entries) = fs::read_dir(root) else {
        return false;
    };

    entries
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.path().extension().is_some_and(|e| e == ext))
}

/// Default service name for a workspace: its folder name, lowercased and
/// reduced to characters Compose accepts.
pub fn service_name_for(root: &Path) -> String {
    let raw = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_default();

    let name: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let name = name.trim_matches('-');

    if name.is_empty() {
        "app".to_string()
    } else {
        name.to_string()
    }
}
