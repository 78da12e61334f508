//! Source file discovery
//!
//! Walks the scan path, collects files with the configured extension, and
//! derives each file's module path from the directory components after the
//! last source-root marker. Exclusion patterns are glob matches against the
//! walked path.

use crate::error::{GopumlError, Result};
use crate::models::Settings;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A source file with its derived module identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path of the file on disk
    pub path: PathBuf,
    /// Module path relative to the source root, e.g. `net/wire`
    pub module_path: String,
    /// Root-relative file name, e.g. `net/wire/frame.go`
    pub name: String,
}

/// Walk the scan path and return every matching file, sorted by path
pub fn discover(settings: &Settings) -> Result<Vec<DiscoveredFile>> {
    if !settings.scan_path.is_dir() {
        return Err(GopumlError::InvalidPath {
            path: settings.scan_path.clone(),
        });
    }

    let excludes = settings
        .exclude_patterns
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&settings.scan_path)
        .follow_links(settings.follow_links)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| GopumlError::Io {
            source: err.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path
            .extension()
            .and_then(|e| e.to_str())
            .is_none_or(|e| e != settings.extension)
        {
            continue;
        }
        if excludes.iter().any(|pattern| pattern.matches_path(path)) {
            continue;
        }

        let (module_path, name) = split_at_marker(path, &settings.source_root)?;
        files.push(DiscoveredFile {
            path: path.to_path_buf(),
            module_path,
            name,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Derive `(module path, root-relative name)` from the components after the
/// LAST occurrence of the marker.
///
/// The last occurrence wins so a tree that is itself checked out under a
/// directory named like the marker still resolves against its own root. A
/// file sitting directly under the marker has no module directory and is
/// unresolvable.
pub fn split_at_marker(path: &Path, marker: &str) -> Result<(String, String)> {
    let components: Vec<&str> = path
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    let marker_pos = components
        .iter()
        .rposition(|c| *c == marker)
        .ok_or_else(|| GopumlError::file_unresolvable(path, marker))?;

    let relative = &components[marker_pos + 1..];
    if relative.len() < 2 {
        // no directory between the marker and the file
        return Err(GopumlError::file_unresolvable(path, marker));
    }

    let module_path = relative[..relative.len() - 1].join("/");
    let name = relative.join("/");
    Ok((module_path, name))
}
