//! Import alias resolution
//!
//! Recognizes the single-line form (`import "path"`) and the lines of a
//! parenthesized import block. Every imported path registers an alias --
//! either an explicit rename or the path's last segment -- mapped to the
//! normalized root-relative path.

use crate::error::{GopumlError, Result};

/// Strip quotes and relative-path prefixes from an import path
pub fn normalize_import_path(raw: &str) -> String {
    let mut path = raw.trim().trim_matches('"');
    loop {
        if let Some(rest) = path.strip_prefix("../") {
            path = rest;
        } else if let Some(rest) = path.strip_prefix("./") {
            path = rest;
        } else {
            break;
        }
    }
    path.to_string()
}

/// The alias an import registers under: the path's last segment
pub fn default_alias(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// Parse the payload of a single-line `import "path"` declaration.
///
/// Returns `(alias, normalized path)`, or an error when the line carries no
/// quoted path.
pub fn parse_single_import(line: &str, file: &str, line_no: usize) -> Result<(String, String)> {
    let rest = line.trim().trim_start_matches("import").trim();
    parse_import_spec(rest, file, line_no)
}

/// Parse one line of a parenthesized import block.
///
/// Returns `None` for blank lines; fails with `MalformedImport` when a
/// renamed line does not split into exactly an alias and a quoted path.
pub fn parse_block_import_line(
    line: &str,
    file: &str,
    line_no: usize,
) -> Result<Option<(String, String)>> {
    let spec = line.trim();
    if spec.is_empty() {
        return Ok(None);
    }
    parse_import_spec(spec, file, line_no).map(Some)
}

/// Parse an import spec: `"path"` or `alias "path"`
fn parse_import_spec(spec: &str, file: &str, line_no: usize) -> Result<(String, String)> {
    let malformed = || GopumlError::malformed_import(file, line_no, spec);

    if let Some(rename) = spec.strip_suffix('"').and_then(|s| {
        s.rsplit_once('"')
            .map(|(head, quoted)| (head.trim(), quoted))
    }) {
        let (head, quoted) = rename;
        if quoted.is_empty() && spec != "\"\"" {
            return Err(malformed());
        }
        let path = normalize_import_path(quoted);
        if head.is_empty() {
            return Ok((default_alias(&path), path));
        }
        // a rename must be exactly one token before the quoted path
        if head.split_whitespace().count() != 1 || head.contains('"') {
            return Err(malformed());
        }
        return Ok((head.to_string(), path));
    }

    Err(malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_import() {
        let (alias, path) = parse_single_import("import \"../util\"", "f.go", 1).unwrap();
        assert_eq!(alias, "util");
        assert_eq!(path, "util");
    }

    #[test]
    fn test_block_line_plain() {
        let (alias, path) = parse_block_import_line("\t\"net/wire\"", "f.go", 3)
            .unwrap()
            .unwrap();
        assert_eq!(alias, "wire");
        assert_eq!(path, "net/wire");
    }

    #[test]
    fn test_block_line_renamed() {
        let (alias, path) = parse_block_import_line("\tw \"net/wire\"", "f.go", 3)
            .unwrap()
            .unwrap();
        assert_eq!(alias, "w");
        assert_eq!(path, "net/wire");
    }

    #[test]
    fn test_blank_block_line_skipped() {
        assert!(parse_block_import_line("   ", "f.go", 4).unwrap().is_none());
    }

    #[test]
    fn test_rename_without_quoted_path_fails() {
        let err = parse_block_import_line("\tw netwire", "f.go", 5).unwrap_err();
        match err {
            GopumlError::MalformedImport { file, line_no, .. } => {
                assert_eq!(file, "f.go");
                assert_eq!(line_no, 5);
            }
            other => panic!("expected MalformedImport, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_strips_relative_prefixes() {
        assert_eq!(normalize_import_path("\"../../a/b\""), "a/b");
        assert_eq!(normalize_import_path("./a"), "a");
    }
}
