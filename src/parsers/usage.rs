//! Usage scanning
//!
//! Pass 2 of the pipeline. Walks the function bodies captured during
//! extraction and collects candidate references to other entities, as
//! qualified `module/path.Symbol` strings. Candidates are resolved against
//! the whole-run type map by the graph builder; this pass only proposes.
//!
//! Two token shapes count as usage. A dotted token whose head matches one of
//! the file's import aliases proposes a symbol in the imported module. A bare
//! token found in the module's own declaration index proposes the local
//! entity that owns the symbol.

use crate::models::qualified;
use std::collections::BTreeMap;

/// Collect candidate references from one line of a function body.
///
/// `owner` is the entity the enclosing function is bound to; references an
/// entity makes to itself are not candidates.
pub fn candidates_in_line(
    line: &str,
    owner: &str,
    module_path: &str,
    imports: &BTreeMap<String, String>,
    type_index: &BTreeMap<String, String>,
) -> Vec<String> {
    let mut candidates = Vec::new();

    for token in tokens(line) {
        // a leading digit marks a number literal, a leading dot a float or
        // chained selector fragment
        let first = match token.chars().next() {
            Some(first) => first,
            None => continue,
        };
        if first.is_ascii_digit() || first == '.' {
            continue;
        }

        if let Some((head, rest)) = token.split_once('.') {
            // alias.Symbol: only the first selector segment names the symbol
            let symbol = rest.split('.').next().unwrap_or_default();
            if symbol.is_empty() {
                continue;
            }
            if let Some(import_path) = imports.get(head) {
                candidates.push(qualified(import_path, symbol));
            }
            continue;
        }

        if let Some(owning_entity) = type_index.get(token) {
            if owning_entity != owner {
                candidates.push(qualified(module_path, owning_entity));
            }
        }
    }

    candidates
}

/// Split a line into maximal runs of identifier characters and dots
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
        .filter(|t| !t.is_empty())
}
