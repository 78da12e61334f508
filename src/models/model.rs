//! Whole-run model aggregate
//!
//! The model maps module paths to modules and keeps a global type map used
//! to decide whether a candidate reference resolves to a known entity or an
//! unknown external symbol. It is rebuilt from source text on every run.

use crate::models::module::Module;
use serde::Serialize;
use std::collections::BTreeMap;

/// The aggregate of everything extracted from the source tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct Model {
    /// Module path -> module
    pub modules: BTreeMap<String, Module>,
    /// Qualified entity name (`module/path.Name`) -> short entity name
    pub type_map: BTreeMap<String, String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or create the module for a path
    pub fn module_mut(&mut self, path: &str) -> &mut Module {
        self.modules
            .entry(path.to_string())
            .or_insert_with(|| Module::new(path))
    }

    /// Rebuild the global type map from the current entity sets.
    ///
    /// Must run after every file's declarations have been extracted and
    /// before usage resolution: a forward reference in one file to a type
    /// declared in another must resolve regardless of processing order.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for module in self.modules.values() {
            for name in module.entities.keys() {
                self.type_map
                    .insert(qualified(&module.path, name), name.clone());
            }
        }
    }
}

/// Compose a qualified entity name from a module path and a short name
pub fn qualified(module_path: &str, name: &str) -> String {
    format!("{}.{}", module_path, name)
}

/// Split a qualified name back into (module path, symbol).
///
/// Splits at the last dot so nested module paths survive and same-named
/// symbols in different modules never collide.
pub fn split_qualified(qualified: &str) -> Option<(&str, &str)> {
    qualified.rsplit_once('.')
}

/// Render a qualified name the way the diagram spells it: path separators
/// become namespace dots
pub fn display_name(qualified: &str) -> String {
    qualified.replace('/', ".")
}
