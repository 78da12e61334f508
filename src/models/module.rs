//! Module and source-file models
//!
//! A module groups the source files that share a root-relative directory
//! path. Entities live on the module, not the file, so partial declarations
//! of the same type across files aggregate structurally instead of through a
//! late merge pass.

use crate::models::entity::{Entity, EntityKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A captured function body, kept for the usage-scanning pass
#[derive(Debug, Clone)]
pub struct FunctionBody {
    /// Name of the entity the function is bound to
    pub owner: String,
    /// The declaration line and every line up to the matching closing brace
    pub lines: Vec<String>,
}

/// One ingested source file
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    /// Path of the file on disk
    pub path: PathBuf,
    /// Root-relative name (the part after the source-root marker)
    pub name: String,
    /// Path of the owning module
    pub module_path: String,
    /// Import alias -> normalized root-relative module path
    pub imports: BTreeMap<String, String>,
    /// Comment-stripped source text
    #[serde(skip)]
    pub source: String,
    /// Function bodies captured during declaration extraction
    #[serde(skip)]
    pub bodies: Vec<FunctionBody>,
}

impl SourceFile {
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        module_path: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            module_path: module_path.into(),
            imports: BTreeMap::new(),
            source: source.into(),
            bodies: Vec::new(),
        }
    }
}

/// A namespace of entities backed by one directory of source files
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    /// Root-relative directory path, e.g. `parser` or `net/wire`
    pub path: String,
    pub files: BTreeMap<String, SourceFile>,
    /// Entity name -> entity; exactly one entity per (module, name) pair
    pub entities: BTreeMap<String, Entity>,
    /// Declared symbol name -> name of the entity that owns it
    pub type_index: BTreeMap<String, String>,
}

impl Module {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            files: BTreeMap::new(),
            entities: BTreeMap::new(),
            type_index: BTreeMap::new(),
        }
    }

    /// Name of this module's synthesized global holder,
    /// e.g. `parser` -> `ParserGlobal`
    pub fn global_entity_name(&self) -> String {
        let leaf = self.path.rsplit('/').next().unwrap_or(&self.path);
        format!("{}Global", capitalize(leaf))
    }

    /// Fold a partial entity into the module, creating it on first mention
    pub fn merge_entity(&mut self, entity: Entity) {
        match self.entities.get_mut(&entity.name) {
            Some(existing) => existing.merge(entity),
            None => {
                self.entities.insert(entity.name.clone(), entity);
            }
        }
    }

    /// Look up the global holder, creating it if this is the module's first
    /// loose declaration
    pub fn global_entity_mut(&mut self) -> &mut Entity {
        let name = self.global_entity_name();
        self.entities
            .entry(name.clone())
            .or_insert_with(|| Entity::new(name, EntityKind::Global))
    }
}

/// Uppercase the first character of a name, leaving the rest untouched
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
