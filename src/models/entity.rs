//! Entity model: the "class" of the output diagram
//!
//! An entity is a named structural unit within a module: a record type, a
//! type alias, or the synthesized per-module global holder. Fields and
//! functions are partitioned by visibility; relationship candidates are
//! collected as unresolved qualified strings and resolved later by the
//! graph builder.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// What kind of declaration produced an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    /// A structural aggregate (`type Name struct { ... }`), or a placeholder
    /// created for a receiver type declared in another file
    Record,
    /// A non-struct type declaration; carries the right-hand side text so the
    /// serializer can special-case function-type aliases
    Alias(String),
    /// The synthesized per-module holder for loose functions and top-level
    /// vars/consts
    Global,
}

/// A named structural unit within a module
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
    /// Internal field name -> declared type text
    pub private_fields: BTreeMap<String, String>,
    /// Exported field name -> declared type text
    pub public_fields: BTreeMap<String, String>,
    /// Internal function signatures (receiver removed)
    pub private_functions: BTreeSet<String>,
    /// Exported function signatures (receiver removed)
    pub public_functions: BTreeSet<String>,
    /// Candidate relationship targets as qualified `module.Symbol` strings
    pub relationships: BTreeSet<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            private_fields: BTreeMap::new(),
            public_fields: BTreeMap::new(),
            private_functions: BTreeSet::new(),
            public_functions: BTreeSet::new(),
            relationships: BTreeSet::new(),
        }
    }

    /// Record a field under the visibility derived from its name
    pub fn add_field(&mut self, name: impl Into<String>, type_text: impl Into<String>) {
        let name = name.into();
        if is_exported(&name) {
            self.public_fields.insert(name, type_text.into());
        } else {
            self.private_fields.insert(name, type_text.into());
        }
    }

    /// Record a function signature under the visibility derived from its name
    pub fn add_function(&mut self, name: &str, signature: impl Into<String>) {
        if is_exported(name) {
            self.public_functions.insert(signature.into());
        } else {
            self.private_functions.insert(signature.into());
        }
    }

    /// Merge another partial declaration of the same entity into this one.
    ///
    /// Fields and functions aggregate as unions, so declaring a type's pieces
    /// across several files yields the same entity regardless of the order in
    /// which the files were processed. A declared kind always beats the
    /// Record placeholder coined by a method scan.
    pub fn merge(&mut self, other: Entity) {
        if self.kind == EntityKind::Record && other.kind != EntityKind::Record {
            self.kind = other.kind;
        }
        self.private_fields.extend(other.private_fields);
        self.public_fields.extend(other.public_fields);
        self.private_functions.extend(other.private_functions);
        self.public_functions.extend(other.public_functions);
        self.relationships.extend(other.relationships);
    }
}

/// Visibility classification: a symbol is exported when its first character
/// is uppercase. Applied identically to fields, functions, and globals.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_classification() {
        assert!(is_exported("Foo"));
        assert!(is_exported("F"));
        assert!(!is_exported("foo"));
        assert!(!is_exported("_foo"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_field_partitioning() {
        let mut e = Entity::new("Foo", EntityKind::Record);
        e.add_field("Name", "string");
        e.add_field("count", "int");

        assert_eq!(e.public_fields.get("Name").unwrap(), "string");
        assert_eq!(e.private_fields.get("count").unwrap(), "int");
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = Entity::new("Foo", EntityKind::Record);
        a.add_field("Name", "string");
        a.add_function("Render", "Render() string");

        let mut b = Entity::new("Foo", EntityKind::Record);
        b.add_field("count", "int");
        b.add_function("reset", "reset()");

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);

        assert_eq!(ab.public_fields, ba.public_fields);
        assert_eq!(ab.private_fields, ba.private_fields);
        assert_eq!(ab.public_functions, ba.public_functions);
        assert_eq!(ab.private_functions, ba.private_functions);
    }

    #[test]
    fn test_declared_kind_beats_placeholder() {
        let mut placeholder = Entity::new("Handler", EntityKind::Record);
        placeholder.add_function("Serve", "Serve() error");

        placeholder.merge(Entity::new("Handler", EntityKind::Alias("func(int) int".to_string())));
        assert_eq!(placeholder.kind, EntityKind::Alias("func(int) int".to_string()));

        // A later placeholder never downgrades a declared kind
        placeholder.merge(Entity::new("Handler", EntityKind::Record));
        assert_eq!(placeholder.kind, EntityKind::Alias("func(int) int".to_string()));
    }
}
