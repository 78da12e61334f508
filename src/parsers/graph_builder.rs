//! Relationship graph construction
//!
//! Turns the candidate sets collected by usage scanning into the final edge
//! list. Candidates that resolve in the whole-run type map become edges;
//! candidates naming unknown symbols in a known module are redirected to
//! that module's global holder when globals are included, and dropped
//! otherwise. Mutual pairs collapse into one undirected edge.
//!
//! The builder never fails: an unresolvable candidate is simply not an edge.

use crate::models::{
    qualified, split_qualified, EntityKind, Model, RelationshipEdge,
};
use std::collections::{BTreeMap, BTreeSet};

pub struct GraphBuilder<'a> {
    model: &'a Model,
    include_globals: bool,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(model: &'a Model, include_globals: bool) -> Self {
        Self {
            model,
            include_globals,
        }
    }

    /// Resolve every candidate and collapse mutual pairs into undirected
    /// edges. The result is sorted and duplicate-free.
    pub fn build(&self) -> Vec<RelationshipEdge> {
        let mut working = self.resolve();

        let mut edges = Vec::new();
        let sources: Vec<String> = working.keys().cloned().collect();
        for from in &sources {
            let targets = match working.get(from) {
                Some(targets) => targets.clone(),
                None => continue,
            };
            for to in targets {
                let mutual = to != *from
                    && working.get(&to).is_some_and(|back| back.contains(from));
                if mutual {
                    // consume the reciprocal so the pair yields one edge
                    if let Some(back) = working.get_mut(&to) {
                        back.remove(from);
                    }
                    edges.push(RelationshipEdge::undirected(from.clone(), to.clone()));
                } else {
                    edges.push(RelationshipEdge::directed(from.clone(), to.clone()));
                }
            }
        }

        edges.sort();
        edges.dedup();
        edges
    }

    /// Step 1: map each qualified entity to the set of entities its
    /// candidates actually resolve to
    fn resolve(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut resolved = BTreeMap::new();
        for (module_path, module) in &self.model.modules {
            for (name, entity) in &module.entities {
                if !self.include_globals && entity.kind == EntityKind::Global {
                    continue;
                }
                let from = qualified(module_path, name);
                let mut targets = BTreeSet::new();
                for candidate in &entity.relationships {
                    if let Some(target) = self.resolve_candidate(candidate) {
                        if target == from {
                            continue;
                        }
                        if !self.include_globals && self.is_global(&target) {
                            continue;
                        }
                        targets.insert(target);
                    }
                }
                if !targets.is_empty() {
                    resolved.insert(from, targets);
                }
            }
        }
        resolved
    }

    /// A candidate resolves to itself when the type map knows it, to the
    /// owning module's global holder when the module is known but the symbol
    /// is not (globals included only), and to nothing otherwise
    fn resolve_candidate(&self, candidate: &str) -> Option<String> {
        if self.model.type_map.contains_key(candidate) {
            return Some(candidate.to_string());
        }
        if !self.include_globals {
            return None;
        }
        let (module_path, _) = split_qualified(candidate)?;
        let module = self.model.modules.get(module_path)?;
        let holder = qualified(module_path, &module.global_entity_name());
        self.model.type_map.contains_key(&holder).then_some(holder)
    }

    fn is_global(&self, qualified_name: &str) -> bool {
        let Some((module_path, name)) = split_qualified(qualified_name) else {
            return false;
        };
        self.model
            .modules
            .get(module_path)
            .and_then(|module| module.entities.get(name))
            .is_some_and(|entity| entity.kind == EntityKind::Global)
    }
}
