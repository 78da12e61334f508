//! Relationship edge model
//!
//! Edges are derived, not persisted: the graph builder recomputes them from
//! the entities' candidate sets on every run and returns them as a value,
//! never as shared state.

use crate::models::model::display_name;
use serde::Serialize;

/// Whether an edge kept its one-sided direction or collapsed from a mutual
/// pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EdgeKind {
    /// One-sided reference: `from --> to`
    Directed,
    /// Mutual references collapsed into one symmetric edge: `from --- to`
    Undirected,
}

/// A finalized edge between two qualified entities
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RelationshipEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

impl RelationshipEdge {
    pub fn directed(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Directed,
        }
    }

    /// An undirected edge has no orientation; endpoints are normalized so
    /// the same pair always produces the same edge value
    pub fn undirected(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        Self {
            from,
            to,
            kind: EdgeKind::Undirected,
        }
    }

    /// Render the edge in PlantUML relationship syntax
    pub fn render(&self) -> String {
        let arrow = match self.kind {
            EdgeKind::Directed => "-->",
            EdgeKind::Undirected => "---",
        };
        format!("{} {} {}", display_name(&self.from), arrow, display_name(&self.to))
    }
}
