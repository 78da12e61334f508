//! Data models for the extracted source model and its configuration

pub mod config;
pub mod entity;
pub mod graph;
pub mod model;
pub mod module;

pub use config::{PartialSettings, Settings};
pub use entity::{is_exported, Entity, EntityKind};
pub use graph::{EdgeKind, RelationshipEdge};
pub use model::{display_name, qualified, split_qualified, Model};
pub use module::{capitalize, FunctionBody, Module, SourceFile};
