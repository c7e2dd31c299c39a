//! Domain layer: the pattern object hierarchies
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod composite;
pub mod error;
pub mod factory;
pub mod strategy;

pub use composite::{Folder, ImageLeaf, Node, NodeKind, TextLeaf, INDENT_STEP};
pub use error::{DomainError, DomainResult};
pub use factory::{spawn_and_activate_army, Role, Theme, UnitFactory};
pub use strategy::{Context, FnContext, Operation, Strategy};
