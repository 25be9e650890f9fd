//! Dependency resolution, layer assignment, and grid layout phases.

pub mod graph;
pub mod grid;
pub mod grouping;
pub mod layers;
pub mod types;

pub use graph::DependencyGraph;
pub use grouping::GroupingStrategy;
pub use layers::{LayerAssignment, assign_layers};
pub use types::{LayoutNode, SkillEdge, SkillTree};
