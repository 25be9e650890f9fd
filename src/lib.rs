//! skilltree-layout — course dependency analysis and 2-D skill-tree layout.
//!
//! Public API: `build_skill_tree()`, `build_staged_tree()`,
//! `build_tree_with_config()`.
//!
//! The pipeline is a pure function of (catalog snapshot, recommended ids,
//! completed ids): index → dependency graph → layers → grid. Everything is
//! recomputed fresh on every call; no state survives between invocations,
//! so concurrent callers with different inputs are safe.

pub mod catalog;
pub mod config;
pub mod layout;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use catalog::{CatalogIndex, Course, OptimizationResult, StageGroup, StagedOptimization};
pub use config::LayoutConfig;
pub use layout::{GroupingStrategy, LayoutNode, SkillEdge, SkillTree};

use layout::grid;
use tracing::debug;

/// Build a skill tree from a flat recommended-id list, inferring layers
/// from skill-token dependencies. Uses the default grid configuration.
pub fn build_skill_tree(
    catalog: &[Course],
    recommended: &[String],
    completed: &[String],
) -> SkillTree {
    build_tree_with_config(
        catalog,
        recommended,
        &GroupingStrategy::Dependency,
        completed,
        &LayoutConfig::default(),
    )
}

/// Build a skill tree from a staged optimizer plan; layers come straight
/// from the stage numbers. Uses the default grid configuration.
pub fn build_staged_tree(
    catalog: &[Course],
    stages: &[StageGroup],
    completed: &[String],
) -> SkillTree {
    let recommended: Vec<String> = stages
        .iter()
        .flat_map(|s| s.course_ids.iter().cloned())
        .collect();
    build_tree_with_config(
        catalog,
        &recommended,
        &GroupingStrategy::Staged(stages.to_vec()),
        completed,
        &LayoutConfig::default(),
    )
}

/// Build a skill tree with full control over grouping and grid constants.
pub fn build_tree_with_config(
    catalog: &[Course],
    recommended: &[String],
    strategy: &GroupingStrategy,
    completed: &[String],
    config: &LayoutConfig,
) -> SkillTree {
    let index = CatalogIndex::build(catalog, recommended);
    let layers = strategy.layers(&index);
    let nodes = grid::place_nodes(&index, &layers, completed, config);
    let edges = grid::synthesize_edges(&index);
    debug!(
        participants = index.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "skill tree built"
    );
    SkillTree { nodes, edges }
}
