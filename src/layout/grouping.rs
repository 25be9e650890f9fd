//! GroupingStrategy — where layer numbers come from.
//!
//! The optimization service has shipped two plan contracts: a flat
//! recommended-id list (this crate infers layers from skill dependencies)
//! and pre-grouped stages carrying explicit stage numbers (layers are taken
//! directly from the stage numbers). Both feed the same grid and edge
//! stages, so the difference lives in one tagged variant.

use std::collections::HashMap;

use crate::catalog::{CatalogIndex, StageGroup};

use super::graph::DependencyGraph;
use super::layers::assign_layers;

#[derive(Debug, Clone)]
pub enum GroupingStrategy {
    /// Infer layers from the skill-token dependency graph.
    Dependency,
    /// Take layers directly from optimizer-provided stage numbers.
    Staged(Vec<StageGroup>),
}

impl GroupingStrategy {
    /// Compute the layer of every participating course.
    ///
    /// Always total over `index.ids()`: under `Staged`, a participant not
    /// named by any stage defaults to layer 0.
    pub fn layers(&self, index: &CatalogIndex) -> HashMap<String, usize> {
        match self {
            Self::Dependency => {
                let graph = DependencyGraph::from_index(index);
                assign_layers(&graph).layers
            }
            Self::Staged(stages) => {
                let mut by_stage: HashMap<&str, usize> = HashMap::new();
                for stage in stages {
                    for id in &stage.course_ids {
                        by_stage.insert(id.as_str(), stage.stage_number as usize);
                    }
                }
                index
                    .ids()
                    .iter()
                    .map(|id| {
                        let layer = by_stage.get(id.as_str()).copied().unwrap_or(0);
                        (id.clone(), layer)
                    })
                    .collect()
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
