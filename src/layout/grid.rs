//! Grid placement and edge synthesis.
//!
//! Placement groups participants by layer into horizontal rows, each row
//! centered around x = 0. Edge synthesis walks every (required token,
//! provider) pair and emits one directed edge per (provider, consumer)
//! pair, accumulating the justifying tokens on the surviving edge.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::catalog::CatalogIndex;
use crate::config::LayoutConfig;

use super::types::{LayoutNode, SkillEdge};

/// Place every participating course on the grid.
///
/// Rows appear in ascending layer order; within a row, courses keep
/// catalog iteration order. Row L sits at `y = L * layer_height`; the row's
/// nodes are centered so that x spans `[-total_width/2, total_width/2]`.
pub fn place_nodes(
    index: &CatalogIndex,
    layers: &HashMap<String, usize>,
    completed: &[String],
    config: &LayoutConfig,
) -> Vec<LayoutNode> {
    let done: HashSet<&str> = completed.iter().map(String::as_str).collect();

    let mut rows: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for id in index.ids() {
        let layer = layers.get(id).copied().unwrap_or(0);
        rows.entry(layer).or_default().push(id);
    }

    let mut nodes: Vec<LayoutNode> = Vec::with_capacity(index.len());
    for (&layer, ids) in &rows {
        let y = layer as f64 * config.layer_height;
        let count = ids.len() as f64;
        let total_width = count * config.node_width + (count - 1.0) * config.spacing;
        let start_x = -total_width / 2.0;

        for (i, id) in ids.iter().enumerate() {
            let Some(course) = index.course(id) else { continue };
            let x = start_x + i as f64 * (config.node_width + config.spacing);
            nodes.push(LayoutNode {
                id: (*id).to_string(),
                layer,
                x,
                y,
                course: course.clone(),
                completed: done.contains(id),
            });
        }
    }
    nodes
}

/// Emit one directed edge per satisfied (provider, consumer) pair.
///
/// Consumers are walked in catalog order, their required tokens in record
/// order, and providers in catalog order, so emission order is fully
/// deterministic. A pair justified by several tokens keeps the position of
/// its first emission and collects the remaining tokens into `skills`.
pub fn synthesize_edges(index: &CatalogIndex) -> Vec<SkillEdge> {
    let mut edges: Vec<SkillEdge> = Vec::new();
    let mut seen: HashMap<(String, String), usize> = HashMap::new();

    for consumer in index.ids() {
        let Some(course) = index.course(consumer) else { continue };
        for skill in &course.prerequisites {
            for provider in index.providers(skill) {
                if provider == consumer {
                    continue;
                }
                let key = (provider.clone(), consumer.clone());
                match seen.get(&key) {
                    Some(&at) => {
                        let edge = &mut edges[at];
                        if !edge.skills.contains(skill) {
                            edge.skills.push(skill.clone());
                        }
                    }
                    None => {
                        seen.insert(key, edges.len());
                        edges.push(SkillEdge::new(
                            provider.as_str(),
                            consumer.as_str(),
                            skill.as_str(),
                        ));
                    }
                }
            }
        }
    }
    edges
}

// ─── Tests ───────────────────────────────────────────────────────────────────
