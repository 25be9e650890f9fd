//! DependencyGraph — materializes the implicit course dependency graph.
//!
//! Dependencies between courses are never stated directly: course A depends
//! on course B when B grants a skill token that A requires. This module
//! resolves those transitive skill links into an explicit petgraph DiGraph
//! (provider → consumer) so the layer assigner has a concrete structure to
//! traverse.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::catalog::CatalogIndex;

/// Directed dependency graph over the participating courses.
///
/// Node weight is the course id; course records stay in the CatalogIndex.
/// Holds a `HashMap<String, NodeIndex>` for O(1) node lookup by id.
pub struct DependencyGraph {
    pub digraph: DiGraph<String, ()>,
    /// Maps course id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Derive the dependency graph from the catalog index.
    ///
    /// Nodes are added in catalog iteration order, so `NodeIndex` order is
    /// the participating order. For every required skill token of every
    /// participant, each participating provider other than the course itself
    /// contributes a provider→consumer edge; duplicate (provider, consumer)
    /// pairs collapse to a single edge.
    pub fn from_index(index: &CatalogIndex) -> Self {
        let mut digraph: DiGraph<String, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for id in index.ids() {
            let idx = digraph.add_node(id.clone());
            node_index.insert(id.clone(), idx);
        }

        for id in index.ids() {
            let Some(course) = index.course(id) else { continue };
            let consumer = node_index[id];
            for skill in &course.prerequisites {
                for provider_id in index.providers(skill) {
                    if provider_id == id {
                        continue;
                    }
                    let provider = node_index[provider_id];
                    if digraph.find_edge(provider, consumer).is_none() {
                        digraph.add_edge(provider, consumer, ());
                    }
                }
            }
        }

        Self {
            digraph,
            node_index,
        }
    }

    /// All course ids in participating (catalog) order.
    pub fn ids(&self) -> Vec<String> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].clone())
            .collect()
    }

    /// Sorted list of predecessor (dependency) ids for `id`.
    ///
    /// Returns an empty list if `id` is not in the graph.
    pub fn predecessors(&self, id: &str) -> Vec<String> {
        self.neighbors(id, petgraph::Direction::Incoming)
    }

    /// Sorted list of successor (dependent) ids for `id`.
    pub fn successors(&self, id: &str) -> Vec<String> {
        self.neighbors(id, petgraph::Direction::Outgoing)
    }

    fn neighbors(&self, id: &str, dir: petgraph::Direction) -> Vec<String> {
        match self.node_index.get(id) {
            None => vec![],
            Some(&idx) => {
                let mut result: Vec<String> = self
                    .digraph
                    .neighbors_directed(idx, dir)
                    .map(|n| self.digraph[n].clone())
                    .collect();
                result.sort();
                result
            }
        }
    }

    /// Number of incoming edges for `id`. Returns 0 if the node is absent.
    pub fn in_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count(),
        }
    }

    /// Number of outgoing edges for `id`. Returns 0 if the node is absent.
    pub fn out_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Outgoing)
                .count(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns `true` if the inferred graph contains no directed cycles.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
