//! Layer assignment — longest path from source over the dependency graph.
//!
//! Each course's layer is one more than the maximum layer of its
//! dependencies (0 with none), computed by a depth-first traversal with an
//! explicit frame stack and a three-state color array indexed by petgraph
//! `NodeIndex` — no recursion, so traversal depth is bounded by heap, not
//! call stack.
//!
//! Cycle policy: re-encountering a course that is still on the traversal
//! path counts as depth 0 for the current max-computation and emits a
//! non-fatal diagnostic; the course itself is finalized when its own frame
//! completes. Cyclic participants get a locally consistent rather than
//! globally unique layer, and the traversal terminates on any finite
//! graph.

use std::collections::HashMap;

use petgraph::Direction::Incoming;
use petgraph::graph::NodeIndex;
use tracing::warn;

use super::graph::DependencyGraph;

#[derive(Clone, Copy, PartialEq)]
enum Color {
    Unvisited,
    Visiting,
    Visited,
}

struct Frame {
    node: NodeIndex,
    /// Next predecessor to examine.
    next: usize,
    /// Maximum layer seen among examined predecessors; -1 with none.
    best: i64,
}

/// Result of layer assignment.
pub struct LayerAssignment {
    /// course id → layer. Total over the participating set.
    pub layers: HashMap<String, usize>,
    /// Course ids reported by cycle diagnostics, in detection order.
    /// Empty for acyclic graphs.
    pub cycle_courses: Vec<String>,
}

/// Assign a layer to every course in the graph.
///
/// Terminates on any finite graph, cycles included. Deterministic: nodes
/// are traversed in participating order and predecessor lists are fixed by
/// the graph build.
pub fn assign_layers(graph: &DependencyGraph) -> LayerAssignment {
    let n = graph.digraph.node_count();
    let mut color = vec![Color::Unvisited; n];
    let mut layer = vec![0usize; n];
    let mut cycle_courses: Vec<String> = Vec::new();

    // Predecessor arena, indexed by NodeIndex.
    let preds: Vec<Vec<NodeIndex>> = graph
        .digraph
        .node_indices()
        .map(|idx| graph.digraph.neighbors_directed(idx, Incoming).collect())
        .collect();

    for start in graph.digraph.node_indices() {
        if color[start.index()] != Color::Unvisited {
            continue;
        }
        color[start.index()] = Color::Visiting;
        let mut stack = vec![Frame {
            node: start,
            next: 0,
            best: -1,
        }];

        while !stack.is_empty() {
            let top = stack.last_mut().expect("stack is non-empty");
            let at = top.node;

            if top.next == preds[at.index()].len() {
                // All dependencies examined: finalize this course.
                let value = (top.best + 1) as usize;
                layer[at.index()] = value;
                color[at.index()] = Color::Visited;
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.best = parent.best.max(value as i64);
                }
                continue;
            }

            let dep = preds[at.index()][top.next];
            top.next += 1;
            match color[dep.index()] {
                Color::Visited => {
                    top.best = top.best.max(layer[dep.index()] as i64);
                }
                Color::Visiting => {
                    // Cycle: the on-path course counts as depth 0 here; its
                    // own layer is fixed when its frame pops.
                    let id = graph.digraph[dep].clone();
                    warn!("circular dependency detected for {id}");
                    cycle_courses.push(id);
                    top.best = top.best.max(0);
                }
                Color::Unvisited => {
                    color[dep.index()] = Color::Visiting;
                    stack.push(Frame {
                        node: dep,
                        next: 0,
                        best: -1,
                    });
                }
            }
        }
    }

    let layers = graph
        .digraph
        .node_indices()
        .map(|idx| (graph.digraph[idx].clone(), layer[idx.index()]))
        .collect();

    LayerAssignment {
        layers,
        cycle_courses,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
