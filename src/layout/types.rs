//! Layout output types: LayoutNode, SkillEdge, SkillTree.
//!
//! This is the wire model the rendering layer consumes. Callers must treat
//! a returned SkillTree as an immutable snapshot — marking a course
//! complete means rebuilding, not patching, since layers and coordinates
//! are not incrementally updatable.

use serde::Serialize;

use crate::catalog::Course;

// ─── LayoutNode ───────────────────────────────────────────────────────────────

/// A course placed at a deterministic 2-D coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    /// Depth in the dependency order; 0 = no prerequisites within the set.
    pub layer: usize,
    pub x: f64,
    pub y: f64,
    /// Full course record, carried through for the detail panel.
    pub course: Course,
    pub completed: bool,
}

// ─── SkillEdge ────────────────────────────────────────────────────────────────

/// A directed provider → consumer edge.
///
/// Identity is the (source, target) pair; `skills` accumulates every shared
/// token that justifies the edge, so nothing is lost when several tokens
/// connect the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEdge {
    /// "<source>-<target>".
    pub id: String,
    pub source: String,
    pub target: String,
    pub skills: Vec<String>,
}

impl SkillEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        skill: impl Into<String>,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        let id = format!("{source}-{target}");
        Self {
            id,
            source,
            target,
            skills: vec![skill.into()],
        }
    }
}

// ─── SkillTree ────────────────────────────────────────────────────────────────

/// The full output of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillTree {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<SkillEdge>,
}

impl SkillTree {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
