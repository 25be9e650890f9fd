//! Catalog data structures: courses and optimizer plan shapes.
//!
//! These types represent the structured inputs to the pipeline: the course
//! records served by the catalog service and the two plan shapes produced by
//! successive versions of the optimization service (a flat recommended-id
//! list, and stage groups carrying explicit stage numbers).

use serde::{Deserialize, Serialize};

// ─── Course ──────────────────────────────────────────────────────────────────

/// A catalog unit. Immutable input; the pipeline never mutates it.
///
/// `prerequisites` and `skills_acquired` hold opaque skill-token ids; they
/// are the only fields the analysis reads. Everything else is display
/// payload carried through to the rendering layer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Numeric database id (opaque here).
    #[serde(default)]
    pub id: i64,
    /// Stable string identifier (e.g. "python-basics"). The graph key.
    pub course_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Skill tokens required before taking this course.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Skill tokens granted upon completion.
    #[serde(default)]
    pub skills_acquired: Vec<String>,
    #[serde(default)]
    pub estimated_hours: u32,
}

impl Course {
    pub fn new(
        course_id: impl Into<String>,
        prerequisites: Vec<String>,
        skills_acquired: Vec<String>,
    ) -> Self {
        let course_id = course_id.into();
        let name = course_id.clone();
        Self {
            id: 0,
            course_id,
            name,
            description: String::new(),
            prerequisites,
            skills_acquired,
            estimated_hours: 0,
        }
    }

    /// Create a bare course (no prerequisites, no granted skills).
    pub fn bare(course_id: impl Into<String>) -> Self {
        Self::new(course_id, Vec::new(), Vec::new())
    }
}

// ─── StageGroup ──────────────────────────────────────────────────────────────

/// One stage of a pre-grouped optimizer plan: an explicit stage number and
/// the course ids assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageGroup {
    pub stage_number: u32,
    pub course_ids: Vec<String>,
}

impl StageGroup {
    pub fn new(stage_number: u32, course_ids: Vec<String>) -> Self {
        Self {
            stage_number,
            course_ids,
        }
    }
}

// ─── Optimizer plan wrappers ─────────────────────────────────────────────────

/// Flat-list plan: the optimizer names the recommended courses and leaves
/// layering to the dependency analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    #[serde(default)]
    pub career_name: String,
    pub recommended_course_ids: Vec<String>,
    #[serde(default)]
    pub total_courses: usize,
}

/// Staged plan: the optimizer pre-groups courses into numbered stages and
/// layering is taken directly from the stage numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedOptimization {
    #[serde(default)]
    pub career_name: String,
    pub stages: Vec<StageGroup>,
    #[serde(default)]
    pub total_courses: usize,
}

impl StagedOptimization {
    /// All course ids across stages, flattened in stage order.
    pub fn course_ids(&self) -> Vec<String> {
        self.stages
            .iter()
            .flat_map(|s| s.course_ids.iter().cloned())
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
