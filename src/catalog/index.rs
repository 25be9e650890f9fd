//! CatalogIndex — lookup structures scoped to the recommended set.
//!
//! Built once per invocation and passed by shared reference to the resolver
//! and layer assigner; no lookup state survives between computations.

use std::collections::{HashMap, HashSet};

use super::types::Course;

/// Owned index over the participating courses.
///
/// A course participates when its id appears in the recommended set *and*
/// the catalog; recommended ids absent from the catalog are silently
/// dropped. All orderings follow catalog iteration order, which makes every
/// downstream stage (layer traversal, row placement, edge emission)
/// deterministic and independent of how the recommended list was permuted.
pub struct CatalogIndex {
    /// course id → course record, participating courses only.
    courses: HashMap<String, Course>,
    /// Participating ids in catalog iteration order.
    order: Vec<String>,
    /// skill token → participating course ids that grant it, catalog order.
    skill_providers: HashMap<String, Vec<String>>,
}

impl CatalogIndex {
    /// Build the index from the full catalog and the recommended id set.
    pub fn build(catalog: &[Course], recommended: &[String]) -> Self {
        let wanted: HashSet<&str> = recommended.iter().map(String::as_str).collect();

        let mut courses: HashMap<String, Course> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        let mut skill_providers: HashMap<String, Vec<String>> = HashMap::new();

        for course in catalog {
            if !wanted.contains(course.course_id.as_str()) {
                continue;
            }
            // First catalog record wins on duplicate ids.
            if courses.contains_key(&course.course_id) {
                continue;
            }
            order.push(course.course_id.clone());
            for skill in &course.skills_acquired {
                skill_providers
                    .entry(skill.clone())
                    .or_default()
                    .push(course.course_id.clone());
            }
            courses.insert(course.course_id.clone(), course.clone());
        }

        Self {
            courses,
            order,
            skill_providers,
        }
    }

    /// Participating ids in catalog iteration order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.contains_key(course_id)
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Participating course ids granting `skill`, in catalog order.
    /// Empty when no participating course grants it.
    pub fn providers(&self, skill: &str) -> &[String] {
        self.skill_providers
            .get(skill)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
