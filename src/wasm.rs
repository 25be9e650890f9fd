//! WASM bindings for skilltree-layout.
//!
//! Exposes `buildSkillTree` and `buildStagedTree` to JavaScript via
//! wasm-bindgen. Inputs and output are JSON strings; the frontend parses
//! the returned SkillTree straight into its node/edge state.

use wasm_bindgen::prelude::*;

use crate::catalog::loader;
use crate::{build_skill_tree, build_staged_tree};

/// Build a skill tree from a catalog and a flat recommended-id list.
///
/// - `catalog_json`: course array, or the `{"courses": [...]}` API shape
/// - `recommended_json`: JSON array of course ids
/// - `completed_json`: JSON array of completed course ids
#[wasm_bindgen(js_name = "buildSkillTree")]
pub fn build_skill_tree_js(
    catalog_json: &str,
    recommended_json: &str,
    completed_json: &str,
) -> Result<String, JsError> {
    let catalog =
        loader::parse_catalog(catalog_json).map_err(|e| JsError::new(&e.to_string()))?;
    let recommended: Vec<String> =
        serde_json::from_str(recommended_json).map_err(|e| JsError::new(&e.to_string()))?;
    let completed: Vec<String> =
        serde_json::from_str(completed_json).map_err(|e| JsError::new(&e.to_string()))?;
    let tree = build_skill_tree(&catalog, &recommended, &completed);
    serde_json::to_string(&tree).map_err(|e| JsError::new(&e.to_string()))
}

/// Build a skill tree from a catalog and a staged optimizer plan.
///
/// - `stages_json`: JSON array of `{stage_number, course_ids}` groups
#[wasm_bindgen(js_name = "buildStagedTree")]
pub fn build_staged_tree_js(
    catalog_json: &str,
    stages_json: &str,
    completed_json: &str,
) -> Result<String, JsError> {
    let catalog =
        loader::parse_catalog(catalog_json).map_err(|e| JsError::new(&e.to_string()))?;
    let stages: Vec<crate::StageGroup> =
        serde_json::from_str(stages_json).map_err(|e| JsError::new(&e.to_string()))?;
    let completed: Vec<String> =
        serde_json::from_str(completed_json).map_err(|e| JsError::new(&e.to_string()))?;
    let tree = build_staged_tree(&catalog, &stages, &completed);
    serde_json::to_string(&tree).map_err(|e| JsError::new(&e.to_string()))
}
