//! JSON loading for catalog snapshots and optimizer plans.
//!
//! The catalog service serves course records either as a bare array or
//! wrapped in a `{"courses": [...]}` response; both shapes are accepted.
//! Loading is the only part of the crate that can fail — the pipeline
//! itself is total.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::types::{Course, OptimizationResult, StagedOptimization};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Accepts both the bare-array and wrapped catalog response shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Course>),
    Wrapped { courses: Vec<Course> },
}

/// Parse a catalog JSON string.
pub fn parse_catalog(src: &str) -> Result<Vec<Course>> {
    match serde_json::from_str::<CatalogFile>(src)? {
        CatalogFile::Bare(courses) => Ok(courses),
        CatalogFile::Wrapped { courses } => Ok(courses),
    }
}

/// Parse a flat-list optimizer plan JSON string.
pub fn parse_plan(src: &str) -> Result<OptimizationResult> {
    Ok(serde_json::from_str(src)?)
}

/// Parse a staged optimizer plan JSON string.
pub fn parse_staged_plan(src: &str) -> Result<StagedOptimization> {
    Ok(serde_json::from_str(src)?)
}

/// Load a catalog JSON file from disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Course>> {
    parse_catalog(&read(path)?)
}

/// Load a flat-list plan JSON file from disk.
pub fn load_plan(path: impl AsRef<Path>) -> Result<OptimizationResult> {
    parse_plan(&read(path)?)
}

/// Load a staged plan JSON file from disk.
pub fn load_staged_plan(path: impl AsRef<Path>) -> Result<StagedOptimization> {
    parse_staged_plan(&read(path)?)
}

fn read(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
