//! Catalog input model, lookup index, and JSON loading.

pub mod index;
pub mod loader;
pub mod types;

pub use index::CatalogIndex;
pub use loader::CatalogError;
pub use types::{Course, OptimizationResult, StageGroup, StagedOptimization};
