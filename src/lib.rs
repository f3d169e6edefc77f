//! DPR Engine - Cash-flow projection and funding scheme matching for MSME project reports
//!
//! This library provides:
//! - Twelve-month revenue/expense/cash projections with DSCR
//! - A bilingual (English/Telugu) catalog of funding schemes with search and filters
//! - Scenario presets and parallel slider sweeps
//! - CSV/JSON export of chart panels
//! - Transport-independent routing for the HTTP interface

pub mod benchmarks;
pub mod error;
pub mod export;
pub mod language;
pub mod projection;
pub mod scenario;
pub mod schemes;
pub mod service;
pub mod voice;

// Re-export commonly used types
pub use error::DprError;
pub use language::{Language, Localized};
pub use projection::{project, ProjectionEngine, ProjectionInput, ProjectionPoint, ProjectionResult};
pub use scenario::{ScenarioPreset, ScenarioRunner};
pub use schemes::{filter, Catalog, FilterCriteria, Scheme, Stage};
