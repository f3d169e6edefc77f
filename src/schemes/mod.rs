//! Funding scheme catalog and matcher

mod catalog;
mod data;
mod filter;

pub use catalog::Catalog;
pub use data::{Scheme, Stage};
pub use filter::{filter, sectors, FilterCriteria, SectorFilter, StageFilter};
