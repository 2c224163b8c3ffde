//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, and the cleaning pipeline
//! that threads each source item through precleaning, segmentation, deduplication and purification.
pub mod clean;
pub mod config;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod report;

pub use clean::CleanPipeline;
pub use config::CleanConfig;
pub use pipeline::Pipeline;
pub use report::{Failure, ItemReport, ItemStatus, RunReport};
