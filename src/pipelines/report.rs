//! Run and item reports.
use serde::Serialize;

use crate::filtering::PurityStats;
use crate::transformers::PrecleanStats;

/// Statistics of a processed item.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub preclean: PrecleanStats,
    /// number of lines returned by the segmenter
    pub sentences: usize,
    /// number of lines remaining after deduplication
    pub unique: usize,
    pub purity: PurityStats,
}

/// Outcome of an item that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    Processed(ItemReport),
    /// Final output already present.
    Skipped,
}

/// Isolated per-item failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub address: String,
    pub reason: String,
}

/// Summary of a whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub processed: Vec<(String, ItemReport)>,
    pub skipped: Vec<String>,
    pub failed: Vec<Failure>,
}

impl RunReport {
    /// `true` if no item failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
