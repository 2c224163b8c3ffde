/*! Deduplication

Removes exact duplicate sentences.
!*/
use log::debug;

use crate::error::Error;

/// Turns a sequence of lines into a sorted sequence of distinct lines.
pub trait Dedup {
    fn dedup(&self, lines: Vec<String>) -> Result<Vec<String>, Error>;
}

/// `sort | uniq` equivalent.
///
/// Lines are ordered bytewise, which matches `sort` run with `LC_ALL=C`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SortUniq;

impl Dedup for SortUniq {
    fn dedup(&self, lines: Vec<String>) -> Result<Vec<String>, Error> {
        let nb_lines = lines.len();

        // full comparisons: digests could merge distinct lines on collision
        let mut unique = lines;
        unique.sort_unstable();
        unique.dedup();

        debug!("kept {}/{} unique lines", unique.len(), nb_lines);
        Ok(unique)
    }
}
