//! sentence-level filtering
use super::Filter;

/// Simple length filter over token sequences.
/// Returns `false` if provided sequence has less than [SequenceLength::min_size] tokens.
///
/// [SequenceLength::min_size] is 1 by default.
pub struct SequenceLength {
    min_size: usize,
}

impl SequenceLength {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl<T> Filter<&[T]> for SequenceLength {
    fn detect(&self, sequence: &[T]) -> bool {
        sequence.len() >= self.min_size
    }
}

impl Default for SequenceLength {
    /// Default minimum length for sequences is a single token
    fn default() -> Self {
        SequenceLength { min_size: 1 }
    }
}
