/*! Filtering utilities

Filters operate either on token sequences (see [sentence::SequenceLength]) or on whole lines (see [purity::Purity]).

Filters implement [filter::Filter]: they hold no state, and two equal inputs always yield the same decision.
! */
mod filter;
pub mod purity;
pub mod sentence;

pub use filter::Filter;
pub use purity::{Purity, PurityStats};
pub use sentence::SequenceLength;
