/*! Content processing

Sentence segmentation and deduplication of precleaned text.

Both steps are abstracted behind narrow traits ([Segment], [Dedup]) so that the cleaning pipeline
can be run with external programs as well as with in-process or in-memory implementations.
!*/
pub mod dedup;
pub mod segment;

pub use dedup::{Dedup, SortUniq};
pub use segment::{Segment, StanfordSegmenter, UnicodeSegmenter};
