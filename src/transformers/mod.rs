/*! Line transformers.

Turn raw WET lines into cleaned, whitespace-normalized token lines.

!*/

mod preclean;

pub use preclean::{is_metadata, tokenize, Preclean, PrecleanStats};
