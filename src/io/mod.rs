//! Line-oriented reading helpers.
mod reader;

pub use reader::{read_record, strip_terminator};
