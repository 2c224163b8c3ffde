//! Source items: manifest parsing, retrieval and decompression.
//!
//! A manifest (such as CommonCrawl's `wet.paths`) lists one address per line.
//! Each address becomes a [SourceItem] that is fetched with a [Fetch] implementation
//! and decompressed with [decompress].
pub mod decompress;
pub mod fetch;
pub mod manifest;

pub use decompress::decompress;
pub use fetch::{Fetch, Fetcher, Location};
pub use manifest::{parse_manifest, SourceItem};
