//! # wetclean
//!
//! Cleaning pipeline turning CommonCrawl WET files into a deduplicated corpus of plain-text sentences.
//!
//! Each source item goes through four stages:
//! 1. [transformers::Preclean]: WARC metadata, non-ASCII characters, long tokens and short lines are removed,
//! 1. [processing::Segment]: text is split into sentences (Stanford CoreNLP or UAX#29),
//! 1. [processing::Dedup]: sentences are sorted and deduplicated,
//! 1. [filtering::Purity]: sentences that are not alphabetic enough are discarded.
//!
//! [pipelines::CleanPipeline] threads manifest items through these stages.
pub mod chars;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod sources;
pub mod transformers;
