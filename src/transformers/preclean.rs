//! Preliminary cleaning of WET content, before sentence segmentation.
//!
//! For each line:
//! 1. WARC metadata lines (`WARC*`, `Content-Type:*`, `Content-Length:*`) and empty lines are dropped,
//! 1. Non-ASCII characters are removed,
//! 1. The line is split into tokens on ASCII whitespace,
//! 1. Tokens longer than the maximum token length are replaced by `<LONGER_THAN_{max}>`,
//! 1. Lines with too few tokens are dropped.
//!
//! Kept lines are written as their tokens, each one followed by a single space.
//!
//! ```text
//! WARC-Type: conversion      -> (dropped)
//! hello    world             -> "hello world "
//! ```
use std::io::{BufRead, Write};

use log::debug;
use serde::Serialize;

use crate::chars::is_boundary;
use crate::error::Error;
use crate::filtering::{Filter, SequenceLength};
use crate::io::{read_record, strip_terminator};

/// Line prefixes of WARC headers that leak into WET bodies.
const METADATA_PREFIXES: [&str; 3] = ["WARC", "Content-Type:", "Content-Length:"];

/// `true` if the line starts with a WARC header prefix (case sensitive).
pub fn is_metadata(line: &str) -> bool {
    METADATA_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Split a line into ASCII tokens.
///
/// Non-ASCII characters are silently removed and do not split tokens (`"ab\u{e9}cd"` -> `["abcd"]`).
/// Runs of whitespace never produce empty tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(is_boundary)
        .map(|chunk| chunk.chars().filter(char::is_ascii).collect::<String>())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Counters of a precleaning pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PrecleanStats {
    pub lines_read: usize,
    pub empty: usize,
    pub metadata: usize,
    pub too_short: usize,
    pub long_tokens: usize,
    pub kept: usize,
}

/// Stage preceding sentence segmentation.
pub struct Preclean {
    max_token_length: usize,
    sentinel: String,
    length_filter: SequenceLength,
}

impl Preclean {
    pub fn new(max_token_length: usize, min_sequence_length: usize) -> Self {
        Self {
            max_token_length,
            sentinel: format!("<LONGER_THAN_{}>", max_token_length),
            length_filter: SequenceLength::with_min_size(min_sequence_length),
        }
    }

    /// Replacement for tokens longer than [Preclean::max_token_length].
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    pub fn min_sequence_length(&self) -> usize {
        *self.length_filter.min_size()
    }

    /// Tokenize a line, replacing long tokens by the sentinel.
    ///
    /// Metadata detection and the sequence length are not checked here.
    pub fn tokens(&self, line: &str) -> Vec<String> {
        self.tokens_with_stats(line, &mut PrecleanStats::default())
    }

    fn tokens_with_stats(&self, line: &str, stats: &mut PrecleanStats) -> Vec<String> {
        tokenize(line)
            .into_iter()
            .map(|token| {
                if token.len() > self.max_token_length {
                    debug!("Length {}: {}", token.len(), token);
                    stats.long_tokens += 1;
                    self.sentinel.clone()
                } else {
                    token
                }
            })
            .collect()
    }

    /// Clean a single line (without its terminator).
    ///
    /// Returns the cleaned line (without terminator), or [None] if the line is discarded.
    pub fn clean_line(&self, line: &str, stats: &mut PrecleanStats) -> Option<String> {
        stats.lines_read += 1;

        if line.is_empty() {
            stats.empty += 1;
            return None;
        }

        if is_metadata(line) {
            stats.metadata += 1;
            return None;
        }

        let tokens = self.tokens_with_stats(line, stats);
        if !self.length_filter.detect(tokens.as_slice()) {
            debug!("Too short: {:?}", tokens);
            stats.too_short += 1;
            return None;
        }

        stats.kept += 1;
        let mut cleaned = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
        for token in tokens {
            cleaned.push_str(&token);
            cleaned.push(' ');
        }
        Some(cleaned)
    }

    /// Stream lines from `reader`, writing cleaned lines into `writer`.
    ///
    /// Lines end with `\n`, `\r\n` or a bare `\r`.
    ///
    /// Content is decoded lossily: replacement characters are non-ASCII and are removed anyway.
    pub fn clean<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<PrecleanStats, Error> {
        let mut stats = PrecleanStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if read_record(&mut reader, &mut buf)? == 0 {
                break;
            }

            let raw = String::from_utf8_lossy(&buf);
            let line = strip_terminator(&raw);

            if let Some(cleaned) = self.clean_line(line, &mut stats) {
                writer.write_all(cleaned.as_bytes())?;
                writer.write_all(b"\n")?;
            }
        }

        Ok(stats)
    }
}

impl Default for Preclean {
    /// 40 characters per token, at least one token per line.
    fn default() -> Self {
        Self::new(40, 1)
    }
}
