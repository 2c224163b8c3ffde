/*! Purity filtering

Keeps lines where letters make up at least a given portion of the non-whitespace characters.

```text
hello world      -> 10/10 letters, kept
abc123!!!        -> 3/9 letters, discarded with a threshold of 0.5
```

Lines without any non-whitespace character can't meet any threshold and are always discarded.
!*/
use std::io::{BufRead, Write};

use log::debug;
use serde::Serialize;

use super::Filter;
use crate::chars::{is_alpha, is_space};
use crate::error::Error;
use crate::io::read_record;

/// Counters of a purification pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PurityStats {
    pub accepted: usize,
    pub rejected: usize,
}

/// Alphabetic purity filter.
///
/// [Purity::threshold] is 0.5 by default.
pub struct Purity {
    threshold: f64,
}

impl Purity {
    /// specify a threshold (expected to be in `[0, 1]`).
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Get a reference to the purity threshold.
    pub fn threshold(&self) -> &f64 {
        &self.threshold
    }

    /// Ratio of letters over non-whitespace characters.
    ///
    /// Returns [None] when there is no non-whitespace character.
    pub fn score(line: &str) -> Option<f64> {
        let (nonwhite, alpha) = line
            .chars()
            .filter(|c| !is_space(*c))
            .fold((0usize, 0usize), |(nonwhite, alpha), c| {
                (nonwhite + 1, alpha + usize::from(is_alpha(c)))
            });

        if nonwhite == 0 {
            None
        } else {
            Some(alpha as f64 / nonwhite as f64)
        }
    }

    /// Streams lines from `reader`, writing the kept ones verbatim (terminator included) into `writer`.
    ///
    /// Lines end with `\n`, `\r\n` or a bare `\r`.
    pub fn purify<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<PurityStats, Error> {
        let mut stats = PurityStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if read_record(&mut reader, &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if self.detect(&*line) {
                writer.write_all(&buf)?;
                stats.accepted += 1;
            } else {
                debug!("{}", line.trim());
                stats.rejected += 1;
            }
        }

        Ok(stats)
    }

    /// Same as [Purity::purify], over lines that have no terminator.
    /// A newline is appended to each kept line.
    pub fn purify_lines<I, S, W>(&self, lines: I, writer: &mut W) -> Result<PurityStats, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut stats = PurityStats::default();

        for line in lines {
            let line = line.as_ref();
            if self.detect(line) {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                stats.accepted += 1;
            } else {
                debug!("{}", line.trim());
                stats.rejected += 1;
            }
        }

        Ok(stats)
    }
}

impl Filter<&str> for Purity {
    fn detect(&self, line: &str) -> bool {
        match Self::score(line) {
            Some(ratio) => ratio >= self.threshold,
            None => false,
        }
    }
}

impl Default for Purity {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, Purity, PurityStats};

    #[test]
    fn default_threshold() {
        assert_eq!(Purity::default().threshold(), &0.5);
    }

    #[test]
    fn mixed_line_is_rejected() {
        let p = Purity::default();
        let score = Purity::score("abc123!!!").unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
        assert!(!p.detect("abc123!!!"));
    }

    #[test]
    fn alphabetic_line_is_kept() {
        let p = Purity::default();
        assert_eq!(Purity::score("hello world"), Some(1.0));
        assert!(p.detect("hello world"));
    }

    #[test]
    fn equality_is_kept() {
        let p = Purity::default();
        assert_eq!(Purity::score("ab 12"), Some(0.5));
        assert!(p.detect("ab 12"));
        assert!(!p.detect("ab 123"));
    }

    #[test]
    fn whitespace_only_is_rejected() {
        let p = Purity::with_threshold(0.0);
        assert_eq!(Purity::score(" \t \n"), None);
        assert!(!p.detect(" \t \n"));
        assert!(!p.detect(""));
    }

    #[test]
    fn zero_threshold_keeps_any_content() {
        let p = Purity::with_threshold(0.0);
        assert!(p.detect("1234 !!"));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(Purity::score("  a   b\t1 2  "), Some(0.5));
    }

    #[test]
    fn purify_keeps_lines_verbatim() {
        let input = "hello world\nabc123!!!\n   \nfoo, bar.\r\n";
        let mut out = Vec::new();
        let stats = Purity::default()
            .purify(input.as_bytes(), &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "hello world\nfoo, bar.\r\n");
        assert_eq!(
            stats,
            PurityStats {
                accepted: 2,
                rejected: 2
            }
        );
    }

    #[test]
    fn purify_splits_on_bare_carriage_return() {
        let input = "hello world\r1234 5678\rgood bye\r\n";
        let mut out = Vec::new();
        let stats = Purity::default()
            .purify(input.as_bytes(), &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "hello world\rgood bye\r\n");
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn purify_lines_appends_newlines() {
        let lines = vec!["a sentence .", "12 34 56", "another one"];
        let mut out = Vec::new();
        let stats = Purity::default().purify_lines(&lines, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a sentence .\nanother one\n");
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.rejected, 1);
    }
}
