//! Manifest parsing.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;

/// A single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    address: String,
    name: String,
}

impl SourceItem {
    /// Build an item from its address.
    ///
    /// The item name is the last path segment of the address, minus its last extension
    /// (`.../CC-MAIN-xxx.warc.wet.gz` -> `CC-MAIN-xxx.warc.wet`).
    pub fn new(address: String) -> Result<Self, Error> {
        let file_name = address.rsplit('/').next().unwrap_or_default();
        let name = match file_name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => file_name,
        };

        if name.is_empty() {
            return Err(Error::SourceName(address));
        }

        let name = name.to_string();
        Ok(Self { address, name })
    }

    /// Get a reference to the item address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get a reference to the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the final output, also used as a completion marker.
    pub fn final_path(&self, dst: &Path) -> PathBuf {
        dst.join(format!("{}.processed", self.name))
    }

    /// Location of the output while it is being written.
    pub fn part_path(&self, dst: &Path) -> PathBuf {
        dst.join(format!("{}.processed.part", self.name))
    }
}

/// Parse a manifest, keeping the first whitespace-delimited field of each line.
///
/// A line without any field is an error for the whole manifest.
pub fn parse_manifest<R: BufRead>(reader: R) -> Result<Vec<SourceItem>, Error> {
    let mut items = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let address = match line.split_whitespace().next() {
            Some(address) => address.to_string(),
            None => {
                return Err(Error::Manifest {
                    line: idx + 1,
                    content: line,
                })
            }
        };
        items.push(SourceItem::new(address)?);
    }

    debug!("got {} items from manifest", items.len());
    Ok(items)
}

/// Parse a manifest file.
pub fn from_path(path: &Path) -> Result<Vec<SourceItem>, Error> {
    let f = File::open(path)?;
    parse_manifest(BufReader::new(f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_name() {
        let item = SourceItem::new(
            "https://data.commoncrawl.org/crawl-data/CC-MAIN-2021-10/segments/1614178347293.1/wet/CC-MAIN-20210224165708-20210224195708-00000.warc.wet.gz".to_string(),
        )
        .unwrap();
        assert_eq!(
            item.name(),
            "CC-MAIN-20210224165708-20210224195708-00000.warc.wet"
        );
    }

    #[test]
    fn item_name_without_extension() {
        assert_eq!(SourceItem::new("a/b/shard".to_string()).unwrap().name(), "shard");
        assert_eq!(SourceItem::new("shard.gz".to_string()).unwrap().name(), "shard");
    }

    #[test]
    fn item_without_name() {
        assert!(matches!(
            SourceItem::new("https://example.com/".to_string()),
            Err(Error::SourceName(_))
        ));
        assert!(matches!(
            SourceItem::new("a/.gz".to_string()),
            Err(Error::SourceName(_))
        ));
    }

    #[test]
    fn item_paths() {
        let item = SourceItem::new("a/b/0.txt.gz".to_string()).unwrap();
        let dst = Path::new("out");
        assert_eq!(item.final_path(dst), PathBuf::from("out/0.txt.processed"));
        assert_eq!(item.part_path(dst), PathBuf::from("out/0.txt.processed.part"));
    }

    #[test]
    fn manifest_first_field() {
        let manifest = "a/0.txt.gz\textra fields\n  b/1.txt.gz\nc/2.txt.gz";
        let items = parse_manifest(manifest.as_bytes()).unwrap();
        let addresses: Vec<&str> = items.iter().map(SourceItem::address).collect();
        assert_eq!(addresses, vec!["a/0.txt.gz", "b/1.txt.gz", "c/2.txt.gz"]);
    }

    #[test]
    fn manifest_blank_line() {
        let manifest = "a/0.txt.gz\n   \nc/2.txt.gz\n";
        match parse_manifest(manifest.as_bytes()) {
            Err(Error::Manifest { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "   ");
            }
            other => panic!("expected a manifest error, got {:?}", other),
        }
    }
}
