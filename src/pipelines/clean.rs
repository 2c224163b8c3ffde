//! Cleaning pipeline
//!
//! Turns CommonCrawl WET files into deduplicated sentence files.
//!
//! # Processing
//! Source items are processed one at a time, each one independently of the others:
//! 1. The item is fetched and decompressed.
//! 1. Its lines are precleaned (metadata, non-ASCII characters, long tokens and short lines are removed).
//! 1. The precleaned text is segmented into sentences.
//! 1. Sentences are sorted and deduplicated.
//! 1. Sentences that are not alphabetic enough are discarded, the others are written into `<dst>/<name>.processed`.
//!
//! The final file is created before processing begins and acts as a completion marker:
//! items whose final file exists are skipped. Output is written into `<name>.processed.part`,
//! then moved over the final file.
//!
//! A failing item is logged and skipped, its marker is removed so that a later run retries it.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::filtering::Purity;
use crate::pipelines::config::CleanConfig;
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::report::{Failure, ItemReport, ItemStatus, RunReport};
use crate::processing::{Dedup, Segment};
use crate::sources::{decompress, manifest, Fetch, SourceItem};
use crate::transformers::Preclean;

pub struct CleanPipeline {
    items: Vec<SourceItem>,
    dst: PathBuf,
    config: CleanConfig,
    fetcher: Box<dyn Fetch>,
    segmenter: Box<dyn Segment>,
    dedup: Box<dyn Dedup>,
}

impl CleanPipeline {
    /// Create a new pipeline over `items`, writing into `dst`.
    ///
    /// Fails if the configuration is invalid.
    pub fn new(
        items: Vec<SourceItem>,
        dst: PathBuf,
        config: CleanConfig,
        fetcher: Box<dyn Fetch>,
        segmenter: Box<dyn Segment>,
        dedup: Box<dyn Dedup>,
    ) -> Result<Self, Error> {
        config.validate()?;
        debug!("cleaning config: {:?}", config);

        Ok(Self {
            items,
            dst,
            config,
            fetcher,
            segmenter,
            dedup,
        })
    }

    /// Create a new pipeline over the items of a manifest file.
    ///
    /// Fails if any manifest line has no address.
    pub fn from_manifest(
        manifest: &Path,
        dst: PathBuf,
        config: CleanConfig,
        fetcher: Box<dyn Fetch>,
        segmenter: Box<dyn Segment>,
        dedup: Box<dyn Dedup>,
    ) -> Result<Self, Error> {
        let items = manifest::from_path(manifest)?;
        Self::new(items, dst, config, fetcher, segmenter, dedup)
    }

    /// Get a reference to the pipeline items.
    pub fn items(&self) -> &[SourceItem] {
        &self.items
    }

    /// Get a reference to the cleaning config.
    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Clean a decompressed document, writing kept sentences into `writer`.
    pub fn clean_document<W: Write>(&self, raw: &[u8], writer: &mut W) -> Result<ItemReport, Error> {
        let preclean = Preclean::new(
            self.config.max_token_length,
            self.config.min_sequence_length,
        );
        let mut precleaned = Vec::new();
        let preclean_stats = preclean.clean(raw, &mut precleaned)?;
        let precleaned = String::from_utf8(precleaned)?;

        let sentences = self.segmenter.segment(&precleaned)?;
        let nb_sentences = sentences.len();

        let unique = self.dedup.dedup(sentences)?;
        let nb_unique = unique.len();

        let purity = Purity::with_threshold(self.config.purity);
        let purity_stats = purity.purify_lines(&unique, writer)?;

        Ok(ItemReport {
            preclean: preclean_stats,
            sentences: nb_sentences,
            unique: nb_unique,
            purity: purity_stats,
        })
    }

    /// Process a single item, skipping it if its final file already exists.
    pub fn process_item(&self, item: &SourceItem) -> Result<ItemStatus, Error> {
        let final_path = item.final_path(&self.dst);

        // claim the item
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&final_path)
        {
            Ok(_) => (),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                info!("skipping {}: {:?} already exists", item.address(), final_path);
                return Ok(ItemStatus::Skipped);
            }
            Err(e) => return Err(e.into()),
        }

        let part_path = item.part_path(&self.dst);
        match self.process_claimed(item, &part_path, &final_path) {
            Ok(report) => Ok(ItemStatus::Processed(report)),
            Err(e) => {
                for path in [&part_path, &final_path] {
                    if let Err(e) = std::fs::remove_file(path) {
                        if e.kind() != ErrorKind::NotFound {
                            warn!("could not remove {:?}: {:?}", path, e);
                        }
                    }
                }
                Err(e)
            }
        }
    }

    fn process_claimed(
        &self,
        item: &SourceItem,
        part_path: &Path,
        final_path: &Path,
    ) -> Result<ItemReport, Error> {
        info!("working on {}", item.address());

        let raw = decompress(self.fetcher.fetch(item.address())?)?;

        let mut writer = BufWriter::new(File::create(part_path)?);
        let report = self.clean_document(&raw, &mut writer)?;
        writer.flush()?;
        drop(writer);

        std::fs::rename(part_path, final_path)?;

        info!(
            "{}: kept {}/{} lines, {}/{} unique sentences",
            item.name(),
            report.preclean.kept,
            report.preclean.lines_read,
            report.purity.accepted,
            report.unique
        );
        Ok(report)
    }
}

impl Pipeline<RunReport> for CleanPipeline {
    /// Sequentially process all items.
    ///
    /// Only fails if the destination can't be created:
    /// item failures are logged and reported in [RunReport::failed].
    fn run(&self) -> Result<RunReport, Error> {
        std::fs::create_dir_all(&self.dst)?;

        let mut report = RunReport::default();
        let nb_items = self.items.len();

        for (idx, item) in self.items.iter().enumerate() {
            debug!("item {}/{}", idx + 1, nb_items);
            match self.process_item(item) {
                Ok(ItemStatus::Processed(r)) => {
                    report.processed.push((item.address().to_string(), r));
                }
                Ok(ItemStatus::Skipped) => report.skipped.push(item.address().to_string()),
                Err(e) => {
                    error!("error on {}: {:?}", item.address(), e);
                    report.failed.push(Failure {
                        address: item.address().to_string(),
                        reason: format!("{:?}", e),
                    });
                }
            }
        }

        info!(
            "done: {} processed, {} skipped, {} failed",
            report.processed.len(),
            report.skipped.len(),
            report.failed.len()
        );
        Ok(report)
    }
}
