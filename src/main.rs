//! # wetclean
//!
//! Cleans CommonCrawl WET files into deduplicated sentence files.
//!
//! ```sh
//! wetclean 0.1.0
//! CommonCrawl WET cleaning tool.
//!
//! USAGE:
//!     wetclean <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Download, clean and filter every file of a manifest
//!     preclean    Preclean a local text file
//!     purify      Purify a local sentence file
//! ```
//!
//! Rejected content is logged at the `debug` level (`RUST_LOG=debug`).
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use structopt::StructOpt;
use url::Url;
use wetclean::error::Error;
use wetclean::filtering::Purity;
use wetclean::pipelines::config::check_purity;
use wetclean::pipelines::{CleanPipeline, Pipeline};
use wetclean::processing::{Segment, SortUniq, StanfordSegmenter, UnicodeSegmenter};
use wetclean::sources::Fetcher;
use wetclean::transformers::Preclean;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Wetclean::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Wetclean::Pipeline(p) => {
            let config = p.config();
            let segmenter: Box<dyn Segment> = match p.segmenter {
                cli::SegmenterKind::Stanford => {
                    Box::new(StanfordSegmenter::new(p.corenlp_path.clone())?)
                }
                cli::SegmenterKind::Unicode => Box::new(UnicodeSegmenter),
            };
            let fetcher = Fetcher::with_base_url(Url::parse(&p.base_url)?);

            let pipeline = CleanPipeline::from_manifest(
                &p.urls,
                p.outdir.clone(),
                config,
                Box::new(fetcher),
                segmenter,
                Box::new(SortUniq),
            )?;
            let report = pipeline.run()?;

            // write eventual failures
            if !report.is_success() {
                let mut error_file = File::create(p.outdir.join("errors.txt"))?;
                for failure in &report.failed {
                    error!("Error during processing:\n {}: {}", failure.address, failure.reason);
                    writeln!(error_file, "{}\t{}", failure.address, failure.reason)?;
                }
            }

            if let Some(report_path) = p.report {
                let f = BufWriter::new(File::create(report_path)?);
                serde_json::to_writer_pretty(f, &report)?;
            }
        }

        cli::Wetclean::Preclean(p) => {
            let preclean = Preclean::new(p.tokens.max_token_length, p.tokens.min_sequence_length);
            let src = BufReader::new(File::open(&p.src)?);
            let mut dst = BufWriter::new(File::create(&p.dst)?);
            let stats = preclean.clean(src, &mut dst)?;
            dst.flush()?;
            info!("{:?}: {:?}", p.src, stats);
        }

        cli::Wetclean::Purify(p) => {
            check_purity(p.purity)?;
            let purity = Purity::with_threshold(p.purity);
            let src = BufReader::new(File::open(&p.src)?);
            let mut dst = BufWriter::new(File::create(&p.dst)?);
            let stats = purity.purify(src, &mut dst)?;
            dst.flush()?;
            info!("{:?}: {:?}", p.src, stats);
        }
    };
    Ok(())
}
