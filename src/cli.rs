//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;
use wetclean::pipelines::CleanConfig;
use wetclean::processing::StanfordSegmenter;

#[derive(Debug, StructOpt)]
#[structopt(name = "wetclean", about = "CommonCrawl WET cleaning tool.")]
/// Holds every command that is callable by the `wetclean` command.
pub enum Wetclean {
    #[structopt(about = "Download, clean and filter every file of a manifest")]
    Pipeline(Pipeline),
    #[structopt(about = "Preclean a local text file")]
    Preclean(Preclean),
    #[structopt(about = "Purify a local sentence file")]
    Purify(Purify),
}

/// Sentence segmentation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmenterKind {
    Stanford,
    Unicode,
}

impl FromStr for SegmenterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stanford" => Ok(Self::Stanford),
            "unicode" => Ok(Self::Unicode),
            other => Err(format!("unknown segmenter: {}", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// ```sh
/// wetclean-pipeline 0.1.0
/// Download, clean and filter every file of a manifest
///
/// USAGE:
///     wetclean pipeline [OPTIONS] <urls> <outdir>
///
/// ARGS:
///     <urls>      file of URLs (wet.paths)
///     <outdir>    output directory
/// ```
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "file of URLs (wet.paths)")]
    pub urls: PathBuf,
    #[structopt(parse(from_os_str), help = "output directory")]
    pub outdir: PathBuf,
    #[structopt(flatten)]
    pub tokens: TokenArgs,
    #[structopt(
        long = "purity",
        help = "a line needs to have >= this portion alphabetic (excluding white spaces)",
        default_value = "0.5"
    )]
    pub purity: f64,
    #[structopt(
        long = "segmenter",
        help = "sentence segmenter",
        default_value = "stanford",
        possible_values = &["stanford", "unicode"]
    )]
    pub segmenter: SegmenterKind,
    #[structopt(
        parse(from_os_str),
        long = "corenlp-path",
        help = "Path to the Stanford CoreNLP distribution",
        default_value = StanfordSegmenter::DEFAULT_PATH
    )]
    pub corenlp_path: PathBuf,
    #[structopt(
        long = "base-url",
        help = "base url of relative manifest entries",
        default_value = wetclean::sources::fetch::BASE_URL
    )]
    pub base_url: String,
    #[structopt(
        parse(from_os_str),
        long = "report",
        help = "write a JSON run report at this location"
    )]
    pub report: Option<PathBuf>,
}

impl Pipeline {
    pub fn config(&self) -> CleanConfig {
        CleanConfig {
            max_token_length: self.tokens.max_token_length,
            min_sequence_length: self.tokens.min_sequence_length,
            purity: self.purity,
        }
    }
}

#[derive(Debug, StructOpt)]
/// Token-level parameters, shared by pipeline and preclean.
pub struct TokenArgs {
    #[structopt(
        long = "max_token_length",
        help = "replace tokens longer than this with a special symbol",
        default_value = "40"
    )]
    pub max_token_length: usize,
    #[structopt(
        long = "min_sequence_length",
        help = "sequences need to be at least this long",
        default_value = "1"
    )]
    pub min_sequence_length: usize,
}

#[derive(Debug, StructOpt)]
/// Preclean command and parameters.
pub struct Preclean {
    #[structopt(parse(from_os_str), help = "decompressed WET file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "precleaned file destination")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub tokens: TokenArgs,
}

#[derive(Debug, StructOpt)]
/// Purify command and parameters.
pub struct Purify {
    #[structopt(parse(from_os_str), help = "sentence file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "purified file destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "purity",
        help = "a line needs to have >= this portion alphabetic (excluding white spaces)",
        default_value = "0.5"
    )]
    pub purity: f64,
}
