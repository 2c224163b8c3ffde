//! Sentence segmentation.
//!
//! Takes precleaned text and returns one sentence per line.
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use itertools::Itertools;
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

/// Splits a text blob into sentences.
pub trait Segment {
    fn segment(&self, text: &str) -> Result<Vec<String>, Error>;
}

/// Stanford CoreNLP `DocumentPreprocessor`, run through `java`.
///
/// The text is written into a temporary file that is passed to the preprocessor,
/// and sentences are read from its standard output.
pub struct StanfordSegmenter {
    corenlp_path: PathBuf,
    java: PathBuf,
}

impl StanfordSegmenter {
    pub const DEFAULT_PATH: &'static str = "third_party/stanford-corenlp-full-2014-08-27";
    const MAIN_CLASS: &'static str = "edu.stanford.nlp.process.DocumentPreprocessor";

    /// Create a new segmenter using the CoreNLP distribution located at `corenlp_path`.
    ///
    /// Fails if `corenlp_path` is not a directory.
    /// Does *not* check if java is installed.
    pub fn new(corenlp_path: PathBuf) -> Result<Self, Error> {
        if !corenlp_path.is_dir() {
            return Err(Error::Config(format!(
                "CoreNLP path {:?} is not a directory",
                corenlp_path
            )));
        }

        Ok(Self {
            corenlp_path,
            java: PathBuf::from("java"),
        })
    }

    /// Use a specific java executable.
    pub fn with_java(mut self, java: PathBuf) -> Self {
        self.java = java;
        self
    }

    /// Get a reference to the CoreNLP path.
    pub fn corenlp_path(&self) -> &Path {
        &self.corenlp_path
    }

    fn command(&self, input: &Path) -> Command {
        // java expands the classpath wildcard itself.
        let classpath = self.corenlp_path.join("*");
        let mut command = Command::new(&self.java);
        command
            .arg("-cp")
            .arg(classpath)
            .arg(Self::MAIN_CLASS)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Segment for StanfordSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, Error> {
        let mut input = tempfile::NamedTempFile::new()?;
        input.write_all(text.as_bytes())?;
        input.flush()?;

        let mut command = self.command(input.path());
        debug!("running {:?}", command);
        let output = command
            .output()
            .map_err(|e| Error::Segmenter(format!("could not run {:?}: {}", self.java, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Segmenter(format!(
                "{} exited with {}: {}",
                Self::MAIN_CLASS,
                output.status,
                stderr.lines().last().unwrap_or_default()
            )));
        }

        let sentences = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(String::from)
            .collect();
        Ok(sentences)
    }
}

/// In-process segmenter using UAX#29 sentence boundaries.
///
/// Each sentence has its whitespace collapsed to single spaces, and empty sentences are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segment for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, Error> {
        let sentences = text
            .split_sentence_bounds()
            .map(|sentence| sentence.split_whitespace().join(" "))
            .filter(|sentence| !sentence.is_empty())
            .collect();
        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_segmenter() {
        let text = "Hello there. How are you ? \nfine thanks \n";
        let sentences = UnicodeSegmenter.segment(text).unwrap();
        assert_eq!(sentences, vec!["Hello there.", "How are you ?", "fine thanks"]);
    }

    #[test]
    fn unicode_segmenter_empty() {
        assert!(UnicodeSegmenter.segment("").unwrap().is_empty());
        assert!(UnicodeSegmenter.segment(" \n \n").unwrap().is_empty());
    }

    #[test]
    fn stanford_missing_path() {
        let res = StanfordSegmenter::new(PathBuf::from("this/path/does/not/exist"));
        assert!(matches!(res, Err(Error::Config(_))));
    }

    #[test]
    fn stanford_command() {
        let dir = tempfile::tempdir().unwrap();
        let seg = StanfordSegmenter::new(dir.path().to_path_buf()).unwrap();
        let command = seg.command(Path::new("input.txt"));

        assert_eq!(command.get_program(), "java");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.len(), 4);
        assert_eq!(args[0], "-cp");
        assert_eq!(args[1], dir.path().join("*").as_os_str());
        assert_eq!(args[2], "edu.stanford.nlp.process.DocumentPreprocessor");
        assert_eq!(args[3], "input.txt");
    }

    /// Write an executable shell script standing in for `java`.
    #[cfg(unix)]
    fn fake_java(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn stanford_output_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        // both scripts are written before anything is run
        let echo = fake_java(
            dir.path(),
            "echo-java",
            "echo 'First sentence .'\necho 'Second sentence .'",
        );
        let failing = fake_java(
            dir.path(),
            "failing-java",
            "echo 'Exception in thread main' >&2\nexit 1",
        );

        let seg = StanfordSegmenter::new(dir.path().to_path_buf())
            .unwrap()
            .with_java(echo);
        assert_eq!(
            seg.segment("First sentence. Second sentence.").unwrap(),
            vec!["First sentence .", "Second sentence ."]
        );

        let seg = StanfordSegmenter::new(dir.path().to_path_buf())
            .unwrap()
            .with_java(failing);
        match seg.segment("foo bar") {
            Err(Error::Segmenter(msg)) => assert!(msg.contains("Exception in thread main")),
            other => panic!("expected a segmenter error, got {:?}", other),
        }
    }

    #[test]
    fn stanford_missing_java() {
        let dir = tempfile::tempdir().unwrap();
        let seg = StanfordSegmenter::new(dir.path().to_path_buf())
            .unwrap()
            .with_java(PathBuf::from("this-java-does-not-exist"));
        assert!(matches!(seg.segment("foo bar"), Err(Error::Segmenter(_))));
    }
}
