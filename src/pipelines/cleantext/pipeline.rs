//! Dump cleaning pipeline
//!
//! The dump is a two-level tree of files, each file holding one JSON document per line.
//!
//! # Processing
//! 1. Files are listed in a deterministic order (see [DumpTree]).
//! 1. Each file is given to one worker of a fixed-size pool.
//! 1. The worker reads the file line by line, and cleans the `text` field of each document (see [Normalizer]).
//! 1. Kept documents are buffered, and the buffer is appended to the shared output file once full.
//! 1. Per-file counters are summed once every file has been processed.
//!
//! Batches of different workers can land in any order in the output file,
//! but lines of a single batch are always contiguous.
use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::Stopwords;
use crate::io::load_stopwords;
use crate::io::reader::DocReader;
use crate::io::writer::{BatchWriter, TextSink};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::DumpTree;
use crate::transformers::{Normalizer, Transform};

use super::types::{FileStats, RunStats};

/// Tunables of a [CleanText] run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Documents need strictly more kept words than this.
    pub min_words: usize,
    /// Words need to be strictly longer than this.
    pub min_word_length: usize,
    /// Number of kept documents buffered before writing.
    pub batch_size: usize,
    /// Substring that input file names must contain.
    pub pattern: String,
    /// Number of workers. Defaults to the number of CPUs minus one.
    pub workers: Option<usize>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            min_words: 200,
            min_word_length: 2,
            batch_size: 5000,
            pattern: crate::sources::DEFAULT_PATTERN.to_string(),
            workers: None,
        }
    }
}

pub struct CleanText {
    src: PathBuf,
    dst: PathBuf,
    stopwords: PathBuf,
    options: CleanOptions,
}

impl CleanText {
    pub fn new(src: PathBuf, dst: PathBuf, stopwords: PathBuf, options: CleanOptions) -> Self {
        Self {
            src,
            dst,
            stopwords,
            options,
        }
    }

    /// Get the number of workers to use.
    ///
    /// Keeps a CPU free when not specified, and never goes below one.
    pub fn worker_count(requested: Option<usize>) -> usize {
        requested
            .unwrap_or_else(|| num_cpus::get().saturating_sub(1))
            .max(1)
    }

    /// Check that inputs exist before doing anything.
    fn check(&self) -> Result<(), Error> {
        if !self.src.is_dir() {
            return Err(Error::DirectoryNotFound(self.src.clone()));
        }

        if !self.stopwords.exists() {
            return Err(Error::FileNotFound(self.stopwords.clone()));
        }

        if self.options.batch_size == 0 {
            return Err(Error::Custom("batch size must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Process a single file.
    ///
    /// Kept documents are written through `sink` by batches of `batch_size`,
    /// the last (possibly partial) batch being written at the end of the file.
    ///
    /// Malformed lines are logged and skipped. Read errors abort the file.
    pub fn process_file<W: BatchWriter>(
        path: &Path,
        batch_size: usize,
        normalizer: &Normalizer,
        sink: &W,
    ) -> Result<FileStats, Error> {
        debug!("working on file: {:?}", path);
        let reader = DocReader::from_path(path)?;

        let mut stats = FileStats::default();
        let mut batch = Vec::new();

        for text in reader {
            stats.lines += 1;
            match text {
                Ok(Some(text)) => match normalizer.transform(&text) {
                    Some(cleaned) => {
                        stats.accepted += 1;
                        batch.push(cleaned);
                        if batch.len() >= batch_size {
                            sink.write_batch(&batch)?;
                            batch.clear();
                        }
                    }
                    None => stats.rejected += 1,
                },
                Ok(None) => stats.no_text += 1,
                Err(Error::Serde(e)) => {
                    error!("Error decoding JSON in {:?}: {}", path, e);
                    stats.malformed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        // write last batch
        if !batch.is_empty() {
            sink.write_batch(&batch)?;
        }

        debug!("{:?}: {:?}", path, stats);
        Ok(stats)
    }

    /// Run `job` on each file on a pool of `worker_count` threads, and sum up results.
    ///
    /// Every file is processed even if some fail. In that case, failures are logged
    /// and the first one (in `files` order) is returned.
    pub fn distribute<F>(files: &[PathBuf], worker_count: usize, job: F) -> Result<RunStats, Error>
    where
        F: Fn(&Path) -> Result<FileStats, Error> + Sync,
    {
        let start = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .build()?;

        let progress = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::with_template(
            "Processing files [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta})",
        )
        .map_err(|e| Error::Custom(e.to_string()))?;
        progress.set_style(style);

        let results: Vec<Result<FileStats, Error>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let result = job(path.as_path());
                    if let Err(e) = &result {
                        error!("Error with file {:?}: {}", path, e);
                    }
                    progress.inc(1);
                    result
                })
                .collect()
        });
        progress.finish();

        let elapsed = start.elapsed();

        let mut documents = FileStats::default();
        let mut first_error = None;
        for result in results {
            match result {
                Ok(stats) => documents = documents + stats,
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        Ok(RunStats {
            files: files.len(),
            documents,
            elapsed,
        })
    }
}

impl Pipeline<RunStats> for CleanText {
    fn run(&self) -> Result<RunStats, Error> {
        self.check()?;

        let stopwords = load_stopwords(&self.stopwords)?;
        let normalizer = Normalizer::new(
            Stopwords::from(stopwords),
            self.options.min_word_length,
            self.options.min_words,
        );

        let sink = TextSink::create(&self.dst)?;

        let files = DumpTree::new(&self.src, &self.options.pattern).scan()?;
        if files.is_empty() {
            warn!(
                "No files containing {:?} found in {:?}",
                self.options.pattern, self.src
            );
        }

        let worker_count = Self::worker_count(self.options.workers);
        info!(
            "processing {} files using {} workers",
            files.len(),
            worker_count
        );

        let batch_size = self.options.batch_size;
        let stats = Self::distribute(&files, worker_count, |path| {
            Self::process_file(path, batch_size, &normalizer, &sink)
        })?;

        info!(
            "{} documents kept out of {} lines",
            stats.accepted(),
            stats.documents.lines
        );
        Ok(stats)
    }
}
