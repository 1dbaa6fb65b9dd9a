/*! Co-occurrence matrix

Counts weighted co-occurrences of the most frequent words of a cleaned corpus.

The vocabulary (as written by [crate::processing::vocabulary]) is truncated to its
`top_words` most frequent words. Each line of the corpus is then reduced to the
in-vocabulary words it contains, and a window of `window_size` words slides over them:
a pair of words at distance `d` (`1 <= d <= window_size`) adds `1/d` to their weight.

Pairs are unordered and stored once, with the most frequent word first.
The matrix is written as CSV (`word1,word2,weight`).
!*/
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;

use crate::error::Error;

/// Number of lines processed between progress checks.
pub const CHUNK_SIZE: usize = 10000;

const REPORT_EVERY: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct Row<'a> {
    word1: &'a str,
    word2: &'a str,
    weight: f32,
}

/// Keep ASCII alphanumeric characters, lowercased.
fn clean_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Load the `top_words` most frequent words of a vocabulary CSV.
///
/// Rows are `word,index,word_count,document_count`. Words are cleaned and kept only when
/// longer than 2 characters, and rows with an unreadable `word_count` are skipped.
/// When a cleaned word appears twice, its most frequent occurrence is kept.
pub fn load_vocabulary<R: Read>(reader: R, top_words: usize) -> Result<Vec<String>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut counts: Vec<(String, i64)> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() < 4 {
            continue;
        }
        let count = match record[2].trim().parse::<i64>() {
            Ok(count) => count,
            Err(_) => continue,
        };
        let word = clean_word(&record[0]);
        if word.len() > 2 {
            counts.push((word, count));
        }
    }

    // stable: equal counts keep their file order
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));

    let mut words: Vec<String> = Vec::with_capacity(top_words.min(counts.len()));
    let mut seen = HashSet::new();
    for (word, _) in counts {
        if words.len() >= top_words {
            break;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

#[derive(Debug)]
pub struct Cooccurrence {
    words: Vec<String>,
    index: HashMap<String, usize>,
    weights: Vec<f64>,
    matrix: HashMap<(usize, usize), f32>,
    lines: u64,
}

impl Cooccurrence {
    /// Create an empty matrix over `words`, ranked by decreasing frequency.
    pub fn new(words: Vec<String>, window_size: usize) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(idx, word)| (word.clone(), idx))
            .collect();
        let weights = (0..window_size).map(|d| 1.0 / (d + 1) as f64).collect();

        Self {
            words,
            index,
            weights,
            matrix: HashMap::new(),
            lines: 0,
        }
    }

    /// Indices of the in-vocabulary words of `line`, in order.
    fn indices(&self, line: &str) -> Vec<usize> {
        line.split_whitespace()
            .map(clean_word)
            .filter(|word| word.len() > 2)
            .filter_map(|word| self.index.get(&word).copied())
            .collect()
    }

    /// Account for the co-occurrences of a single line.
    pub fn add_line(&mut self, line: &str) {
        let indices = self.indices(line);
        let window_size = self.weights.len();

        for (i, &a) in indices.iter().enumerate() {
            let end = (i + window_size + 1).min(indices.len());
            for (j, &b) in indices.iter().enumerate().take(end).skip(i + 1) {
                let weight = self.weights[j - i - 1];
                let key = if a <= b { (a, b) } else { (b, a) };
                *self.matrix.entry(key).or_insert(0.0) += weight as f32;
            }
        }
        self.lines += 1;
    }

    fn add_chunk(&mut self, chunk: &[String]) {
        for line in chunk {
            self.add_line(line);
        }
    }

    /// Process a whole corpus, [CHUNK_SIZE] lines at a time.
    pub fn process<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        let mut chunk = Vec::with_capacity(CHUNK_SIZE);
        let mut chunks = 0;
        let mut last_report = Instant::now();

        for line in BufReader::new(reader).lines() {
            chunk.push(line?);
            if chunk.len() < CHUNK_SIZE {
                continue;
            }

            self.add_chunk(&chunk);
            chunk.clear();
            chunks += 1;
            debug!("chunk {} done", chunks);

            if last_report.elapsed() >= REPORT_EVERY {
                info!(
                    "Processed {} lines, {} chunks, {} pairs in memory",
                    self.lines,
                    chunks,
                    self.len()
                );
                last_report = Instant::now();
            }
        }

        // last chunk
        if !chunk.is_empty() {
            self.add_chunk(&chunk);
            chunks += 1;
        }

        info!("Processed {} lines in {} chunks", self.lines, chunks);
        Ok(())
    }

    /// Weight of the (unordered) pair `a`, `b`.
    pub fn get(&self, a: &str, b: &str) -> Option<f32> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        let key = if a <= b { (a, b) } else { (b, a) };
        self.matrix.get(&key).copied()
    }

    /// Words of the matrix, most frequent first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of lines seen.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Number of non-zero pairs.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Write pairs ordered by word rank.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut pairs: Vec<(&(usize, usize), &f32)> = self.matrix.iter().collect();
        pairs.sort_unstable_by_key(|(key, _)| **key);

        let mut w = csv::Writer::from_writer(writer);
        for (&(a, b), &weight) in pairs {
            w.serialize(Row {
                word1: &self.words[a],
                word2: &self.words[b],
                weight,
            })?;
        }
        w.flush()?;
        Ok(())
    }
}

/// Build the co-occurrence matrix of the corpus at `src` and write it at `dst`.
pub fn build_matrix(
    vocabulary: &Path,
    src: &Path,
    dst: &Path,
    window_size: usize,
    top_words: usize,
) -> Result<Cooccurrence, Error> {
    for path in [vocabulary, src] {
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
    }

    info!(
        "Processing with window size: {}, top words: {}",
        window_size, top_words
    );
    let words = load_vocabulary(File::open(vocabulary)?, top_words)?;
    info!("Using top {} words from {:?}", words.len(), vocabulary);

    let mut matrix = Cooccurrence::new(words, window_size);
    matrix.process(File::open(src)?)?;

    info!("writing {} pairs to {:?}", matrix.len(), dst);
    matrix.write_csv(File::create(dst)?)?;
    Ok(matrix)
}
