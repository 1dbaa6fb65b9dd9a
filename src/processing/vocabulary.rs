/*! Vocabulary building

Counts words of a cleaned corpus (one document per line):
- `word_count` is the total number of occurrences of a word,
- `document_count` is the number of documents containing the word at least once.

The vocabulary is written as CSV (`word,index,word_count,document_count`),
most frequent words first.
!*/
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStats {
    pub word_count: u64,
    pub document_count: u64,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    word: &'a str,
    index: usize,
    word_count: u64,
    document_count: u64,
}

#[derive(Debug, Default)]
pub struct Vocabulary {
    words: HashMap<String, WordStats>,
    documents: u64,
}

impl Vocabulary {
    /// Split a line into lowercase words, removing ASCII punctuation.
    pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
        line.split_ascii_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| !c.is_ascii_punctuation())
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|word| !word.is_empty())
    }

    /// Account for a single document.
    pub fn add_document(&mut self, line: &str) {
        let mut seen = HashSet::new();
        for word in Self::tokenize(line) {
            let stats = self.words.entry(word.clone()).or_default();
            stats.word_count += 1;
            if seen.insert(word) {
                stats.document_count += 1;
            }
        }
        self.documents += 1;
    }

    /// Build a vocabulary from a reader, logging progress every `batch_size` documents.
    pub fn from_reader<R: Read>(reader: R, batch_size: usize) -> Result<Self, Error> {
        let mut vocabulary = Self::default();
        for line in BufReader::new(reader).lines() {
            vocabulary.add_document(&line?);

            if batch_size > 0 && vocabulary.documents % batch_size as u64 == 0 {
                info!(
                    "Total processed: {} | Vocabulary size: {}",
                    vocabulary.documents,
                    vocabulary.len()
                );
            }
        }

        Ok(vocabulary)
    }

    pub fn get(&self, word: &str) -> Option<&WordStats> {
        self.words.get(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of documents seen.
    pub fn documents(&self) -> u64 {
        self.documents
    }

    /// Words sorted by decreasing `word_count`, ties broken alphabetically.
    pub fn sorted(&self) -> Vec<(&str, &WordStats)> {
        let mut words: Vec<(&str, &WordStats)> = self
            .words
            .iter()
            .map(|(word, stats)| (word.as_str(), stats))
            .collect();
        words.sort_by(|(wa, sa), (wb, sb)| sb.word_count.cmp(&sa.word_count).then(wa.cmp(wb)));
        words
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut w = csv::Writer::from_writer(writer);
        for (index, (word, stats)) in self.sorted().into_iter().enumerate() {
            w.serialize(Row {
                word,
                index,
                word_count: stats.word_count,
                document_count: stats.document_count,
            })?;
        }
        w.flush()?;
        Ok(())
    }
}

/// Build the vocabulary of the cleaned corpus at `src` and write it at `dst`.
pub fn build_vocabulary(src: &Path, dst: &Path, batch_size: usize) -> Result<Vocabulary, Error> {
    if !src.is_file() {
        return Err(Error::FileNotFound(src.to_path_buf()));
    }

    info!("building vocabulary of {:?}", src);
    let vocabulary = Vocabulary::from_reader(File::open(src)?, batch_size)?;

    debug!("writing vocabulary to {:?}", dst);
    vocabulary.write_csv(File::create(dst)?)?;

    info!(
        "{} documents, {} words written to {:?}",
        vocabulary.documents(),
        vocabulary.len(),
        dst
    );
    Ok(vocabulary)
}
