//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dumpclean", about = "text dump cleaning tool.")]
/// Holds every command that is callable by the `dumpclean` command.
pub enum DumpClean {
    #[structopt(about = "Process a dump and clean its text")]
    Clean(Clean),
    #[structopt(about = "Build the vocabulary of a cleaned corpus")]
    Vocabulary(Vocabulary),
    #[structopt(about = "Build the co-occurrence matrix of a cleaned corpus")]
    Matrix(Matrix),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
///
/// ```sh
/// dumpclean-clean 0.1.0
/// Process a dump and clean its text
///
/// USAGE:
///     dumpclean clean [OPTIONS] --csv <csv> --output_dir <output-dir> --stopwords <stopwords>
///
/// OPTIONS:
///         --batch_size <batch-size>              Batch size for processing [default: 5000]
///         --csv <csv>                            Path to output CSV file
///         --min_word_length <min-word-length>    Minimum word length to keep [default: 2]
///         --min_words <min-words>                Minimum number of words to keep a document [default: 200]
///         --output_dir <output-dir>              Path to dump output directory
///         --pattern <pattern>                    Only process files whose name contains this [default: wiki_]
///         --stopwords <stopwords>                Path to stopwords file
///     -w, --workers <workers>                    Number of workers. Default is the number of CPUs minus one.
/// ```
pub struct Clean {
    #[structopt(
        parse(from_os_str),
        long = "output_dir",
        help = "Path to dump output directory"
    )]
    pub output_dir: PathBuf,
    #[structopt(parse(from_os_str), long = "stopwords", help = "Path to stopwords file")]
    pub stopwords: PathBuf,
    #[structopt(parse(from_os_str), long = "csv", help = "Path to output CSV file")]
    pub csv: PathBuf,
    #[structopt(
        long = "min_words",
        default_value = "200",
        help = "Minimum number of words to keep a document"
    )]
    pub min_words: usize,
    #[structopt(
        long = "min_word_length",
        default_value = "2",
        help = "Minimum word length to keep"
    )]
    pub min_word_length: usize,
    #[structopt(
        long = "batch_size",
        default_value = "5000",
        help = "Batch size for processing"
    )]
    pub batch_size: usize,
    #[structopt(
        long = "pattern",
        default_value = "wiki_",
        help = "Only process files whose name contains this"
    )]
    pub pattern: String,
    #[structopt(
        short = "w",
        long = "workers",
        help = "Number of workers. Default is the number of CPUs minus one."
    )]
    pub workers: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Vocabulary command and parameters.
pub struct Vocabulary {
    #[structopt(parse(from_os_str), long = "input", help = "cleaned corpus location")]
    pub input: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output",
        default_value = "vocabulary.csv",
        help = "vocabulary destination"
    )]
    pub output: PathBuf,
    #[structopt(
        long = "batch_size",
        default_value = "100000",
        help = "number of documents between progress reports"
    )]
    pub batch_size: usize,
}

#[derive(Debug, StructOpt)]
/// Matrix command and parameters.
pub struct Matrix {
    #[structopt(
        parse(from_os_str),
        long = "vocabulary",
        help = "vocabulary location, as produced by the vocabulary command"
    )]
    pub vocabulary: PathBuf,
    #[structopt(parse(from_os_str), long = "input", help = "cleaned corpus location")]
    pub input: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output",
        default_value = "matrix.csv",
        help = "matrix destination"
    )]
    pub output: PathBuf,
    #[structopt(
        long = "window_size",
        default_value = "10",
        help = "maximum distance between two co-occurring words"
    )]
    pub window_size: usize,
    #[structopt(
        long = "top_words",
        default_value = "50000",
        help = "number of most frequent words to keep"
    )]
    pub top_words: usize,
}
