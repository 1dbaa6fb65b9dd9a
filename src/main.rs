//! # dumpclean
//!
//! Cleans a text dump (a tree of line-delimited JSON files) into a single text file,
//! one cleaned document per line.
//!
//! ## Getting started
//!
//! ```sh
//! dumpclean 0.1.0
//! text dump cleaning tool.
//!
//! USAGE:
//!     dumpclean <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     clean         Process a dump and clean its text
//!     help          Prints this message or the help of the given subcommand(s)
//!     matrix        Build the co-occurrence matrix of a cleaned corpus
//!     vocabulary    Build the vocabulary of a cleaned corpus
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=dumpclean=info`).
use structopt::StructOpt;

use dumpclean::error::Error;
use dumpclean::pipelines::cleantext::CleanOptions;
use dumpclean::pipelines::{CleanText, Pipeline};
use dumpclean::processing::{build_matrix, build_vocabulary};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::DumpClean::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::DumpClean::Clean(c) => {
            let options = CleanOptions {
                min_words: c.min_words,
                min_word_length: c.min_word_length,
                batch_size: c.batch_size,
                pattern: c.pattern,
                workers: c.workers,
            };
            let p = CleanText::new(c.output_dir, c.csv.clone(), c.stopwords, options);
            let stats = p.run()?;

            println!("{}", stats);
            println!("Text-only file created at: {:?}", c.csv);
        }

        cli::DumpClean::Vocabulary(v) => {
            let vocabulary = build_vocabulary(&v.input, &v.output, v.batch_size)?;
            println!(
                "Final vocabulary size: {} words ({} documents)",
                vocabulary.len(),
                vocabulary.documents()
            );
            println!("Vocabulary written to {:?}", v.output);
        }

        cli::DumpClean::Matrix(m) => {
            let matrix = build_matrix(
                &m.vocabulary,
                &m.input,
                &m.output,
                m.window_size,
                m.top_words,
            )?;
            println!(
                "Processed {} lines over {} words, {} pairs",
                matrix.lines(),
                matrix.words().len(),
                matrix.len()
            );
            println!("Matrix written to {:?}", m.output);
        }
    };
    Ok(())
}
