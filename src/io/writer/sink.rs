//! Append-only text file shared between workers.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info};

use crate::error::Error;

use super::BatchWriter;

/// Append-only writer on a single text file.
///
/// The file is created (or truncated) on [TextSink::create] and then only appended to.
pub struct TextSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl TextSink {
    /// Create the destination file, truncating it if it exists.
    ///
    /// Missing parent directories are created.
    pub fn create(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("creating output directory {:?}", parent);
                std::fs::create_dir_all(parent)?;
            }
        }

        File::create(path)?;
        let file = OpenOptions::new().append(true).open(path)?;

        info!("Initialized output file at: {:?}", path);
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Get a reference to the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BatchWriter for TextSink {
    fn write_batch(&self, lines: &[String]) -> Result<(), Error> {
        if lines.is_empty() {
            return Ok(());
        }

        let mut file = self
            .file
            .lock()
            .map_err(|_| Error::Custom(format!("{:?}: output lock poisoned", self.path)))?;

        let mut w = BufWriter::new(&mut *file);
        for line in lines {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }
        w.flush()?;

        Ok(())
    }
}
