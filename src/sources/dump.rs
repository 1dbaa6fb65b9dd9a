/*! Dump tree listing.

A dump is laid out in two levels:

```text
root/
├── AA/
│   ├── wiki_00
│   └── wiki_01
└── AB/
    └── wiki_00
```

Files are listed folder by folder, both levels being sorted by name,
so that two listings of the same tree are identical.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;

/// Default file name filter.
pub const DEFAULT_PATTERN: &str = "wiki_";

#[derive(Debug, Clone)]
pub struct DumpTree {
    root: PathBuf,
    pattern: String,
}

impl DumpTree {
    /// Create a new [DumpTree] rooted at `root`, keeping files whose name contains `pattern`.
    pub fn new(root: &Path, pattern: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            pattern: pattern.to_string(),
        }
    }

    /// list entries of `dir`, sorted by file name.
    fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let entries: Result<Vec<_>, std::io::Error> = std::fs::read_dir(dir)?.collect();
        let mut entries = entries?;
        entries.sort_by_key(|entry| entry.file_name());
        Ok(entries.into_iter().map(|entry| entry.path()).collect())
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().contains(self.pattern.as_str()))
            .unwrap_or(false)
    }

    /// Get the ordered list of files to process.
    ///
    /// Entries at the root that are not directories are ignored,
    /// as well as anything that is not a regular file inside folders.
    pub fn scan(&self) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();
        for folder in Self::sorted_entries(&self.root)? {
            if !folder.is_dir() {
                continue;
            }

            debug!("Processing folder: {:?}", folder);
            let folder_files = Self::sorted_entries(&folder)?
                .into_iter()
                .filter(|path| path.is_file() && self.matches(path));
            files.extend(folder_files);
        }

        info!("Found {} matching files to process", files.len());
        Ok(files)
    }
}
