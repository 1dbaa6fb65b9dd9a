//! Per-file and per-run counters.
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::time::Duration;

/// Counters for a single input file.
///
/// Every read line ends up in exactly one of `accepted`, `rejected`, `no_text` or `malformed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines: usize,
    /// documents written to the output.
    pub accepted: usize,
    /// documents with a text that did not pass the normalizer.
    pub rejected: usize,
    /// documents without a string `text` field.
    pub no_text: usize,
    /// lines that are not valid JSON.
    pub malformed: usize,
}

impl Add for FileStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            lines: self.lines + rhs.lines,
            accepted: self.accepted + rhs.accepted,
            rejected: self.rejected + rhs.rejected,
            no_text: self.no_text + rhs.no_text,
            malformed: self.malformed + rhs.malformed,
        }
    }
}

impl Sum for FileStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Aggregated counters of a whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub files: usize,
    pub documents: FileStats,
    pub elapsed: Duration,
}

impl RunStats {
    pub fn accepted(&self) -> usize {
        self.documents.accepted
    }

    /// Accepted documents per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.accepted() as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed {} entries in {:.2} seconds",
            self.accepted(),
            self.elapsed.as_secs_f64()
        )?;
        writeln!(f, "Average speed: {:.2} entries/second", self.throughput())?;
        write!(
            f,
            "{} files, {} lines: {} rejected, {} without text, {} malformed",
            self.files,
            self.documents.lines,
            self.documents.rejected,
            self.documents.no_text,
            self.documents.malformed
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{FileStats, RunStats};

    #[test]
    fn test_sum() {
        let stats = vec![
            FileStats {
                lines: 10,
                accepted: 4,
                rejected: 3,
                no_text: 2,
                malformed: 1,
            },
            FileStats {
                lines: 5,
                accepted: 5,
                ..Default::default()
            },
        ];

        let total: FileStats = stats.into_iter().sum();
        assert_eq!(
            total,
            FileStats {
                lines: 15,
                accepted: 9,
                rejected: 3,
                no_text: 2,
                malformed: 1,
            }
        );
    }

    #[test]
    fn test_throughput() {
        let stats = RunStats {
            files: 1,
            documents: FileStats {
                lines: 100,
                accepted: 100,
                ..Default::default()
            },
            elapsed: Duration::from_secs(4),
        };
        assert_eq!(stats.throughput(), 25.0);

        let stats = RunStats {
            elapsed: Duration::ZERO,
            ..stats
        };
        assert_eq!(stats.throughput(), 0.0);
    }
}
