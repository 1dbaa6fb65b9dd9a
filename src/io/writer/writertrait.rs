use crate::error::Error;

/// Destination of cleaned lines, shared by every worker of a run.
pub trait BatchWriter: Sync {
    /// Append `lines` in order, one per line.
    ///
    /// Lines of a single call must end up contiguous in the destination.
    fn write_batch(&self, lines: &[String]) -> Result<(), Error>;
}
