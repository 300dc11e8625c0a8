// src/progress.rs
/// Lightweight progress reporting used by the long-running pipeline.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a step with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a competition page was merged).
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end of a step.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
