// src/progress.rs
/// Lightweight progress reporting for long-running operations (scrape).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of (year, month) units.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One (year, month) unit parsed; `records` were kept from it.
    fn unit_done(&mut self, _year: i32, _month: &str, _records: usize) {}

    /// One (year, month) unit dropped entirely.
    fn unit_skipped(&mut self, _year: i32, _month: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
