// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    skipped: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, skipped: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn unit_done(&mut self, year: i32, month: &str, records: usize) {
        self.done += 1;
        self.set_status(format!("{month}-{year}: {records} incident(s) ({}/{})", self.done, self.total));
    }
    fn unit_skipped(&mut self, year: i32, month: &str, reason: &str) {
        self.done += 1;
        self.skipped += 1;
        self.set_status(format!("{month}-{year} skipped: {reason} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Nothing selected"));
        } else if self.skipped > 0 {
            self.set_status(format!("Fetch complete ({}/{}, {} skipped)", self.done, self.total, self.skipped));
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}
