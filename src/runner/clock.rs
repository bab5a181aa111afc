//! Sleeping, behind a seam.
//!
//! All waiting in tpudiepie is explicit sleeping on the calling thread.
//! Routing it through [`Clock`] lets tests observe every pause without
//! spending real time.

use std::cell::RefCell;
use std::time::Duration;

use crate::ui::Journal;

/// Source of blocking pauses.
pub trait Clock {
    /// Block the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Real time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested pauses and returns immediately.
#[derive(Debug, Default)]
pub struct MockClock {
    sleeps: RefCell<Vec<Duration>>,
    journal: Option<Journal>,
}

impl MockClock {
    /// Create a clock with its own record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock that also writes `sleep: <duration>` into `journal`.
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Default::default()
        }
    }

    /// All pauses requested so far.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    /// Sum of all pauses.
    pub fn total(&self) -> Duration {
        self.sleeps.borrow().iter().sum()
    }
}

impl Clock for MockClock {
    fn sleep(&self, duration: Duration) {
        if let Some(journal) = &self.journal {
            journal.record(format!("sleep: {:?}", duration));
        }
        self.sleeps.borrow_mut().push(duration);
    }
}
