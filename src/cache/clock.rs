//! Clock Module
//!
//! Time source used for entry timestamps and TTL checks.

use std::fmt::Debug;

use chrono::{DateTime, Utc};

// == Clock ==
/// Supplies the current UTC time to caches and services.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

// == System Clock ==
/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// == Manual Clock ==
#[cfg(test)]
pub use manual::ManualClock;
