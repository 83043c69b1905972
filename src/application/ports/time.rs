// src/application/ports/time.rs
use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day used for date range checks.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
