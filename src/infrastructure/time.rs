// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Offset of Korea Standard Time, which has no daylight saving.
const KST_OFFSET_HOURS: i64 = 9;

/// Wall clock. Calendar days follow KST because article and birth dates are
/// entered as Korean dates.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        kst_date(self.now())
    }
}

fn kst_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant + Duration::hours(KST_OFFSET_HOURS)).date_naive()
}
