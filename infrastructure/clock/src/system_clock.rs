use business::domain::clock::Clock;
use chrono::{DateTime, FixedOffset, Offset, Utc};

const SECONDS_PER_HOUR: i32 = 3600;

/// Wall clock of the store, at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Offsets outside ±23h fall back to UTC.
    pub fn from_offset_hours(hours: i32) -> Self {
        let offset = hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(utc);
        Self::new(offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(utc())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}
