//! Clock source for temporal rules.

use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};

/// Local wall-clock time of the tax authority.
///
/// Read once per validation run; every strategy in that run sees the same
/// instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// System time shifted to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// El Salvador does not observe daylight saving time.
    pub const DEFAULT_OFFSET_SECONDS: i32 = -6 * 3600;

    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build from an offset in seconds east of UTC; out-of-range values fall
    /// back to the default offset.
    pub fn from_offset_seconds(seconds: i32) -> Self {
        let offset = FixedOffset::east_opt(seconds).unwrap_or_else(default_offset);
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            offset: default_offset(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(SystemClock::DEFAULT_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
