//! Reporting configuration.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Minutes in a day; offsets must stay strictly inside this bound.
pub(crate) const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// Reporting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// UTC offset of the business day used for "orders today".
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl ReportingConfig {
    /// The reference time zone, or `None` if the offset is out of range.
    #[must_use]
    pub fn zone(&self) -> Option<FixedOffset> {
        if self.utc_offset_minutes.abs() >= MAX_OFFSET_MINUTES {
            return None;
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
    }
}
