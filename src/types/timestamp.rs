use crate::types::errors::TimestampError;
use chrono::{DateTime, TimeZone, Timelike, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Network-agreed finality time of a transaction, kept at microsecond precision.
///
/// The mirror node reports it as `seconds.nanoseconds`; the nanosecond part is
/// rounded half-to-even to microseconds when parsed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct ConsensusTimestamp(DateTime<Utc>);

impl ConsensusTimestamp {
    pub fn epoch() -> Self {
        ConsensusTimestamp(DateTime::UNIX_EPOCH)
    }

    /// Renders the timestamp as ISO-8601 calendar time in `zone`, without an offset.
    ///
    /// The fractional part is only emitted when the microseconds are non-zero.
    pub fn to_readable<Tz: TimeZone>(&self, zone: &Tz) -> String {
        let local = self.0.with_timezone(zone).naive_local();

        if local.nanosecond() == 0 {
            local.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            local.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        }
    }
}

impl FromStr for ConsensusTimestamp {
    type Err = TimestampError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(TimestampError::InvalidFormat("Value is an empty string".to_string()));
        }

        let seconds = Decimal::from_str(value)?;
        let micros = seconds.round_dp(6)
            .checked_mul(Decimal::from(MICROS_PER_SECOND))
            .and_then(|micros| micros.to_i64())
            .ok_or_else(|| TimestampError::OutOfRange(value.to_string()))?;

        DateTime::from_timestamp_micros(micros)
            .map(ConsensusTimestamp)
            .ok_or_else(|| TimestampError::OutOfRange(value.to_string()))
    }
}
