use crate::error::ApronError;
use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Display and log format for every timestamp the tower emits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An instant in time. Elapsed time is measured between instants, so a
/// daylight-saving change never shows up in it; only rendering is local.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Whole minutes elapsed from `self` to `later`, floored.
    /// A system clock that was set back yields zero rather than a negative value.
    pub fn minutes_until(&self, later: Timestamp) -> u64 {
        let seconds = (later.0 - self.0).num_seconds();
        if seconds <= 0 { 0 } else { seconds as u64 / 60 }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.with_timezone(&Local).format(TIMESTAMP_FORMAT))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp(value.with_timezone(&Utc))
    }
}

/// Parses local wall-clock text. A time repeated by a fall-back change
/// resolves to its first occurrence; a time skipped by spring-forward is rejected.
impl FromStr for Timestamp {
    type Err = ApronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ApronError::InvalidTimestamp(s.to_string());
        let naive = NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|_| invalid())?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(Timestamp::from)
            .ok_or_else(invalid)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Add<TimeDelta> for Timestamp {
    type Output = Self;

    fn add(self, rhs: TimeDelta) -> Self::Output {
        Timestamp(self.0 + rhs)
    }
}

impl Sub<TimeDelta> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: TimeDelta) -> Self::Output {
        Timestamp(self.0 - rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_format() {
        assert_eq!("2025-06-14 09:05:03", ts("2025-06-14 09:05:03").to_string());
    }

    #[test]
    fn test_minutes_are_floored() {
        let start = ts("2025-06-14 09:00:00");
        assert_eq!(0, start.minutes_until(start));
        assert_eq!(0, start.minutes_until(start + TimeDelta::seconds(59)));
        assert_eq!(1, start.minutes_until(start + TimeDelta::seconds(60)));
        assert_eq!(45, start.minutes_until(start + TimeDelta::seconds(45 * 60 + 59)));
    }

    #[test]
    fn test_minutes_never_negative() {
        let start = ts("2025-06-14 09:00:00");
        assert_eq!(0, start.minutes_until(start - TimeDelta::minutes(10)));
    }

    #[test]
    fn test_minutes_across_fall_back() {
        // 01:50 EDT, then 01:55 EDT, then 01:05 EST fifteen real minutes later
        let edt = FixedOffset::west_opt(4 * 3600).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let start = Timestamp::from(edt.with_ymd_and_hms(2025, 11, 2, 1, 50, 0).unwrap());
        let early = Timestamp::from(edt.with_ymd_and_hms(2025, 11, 2, 1, 55, 0).unwrap());
        let late = Timestamp::from(est.with_ymd_and_hms(2025, 11, 2, 1, 5, 0).unwrap());

        assert_eq!(5, start.minutes_until(early));
        assert_eq!(15, start.minutes_until(late));
        assert!(start.minutes_until(late) >= start.minutes_until(early));
    }

    #[test]
    fn test_serde_uses_display_format() {
        let json = serde_json::to_string(&ts("2025-06-14 23:59:59")).unwrap();
        assert_eq!("\"2025-06-14 23:59:59\"", json);
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts("2025-06-14 23:59:59"), back);
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!("2025-06-14T09:00:00".parse::<Timestamp>().is_err());
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
    }
}
