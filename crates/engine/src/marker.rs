//! Embedded creation date marker.
//!
//! Exported notes carry their original creation time on a line of the form
//!
//! ```text
//! **Created:** 2023-10-23 19:54:15
//! ```
//!
//! This module finds that line and turns its value into a local timestamp.

use crate::error::FileError;
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeDelta, TimeZone};
use std::borrow::Cow;

/// Literal prefix of the marker line, trailing space included.
pub const CREATED_PREFIX: &str = "**Created:** ";

/// Fixed format of the marker value.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Characters that end a line. `\r\n` yields an extra empty line, which never
/// matches the prefix.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Return the trimmed value of the first marker line in `content`.
///
/// Later marker lines are ignored. Repeats of the prefix on the marker line
/// are removed as well. A marker with nothing after the prefix counts as no
/// marker.
#[must_use]
pub fn find_created(content: &str) -> Option<Cow<'_, str>> {
    let rest = content
        .split(LINE_BREAKS)
        .find_map(|line| line.strip_prefix(CREATED_PREFIX))?;

    let value = if rest.contains(CREATED_PREFIX) {
        Cow::Owned(rest.replace(CREATED_PREFIX, "").trim().to_string())
    } else {
        Cow::Borrowed(rest.trim())
    };
    (!value.is_empty()).then_some(value)
}

/// Parse a marker value against [`DATE_FORMAT`].
///
/// # Errors
/// Returns [`FileError::InvalidDate`] when the text does not match the format
/// or names an impossible calendar value.
pub fn parse_created(raw: &str) -> Result<NaiveDateTime, FileError> {
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT).map_err(|source| FileError::InvalidDate {
        raw: raw.to_string(),
        format: DATE_FORMAT,
        source,
    })
}

/// Interpret a naive wall-clock value in the local timezone.
///
/// # Errors
/// Returns [`FileError::NonexistentLocalTime`] if the value cannot be placed
/// even after moving it past a DST gap.
pub fn to_local(naive: NaiveDateTime) -> Result<DateTime<Local>, FileError> {
    resolve_in(&Local, naive)
        .ok_or_else(|| FileError::NonexistentLocalTime(naive.format(DATE_FORMAT).to_string()))
}

/// Place a wall-clock value in `tz`.
///
/// Ambiguous times (DST fold) resolve to the earlier instant. Times inside a
/// DST gap move forward by an hour, so `02:30` on a spring-forward night
/// becomes `03:30` in the new offset.
pub fn resolve_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => naive
            .checked_add_signed(TimeDelta::hours(1))
            .and_then(|shifted| tz.from_local_datetime(&shifted).earliest()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, Timelike};

    #[test]
    fn finds_marker_under_title() {
        let note = "# Groceries\n\n**Created:** 2023-10-23 19:54:15\n\n- milk\n";
        assert_eq!(find_created(note).as_deref(), Some("2023-10-23 19:54:15"));
    }

    #[test]
    fn first_marker_wins() {
        let note = "**Created:** 2021-01-01 00:00:00\n**Created:** 2022-02-02 02:02:02\n";
        assert_eq!(find_created(note).as_deref(), Some("2021-01-01 00:00:00"));
    }

    #[test]
    fn marker_must_start_the_line() {
        assert_eq!(find_created("see **Created:** 2021-01-01 00:00:00"), None);
        assert_eq!(find_created("**Created:**2021-01-01 00:00:00"), None);
    }

    #[test]
    fn extra_whitespace_is_trimmed() {
        let note = "**Created:**    2023-10-23 19:54:15   \r\n";
        assert_eq!(find_created(note).as_deref(), Some("2023-10-23 19:54:15"));
    }

    #[test]
    fn empty_marker_counts_as_missing() {
        assert_eq!(find_created("**Created:**   \nbody"), None);
    }

    #[test]
    fn parses_fixed_format() {
        let dt = parse_created("2023-10-23 19:54:15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2023, 10, 23));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (19, 54, 15));
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in [
            "not-a-date",
            "2023-10-23",
            "2023-10-23T19:54:15",
            "2023-13-01 00:00:00",
            "2023-02-30 00:00:00",
            "2023-10-23 19:54:15.123",
            "2023-10-23 19:54:15 +0200",
        ] {
            let err = parse_created(raw).unwrap_err();
            assert!(matches!(err, FileError::InvalidDate { .. }), "{raw}");
        }
    }

    #[test]
    fn local_conversion_keeps_wall_clock() {
        let naive = parse_created("2023-10-23 12:00:00").unwrap();
        let local = to_local(naive).unwrap();
        assert_eq!(local.naive_local(), naive);
    }

    #[test]
    fn classic_mac_line_endings() {
        let note = "# Groceries\r\r**Created:** 2023-10-23 19:54:15\r\r- milk\r";
        assert_eq!(find_created(note).as_deref(), Some("2023-10-23 19:54:15"));
    }

    #[test]
    fn unicode_line_breaks_split_lines() {
        for sep in ['\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}'] {
            let note = format!("# Title{sep}**Created:** 2020-01-02 03:04:05{sep}body");
            assert_eq!(
                find_created(&note).as_deref(),
                Some("2020-01-02 03:04:05"),
                "{sep:?}"
            );
        }
    }

    #[test]
    fn repeated_prefix_on_marker_line_is_removed() {
        let note = "**Created:** **Created:** 2023-10-23 19:54:15\n";
        assert_eq!(find_created(note).as_deref(), Some("2023-10-23 19:54:15"));
        assert_eq!(find_created("**Created:** **Created:** \n"), None);
    }

    /// US Eastern around the 2024-03-10 spring-forward and 2024-11-03 fall-back.
    #[derive(Debug, Clone, Copy)]
    struct Eastern2024;

    impl Eastern2024 {
        fn est() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn edt() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }

        fn at(date: &str) -> NaiveDateTime {
            parse_created(date).unwrap()
        }
    }

    impl TimeZone for Eastern2024 {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap = Self::at("2024-03-10 02:00:00");
            let fold = Self::at("2024-11-03 01:00:00");
            if *local < gap {
                LocalResult::Single(Self::est())
            } else if *local < gap + TimeDelta::hours(1) {
                LocalResult::None
            } else if *local < fold {
                LocalResult::Single(Self::edt())
            } else if *local < fold + TimeDelta::hours(1) {
                LocalResult::Ambiguous(Self::edt(), Self::est())
            } else {
                LocalResult::Single(Self::est())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::at("2024-03-10 07:00:00") || *utc >= Self::at("2024-11-03 06:00:00") {
                Self::est()
            } else {
                Self::edt()
            }
        }
    }

    #[test]
    fn dst_gap_moves_forward_an_hour() {
        let dt = resolve_in(&Eastern2024, Eastern2024::at("2024-03-10 02:30:00")).unwrap();
        assert_eq!(dt.timestamp(), 1_710_055_800);
        assert_eq!(dt.naive_local(), Eastern2024::at("2024-03-10 03:30:00"));
    }

    #[test]
    fn dst_fold_takes_earlier_instant() {
        let dt = resolve_in(&Eastern2024, Eastern2024::at("2024-11-03 01:30:00")).unwrap();
        assert_eq!(dt.offset(), &Eastern2024::edt());
        assert_eq!(dt.timestamp(), 1_730_611_800);
    }

    #[test]
    fn plain_time_keeps_its_offset() {
        let dt = resolve_in(&Eastern2024, Eastern2024::at("2024-07-04 12:00:00")).unwrap();
        assert_eq!(dt.naive_local(), Eastern2024::at("2024-07-04 12:00:00"));
        assert_eq!(dt.offset(), &Eastern2024::edt());
    }
}
