use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::model::constants::{RATING_DECIMALS, TIMESTAMP_FORMAT};

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Cannot parse last update timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError
    },

    #[error("Team '{team_id}' has a rating that cannot be displayed: {value}")]
    Rating { team_id: String, value: f64 }
}

/// Formats an ISO-8601 timestamp as e.g. `29 October 2025, 20:22`.
///
/// Accepted forms, all in extended (dashed) date notation:
/// - RFC 3339, e.g. `2025-10-29T20:22:00Z` or `2025-10-29T20:22:00+02:00`
/// - basic offsets, e.g. `2025-10-29T20:22:00+0200`
/// - no offset, with or without seconds and fractions
/// - a bare date, shown as midnight
///
/// Offsets are accepted but the wall-clock time is shown as written; no
/// conversion to another zone takes place.
pub fn format_timestamp(raw: &str) -> Result<String, FormatError> {
    let trimmed = raw.trim();

    let naive = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => dt.naive_local(),
        Err(rfc_err) => parse_other(trimmed).ok_or(FormatError::Timestamp {
            value: raw.to_string(),
            source: rfc_err
        })?
    };

    Ok(naive.format(TIMESTAMP_FORMAT).to_string())
}

fn parse_other(raw: &str) -> Option<NaiveDateTime> {
    let with_offset = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.naive_local());

    with_offset
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Formats a rating to one decimal place.
///
/// Rounding works on the exact binary value of the float, so `1499.95`
/// (stored slightly above the midpoint) becomes `1500.0`. Exact midpoints,
/// which only occur at quarters, round away from zero. Negative zero is
/// shown as `0.0`.
pub fn format_rating(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    // -0.0 == 0.0, so this drops the sign
    let value = if value == 0.0 { 0.0 } else { value };

    let is_midpoint = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    let value = if is_midpoint { (value * 10.0).round() / 10.0 } else { value };

    Some(format!("{:.*}", RATING_DECIMALS, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_timestamp() {
        assert_eq!(format_timestamp("2025-10-29T20:22:00").unwrap(), "29 October 2025, 20:22");
    }

    #[test]
    fn test_single_digit_day() {
        assert_eq!(format_timestamp("2025-03-05T09:07:59").unwrap(), "5 March 2025, 09:07");
    }

    #[test]
    fn test_timestamp_with_fraction() {
        assert_eq!(
            format_timestamp("2025-10-29T20:22:00.123456").unwrap(),
            "29 October 2025, 20:22"
        );
    }

    #[test]
    fn test_timestamp_without_seconds() {
        assert_eq!(format_timestamp("2025-10-29T20:22").unwrap(), "29 October 2025, 20:22");
    }

    #[test]
    fn test_timestamp_keeps_wall_clock() {
        assert_eq!(
            format_timestamp("2025-10-29T20:22:00+02:00").unwrap(),
            "29 October 2025, 20:22"
        );
        assert_eq!(format_timestamp("2025-10-29T20:22:00Z").unwrap(), "29 October 2025, 20:22");
    }

    #[test]
    fn test_timestamp_with_basic_offset() {
        assert_eq!(
            format_timestamp("2025-10-29T20:22:00+0200").unwrap(),
            "29 October 2025, 20:22"
        );
        assert_eq!(format_timestamp("2025-10-29T20:22-0500").unwrap(), "29 October 2025, 20:22");
    }

    #[test]
    fn test_date_only_timestamp() {
        assert_eq!(format_timestamp("2025-10-29").unwrap(), "29 October 2025, 00:00");
    }

    #[test]
    fn test_malformed_timestamp() {
        let err = format_timestamp("yesterday").unwrap_err();

        assert!(matches!(err, FormatError::Timestamp { ref value, .. } if value == "yesterday"));
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert!(format_timestamp("2025-13-40T20:22:00").is_err());
    }

    #[test]
    fn test_whole_rating() {
        assert_eq!(format_rating(1500.0).unwrap(), "1500.0");
    }

    #[test]
    fn test_rating_just_above_midpoint() {
        assert_eq!(format_rating(1499.95).unwrap(), "1500.0");
    }

    #[test]
    fn test_rating_rounds_down() {
        assert_eq!(format_rating(1499.94).unwrap(), "1499.9");
        assert_eq!(format_rating(1712.44999).unwrap(), "1712.4");
    }

    #[test]
    fn test_exact_midpoints_round_away_from_zero() {
        assert_eq!(format_rating(0.25).unwrap(), "0.3");
        assert_eq!(format_rating(1400.25).unwrap(), "1400.3");
        assert_eq!(format_rating(1400.75).unwrap(), "1400.8");
        assert_eq!(format_rating(-0.25).unwrap(), "-0.3");
    }

    #[test]
    fn test_negative_zero_rating() {
        assert_eq!(format_rating(-0.0).unwrap(), "0.0");
        assert_eq!(format_rating(0.0).unwrap(), "0.0");
        assert_eq!(format_rating(-0.04).unwrap(), "-0.0");
    }

    #[test]
    fn test_non_finite_rating() {
        assert_eq!(format_rating(f64::NAN), None);
        assert_eq!(format_rating(f64::INFINITY), None);
    }
}
