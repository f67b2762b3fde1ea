//! Date encoding for point-in-time values.
//!
//! Wikibase time values carry a full `±YYYY-MM-DDT00:00:00Z` timestamp
//! regardless of granularity; the displayed granularity is a separate integer
//! precision, and the calendar model is an entity IRI. This module infers
//! precision from which date components are present, picks the calendar by
//! the 1582 cutover, and converts between the timestamp string and the
//! `(year, month, day)` triple.

use crate::model::TimeValue;
use crate::vocab::{entities, entity_iri};

/// Precision code for year granularity.
pub const PRECISION_YEAR: u8 = 9;
/// Precision code for month granularity.
pub const PRECISION_MONTH: u8 = 10;
/// Precision code for day granularity.
pub const PRECISION_DAY: u8 = 11;

/// First year rendered in the Gregorian calendar; earlier dates are Julian.
const GREGORIAN_CUTOVER_YEAR: i32 = 1582;

/// Returns the calendar model IRI for a year.
pub fn calendar_model(year: i32) -> String {
    if year >= GREGORIAN_CUTOVER_YEAR {
        entity_iri(&entities::gregorian_calendar())
    } else {
        entity_iri(&entities::julian_calendar())
    }
}

/// Infers the precision for a date, unless an explicit nonzero precision is
/// supplied.
///
/// Inference walks from finest to coarsest: a present, nonzero day gives day
/// precision; else a nonzero month gives month precision; else a nonzero year
/// gives year precision. `None` means the date is unproducible and the caller
/// must drop the statement rather than error.
pub fn infer_precision(
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    explicit: Option<u8>,
) -> Option<u8> {
    match explicit {
        Some(p) if p != 0 => return Some(p),
        _ => {}
    }
    if day.is_some_and(|d| d != 0) {
        Some(PRECISION_DAY)
    } else if month.is_some_and(|m| m != 0) {
        Some(PRECISION_MONTH)
    } else if year.is_some_and(|y| y != 0) {
        Some(PRECISION_YEAR)
    } else {
        None
    }
}

/// Renders the signed, zero-padded timestamp string.
///
/// Month and day are rendered as `00` when the precision is coarser than
/// their granularity.
pub fn format_timestamp(year: i32, month: u8, day: u8) -> String {
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:04}-{:02}-{:02}T00:00:00Z",
        sign,
        year.unsigned_abs(),
        month,
        day
    )
}

/// Parses a timestamp back into its `(year, month, day)` components.
///
/// Zero month or day components map back to `None`. Returns `None` for
/// strings that do not carry the signed `±YYYY-MM-DDT…` shape.
pub fn parse_timestamp(timestamp: &str) -> Option<(i32, Option<u8>, Option<u8>)> {
    let (sign, rest) = match timestamp.as_bytes().first()? {
        b'+' => (1i32, &timestamp[1..]),
        b'-' => (-1i32, &timestamp[1..]),
        _ => return None,
    };
    let date = &rest[..rest.find('T')?];
    let mut parts = date.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    Some((
        sign * year,
        (month != 0).then_some(month),
        (day != 0).then_some(day),
    ))
}

/// Encodes a date into a complete time value, or `None` when no usable date
/// can be produced.
///
/// A year is required to render the timestamp even when an explicit precision
/// is supplied.
pub fn encode_time(
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    precision: Option<u8>,
) -> Option<TimeValue> {
    let precision = infer_precision(year, month, day, precision)?;
    let year = year?;
    Some(TimeValue {
        time: format_timestamp(year, month.unwrap_or(0), day.unwrap_or(0)),
        timezone: 0,
        before: 0,
        after: 0,
        precision,
        calendarmodel: calendar_model(year),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREGORIAN: &str = "http://www.wikidata.org/entity/Q1985727";
    const JULIAN: &str = "http://www.wikidata.org/entity/Q1985786";

    #[test]
    fn test_year_only() {
        let time = encode_time(Some(1863), None, None, None).unwrap();
        assert_eq!(time.time, "+1863-00-00T00:00:00Z");
        assert_eq!(time.precision, PRECISION_YEAR);
        assert_eq!(time.calendarmodel, GREGORIAN);
        assert_eq!(time.timezone, 0);
        assert_eq!(time.before, 0);
        assert_eq!(time.after, 0);
    }

    #[test]
    fn test_year_and_month_julian() {
        let time = encode_time(Some(1500), Some(3), None, None).unwrap();
        assert_eq!(time.time, "+1500-03-00T00:00:00Z");
        assert_eq!(time.precision, PRECISION_MONTH);
        assert_eq!(time.calendarmodel, JULIAN);
    }

    #[test]
    fn test_full_date() {
        let time = encode_time(Some(2020), Some(9), Some(15), None).unwrap();
        assert_eq!(time.time, "+2020-09-15T00:00:00Z");
        assert_eq!(time.precision, PRECISION_DAY);
        assert_eq!(time.calendarmodel, GREGORIAN);
    }

    #[test]
    fn test_cutover_boundary() {
        assert_eq!(calendar_model(1582), GREGORIAN);
        assert_eq!(calendar_model(1581), JULIAN);
    }

    #[test]
    fn test_negative_year() {
        let time = encode_time(Some(-44), Some(3), Some(15), None).unwrap();
        assert_eq!(time.time, "-0044-03-15T00:00:00Z");
        assert_eq!(time.calendarmodel, JULIAN);
    }

    #[test]
    fn test_explicit_precision_wins() {
        let time = encode_time(Some(1850), Some(6), Some(12), Some(7)).unwrap();
        assert_eq!(time.precision, 7);
        assert_eq!(time.time, "+1850-06-12T00:00:00Z");
    }

    #[test]
    fn test_explicit_zero_precision_infers() {
        let time = encode_time(Some(1850), None, None, Some(0)).unwrap();
        assert_eq!(time.precision, PRECISION_YEAR);
    }

    #[test]
    fn test_unproducible_dates() {
        assert!(encode_time(None, None, None, None).is_none());
        assert!(encode_time(Some(0), Some(0), Some(0), None).is_none());
        // An explicit precision cannot save a date with no year.
        assert!(encode_time(None, None, None, Some(11)).is_none());
    }

    #[test]
    fn test_zero_components_skipped_in_inference() {
        let time = encode_time(Some(1863), Some(0), Some(0), None).unwrap();
        assert_eq!(time.precision, PRECISION_YEAR);
        assert_eq!(time.time, "+1863-00-00T00:00:00Z");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(
            parse_timestamp("+2020-09-15T00:00:00Z"),
            Some((2020, Some(9), Some(15)))
        );
        assert_eq!(
            parse_timestamp("+1863-00-00T00:00:00Z"),
            Some((1863, None, None))
        );
        assert_eq!(
            parse_timestamp("-0044-03-15T00:00:00Z"),
            Some((-44, Some(3), Some(15)))
        );
        assert_eq!(parse_timestamp("2020-09-15T00:00:00Z"), None);
        assert_eq!(parse_timestamp("+2020-09-15"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let cases = [
            (1863, None, None),
            (1500, Some(3), None),
            (2020, Some(9), Some(15)),
            (-44, Some(3), Some(15)),
        ];
        for (year, month, day) in cases {
            let rendered = format_timestamp(year, month.unwrap_or(0), day.unwrap_or(0));
            assert_eq!(parse_timestamp(&rendered), Some((year, month, day)));
        }
    }
}
