//! Canonical wire format for range bounds.
//!
//! Every bound crossing the field boundary is a UTC timestamp with second
//! precision: `YYYY-MM-DDTHH:mm:ssZ`. No other representation is accepted.

use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeZone, Utc};

use crate::error::{PickerError, PickerResult};

pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Byte length of every canonical timestamp.
pub const WIRE_LEN: usize = 20;

/// Formats `instant` in UTC, dropping any fractional seconds.
#[must_use]
pub fn serialize_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format(WIRE_FORMAT).to_string()
}

/// Formats an optional bound; an empty bound stays empty.
#[must_use]
pub fn serialize(instant: Option<DateTime<Utc>>) -> Option<String> {
    instant.map(|instant| serialize_instant(&instant))
}

/// Parses an optional bound produced by [`serialize`].
///
/// `None` and the empty string both yield `Ok(None)`. Any other input must be
/// byte-for-byte canonical; single-digit fields, offsets other than `Z` and
/// fractional seconds are rejected.
pub fn deserialize(input: Option<&str>) -> PickerResult<Option<DateTime<Utc>>> {
    match input {
        None | Some("") => Ok(None),
        Some(text) => parse_instant(text).map(Some),
    }
}

pub fn parse_instant(text: &str) -> PickerResult<DateTime<Utc>> {
    // Rules out signed and five-digit years, which chrono would happily format.
    if text.len() != WIRE_LEN {
        return Err(PickerError::MalformedTimestamp {
            input: text.to_owned(),
            source: None,
        });
    }
    let naive = NaiveDateTime::parse_from_str(text, WIRE_FORMAT).map_err(|e| {
        PickerError::MalformedTimestamp {
            input: text.to_owned(),
            source: Some(e),
        }
    })?;
    let instant = naive.and_utc();

    // chrono accepts unpadded numeric fields; the wire form does not.
    if serialize_instant(&instant) != text {
        return Err(PickerError::MalformedTimestamp {
            input: text.to_owned(),
            source: None,
        });
    }
    Ok(instant)
}

/// Drops sub-second precision so arithmetic results survive a wire round-trip.
#[must_use]
pub fn truncate_to_second(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(0)
}
