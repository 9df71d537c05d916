//! xsd:duration
//!
//! ISO 8601 durations such as `PT5M` or `P1DT12H`. Years count as 365 days
//! and months as 30 days, so calendar-relative durations are approximate.

use chrono::TimeDelta;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Written as days and time components; zero components are omitted.
pub fn serialize(value: &TimeDelta) -> JsonValue {
    let mut out = String::new();
    if *value < TimeDelta::zero() {
        out.push('-');
    }
    let abs = value.abs();
    let nanos = abs.subsec_nanos();
    let mut secs = abs.num_seconds();
    let days = secs / DAY;
    secs %= DAY;
    let hours = secs / HOUR;
    secs %= HOUR;
    let minutes = secs / MINUTE;
    secs %= MINUTE;

    out.push('P');
    if days > 0 {
        out.push_str(&format!("{}D", days));
    }
    let has_time = hours > 0 || minutes > 0 || secs > 0 || nanos > 0;
    if has_time || days == 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{}H", hours));
        }
        if minutes > 0 {
            out.push_str(&format!("{}M", minutes));
        }
        if nanos > 0 {
            let frac = format!("{:09}", nanos);
            out.push_str(&format!("{}.{}S", secs, frac.trim_end_matches('0')));
        } else if secs > 0 || !has_time {
            out.push_str(&format!("{}S", secs));
        }
    }
    JsonValue::String(out)
}

pub fn deserialize(raw: &JsonValue) -> Result<TimeDelta> {
    let parsed = match raw {
        JsonValue::String(s) => parse(s),
        _ => None,
    };
    parsed.ok_or_else(|| Error::type_mismatch("an ISO 8601 string for xsd:duration", raw))
}

pub fn less(lhs: &TimeDelta, rhs: &TimeDelta) -> bool {
    lhs < rhs
}

fn parse(s: &str) -> Option<TimeDelta> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let rest = rest.strip_prefix('P')?;
    let (date, time) = match rest.split_once('T') {
        Some((_, "")) => return None,
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let mut total = TimeDelta::zero();
    let mut seen = false;
    for (value, unit) in components(date)? {
        let unit_secs = match unit {
            'Y' => 365 * DAY,
            'M' => 30 * DAY,
            'W' => 7 * DAY,
            'D' => DAY,
            _ => return None,
        };
        total = total.checked_add(&scaled(value, unit_secs)?)?;
        seen = true;
    }
    if let Some(time) = time {
        for (value, unit) in components(time)? {
            let unit_secs = match unit {
                'H' => HOUR,
                'M' => MINUTE,
                'S' => 1,
                _ => return None,
            };
            total = total.checked_add(&scaled(value, unit_secs)?)?;
            seen = true;
        }
    }
    if !seen {
        return None;
    }
    Some(if negative { -total } else { total })
}

// "1Y2M" -> [(1, 'Y'), (2, 'M')]
fn components(part: &str) -> Option<Vec<(f64, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_alphabetic() {
            let value: f64 = part[start..i].parse().ok()?;
            out.push((value, c));
            start = i + c.len_utf8();
        }
    }
    (start == part.len()).then_some(out)
}

fn scaled(value: f64, unit_secs: i64) -> Option<TimeDelta> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let nanos = value * unit_secs as f64 * 1e9;
    if nanos >= i64::MAX as f64 {
        return None;
    }
    Some(TimeDelta::nanoseconds(nanos.round() as i64))
}
