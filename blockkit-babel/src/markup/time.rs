//! `<time>` elements: timestamp parsing and fallback text.
//!
//! Slack renders `<!date^TS^FORMAT|FALLBACK>` in the reader's locale and time
//! zone. Clients that cannot do that show the fallback, which is computed here
//! in UTC by expanding the same tokens the format string uses.

use crate::error::RenderError;
use crate::ir::nodes::Attributes;
use crate::markup::escape::escape_attr;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// `|` would terminate the format part of a date token early.
pub const PIPE_SUBSTITUTE: char = '\u{01c0}';

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("token pattern"));

/// Parse a `datetime` attribute into a UTC timestamp.
///
/// Numeric values are seconds since the epoch; anything else must be an
/// RFC 3339 timestamp or a plain date, optionally with a time.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, RenderError> {
    let trimmed = value.trim();
    let invalid = || RenderError::InvalidDatetime(value.to_string());

    if let Ok(seconds) = trimmed.parse::<f64>() {
        if !seconds.is_finite() {
            return Err(invalid());
        }
        return Utc
            .timestamp_opt(seconds.floor() as i64, 0)
            .single()
            .ok_or_else(invalid);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(invalid)
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

fn clock(date: &DateTime<Utc>, seconds: bool) -> String {
    let (pm, hour) = date.hour12();
    let meridiem = if pm { "PM" } else { "AM" };
    if seconds {
        format!("{hour}:{:02}:{:02} {meridiem}", date.minute(), date.second())
    } else {
        format!("{hour}:{:02} {meridiem}", date.minute())
    }
}

/// Expand date tokens in `format` for `date`.
///
/// The `_pretty` variants would say "today" or "yesterday" in a client; the
/// fallback has no notion of "now" and uses the plain form instead. Unknown
/// tokens are left as written.
pub fn format_fallback(date: &DateTime<Utc>, format: &str) -> String {
    TOKEN
        .replace_all(format, |caps: &regex::Captures| {
            let long_date = || format!("{} {}, {}", date.format("%B"), ordinal(date.day()), date.year());
            match &caps[1] {
                "date_num" => date.format("%Y-%m-%d").to_string(),
                "date_slash" => date.format("%m/%d/%Y").to_string(),
                "date" | "date_pretty" => long_date(),
                "date_short" | "date_short_pretty" => date.format("%b %-d, %Y").to_string(),
                "date_long" | "date_long_pretty" => {
                    format!("{}, {}", date.format("%A"), long_date())
                }
                "time" => clock(date, false),
                "time_secs" => clock(date, true),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Serialize a `<time>` element for the intermediate HTML.
///
/// `content` is the already-rendered children and becomes the token format.
pub fn render(attributes: &Attributes, content: &str) -> Result<String, RenderError> {
    let raw = attributes
        .get("datetime")
        .and_then(|v| v.to_attr_string())
        .ok_or_else(|| RenderError::InvalidDatetime(String::new()))?;
    let date = parse_datetime(&raw)?;
    let format = content.replace('|', &PIPE_SUBSTITUTE.to_string());

    let fallback = match attributes.get("fallback").and_then(|v| v.to_attr_string()) {
        Some(given) => escape_attr(&given.replace('|', &PIPE_SUBSTITUTE.to_string())),
        // `format` is already escaped markup; only the quote needs guarding.
        None => format_fallback(&date, &format).replace('"', "&quot;"),
    };

    Ok(format!(
        "<time datetime=\"{}\" data-fallback=\"{fallback}\">{format}</time>",
        date.timestamp()
    ))
}
