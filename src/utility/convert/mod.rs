// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Best-effort typing of raw strings.
//!
//! ```text
//! convert(raw)
//!    |
//!    v
//! [1] ^[+-]?\d+$                     --> Integer   (i64, overflow falls through)
//! [2] ^[+-]?\d*\.\d+$                --> Float
//! [3] ^[+-]?\d*\.\d+[eE][+-]?\d+$    --> Float     (non-finite falls through)
//! [4] ^YYYY-M-D H:M$                 --> DateTime
//! [5] ^YYYY-M-D$                     --> Date
//! [6] true | false  (any case)       --> Bool
//! [7] none | null   (any case)       --> Null
//! [8] anything else                  --> String (verbatim)
//! ```
//!
//! The rules overlap, so the table is tried in order and the first rule
//! whose pattern matches *and* whose converter succeeds wins.

use std::fmt;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};

/// A typed configuration or context value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Bool(bool),
    Null,
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::DateTime(value) => write!(f, "{}", value.format(DATETIME_FORMAT)),
            Self::Date(value) => write!(f, "{}", value.format(DATE_FORMAT)),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::String(value) => f.write_str(value),
        }
    }
}

/// Dates serialize as ISO-8601 strings, since JSON has no date type.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(value) => Self::from(value),
            Value::Float(value) => serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number),
            date @ (Value::DateTime(_) | Value::Date(_)) => Self::String(date.to_string()),
            Value::Bool(value) => Self::Bool(value),
            Value::Null => Self::Null,
            Value::String(value) => Self::String(value),
        }
    }
}

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

type Converter = fn(&str, &Captures<'_>) -> Option<Value>;

/// Ordered conversion table. The string fallback is not listed; it is what
/// [`convert`] returns when no rule applies.
const RULES: &[(&str, Converter)] = &[
    (r"^[+-]?\d+$", to_integer),
    (r"^[+-]?\d*\.\d+$", to_float),
    (r"^[+-]?\d*\.\d+[eE][+-]?\d+$", to_float),
    (r"^(\d{4})-(\d{1,2})-(\d{1,2}) (\d{1,2}):(\d{1,2})$", to_datetime),
    (r"^(\d{4})-(\d{1,2})-(\d{1,2})$", to_date),
    (r"(?i)^(true|false)$", to_bool),
    (r"(?i)^(none|null)$", to_null),
];

fn to_integer(raw: &str, _: &Captures<'_>) -> Option<Value> {
    raw.parse().ok().map(Value::Integer)
}

fn to_float(raw: &str, _: &Captures<'_>) -> Option<Value> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Value::Float)
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn date_from(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year = caps.get(1)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, number(caps, 2)?, number(caps, 3)?)
}

fn to_datetime(_: &str, caps: &Captures<'_>) -> Option<Value> {
    let date = date_from(caps)?;
    date.and_hms_opt(number(caps, 4)?, number(caps, 5)?, 0)
        .map(Value::DateTime)
}

fn to_date(_: &str, caps: &Captures<'_>) -> Option<Value> {
    date_from(caps).map(Value::Date)
}

fn to_bool(raw: &str, _: &Captures<'_>) -> Option<Value> {
    Some(Value::Bool(raw.eq_ignore_ascii_case("true")))
}

fn to_null(_: &str, _: &Captures<'_>) -> Option<Value> {
    Some(Value::Null)
}

/// Compiled [`RULES`], in order. Panics on a pattern that does not compile.
fn rules() -> &'static [(Regex, Converter)] {
    static COMPILED: OnceLock<Vec<(Regex, Converter)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|&(pattern, converter)| match Regex::new(pattern) {
                Ok(regex) => (regex, converter),
                Err(e) => panic!("invalid conversion rule {pattern:?}: {e}"),
            })
            .collect()
    })
}

/// Convert a raw string into the first matching typed [`Value`].
///
/// Never fails: input no rule accepts comes back as [`Value::String`].
///
/// # Example
///
/// ```
/// use stationary::utility::convert::{convert, Value};
///
/// assert_eq!(convert("42"), Value::Integer(42));
/// assert_eq!(convert("hello"), Value::String("hello".to_string()));
/// ```
#[must_use]
pub fn convert(raw: &str) -> Value {
    rules()
        .iter()
        .find_map(|(regex, converter)| {
            regex
                .captures(raw)
                .and_then(|caps| converter(raw, &caps))
        })
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
