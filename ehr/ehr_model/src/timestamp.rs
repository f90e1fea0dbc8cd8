//! Fixed-format timestamps and birthday-aware age arithmetic.
//!
//! Extract timestamps always look like `YYYY-MM-DD HH:MM:SS.ffffff`. Because
//! every component is zero-padded to a fixed width, comparing two raw strings
//! orders them chronologically, which the patient queries rely on.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::{ModelError, ModelResult};

/// The pattern every extract timestamp follows, in `strftime` notation.
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S.%f";

const MAX_FRACTION_DIGITS: usize = 6;

/// Raw components as read from the text, before calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    micros: u32,
}

fn number<'a>(width: usize) -> impl FnMut(&'a str) -> IResult<&'a str, u32> {
    map_res(
        take_while_m_n(width, width, |c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u32>(),
    )
}

// Accepts 1 to 6 fractional digits and scales them to microseconds.
fn fraction(input: &str) -> IResult<&str, u32> {
    let (rest, digits) =
        take_while_m_n(1, MAX_FRACTION_DIGITS, |c: char| c.is_ascii_digit())(input)?;
    let scale = 10u32.pow((MAX_FRACTION_DIGITS - digits.len()) as u32);
    let (_, value) = number(digits.len())(digits)?;
    Ok((rest, value * scale))
}

fn parts(input: &str) -> IResult<&str, Parts> {
    let (rest, (year, _, month, _, day, _, hour, _, minute, _, second, micros)) =
        all_consuming(tuple((
            number(4),
            char('-'),
            number(2),
            char('-'),
            number(2),
            char(' '),
            number(2),
            char(':'),
            number(2),
            char(':'),
            number(2),
            preceded(char('.'), fraction),
        )))(input)?;
    Ok((
        rest,
        Parts {
            year,
            month,
            day,
            hour,
            minute,
            second,
            micros,
        },
    ))
}

/// Parse a `YYYY-MM-DD HH:MM:SS.ffffff` timestamp.
///
/// Fails with [`ModelError::InvalidTimestamp`] when the text does not have
/// that exact shape or names an impossible calendar date or time.
pub fn parse_timestamp(text: &str) -> ModelResult<NaiveDateTime> {
    let invalid = || ModelError::InvalidTimestamp {
        value: text.to_string(),
    };
    let (_, p) = parts(text).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(p.year as i32, p.month, p.day)
        .and_then(|date| date.and_hms_micro_opt(p.hour, p.minute, p.second, p.micros))
        .ok_or_else(invalid)
}

/// Whole years elapsed from `birth` to `on`.
///
/// One is subtracted when `on` falls before the anniversary of `birth` in its
/// year, so the result changes exactly on the birthday.
pub fn years_between(birth: NaiveDate, on: NaiveDate) -> i32 {
    let years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}
