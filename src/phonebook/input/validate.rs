//! Validators behind the typed prompts.
//!
//! Each returns `Err(message)` for input the user should retype; the message is
//! printed as-is by the prompt loop.

use crate::model::UNSET_BIRTHDAY;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_PATTERN: &str = r"^(\d{4,})[-. ]+(\d{1,2})[-. ]+(\d{1,2})$";
pub const PHONE_PATTERN: &str =
    r"^(\+\d{1,3}[-\s.]?)?\(?\d{3}\)?[-\s.]?\d{3}[-\s.]?\d{4,6}$";
pub const EMAIL_PATTERN: &str = concat!(
    r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@"#,
    r#"((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#
);

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(DATE_PATTERN).unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

pub fn phone(input: &str) -> Result<String, String> {
    if PHONE_RE.is_match(input) {
        Ok(input.to_string())
    } else {
        Err("Please enter a phone number like +49 217 314 9623!".to_string())
    }
}

pub fn email(input: &str) -> Result<String, String> {
    if EMAIL_RE.is_match(input) {
        Ok(input.to_string())
    } else {
        Err("Please enter a valid email address!".to_string())
    }
}

/// Accepts `YYYY-MM-DD` (`-`, `.` or space as separators) naming a real day.
///
/// `0001-01-01` is refused: it is how an unset birthday is stored.
pub fn date(input: &str) -> Result<NaiveDate, String> {
    let caps = DATE_RE
        .captures(input)
        .ok_or_else(|| "Please use format: yyyy-mm-dd".to_string())?;
    let year: i32 = caps[1]
        .parse()
        .map_err(|_| "year is out of range".to_string())?;
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);
    if [year, month as i32, day as i32] == UNSET_BIRTHDAY {
        return Err("0001-01-01 is reserved for an unset date".to_string());
    }
    calendar_date(year, month, day)
}

/// Builds a date, reporting which component is impossible.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, String> {
    if !(1..=12).contains(&month) {
        return Err("month must be in 1..12".to_string());
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| "year is out of range".to_string())?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| "day is out of range for month".to_string())
}

/// Matches `input` against a caller supplied pattern.
pub fn pattern(re: &Regex, error: &str, input: &str) -> Result<String, String> {
    if re.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(error.to_string())
    }
}

pub fn int(
    input: &str,
    min: Option<i64>,
    max: Option<i64>,
    error: &str,
) -> Result<i64, String> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(error.to_string());
    }
    let value: i64 = input.parse().map_err(|_| error.to_string())?;
    match (min, max) {
        (None, None) => Ok(value),
        (None, Some(max)) if value <= max => Ok(value),
        (None, Some(max)) => Err(format!("Please enter a value with a maximum of {}!", max)),
        (Some(min), None) if value >= min => Ok(value),
        (Some(min), None) => Err(format!("Please enter a value with a minimum of {}!", min)),
        (Some(min), Some(max)) if (min..=max).contains(&value) => Ok(value),
        (Some(min), Some(max)) => Err(format!("Please enter a value between {} and {}!", min, max)),
    }
}

pub fn boolean(input: &str, true_token: &str, false_token: &str) -> Result<bool, String> {
    let lowered = input.to_lowercase();
    if lowered == true_token.to_lowercase() {
        Ok(true)
    } else if lowered == false_token.to_lowercase() {
        Ok(false)
    } else {
        Err(format!(
            "Please enter either '{}' or '{}'!",
            true_token, false_token
        ))
    }
}
