//! Time-of-day handling for train records.
//!
//! Records carry arrival and departure times as "HH:MM:SS" strings with no
//! date attached. Comparisons are plain time-of-day comparisons: a train
//! arriving at "00:10" sorts before one arriving at "23:50".

use chrono::{NaiveTime, Timelike};
use std::fmt;

use crate::config::TIME_FORMAT;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day. Displayed to the second; any fraction still orders.
///
/// The zero value (`00:00:00`) doubles as the default for records whose
/// time field is missing or unparseable.
///
/// # Examples
///
/// ```
/// use train_finder::domain::TimeOfDay;
///
/// let time = TimeOfDay::parse_hhmmss("10:25:00").unwrap();
/// assert_eq!(time.to_string(), "10:25:00");
/// assert!(TimeOfDay::MIDNIGHT < time);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// The zero time of day.
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    /// Build a time from components. Returns `None` when out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Parse a time from "HH:MM:SS" format.
    ///
    /// The hour may be a single digit, and the seconds may carry a
    /// fraction (`"9:05:00.5"`). Minutes and seconds are always two digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmmss("00:00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmmss("23:59:59").is_ok());
    /// assert_eq!(TimeOfDay::parse_hhmmss("9:05:00").unwrap().to_string(), "09:05:00");
    /// assert_eq!(TimeOfDay::parse_hhmmss("10:25:00.5").unwrap().to_string(), "10:25:00");
    ///
    /// assert!(TimeOfDay::parse_hhmmss("10:25").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("24:00:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("10-25-00").is_err());
    /// ```
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        let (hour, rest) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM:SS format"))?;

        let hour =
            parse_hour(hour.as_bytes()).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        // MM:SS, then an optional .fraction
        let bytes = rest.as_bytes();
        if bytes.len() < 5 || bytes[2] != b':' {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let minute = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        let nano = parse_fraction(&bytes[5..])?;

        NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Seconds since midnight.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self.0.format(TIME_FORMAT))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

/// Parse a one- or two-digit hour.
fn parse_hour(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [d] => (*d as char).to_digit(10),
        [_, _] => parse_two_digits(bytes),
        _ => None,
    }
}

/// Parse an optional ".digits" suffix into nanoseconds.
///
/// Digits past nanosecond precision are dropped.
fn parse_fraction(bytes: &[u8]) -> Result<u32, TimeError> {
    let digits = match bytes {
        [] => return Ok(0),
        [b'.', digits @ ..] if !digits.is_empty() => digits,
        _ => return Err(TimeError::new("unexpected text after seconds")),
    };

    let mut nano = 0;
    for (i, &b) in digits.iter().enumerate() {
        let digit = (b as char)
            .to_digit(10)
            .ok_or_else(|| TimeError::new("invalid fraction digits"))?;
        if i < 9 {
            nano += digit * 10u32.pow(8 - i as u32);
        }
    }
    Ok(nano)
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
