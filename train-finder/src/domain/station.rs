//! Station identifier types.

use std::fmt;

/// Error returned when a station identifier fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStation {
    /// The input was the empty string.
    #[error("empty station")]
    Empty,

    /// The input was not a decimal integer, or was less than 1.
    #[error("bad station input")]
    BadInput,
}

/// A station identifier.
///
/// Identifiers typed in by a user go through [`StationId::parse`], which only
/// accepts positive integers. Identifiers read from train records are taken
/// as-is, so a defaulted record may carry `StationId(0)`.
///
/// # Examples
///
/// ```
/// use train_finder::domain::{InvalidStation, StationId};
///
/// assert_eq!(StationId::parse("1902"), Ok(StationId::new(1902)));
///
/// assert_eq!(StationId::parse(""), Err(InvalidStation::Empty));
/// assert_eq!(StationId::parse("0"), Err(InvalidStation::BadInput));
/// assert_eq!(StationId::parse("19[["), Err(InvalidStation::BadInput));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StationId(i64);

impl StationId {
    /// Wrap a raw identifier without validation.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a station identifier entered by a user.
    ///
    /// Whitespace is not trimmed: `" "` is bad input, not an empty station.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        if s.is_empty() {
            return Err(InvalidStation::Empty);
        }

        let id: i64 = s.parse().map_err(|_| InvalidStation::BadInput)?;
        if id < 1 {
            return Err(InvalidStation::BadInput);
        }

        Ok(Self(id))
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
