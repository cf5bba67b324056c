//! Sort criteria.

use std::fmt;

/// Error returned when a criterion is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criteria: {0:?}")]
pub struct UnsupportedCriterion(pub String);

/// The field matching trains are ordered by.
///
/// # Examples
///
/// ```
/// use train_finder::domain::Criterion;
///
/// assert_eq!(Criterion::parse("price"), Ok(Criterion::Price));
/// assert_eq!(Criterion::parse("arrival-time"), Ok(Criterion::ArrivalTime));
/// assert!(Criterion::parse("Price").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Price,
    ArrivalTime,
    DepartureTime,
}

impl Criterion {
    /// Every supported criterion.
    pub const ALL: [Criterion; 3] = [
        Criterion::Price,
        Criterion::ArrivalTime,
        Criterion::DepartureTime,
    ];

    /// Parse a criterion. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Result<Self, UnsupportedCriterion> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnsupportedCriterion(s.to_string()))
    }

    /// The accepted spelling of this criterion.
    pub const fn as_str(self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::ArrivalTime => "arrival-time",
            Criterion::DepartureTime => "departure-time",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
