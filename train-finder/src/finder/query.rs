//! The train query: validate input, load, select, rank, truncate.

use tracing::debug;

use crate::config::FinderConfig;
use crate::domain::{Criterion, InvalidStation, StationId, Train};
use crate::records::{LoadError, RecordSource, parse_records};

use super::rank::{rank, truncate};
use super::select::select;

/// Error from a train query.
///
/// Input errors are reported in a fixed order: departure station, then
/// arrival station, then criterion. Loading is only attempted once all
/// input is valid.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    #[error("empty departure station")]
    EmptyDepartureStation,

    #[error("empty arrival station")]
    EmptyArrivalStation,

    #[error("bad departure station input")]
    BadDepartureStationInput,

    #[error("bad arrival station input")]
    BadArrivalStationInput,

    #[error("unsupported criteria")]
    UnsupportedCriteria,

    #[error("failed to load train data: {0}")]
    Load(#[from] LoadError),
}

/// The kind of a [`FindError`], for comparison without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyDepartureStation,
    EmptyArrivalStation,
    BadDepartureStationInput,
    BadArrivalStationInput,
    UnsupportedCriteria,
    Load,
}

impl FindError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FindError::EmptyDepartureStation => ErrorKind::EmptyDepartureStation,
            FindError::EmptyArrivalStation => ErrorKind::EmptyArrivalStation,
            FindError::BadDepartureStationInput => ErrorKind::BadDepartureStationInput,
            FindError::BadArrivalStationInput => ErrorKind::BadArrivalStationInput,
            FindError::UnsupportedCriteria => ErrorKind::UnsupportedCriteria,
            FindError::Load(_) => ErrorKind::Load,
        }
    }

    /// Whether this error was caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, FindError::Load(_))
    }

    fn departure(err: InvalidStation) -> Self {
        match err {
            InvalidStation::Empty => FindError::EmptyDepartureStation,
            InvalidStation::BadInput => FindError::BadDepartureStationInput,
        }
    }

    fn arrival(err: InvalidStation) -> Self {
        match err {
            InvalidStation::Empty => FindError::EmptyArrivalStation,
            InvalidStation::BadInput => FindError::BadArrivalStationInput,
        }
    }
}

/// A validated query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub departure: StationId,
    pub arrival: StationId,
    pub criterion: Criterion,
}

impl Query {
    /// Validate raw input, stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::finder::{ErrorKind, Query};
    ///
    /// let err = Query::parse("", "", "duck").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::EmptyDepartureStation);
    /// ```
    pub fn parse(departure: &str, arrival: &str, criterion: &str) -> Result<Self, FindError> {
        let departure = StationId::parse(departure).map_err(FindError::departure)?;
        let arrival = StationId::parse(arrival).map_err(FindError::arrival)?;
        let criterion = Criterion::parse(criterion).map_err(|_| FindError::UnsupportedCriteria)?;

        Ok(Self {
            departure,
            arrival,
            criterion,
        })
    }
}

/// Answers train queries against a record source.
///
/// Each query loads a fresh snapshot from the source and keeps nothing
/// afterwards, so a finder can be shared between callers.
#[derive(Debug, Clone)]
pub struct TrainFinder<S> {
    source: S,
    max_results: usize,
}

impl<S: RecordSource> TrainFinder<S> {
    /// Create a finder returning the default number of results.
    pub fn new(source: S) -> Self {
        Self::with_config(source, &FinderConfig::default())
    }

    pub fn with_config(source: S, config: &FinderConfig) -> Self {
        Self {
            source,
            max_results: config.max_results,
        }
    }

    /// Find the best trains from `departure` to `arrival` under `criterion`.
    ///
    /// Returns an empty list, not an error, when no train serves the pair.
    pub fn find(
        &self,
        departure: &str,
        arrival: &str,
        criterion: &str,
    ) -> Result<Vec<Train>, FindError> {
        let query = Query::parse(departure, arrival, criterion)?;
        self.run(&query)
    }

    /// Run an already validated query.
    pub fn run(&self, query: &Query) -> Result<Vec<Train>, FindError> {
        let raw = self.source.load_all()?;
        let trains = parse_records(&raw);

        let selected = select(&trains, query.departure, query.arrival);
        let matched = selected.len();
        let result = truncate(rank(selected, query.criterion), self.max_results);

        debug!(
            departure = %query.departure,
            arrival = %query.arrival,
            criterion = %query.criterion,
            dataset = trains.len(),
            matched,
            returned = result.len(),
            "train query complete"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TimeOfDay, TrainId};
    use crate::records::InMemorySource;
    use serde_json::json;
    use std::path::PathBuf;

    const DATASET: &str = include_str!("../../data/trains.json");

    fn finder() -> TrainFinder<InMemorySource> {
        TrainFinder::new(InMemorySource::from_json_str(DATASET).unwrap())
    }

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmmss(s).unwrap()
    }

    fn train(id: i64, price: f32, arrival: &str, departure: &str) -> Train {
        Train {
            id: TrainId(id),
            departure_station: StationId::new(1902),
            arrival_station: StationId::new(1929),
            price,
            arrival_time: time(arrival),
            departure_time: time(departure),
        }
    }

    fn ids(trains: &[Train]) -> Vec<i64> {
        trains.iter().map(|t| t.id.0).collect()
    }

    fn kind(dep: &str, arr: &str, criterion: &str) -> ErrorKind {
        finder().find(dep, arr, criterion).unwrap_err().kind()
    }

    #[test]
    fn find_by_price() {
        let result = finder().find("1902", "1929", "price").unwrap();
        assert_eq!(
            result,
            vec![
                train(1177, 164.65, "10:25:00", "16:36:00"),
                train(1178, 164.65, "10:25:00", "16:36:00"),
                train(1141, 176.77, "12:15:00", "16:48:00"),
            ]
        );
    }

    #[test]
    fn find_by_arrival_time() {
        let result = finder().find("1902", "1929", "arrival-time").unwrap();
        assert_eq!(
            result,
            vec![
                train(978, 258.53, "04:15:00", "13:10:00"),
                train(1316, 209.73, "05:55:00", "13:52:00"),
                train(2201, 280.0, "06:15:00", "14:55:00"),
            ]
        );
    }

    #[test]
    fn find_by_departure_time() {
        let result = finder().find("1902", "1929", "departure-time").unwrap();
        assert_eq!(
            result,
            vec![
                train(1386, 220.49, "08:30:00", "13:03:00"),
                train(978, 258.53, "04:15:00", "13:10:00"),
                train(1316, 209.73, "05:55:00", "13:52:00"),
            ]
        );
    }

    #[test]
    fn fewer_matches_than_limit_returns_all() {
        let result = finder().find("1929", "1902", "price").unwrap();
        assert_eq!(ids(&result), vec![1233, 1450]);

        let result = finder().find("1902", "1909", "arrival-time").unwrap();
        assert_eq!(ids(&result), vec![1003]);
    }

    #[test]
    fn unknown_station_is_empty_success() {
        assert!(finder().find("777", "1929", "price").unwrap().is_empty());
        assert!(finder().find("1902", "777", "price").unwrap().is_empty());
        assert!(finder().find("12", "1929", "price").unwrap().is_empty());
        assert!(finder().find("1902", "11", "price").unwrap().is_empty());
    }

    #[test]
    fn defaulted_record_does_not_match_its_intended_pair() {
        // 1999 has a string departure station, which defaults to 0.
        let result = finder().find("1902", "1929", "price").unwrap();
        assert!(!ids(&result).contains(&1999));
    }

    #[test]
    fn input_errors() {
        assert_eq!(kind("", "1929", "price"), ErrorKind::EmptyDepartureStation);
        assert_eq!(kind("w", "1929", "price"), ErrorKind::BadDepartureStationInput);
        assert_eq!(kind("serg", "1922", "price"), ErrorKind::BadDepartureStationInput);
        assert_eq!(kind("1902", "", "price"), ErrorKind::EmptyArrivalStation);
        assert_eq!(kind("1902", "19[[", "price"), ErrorKind::BadArrivalStationInput);
        assert_eq!(kind("1902", " ", "price"), ErrorKind::BadArrivalStationInput);
        assert_eq!(kind("1902", "0", "price"), ErrorKind::BadArrivalStationInput);
        assert_eq!(kind("1902", "1929", "duck"), ErrorKind::UnsupportedCriteria);
        assert_eq!(kind("1902", "1929", ""), ErrorKind::UnsupportedCriteria);
    }

    #[test]
    fn validation_precedence() {
        assert_eq!(kind("", "", "price"), ErrorKind::EmptyDepartureStation);
        assert_eq!(kind("", "1929", "departure"), ErrorKind::EmptyDepartureStation);
        assert_eq!(kind("1902", "", "departure"), ErrorKind::EmptyArrivalStation);
        assert_eq!(kind("1902", "19[[", "priceds"), ErrorKind::BadArrivalStationInput);
        assert_eq!(kind("x", "", "duck"), ErrorKind::BadDepartureStationInput);
    }

    #[test]
    fn error_messages() {
        let message = |dep: &str, arr: &str, criterion: &str| {
            finder()
                .find(dep, arr, criterion)
                .unwrap_err()
                .to_string()
        };

        assert_eq!(message("", "1929", "price"), "empty departure station");
        assert_eq!(message("w", "1929", "price"), "bad departure station input");
        assert_eq!(message("1902", "", "price"), "empty arrival station");
        assert_eq!(message("1902", "19[[", "price"), "bad arrival station input");
        assert_eq!(message("1902", "1929", "awef"), "unsupported criteria");
    }

    #[test]
    fn load_failure_only_after_valid_input() {
        let finder = TrainFinder::new(crate::records::JsonFileSource::new(PathBuf::from(
            "/nonexistent/trains.json",
        )));

        assert_eq!(
            finder.find("", "1929", "price").unwrap_err().kind(),
            ErrorKind::EmptyDepartureStation
        );

        let err = finder.find("1902", "1929", "price").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(!err.is_input_error());
        assert!(err.to_string().starts_with("failed to load train data: "));
    }

    #[test]
    fn lenient_times_rank_by_their_value() {
        // 2450 has a one-digit hour departure and a fractional arrival.
        let result = finder().find("1909", "1929", "departure-time").unwrap();
        assert_eq!(ids(&result), vec![1604, 2450, 2117]);
        assert_eq!(result[1].departure_time.to_string(), "09:05:00");

        let result = finder().find("1909", "1929", "arrival-time").unwrap();
        assert_eq!(ids(&result), vec![2117, 2450, 1604]);
        assert_eq!(result[1].arrival_time.to_string(), "16:40:00");
    }

    #[test]
    fn find_is_idempotent() {
        let finder = finder();
        for criterion in Criterion::ALL {
            let first = finder.find("1902", "1929", criterion.as_str()).unwrap();
            let second = finder.find("1902", "1929", criterion.as_str()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn custom_result_limit() {
        let config = FinderConfig::new(5, "unused.json");
        let finder =
            TrainFinder::with_config(InMemorySource::from_json_str(DATASET).unwrap(), &config);

        let result = finder.find("1902", "1929", "price").unwrap();
        assert_eq!(ids(&result), vec![1177, 1178, 1141, 1316, 1386]);
    }

    #[test]
    fn run_validated_query() {
        let query = Query::parse("1902", "1929", "departure-time").unwrap();
        assert_eq!(query.criterion, Criterion::DepartureTime);

        let result = finder().run(&query).unwrap();
        assert_eq!(ids(&result), vec![1386, 978, 1316]);
    }

    #[test]
    fn tie_break_applies_to_every_criterion() {
        let record = |id: i64| {
            json!({
                "trainId": id,
                "departureStationId": 1,
                "arrivalStationId": 2,
                "price": 10.0,
                "arrivalTime": "09:00:00",
                "departureTime": "08:00:00"
            })
        };
        let finder = TrainFinder::new(InMemorySource::new(vec![
            record(40),
            record(10),
            record(30),
            record(20),
        ]));

        for criterion in Criterion::ALL {
            let result = finder.find("1", "2", criterion.as_str()).unwrap();
            assert_eq!(ids(&result), vec![10, 20, 30]);
        }
    }
}
