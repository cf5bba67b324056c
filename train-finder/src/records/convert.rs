//! Conversion from raw JSON documents to train records.
//!
//! Each expected field is looked up by name and read with a typed accessor.
//! A field that is missing or of the wrong type falls back to its zero value
//! instead of failing the record, so a malformed document still yields a
//! (degenerate) `Train`.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{StationId, TimeOfDay, Train, TrainId};

pub const FIELD_TRAIN_ID: &str = "trainId";
pub const FIELD_DEPARTURE_STATION: &str = "departureStationId";
pub const FIELD_ARRIVAL_STATION: &str = "arrivalStationId";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_ARRIVAL_TIME: &str = "arrivalTime";
pub const FIELD_DEPARTURE_TIME: &str = "departureTime";

/// Why a field fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// The field was absent (or the document was not an object).
    Missing,
    /// The field was present with the wrong JSON type.
    WrongType,
    /// The field was a string but not a valid "HH:MM:SS" time.
    BadTime(String),
}

/// A field that was defaulted during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    pub field: &'static str,
    pub issue: FieldIssue,
}

/// A converted record together with every field that was defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedRecord {
    pub train: Train,
    pub warnings: Vec<FieldWarning>,
}

impl ConvertedRecord {
    /// Whether every field was read as-is.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Convert a raw document, reporting defaulted fields.
pub fn convert_record(raw: &Value) -> ConvertedRecord {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);
    let mut reader = FieldReader {
        fields,
        warnings: Vec::new(),
    };

    let train = Train {
        id: TrainId(reader.integer(FIELD_TRAIN_ID)),
        departure_station: StationId::new(reader.integer(FIELD_DEPARTURE_STATION)),
        arrival_station: StationId::new(reader.integer(FIELD_ARRIVAL_STATION)),
        price: reader.real(FIELD_PRICE) as f32,
        arrival_time: reader.time(FIELD_ARRIVAL_TIME),
        departure_time: reader.time(FIELD_DEPARTURE_TIME),
    };

    ConvertedRecord {
        train,
        warnings: reader.warnings,
    }
}

/// Convert a raw document, silently defaulting malformed fields.
///
/// Defaulted fields are only visible in `debug` logs.
pub fn parse_record(raw: &Value) -> Train {
    let converted = convert_record(raw);
    for warning in &converted.warnings {
        debug!(
            train_id = %converted.train.id,
            field = warning.field,
            issue = ?warning.issue,
            "defaulted record field"
        );
    }
    converted.train
}

/// Convert a batch of documents, preserving order. Nothing is dropped.
pub fn parse_records(raw: &[Value]) -> Vec<Train> {
    raw.iter().map(parse_record).collect()
}

/// Typed accessors over a document's fields.
struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    warnings: Vec<FieldWarning>,
}

impl FieldReader<'_> {
    fn warn(&mut self, field: &'static str, issue: FieldIssue) {
        self.warnings.push(FieldWarning { field, issue });
    }

    fn number(&mut self, field: &'static str) -> Option<f64> {
        let fields = self.fields;
        match fields.get(field) {
            Some(value) => {
                let number = value.as_f64();
                if number.is_none() {
                    self.warn(field, FieldIssue::WrongType);
                }
                number
            }
            None => {
                self.warn(field, FieldIssue::Missing);
                None
            }
        }
    }

    /// JSON numbers are truncated toward zero; `as` saturates out-of-range values.
    fn integer(&mut self, field: &'static str) -> i64 {
        self.number(field).map_or(0, |n| n as i64)
    }

    fn real(&mut self, field: &'static str) -> f64 {
        self.number(field).unwrap_or(0.0)
    }

    fn time(&mut self, field: &'static str) -> TimeOfDay {
        let fields = self.fields;
        match fields.get(field) {
            Some(Value::String(s)) => TimeOfDay::parse_hhmmss(s).unwrap_or_else(|_| {
                self.warn(field, FieldIssue::BadTime(s.clone()));
                TimeOfDay::MIDNIGHT
            }),
            Some(_) => {
                self.warn(field, FieldIssue::WrongType);
                TimeOfDay::MIDNIGHT
            }
            None => {
                self.warn(field, FieldIssue::Missing);
                TimeOfDay::MIDNIGHT
            }
        }
    }
}
