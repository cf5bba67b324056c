//! Raw train records: where they come from and how they become `Train`s.
//!
//! The dataset is a JSON array of loosely-typed documents. Loading is
//! delegated to a [`RecordSource`]; [`parse_record`] then maps each
//! document onto a `Train` through a fixed field table, defaulting
//! anything missing or malformed.

mod convert;
mod error;
mod source;

pub use convert::{
    ConvertedRecord, FieldIssue, FieldWarning, convert_record, parse_record, parse_records,
};
pub use error::LoadError;
pub use source::{InMemorySource, JsonFileSource, RecordSource};
