//! Domain types for the train finder.
//!
//! User input is validated into these types at the edge: a `StationId` or
//! `Criterion` obtained through `parse` is known to be acceptable. Train
//! records are the exception; they come from an external dataset and may be
//! degenerate (zero ids, midnight times) when their source data was bad.

mod criterion;
mod station;
mod time;
mod train;

pub use criterion::{Criterion, UnsupportedCriterion};
pub use station::{InvalidStation, StationId};
pub use time::{TimeError, TimeOfDay};
pub use train::{Train, TrainId};
