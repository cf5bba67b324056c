//! Selection of trains serving a station pair.

use crate::domain::{StationId, Train};

/// Keep every train running from `departure` to `arrival`.
///
/// Dataset order is preserved.
pub fn select(trains: &[Train], departure: StationId, arrival: StationId) -> Vec<Train> {
    trains
        .iter()
        .filter(|train| train.serves(departure, arrival))
        .copied()
        .collect()
}
