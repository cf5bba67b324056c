//! Train records.

use std::fmt;

use super::{StationId, TimeOfDay};

/// Identifier of a train. Uniqueness is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TrainId(pub i64);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single train from the dataset.
///
/// Records are immutable snapshots: the finder filters and reorders them
/// but never changes a field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Train {
    pub id: TrainId,
    pub departure_station: StationId,
    pub arrival_station: StationId,
    pub price: f32,
    pub arrival_time: TimeOfDay,
    pub departure_time: TimeOfDay,
}

impl Train {
    /// Whether this train runs between the given pair of stations.
    pub fn serves(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station == departure && self.arrival_station == arrival
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrainID: {}, DepartureStationID: {}, ArrivalStationID: {}, Price: {}, \
             ArrivalTime: {}, DepartureTime: {}",
            self.id,
            self.departure_station,
            self.arrival_station,
            self.price,
            self.arrival_time,
            self.departure_time,
        )
    }
}
