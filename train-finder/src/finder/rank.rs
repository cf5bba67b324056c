//! Ordering of selected trains.
//!
//! Every criterion is a two-key sort: the criterion's value first, then the
//! train id. The id tie-break makes the result independent of dataset order.

use std::cmp::Ordering;

use crate::domain::{Criterion, Train};

/// Compare two trains under a criterion, ties broken by ascending id.
pub fn compare(a: &Train, b: &Train, criterion: Criterion) -> Ordering {
    let primary = match criterion {
        Criterion::Price => a.price.total_cmp(&b.price),
        Criterion::ArrivalTime => a.arrival_time.cmp(&b.arrival_time),
        Criterion::DepartureTime => a.departure_time.cmp(&b.departure_time),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

/// Sort trains best-first under `criterion`.
pub fn rank(mut trains: Vec<Train>, criterion: Criterion) -> Vec<Train> {
    if trains.len() <= 1 {
        return trains;
    }

    trains.sort_by(|a, b| compare(a, b, criterion));
    trains
}

/// Keep at most the first `limit` trains.
pub fn truncate(mut trains: Vec<Train>, limit: usize) -> Vec<Train> {
    trains.truncate(limit);
    trains
}
