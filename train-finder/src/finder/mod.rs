//! Train lookup between a pair of stations.
//!
//! A query is answered in four steps: validate the raw input, select the
//! trains serving the requested pair, rank them by the chosen criterion
//! (train id breaks ties), and keep the first few.

mod query;
mod rank;
mod select;

pub use query::{ErrorKind, FindError, Query, TrainFinder};
pub use rank::{compare, rank, truncate};
pub use select::select;
