//! Train finder.
//!
//! Answers a single question against a fixed dataset: "which trains run
//! from this station to that one, best first?" Results are ordered by
//! price, arrival time or departure time, with the train id breaking ties,
//! and capped at three.

pub mod cli;
pub mod config;
pub mod domain;
pub mod finder;
pub mod records;
