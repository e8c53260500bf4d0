//! Multi-criteria job offer scoring: six normalized sub-scores, a personalized
//! OfferScore driven by user weights, an objective Market Power Index, and the
//! slider rebalancing that keeps those weights summing to 100.

pub mod config;
pub mod error;
pub mod offers;
pub mod telemetry;
