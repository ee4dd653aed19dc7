//! Exact dice odds for Can't Stop.
//!
//! In Can't Stop you roll four six-sided dice and split them into two pairs;
//! each pair's total (2–12) can advance a column. A roll is usable for a set
//! of columns if at least one way of pairing the dice makes one of those
//! totals. This crate answers the usability questions by exhaustive
//! enumeration of all 1296 ordered outcomes: per-total hit probabilities,
//! the chance of making any total from a chosen set, and a ranking of every
//! three-column choice.
//!
//! Everything is a pure function of the roll space — no sampling, no cached
//! state, bit-identical results on every call.

pub mod dice;
pub mod error;
pub mod prob;

pub use dice::{Roll, RollSpace, Rolls};
pub use error::{OddsError, OddsResult};
pub use prob::{RankedCombo, SumDistribution, TargetSet, rank_triples};
