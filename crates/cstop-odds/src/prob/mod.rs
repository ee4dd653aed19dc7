//! Exact probability queries over a roll space.
//!
//! Three queries, all pure and deterministic:
//! - **Sum distribution**: per-total hit probabilities.
//! - **Target hit**: chance that one roll can make any total from a set.
//! - **Triple ranking**: every three-column choice, best first.
//!
//! Every query re-enumerates the full outcome space on each call; with the
//! default four six-sided dice that is 1296 outcomes per query.

pub mod distribution;
pub mod rank;
pub mod target;

pub use distribution::SumDistribution;
pub use rank::{RankedCombo, rank_triples};
pub use target::TargetSet;
