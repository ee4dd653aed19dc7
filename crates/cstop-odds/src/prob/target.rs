//! Target sets and the chance of hitting any of them in one roll.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dice::RollSpace;

/// The totals a player wants at least one dice pairing to make.
///
/// Duplicates collapse and order is irrelevant. Totals no pair of dice can
/// reach never match; they are not an error. Range checks on user input
/// belong to the caller, before a set is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSet {
    totals: BTreeSet<u32>,
}

impl TargetSet {
    /// Build a target set from any collection of totals.
    pub fn new(totals: impl IntoIterator<Item = u32>) -> Self {
        Self {
            totals: totals.into_iter().collect(),
        }
    }

    /// True if the set contains no totals.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Number of distinct totals.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// True if `total` is one of the targets.
    pub fn contains(&self, total: u32) -> bool {
        self.totals.contains(&total)
    }

    /// Iterate the totals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.totals.iter().copied()
    }

    /// Fraction of rolls with at least one dice pairing that makes one of
    /// these totals.
    ///
    /// A roll is counted once no matter how many of the targets it can
    /// make — unlike [`SumDistribution`](crate::SumDistribution), which
    /// counts a roll toward every total it reaches. An empty set intersects
    /// nothing and scores 0.
    pub fn hit_probability(&self, space: &RollSpace) -> f64 {
        let hits = space
            .rolls()
            .filter(|roll| !self.totals.is_disjoint(&roll.achievable_sums()))
            .count();
        hits as f64 / space.outcome_count() as f64
    }
}

impl FromIterator<u32> for TargetSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Display for TargetSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let totals: Vec<String> = self.totals.iter().map(ToString::to_string).collect();
        write!(f, "{}", totals.join("-"))
    }
}
