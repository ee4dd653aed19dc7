//! Per-total hit probabilities.

use std::collections::BTreeMap;

use crate::dice::RollSpace;

/// For every two-die total, the fraction of rolls that can make it.
///
/// A roll counts toward *every* total among its achievable sums, so the
/// probabilities deliberately do not sum to 1 — this is a per-total hit
/// map, not a distribution over disjoint events. Totals below 2 are
/// unreachable and carry probability 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumDistribution {
    outcomes: u64,
    hits: BTreeMap<u32, u64>,
}

impl SumDistribution {
    /// Enumerate every roll of the space and count it toward every total it
    /// can make. Covers totals 1 through `2 * sides`.
    pub fn compute(space: &RollSpace) -> Self {
        let mut hits: BTreeMap<u32, u64> = (1..=space.max_total()).map(|t| (t, 0)).collect();
        for roll in space.rolls() {
            for total in roll.achievable_sums() {
                if let Some(count) = hits.get_mut(&total) {
                    *count += 1;
                }
            }
        }
        Self {
            outcomes: space.outcome_count(),
            hits,
        }
    }

    /// Number of rolls that can make `total`.
    ///
    /// Totals outside the covered range report 0.
    pub fn hit_count(&self, total: u32) -> u64 {
        self.hits.get(&total).copied().unwrap_or(0)
    }

    /// Fraction of rolls that can make `total`.
    pub fn probability(&self, total: u32) -> f64 {
        self.hit_count(total) as f64 / self.outcomes as f64
    }

    /// Total number of enumerated outcomes.
    pub fn outcome_count(&self) -> u64 {
        self.outcomes
    }

    /// Iterate `(total, probability)` in ascending total order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.hits
            .iter()
            .map(|(&total, &count)| (total, count as f64 / self.outcomes as f64))
    }
}
