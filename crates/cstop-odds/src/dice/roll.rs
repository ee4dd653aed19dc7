//! A single roll outcome and the totals it can make.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One ordered outcome of rolling all dice simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    values: Vec<u32>,
}

impl Roll {
    /// Create a roll from die values in rolled order.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// The die values in rolled order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of dice in the roll.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Every distinct total obtainable by adding two dice of this roll.
    ///
    /// All index pairs (i, j) with i < j contribute; duplicate totals
    /// collapse, so `[3, 3, 3, 3]` yields just `{6}`.
    pub fn achievable_sums(&self) -> BTreeSet<u32> {
        let mut sums = BTreeSet::new();
        for (i, &a) in self.values.iter().enumerate() {
            for &b in &self.values[i + 1..] {
                sums.insert(a + b);
            }
        }
        sums
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadruple_collapses_to_one_sum() {
        let roll = Roll::new(vec![3, 3, 3, 3]);
        assert_eq!(roll.achievable_sums(), BTreeSet::from([6]));
    }

    #[test]
    fn all_ones_make_only_two() {
        let roll = Roll::new(vec![1, 1, 1, 1]);
        assert_eq!(roll.achievable_sums(), BTreeSet::from([2]));
    }

    #[test]
    fn distinct_dice_make_every_pair_total() {
        let roll = Roll::new(vec![1, 2, 3, 4]);
        // 1+2, 1+3, 1+4 and 2+3 (tied), 2+4, 3+4
        assert_eq!(roll.achievable_sums(), BTreeSet::from([3, 4, 5, 6, 7]));
    }

    #[test]
    fn two_dice_have_a_single_pairing() {
        let roll = Roll::new(vec![5, 6]);
        assert_eq!(roll.achievable_sums(), BTreeSet::from([11]));
    }

    #[test]
    fn sums_stay_in_range() {
        let roll = Roll::new(vec![1, 6, 1, 6]);
        for sum in roll.achievable_sums() {
            assert!((2..=12).contains(&sum));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Roll::new(vec![1, 3, 4, 6]).to_string(), "[1, 3, 4, 6]");
    }

    #[test]
    fn count() {
        assert_eq!(Roll::new(vec![2, 2]).count(), 2);
        assert_eq!(Roll::new(vec![1, 2, 3, 4]).count(), 4);
    }
}
