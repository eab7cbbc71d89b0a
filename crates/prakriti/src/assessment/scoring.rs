use super::domain::{Dosha, Outcome};
use std::ops::RangeInclusive;

/// Inclusive share band inside which all three doshas count as balanced.
pub const BALANCE_BAND: RangeInclusive<f64> = 28.0..=38.0;

/// Raw affirmative counts per dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoshaTally {
    counts: [u32; Dosha::COUNT],
}

impl DoshaTally {
    pub fn from_counts(counts: [u32; Dosha::COUNT]) -> Self {
        Self { counts }
    }

    pub fn record(&mut self, dosha: Dosha) {
        self.counts[dosha.index()] += 1;
    }

    pub fn count(&self, dosha: Dosha) -> u32 {
        self.counts[dosha.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Percentage shares of the total. A zero total yields all-zero shares
    /// instead of dividing; the classifier then reports Undetermined.
    pub fn shares(&self) -> DoshaShares {
        let total = self.total();
        if total == 0 {
            return DoshaShares::default();
        }

        let mut values = [0.0; Dosha::COUNT];
        for dosha in Dosha::ordered() {
            values[dosha.index()] = self.count(dosha) as f64 * 100.0 / total as f64;
        }
        DoshaShares { values }
    }
}

/// Percentage shares per dosha, summing to 100 unless the tally was empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoshaShares {
    values: [f64; Dosha::COUNT],
}

impl DoshaShares {
    pub fn from_values(values: [f64; Dosha::COUNT]) -> Self {
        Self { values }
    }

    pub fn share(&self, dosha: Dosha) -> f64 {
        self.values[dosha.index()]
    }

    /// Classification rule, evaluated in order:
    /// 1. every share inside [28, 38] is Tri Dosha, even when one of them
    ///    is the unique maximum;
    /// 2. otherwise the dosha(s) holding the maximum share win, ties included;
    /// 3. a three-way tie (only reachable from an all-zero tally) cannot
    ///    name a dominant dosha and is Undetermined.
    pub fn classify(&self) -> Outcome {
        let balanced = Dosha::ordered()
            .into_iter()
            .all(|dosha| BALANCE_BAND.contains(&self.share(dosha)));
        if balanced {
            return Outcome::TriDosha;
        }

        let max = self
            .values
            .iter()
            .copied()
            .fold(f64::MIN, f64::max);
        let leaders: Vec<Dosha> = Dosha::ordered()
            .into_iter()
            .filter(|dosha| self.share(*dosha) == max)
            .collect();

        if leaders.len() == Dosha::COUNT {
            return Outcome::Undetermined;
        }

        Outcome::Dominant(leaders)
    }
}
