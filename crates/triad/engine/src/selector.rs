//! Picks the two dominant trigrams of a normalized vector.

use triad_types::{CanonicalVector, SelectionPolicy, Trigram};

/// Outcome of trigram selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// One trigram dominates; it is both upper and lower.
    Pure(Trigram),
    /// Two distinct trigrams, `first` ranked higher.
    Pair { first: Trigram, second: Trigram },
}

impl Selection {
    pub fn is_pure(&self) -> bool {
        matches!(self, Self::Pure(_))
    }
}

/// Applies the active selection policy.
#[derive(Clone, Copy, Debug)]
pub struct TrigramSelector {
    policy: SelectionPolicy,
}

impl TrigramSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn select(&self, vector: &CanonicalVector) -> Selection {
        let ranked = vector.ranked();
        let (first, first_value) = ranked[0];
        let (second, second_value) = ranked[1];
        match self.policy {
            SelectionPolicy::DominanceThreshold { margin }
                if first_value - second_value > margin =>
            {
                Selection::Pure(first)
            }
            _ => Selection::Pair { first, second },
        }
    }
}
