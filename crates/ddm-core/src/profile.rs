//! The data-shape facts that branch selection depends on.

use ddm_common::{has_column, n_distinct};
use ddm_condition::TrialTable;
use ddm_model::columns::{COHERENCE, TRANSITIONPROB};

use crate::error::Result;

/// Which variant of a rule the data selects, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    TransitionProb,
    Coherence,
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::TransitionProb => "transitionprob",
            Variant::Coherence => "coherence",
            Variant::Default => "default",
        }
    }
}

/// Snapshot of a conditioned table taken once before branch selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataProfile {
    pub has_transitionprob: bool,
    /// Distinct coherence values (missing counts as a value); 0 without the column.
    pub coherence_levels: usize,
}

impl DataProfile {
    pub fn from_table(table: &TrialTable) -> Result<Self> {
        let data = table.data();
        Ok(Self {
            has_transitionprob: has_column(data, TRANSITIONPROB),
            coherence_levels: n_distinct(data, COHERENCE)?,
        })
    }

    pub fn has_multiple_coherence_levels(&self) -> bool {
        self.coherence_levels > 1
    }

    /// First matching predicate wins: `transitionprob` present, then several
    /// coherence levels, then the default.
    pub fn variant(&self) -> Variant {
        if self.has_transitionprob {
            Variant::TransitionProb
        } else if self.has_multiple_coherence_levels() {
            Variant::Coherence
        } else {
            Variant::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitionprob_takes_precedence_over_coherence() {
        let profile = DataProfile {
            has_transitionprob: true,
            coherence_levels: 3,
        };
        assert_eq!(profile.variant(), Variant::TransitionProb);
    }

    #[test]
    fn single_coherence_level_falls_through() {
        let profile = DataProfile {
            has_transitionprob: false,
            coherence_levels: 1,
        };
        assert_eq!(profile.variant(), Variant::Default);
        let profile = DataProfile {
            coherence_levels: 2,
            ..profile
        };
        assert_eq!(profile.variant(), Variant::Coherence);
    }
}
