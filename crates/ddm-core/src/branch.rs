//! Per-parameter variant selection.

use tracing::debug;

use ddm_catalog::{Branch, ModelRecipe, Term};
use ddm_condition::TrialTable;
use ddm_model::{Parameter, formula_columns};

use crate::error::{ResolveError, Result};
use crate::profile::{DataProfile, Variant};

/// The term chosen for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub parameter: Parameter,
    pub variant: Variant,
    pub term: Term,
}

impl Selection {
    /// Columns the chosen term reads.
    pub fn columns(&self) -> Vec<String> {
        match self.term {
            Term::Omit => Vec::new(),
            Term::Formula(formula) => formula_columns(formula),
            Term::DependsOn(columns) => columns.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// Pick one term per rule of `recipe`.
///
/// Rules that are not data-dependent report [`Variant::Default`].
///
/// # Errors
///
/// [`ResolveError::UnsupportedDesign`] when a rule rejects datasets with
/// `transitionprob` and the profile has it.
pub fn select_variants(recipe: &ModelRecipe, profile: &DataProfile) -> Result<Vec<Selection>> {
    let variant = profile.variant();
    let mut selections = Vec::with_capacity(recipe.rules.len());

    for rule in recipe.rules {
        let (chosen, term) = match rule.branch {
            Branch::Fixed(term) => (Variant::Default, term),
            Branch::ByCoherence { multiple, single } => {
                if profile.has_multiple_coherence_levels() {
                    (Variant::Coherence, multiple)
                } else {
                    (Variant::Default, single)
                }
            }
            Branch::ByTransitionProb { present, absent } => {
                if profile.has_transitionprob {
                    (Variant::TransitionProb, present)
                } else {
                    (Variant::Default, absent)
                }
            }
            Branch::Cascade {
                transitionprob,
                coherence,
                default,
            } => match variant {
                Variant::TransitionProb => (variant, transitionprob),
                Variant::Coherence => (variant, coherence),
                Variant::Default => (variant, default),
            },
            Branch::RejectTransitionProb { reason, otherwise } => {
                if profile.has_transitionprob {
                    return Err(ResolveError::UnsupportedDesign {
                        model: recipe.id,
                        reason: reason.to_string(),
                    });
                }
                (Variant::Default, otherwise)
            }
        };
        debug!(
            model = %recipe.id,
            parameter = %rule.parameter,
            variant = chosen.as_str(),
            "selected branch"
        );
        selections.push(Selection {
            parameter: rule.parameter,
            variant: chosen,
            term,
        });
    }
    Ok(selections)
}

/// Every column referenced by a selection must exist in the conditioned table.
pub fn check_columns(
    recipe: &ModelRecipe,
    selections: &[Selection],
    table: &TrialTable,
) -> Result<()> {
    for selection in selections {
        if let Some(column) = selection
            .columns()
            .into_iter()
            .find(|c| !table.has_column(c))
        {
            return Err(ResolveError::DataIncomplete {
                model: recipe.id,
                column,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddm_catalog::default_catalog;
    use ddm_model::ModelId;

    fn profile(has_transitionprob: bool, coherence_levels: usize) -> DataProfile {
        DataProfile {
            has_transitionprob,
            coherence_levels,
        }
    }

    fn select(id: ModelId, profile: DataProfile) -> Result<Vec<Selection>> {
        let recipe = default_catalog().get(id).expect("recipe");
        select_variants(recipe, &profile)
    }

    #[test]
    fn cascade_prefers_transitionprob() {
        let picks = select(ModelId::StimcodingDcPrevresp, profile(true, 1)).unwrap();
        assert_eq!(picks[0].term, Term::DependsOn(&["coherence"]));
        assert_eq!(picks[1].term, Term::DependsOn(&["prevresp", "transitionprob"]));
        assert!(picks.iter().all(|p| p.variant == Variant::TransitionProb));
    }

    #[test]
    fn cascade_default_omits_drift_split() {
        let picks = select(ModelId::StimcodingDcPrevresp, profile(false, 1)).unwrap();
        assert_eq!(picks[0].term, Term::Omit);
        assert_eq!(picks[1].term, Term::DependsOn(&["prevresp"]));
    }

    #[test]
    fn nohist_ignores_transitionprob() {
        let picks = select(ModelId::StimcodingNohist, profile(true, 1)).unwrap();
        assert_eq!(picks[0].term, Term::Omit);
    }

    #[test]
    fn rejecting_recipe_refuses_transitionprob() {
        let err = select(
            ModelId::RegressDcPrevrespPrevstimVasessionsPrevrespsessions,
            profile(true, 0),
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedDesign { .. }));
        assert!(
            select(
                ModelId::RegressDcPrevrespPrevstimVasessionsPrevrespsessions,
                profile(false, 0)
            )
            .is_ok()
        );
    }

    #[test]
    fn selection_columns() {
        let selection = Selection {
            parameter: Parameter::Z,
            variant: Variant::TransitionProb,
            term: Term::Formula("z ~ 1 + C(transitionprob):prevresp"),
        };
        assert_eq!(selection.columns(), vec!["transitionprob", "prevresp"]);
    }
}
