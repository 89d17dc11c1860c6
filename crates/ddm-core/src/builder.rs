//! Assembles a [`ModelSpecification`] from a recipe and its selected terms.

use ddm_catalog::{ModelRecipe, RecipeKind, Term};
use ddm_model::{ModelSpecification, ParameterDependency, RegressorSpec, StimCoding};

use crate::branch::Selection;

/// Regressors come out in the order `v`, `a`, `z` and dependencies in the
/// order `v`, `dc`, `z`, whatever order the recipe lists its rules in.
pub fn build_specification(
    recipe: &ModelRecipe,
    selections: &[Selection],
    trace_id: u32,
) -> ModelSpecification {
    let mut regressors = Vec::new();
    let mut depends_on = Vec::new();
    for selection in selections {
        match selection.term {
            Term::Omit => {}
            Term::Formula(formula) => {
                regressors.push(RegressorSpec::new(selection.parameter, formula));
            }
            Term::DependsOn(columns) => {
                depends_on.push(ParameterDependency::new(selection.parameter, columns));
            }
        }
    }
    regressors.sort_by_key(|r| r.parameter.canonical_rank());
    depends_on.sort_by_key(|d| d.parameter.canonical_rank());

    let stim_coding = match recipe.kind {
        RecipeKind::StimCoding {
            drift_criterion,
            bias,
        } => Some(StimCoding::new(drift_criterion, bias)),
        RecipeKind::Regression => None,
    };

    ModelSpecification {
        model: recipe.id,
        trace_id,
        regressors,
        depends_on,
        include: recipe.include.to_vec(),
        group_only_nodes: recipe.group_only.to_vec(),
        group_only_regressors: false,
        p_outlier: recipe.p_outlier,
        keep_regressor_trace: recipe.keep_regressor_trace,
        stim_coding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Variant;
    use ddm_catalog::default_catalog;
    use ddm_model::{LinkFunction, ModelId, Parameter};

    #[test]
    fn regressors_follow_canonical_order() {
        let recipe = default_catalog()
            .get(ModelId::RegressDcZPrevrespPrevstimVasessions)
            .expect("recipe");
        // deliberately out of order
        let selections = [
            Selection {
                parameter: Parameter::Z,
                variant: Variant::Default,
                term: Term::Formula("z ~ 1 + prevresp + prevstim"),
            },
            Selection {
                parameter: Parameter::A,
                variant: Variant::Default,
                term: Term::Formula("a ~ 1 + C(session)"),
            },
            Selection {
                parameter: Parameter::V,
                variant: Variant::Default,
                term: Term::Formula("v ~ 1 + stimulus:C(session) + prevresp + prevstim"),
            },
        ];
        let spec = build_specification(recipe, &selections, 2);
        let order: Vec<Parameter> = spec.regressors.iter().map(|r| r.parameter).collect();
        assert_eq!(order, vec![Parameter::V, Parameter::A, Parameter::Z]);
        assert_eq!(spec.regressors[2].link, LinkFunction::Logistic);
        assert_eq!(spec.regressors[1].link, LinkFunction::Identity);
        assert!(!spec.group_only_regressors);
        assert!(spec.keep_regressor_trace);
        assert_eq!(spec.trace_id, 2);
        assert!(spec.stim_coding.is_none());
    }

    #[test]
    fn omitted_terms_produce_nothing() {
        let recipe = default_catalog()
            .get(ModelId::StimcodingNohistOnlyz)
            .expect("recipe");
        let selections = [Selection {
            parameter: Parameter::V,
            variant: Variant::Default,
            term: Term::Omit,
        }];
        let spec = build_specification(recipe, &selections, 0);
        assert!(spec.regressors.is_empty());
        assert!(spec.depends_on.is_empty());
        let stim = spec.stim_coding.expect("stimcoding block");
        assert!(!stim.drift_criterion);
        assert!(stim.bias);
    }
}
