//! Recipe building blocks.
//!
//! A recipe is plain static data: which conditioning steps to run and, for
//! every modulated parameter, which formula or dependency list to use under
//! which data shape. Interpreting it is the resolver's job.

use std::fmt;

use serde::Serialize;

use ddm_model::{ModelFamily, ModelId, P_OUTLIER, Parameter};

/// Recipe family together with the structural stimcoding flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum RecipeKind {
    StimCoding { drift_criterion: bool, bias: bool },
    Regression,
}

/// One conditioning step, run in recipe order before branch resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformStep {
    RecodeStimCoding,
    DropIncomplete(&'static [&'static str]),
    /// Relabel gapped session ids; optionally balance only if a remap happened.
    CanonicalizeSessions { balance_if_remapped: bool },
    BalanceDesign,
}

impl fmt::Display for TransformStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecodeStimCoding => f.write_str("recode_stim_coding"),
            Self::DropIncomplete(columns) => write!(f, "drop_incomplete({})", columns.join(", ")),
            Self::CanonicalizeSessions {
                balance_if_remapped: true,
            } => f.write_str("canonicalize_sessions+balance"),
            Self::CanonicalizeSessions { .. } => f.write_str("canonicalize_sessions"),
            Self::BalanceDesign => f.write_str("balance_design_matrix"),
        }
    }
}

/// What a parameter receives in one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// Not modulated in this variant.
    Omit,
    Formula(&'static str),
    DependsOn(&'static [&'static str]),
}

/// Data-dependent choice between variants.
///
/// All shapes share one precedence: `transitionprob` present, then more than
/// one coherence level, then the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Fixed(Term),
    ByCoherence {
        multiple: Term,
        single: Term,
    },
    ByTransitionProb {
        present: Term,
        absent: Term,
    },
    Cascade {
        transitionprob: Term,
        coherence: Term,
        default: Term,
    },
    /// The recipe refuses datasets carrying `transitionprob`.
    RejectTransitionProb {
        reason: &'static str,
        otherwise: Term,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterRule {
    pub parameter: Parameter,
    pub branch: Branch,
}

impl ParameterRule {
    pub const fn new(parameter: Parameter, branch: Branch) -> Self {
        Self { parameter, branch }
    }

    pub const fn fixed(parameter: Parameter, term: Term) -> Self {
        Self::new(parameter, Branch::Fixed(term))
    }
}

/// Immutable description of how to build one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRecipe {
    pub id: ModelId,
    pub kind: RecipeKind,
    pub transforms: &'static [TransformStep],
    pub rules: &'static [ParameterRule],
    pub include: &'static [Parameter],
    pub group_only: &'static [Parameter],
    pub p_outlier: f64,
    pub keep_regressor_trace: bool,
    pub description: &'static str,
}

impl ModelRecipe {
    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    pub fn family(&self) -> ModelFamily {
        match self.kind {
            RecipeKind::StimCoding { .. } => ModelFamily::StimCoding,
            RecipeKind::Regression => ModelFamily::Regression,
        }
    }

    pub fn rule(&self, parameter: Parameter) -> Option<&ParameterRule> {
        self.rules.iter().find(|r| r.parameter == parameter)
    }

    /// Parameters this recipe can modulate, in rule order.
    pub fn modulated(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.rules.iter().map(|r| r.parameter)
    }

    pub fn rejects_transitionprob(&self) -> bool {
        self.rules
            .iter()
            .any(|r| matches!(r.branch, Branch::RejectTransitionProb { .. }))
    }

    /// Same recipe with a different conditioning pipeline.
    pub(crate) const fn with_transforms(self, transforms: &'static [TransformStep]) -> Self {
        Self { transforms, ..self }
    }
}

/// Shared defaults for the stimcoding family.
pub(crate) const fn stimcoding(
    id: ModelId,
    drift_criterion: bool,
    bias: bool,
    rules: &'static [ParameterRule],
    include: &'static [Parameter],
    description: &'static str,
) -> ModelRecipe {
    ModelRecipe {
        id,
        kind: RecipeKind::StimCoding {
            drift_criterion,
            bias,
        },
        transforms: &[TransformStep::RecodeStimCoding],
        rules,
        include,
        group_only: include,
        p_outlier: P_OUTLIER,
        keep_regressor_trace: false,
        description,
    }
}

/// Shared defaults for the regression family.
pub(crate) const fn regression(
    id: ModelId,
    transforms: &'static [TransformStep],
    rules: &'static [ParameterRule],
    keep_regressor_trace: bool,
    description: &'static str,
) -> ModelRecipe {
    ModelRecipe {
        id,
        kind: RecipeKind::Regression,
        transforms,
        rules,
        include: &[Parameter::Z, Parameter::Sv],
        group_only: &[Parameter::Sv],
        p_outlier: P_OUTLIER,
        keep_regressor_trace,
        description,
    }
}
