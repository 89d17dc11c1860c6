//! Stimcoding recipes: parameters split by categorical columns.

use ddm_model::columns::{COHERENCE, DRUG, PREVCORRECT, PREVRESP, SESSION, TRANSITIONPROB};
use ddm_model::{ModelId, Parameter};

use crate::recipe::{Branch, ModelRecipe, ParameterRule, Term, TransformStep, stimcoding};

const SV: &[Parameter] = &[Parameter::Sv];
const SV_SZ: &[Parameter] = &[Parameter::Sv, Parameter::Sz];

/// Session-indexed recipes need every subject to cover the same sessions.
const RECODE_BALANCED: &[TransformStep] = &[
    TransformStep::RecodeStimCoding,
    TransformStep::BalanceDesign,
];

/// Drift rate split by coherence whenever the data has several levels.
const V_BY_COHERENCE: ParameterRule = ParameterRule::new(
    Parameter::V,
    Branch::ByCoherence {
        multiple: Term::DependsOn(&[COHERENCE]),
        single: Term::Omit,
    },
);

/// History recipes also split drift rate by coherence in the transitionprob
/// variant, whatever the number of levels.
const V_CASCADE: ParameterRule = ParameterRule::new(
    Parameter::V,
    Branch::Cascade {
        transitionprob: Term::DependsOn(&[COHERENCE]),
        coherence: Term::DependsOn(&[COHERENCE]),
        default: Term::Omit,
    },
);

const fn history(
    parameter: Parameter,
    with_transitionprob: &'static [&'static str],
    without: &'static [&'static str],
) -> ParameterRule {
    ParameterRule::new(
        parameter,
        Branch::Cascade {
            transitionprob: Term::DependsOn(with_transitionprob),
            coherence: Term::DependsOn(without),
            default: Term::DependsOn(without),
        },
    )
}

const DC_PREVRESP: ParameterRule = history(
    Parameter::Dc,
    &[PREVRESP, TRANSITIONPROB],
    &[PREVRESP],
);
const Z_PREVRESP: ParameterRule =
    history(Parameter::Z, &[PREVRESP, TRANSITIONPROB], &[PREVRESP]);
const DC_PREVCORRECT: ParameterRule = history(
    Parameter::Dc,
    &[PREVRESP, PREVCORRECT, TRANSITIONPROB],
    &[PREVRESP, PREVCORRECT],
);
const Z_PREVCORRECT: ParameterRule = history(
    Parameter::Z,
    &[PREVRESP, PREVCORRECT, TRANSITIONPROB],
    &[PREVRESP, PREVCORRECT],
);

pub(crate) static RECIPES: &[ModelRecipe] = &[
    stimcoding(
        ModelId::StimcodingNohist,
        true,
        true,
        &[V_BY_COHERENCE],
        SV,
        "No history; drift criterion and bias as free group parameters",
    ),
    stimcoding(
        ModelId::StimcodingNohistOnlyz,
        false,
        true,
        &[V_BY_COHERENCE],
        SV,
        "No history; starting-point bias only",
    ),
    stimcoding(
        ModelId::StimcodingNohistOnlydc,
        true,
        false,
        &[V_BY_COHERENCE],
        SV,
        "No history; drift criterion only",
    ),
    stimcoding(
        ModelId::StimcodingDcPrevresp,
        true,
        true,
        &[V_CASCADE, DC_PREVRESP],
        SV,
        "Drift criterion split by previous response",
    ),
    stimcoding(
        ModelId::StimcodingZPrevresp,
        true,
        true,
        &[V_CASCADE, Z_PREVRESP],
        SV,
        "Starting point split by previous response",
    ),
    stimcoding(
        ModelId::StimcodingDcZPrevresp,
        true,
        true,
        &[V_CASCADE, DC_PREVRESP, Z_PREVRESP],
        SV,
        "Drift criterion and starting point split by previous response",
    ),
    stimcoding(
        ModelId::StimcodingSzNohist,
        true,
        true,
        &[V_BY_COHERENCE],
        SV_SZ,
        "No history, with starting-point variability",
    ),
    stimcoding(
        ModelId::StimcodingSzDcPrevresp,
        true,
        true,
        &[V_CASCADE, DC_PREVRESP],
        SV_SZ,
        "Drift criterion by previous response, with starting-point variability",
    ),
    stimcoding(
        ModelId::StimcodingSzZPrevresp,
        true,
        true,
        &[V_CASCADE, Z_PREVRESP],
        SV_SZ,
        "Starting point by previous response, with starting-point variability",
    ),
    stimcoding(
        ModelId::StimcodingSzDcZPrevresp,
        true,
        true,
        &[V_CASCADE, DC_PREVRESP, Z_PREVRESP],
        SV_SZ,
        "Drift criterion and starting point by previous response, with starting-point variability",
    ),
    stimcoding(
        ModelId::StimcodingDcZPrevrespPharma,
        true,
        true,
        &[
            ParameterRule::fixed(Parameter::Dc, Term::DependsOn(&[PREVRESP, DRUG])),
            ParameterRule::fixed(Parameter::Z, Term::DependsOn(&[PREVRESP, DRUG])),
        ],
        SV,
        "History effects split by drug condition",
    ),
    stimcoding(
        ModelId::StimcodingDcPrevrespSessions,
        true,
        true,
        &[ParameterRule::fixed(
            Parameter::Dc,
            Term::DependsOn(&[PREVRESP, SESSION]),
        )],
        SV,
        "Drift criterion history effect per session",
    )
    .with_transforms(RECODE_BALANCED),
    stimcoding(
        ModelId::StimcodingDcZPrevrespSessions,
        true,
        true,
        &[
            ParameterRule::fixed(Parameter::Dc, Term::DependsOn(&[PREVRESP, SESSION])),
            ParameterRule::fixed(Parameter::Z, Term::DependsOn(&[PREVRESP, SESSION])),
        ],
        SV,
        "Drift criterion and starting point history effects per session",
    )
    .with_transforms(RECODE_BALANCED),
    stimcoding(
        ModelId::StimcodingDcPrevcorrect,
        true,
        true,
        &[V_CASCADE, DC_PREVCORRECT],
        SV,
        "Drift criterion by previous response and its correctness",
    ),
    stimcoding(
        ModelId::StimcodingZPrevcorrect,
        true,
        true,
        &[V_CASCADE, Z_PREVCORRECT],
        SV,
        "Starting point by previous response and its correctness",
    ),
    stimcoding(
        ModelId::StimcodingDcZPrevcorrect,
        true,
        true,
        &[V_CASCADE, DC_PREVCORRECT, Z_PREVCORRECT],
        SV,
        "Drift criterion and starting point by previous response and its correctness",
    ),
];
