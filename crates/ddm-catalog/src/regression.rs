//! Regression recipes: patsy formulas on trial-level predictors.
//!
//! Nearly every formula has a `transitionprob` variant that interacts each
//! history term with the transition-probability condition.

use ddm_model::columns::{PREV2RESP, PREV3RESP, PREVPUPIL, PREVRESP, PREVRT};
use ddm_model::{ModelId, Parameter};

use crate::recipe::{Branch, ModelRecipe, ParameterRule, Term, TransformStep, regression};

const fn by_transitionprob(
    parameter: Parameter,
    present: &'static str,
    absent: &'static str,
) -> ParameterRule {
    ParameterRule::new(
        parameter,
        Branch::ByTransitionProb {
            present: Term::Formula(present),
            absent: Term::Formula(absent),
        },
    )
}

const fn fixed(parameter: Parameter, formula: &'static str) -> ParameterRule {
    ParameterRule::fixed(parameter, Term::Formula(formula))
}

const A_BY_SESSION: ParameterRule = fixed(Parameter::A, "a ~ 1 + C(session)");

// Conditioning pipelines.
const PUPIL_BALANCED: &[TransformStep] = &[
    TransformStep::DropIncomplete(&[PREVPUPIL]),
    TransformStep::CanonicalizeSessions {
        balance_if_remapped: false,
    },
    TransformStep::BalanceDesign,
];
const PUPIL_BALANCED_IF_REMAPPED: &[TransformStep] = &[
    TransformStep::DropIncomplete(&[PREVPUPIL]),
    TransformStep::CanonicalizeSessions {
        balance_if_remapped: true,
    },
];
const BALANCED: &[TransformStep] = &[TransformStep::BalanceDesign];

// Formulas shared by several recipes.
const V_PREVPUPIL: ParameterRule = by_transitionprob(
    Parameter::V,
    "v ~ 1 + stimulus + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevpupil:C(transitionprob) + prevstim:prevpupil:C(transitionprob)",
    "v ~ 1 + stimulus + prevresp + prevstim + prevresp:prevpupil + prevstim:prevpupil",
);
const V_PREVRT_PREVPUPIL: ParameterRule = by_transitionprob(
    Parameter::V,
    "v ~ 1 + stimulus + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevpupil:C(transitionprob) + prevstim:prevpupil:C(transitionprob) + prevresp:prevrt:C(transitionprob) + prevstim:prevrt:C(transitionprob)",
    "v ~ 1 + stimulus + prevresp + prevstim + prevresp:prevrt + prevstim:prevrt + prevresp:prevpupil + prevstim:prevpupil",
);
const V_PREVRESP_PREVRT: ParameterRule = by_transitionprob(
    Parameter::V,
    "v ~ 1 + stimulus + C(transitionprob):prevresp + C(transitionprob):prevrt + C(transitionprob):prevresp:prevrt",
    "v ~ 1 + stimulus + prevresp*prevrt",
);
const V_SESSIONS: ParameterRule = by_transitionprob(
    Parameter::V,
    "v ~ 1 + stimulus:C(session) + prevresp:C(transitionprob) + prevstim:C(transitionprob)",
    "v ~ 1 + stimulus:C(session) + prevresp + prevstim",
);

pub(crate) static RECIPES: &[ModelRecipe] = &[
    regression(
        ModelId::RegressNohist,
        &[],
        &[fixed(Parameter::V, "v ~ 1 + stimulus")],
        false,
        "Drift rate driven by the stimulus only",
    ),
    regression(
        ModelId::RegressDcPrevresp,
        &[],
        &[by_transitionprob(
            Parameter::V,
            "v ~ 1 + stimulus + prevresp:C(transitionprob)",
            "v ~ 1 + stimulus + prevresp",
        )],
        false,
        "Drift bias by previous response",
    ),
    regression(
        ModelId::RegressDc2Prevresp,
        &[],
        &[fixed(Parameter::V, "v ~ (1 + prevresp)*stimulus")],
        false,
        "Previous response interacting with the stimulus on drift rate",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevrt,
        &[],
        &[V_PREVRESP_PREVRT],
        false,
        "Drift bias by previous response, modulated by previous RT",
    ),
    regression(
        ModelId::RegressDcZPrevresp,
        &[],
        &[
            by_transitionprob(
                Parameter::V,
                "v ~ 1 + stimulus + C(transitionprob):prevresp",
                "v ~ 1 + stimulus + prevresp",
            ),
            by_transitionprob(
                Parameter::Z,
                "z ~ 1 + C(transitionprob):prevresp",
                "z ~ 1 + prevresp",
            ),
        ],
        false,
        "Drift bias and starting point by previous response",
    ),
    regression(
        ModelId::RegressDcZPrevrespPrevrt,
        &[TransformStep::DropIncomplete(&[PREVRESP, PREVRT])],
        &[
            V_PREVRESP_PREVRT,
            by_transitionprob(
                Parameter::Z,
                "z ~ 1 + prevresp:C(transitionprob) + prevresp:prevrt:C(transitionprob) + prevrt:C(transitionprob)",
                "z ~ 1 + prevresp*prevrt",
            ),
        ],
        false,
        "Drift bias and starting point by previous response, modulated by previous RT",
    ),
    regression(
        ModelId::RegressDcZPrev2resp,
        &[TransformStep::DropIncomplete(&[PREV2RESP])],
        &[
            by_transitionprob(
                Parameter::V,
                "v ~ 1 + stimulus + prevresp:C(transitionprob) + prev2resp:C(transitionprob)",
                "v ~ 1 + stimulus + prevresp + prev2resp",
            ),
            by_transitionprob(
                Parameter::Z,
                "z ~ 1 + prevresp:C(transitionprob) + prev2resp:C(transitionprob)",
                "z ~ 1 + prevresp + prev2resp",
            ),
        ],
        false,
        "History effects of the last two responses",
    ),
    regression(
        ModelId::RegressDcZPrev3resp,
        &[TransformStep::DropIncomplete(&[PREV2RESP, PREV3RESP])],
        &[
            by_transitionprob(
                Parameter::V,
                "v ~ 1 + stimulus + prevresp:C(transitionprob) + prev2resp:C(transitionprob) + prev3resp:C(transitionprob)",
                "v ~ 1 + stimulus + prevresp + prev2resp + prev3resp",
            ),
            by_transitionprob(
                Parameter::Z,
                "z ~ 1 + prevresp:C(transitionprob) + prev2resp:C(transitionprob) + prev3resp:C(transitionprob)",
                "z ~ 1 + prevresp + prev2resp + prev3resp",
            ),
        ],
        false,
        "History effects of the last three responses",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimPrevpupil,
        PUPIL_BALANCED_IF_REMAPPED,
        &[V_PREVPUPIL],
        false,
        "Drift bias by previous response and stimulus, modulated by previous pupil",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimPrevrt,
        BALANCED,
        &[by_transitionprob(
            Parameter::V,
            "v ~ 1 + stimulus + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevrt:C(transitionprob) + prevstim:prevrt:C(transitionprob)",
            "v ~ 1 + stimulus + prevresp + prevstim + prevresp:prevrt + prevstim:prevrt",
        )],
        true,
        "Drift bias by previous response and stimulus, modulated by previous RT",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimPrevrtPrevpupil,
        PUPIL_BALANCED,
        &[V_PREVRT_PREVPUPIL],
        true,
        "Drift bias by previous response and stimulus, modulated by previous RT and pupil",
    ),
    regression(
        ModelId::RegressDcZPrevrespPrevstimPrevpupil,
        PUPIL_BALANCED_IF_REMAPPED,
        &[
            V_PREVPUPIL,
            by_transitionprob(
                Parameter::Z,
                "z ~ 1 + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevpupil:C(transitionprob) + prevstim:prevpupil:C(transitionprob)",
                "z ~ 1 + prevresp + prevstim + prevresp:prevpupil + prevstim:prevpupil",
            ),
        ],
        true,
        "Drift bias and starting point by previous response and stimulus, modulated by previous pupil",
    ),
    regression(
        ModelId::RegressDcZPrevrespPrevstimPrevrtPrevpupil,
        PUPIL_BALANCED,
        &[
            V_PREVRT_PREVPUPIL,
            by_transitionprob(
                Parameter::Z,
                "z ~ 1 + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevpupil:C(transitionprob) + prevstim:prevpupil:C(transitionprob) + prevresp:prevrt:C(transitionprob) + prevstim:prevrt:C(transitionprob)",
                "z ~ 1 + prevresp + prevstim + prevresp:prevpupil + prevstim:prevpupil + prevresp:prevrt + prevstim:prevrt",
            ),
        ],
        false,
        "Drift bias and starting point modulated by previous RT and pupil",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimVasessions,
        BALANCED,
        &[V_SESSIONS, A_BY_SESSION],
        true,
        "Drift rate and boundary separation change over sessions",
    ),
    regression(
        ModelId::RegressDcZPrevrespPrevstimVasessions,
        BALANCED,
        &[
            V_SESSIONS,
            A_BY_SESSION,
            by_transitionprob(
                Parameter::Z,
                "z ~ 1 + prevresp:C(transitionprob) + prevstim:C(transitionprob)",
                "z ~ 1 + prevresp + prevstim",
            ),
        ],
        true,
        "Session-dependent drift rate and boundary, history on drift bias and starting point",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevrespsessions,
        BALANCED,
        &[
            ParameterRule::new(
                Parameter::V,
                Branch::RejectTransitionProb {
                    reason: "session-specific serial bias is not fitted on transition-probability datasets",
                    otherwise: Term::Formula(
                        "v ~ 1 + stimulus:C(session) + prevresp:C(session) + prevstim:C(session)",
                    ),
                },
            ),
            A_BY_SESSION,
        ],
        true,
        "Session-specific history effects on drift bias",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevpupil,
        PUPIL_BALANCED,
        &[
            by_transitionprob(
                Parameter::V,
                "v ~ 1 + stimulus:C(session) + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevpupil:C(transitionprob) + prevstim:prevpupil:C(transitionprob)",
                "v ~ 1 + stimulus:C(session) + prevresp + prevstim + prevresp:prevpupil + prevstim:prevpupil",
            ),
            A_BY_SESSION,
        ],
        true,
        "Session-dependent drift rate and boundary, history modulated by previous pupil",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevrt,
        BALANCED,
        &[
            by_transitionprob(
                Parameter::V,
                "v ~ 1 + stimulus:C(session) + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevrt:C(transitionprob) + prevstim:prevrt:C(transitionprob)",
                "v ~ 1 + stimulus:C(session) + prevresp + prevstim + prevresp:prevrt + prevstim:prevrt",
            ),
            A_BY_SESSION,
        ],
        true,
        "Session-dependent drift rate and boundary, history modulated by previous RT",
    ),
    regression(
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevrtPrevpupil,
        PUPIL_BALANCED,
        &[
            by_transitionprob(
                Parameter::V,
                "v ~ 1 + stimulus:C(session) + prevresp:C(transitionprob) + prevstim:C(transitionprob) + prevresp:prevrt:C(transitionprob) + prevstim:prevrt:C(transitionprob) + prevresp:prevpupil:C(transitionprob) + prevstim:prevpupil:C(transitionprob)",
                "v ~ 1 + stimulus:C(session) + prevresp + prevstim + prevresp:prevrt + prevstim:prevrt + prevresp:prevpupil + prevstim:prevpupil",
            ),
            A_BY_SESSION,
        ],
        true,
        "Session-dependent drift rate and boundary, history modulated by previous RT and pupil",
    ),
    regression(
        ModelId::RegressDcZVisualgamma,
        &[],
        &[
            fixed(Parameter::V, "v ~ 1 + stimulus + visualgamma"),
            fixed(Parameter::Z, "z ~ 1 + visualgamma"),
        ],
        false,
        "Visual gamma-band power on drift bias and starting point",
    ),
    regression(
        ModelId::RegressDcZMotorslope,
        &[],
        &[
            fixed(Parameter::V, "v ~ 1 + stimulus + motorslope"),
            fixed(Parameter::Z, "z ~ 1 + motorslope"),
        ],
        false,
        "Motor beta slope on drift bias and starting point",
    ),
    regression(
        ModelId::RegressDcZMotorstart,
        &[],
        &[
            fixed(Parameter::V, "v ~ 1 + stimulus + motorbeta"),
            fixed(Parameter::Z, "z ~ 1 + motorbeta"),
        ],
        false,
        "Motor beta level at trial start on drift bias and starting point",
    ),
    regression(
        ModelId::RegressDcZPrevrespVisualgamma,
        &[],
        &[
            fixed(Parameter::V, "v ~ 1 + stimulus + prevresp + visualgamma"),
            fixed(Parameter::Z, "z ~ 1 + prevresp + visualgamma"),
        ],
        false,
        "Previous response and visual gamma-band power",
    ),
    regression(
        ModelId::RegressDcZPrevrespMotorslope,
        &[],
        &[
            fixed(Parameter::V, "v ~ 1 + stimulus + prevresp + motorslope"),
            fixed(Parameter::Z, "z ~ 1 + prevresp + motorslope"),
        ],
        false,
        "Previous response and motor beta slope",
    ),
    regression(
        ModelId::RegressDcZPrevrespMotorstart,
        &[],
        &[
            fixed(Parameter::V, "v ~ 1 + stimulus + prevresp + motorbeta"),
            fixed(Parameter::Z, "z ~ 1 + prevresp + motorbeta"),
        ],
        false,
        "Previous response and motor beta level at trial start",
    ),
];
