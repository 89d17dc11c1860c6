//! Trial-level input records and the column names they map onto.

use serde::{Deserialize, Serialize};

/// Column names of the trial table.
pub mod columns {
    pub const SUBJECT: &str = "subj_idx";
    pub const SESSION: &str = "session";
    pub const STIMULUS: &str = "stimulus";
    pub const RESPONSE: &str = "response";
    pub const RT: &str = "rt";

    pub const PREVRESP: &str = "prevresp";
    pub const PREVSTIM: &str = "prevstim";
    pub const PREVRT: &str = "prevrt";
    pub const PREVPUPIL: &str = "prevpupil";
    pub const PREV2RESP: &str = "prev2resp";
    pub const PREV2STIM: &str = "prev2stim";
    pub const PREV3RESP: &str = "prev3resp";
    pub const PREV3STIM: &str = "prev3stim";
    pub const COHERENCE: &str = "coherence";
    pub const TRANSITIONPROB: &str = "transitionprob";
    pub const DRUG: &str = "drug";
    pub const VISUALGAMMA: &str = "visualgamma";
    pub const MOTORSLOPE: &str = "motorslope";
    pub const MOTORBETA: &str = "motorbeta";

    /// Derived by the stimulus recoding.
    pub const PREVCORRECT: &str = "prevcorrect";
    pub const PREV2CORRECT: &str = "prev2correct";
    pub const PREV3CORRECT: &str = "prev3correct";

    /// Columns every trial table must carry.
    pub const REQUIRED: [&str; 5] = [SUBJECT, SESSION, STIMULUS, RESPONSE, RT];
}

/// One observed trial.
///
/// Optional fields model columns that a dataset may not carry at all; a field
/// that is `None` on every record produces no column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub subj_idx: i64,
    pub session: i64,
    /// Signed stimulus; the magnitude is the coherence.
    pub stimulus: f64,
    pub response: i64,
    pub rt: f64,
    #[serde(default)]
    pub prevresp: Option<f64>,
    #[serde(default)]
    pub prevstim: Option<f64>,
    #[serde(default)]
    pub prevrt: Option<f64>,
    #[serde(default)]
    pub prevpupil: Option<f64>,
    #[serde(default)]
    pub prev2resp: Option<f64>,
    #[serde(default)]
    pub prev2stim: Option<f64>,
    #[serde(default)]
    pub prev3resp: Option<f64>,
    #[serde(default)]
    pub prev3stim: Option<f64>,
    #[serde(default)]
    pub coherence: Option<f64>,
    #[serde(default)]
    pub transitionprob: Option<f64>,
    #[serde(default)]
    pub drug: Option<f64>,
    #[serde(default)]
    pub visualgamma: Option<f64>,
    #[serde(default)]
    pub motorslope: Option<f64>,
    #[serde(default)]
    pub motorbeta: Option<f64>,
}

impl TrialRecord {
    pub fn new(subj_idx: i64, session: i64, stimulus: f64, response: i64, rt: f64) -> Self {
        Self {
            subj_idx,
            session,
            stimulus,
            response,
            rt,
            ..Self::default()
        }
    }

    /// Optional fields paired with their column names, in table order.
    pub fn optional_fields(&self) -> [(&'static str, Option<f64>); 14] {
        [
            (columns::PREVRESP, self.prevresp),
            (columns::PREVSTIM, self.prevstim),
            (columns::PREVRT, self.prevrt),
            (columns::PREVPUPIL, self.prevpupil),
            (columns::PREV2RESP, self.prev2resp),
            (columns::PREV2STIM, self.prev2stim),
            (columns::PREV3RESP, self.prev3resp),
            (columns::PREV3STIM, self.prev3stim),
            (columns::COHERENCE, self.coherence),
            (columns::TRANSITIONPROB, self.transitionprob),
            (columns::DRUG, self.drug),
            (columns::VISUALGAMMA, self.visualgamma),
            (columns::MOTORSLOPE, self.motorslope),
            (columns::MOTORBETA, self.motorbeta),
        ]
    }
}
