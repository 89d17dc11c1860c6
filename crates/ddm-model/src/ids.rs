//! Catalogued model identifiers.
//!
//! Identifiers are a closed set. The string form is the public name used on
//! the command line and in fit artifact paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Every model recipe the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelId {
    StimcodingNohist,
    StimcodingNohistOnlyz,
    StimcodingNohistOnlydc,
    StimcodingDcPrevresp,
    StimcodingZPrevresp,
    StimcodingDcZPrevresp,
    StimcodingSzNohist,
    StimcodingSzDcPrevresp,
    StimcodingSzZPrevresp,
    StimcodingSzDcZPrevresp,
    StimcodingDcZPrevrespPharma,
    StimcodingDcPrevrespSessions,
    StimcodingDcZPrevrespSessions,
    StimcodingDcPrevcorrect,
    StimcodingZPrevcorrect,
    StimcodingDcZPrevcorrect,
    RegressNohist,
    RegressDcPrevresp,
    RegressDc2Prevresp,
    RegressDcPrevrespPrevrt,
    RegressDcZPrevresp,
    RegressDcZPrevrespPrevrt,
    RegressDcZPrev2resp,
    RegressDcZPrev3resp,
    RegressDcPrevrespPrevstimPrevpupil,
    RegressDcPrevrespPrevstimPrevrt,
    RegressDcPrevrespPrevstimPrevrtPrevpupil,
    RegressDcZPrevrespPrevstimPrevpupil,
    RegressDcZPrevrespPrevstimPrevrtPrevpupil,
    RegressDcPrevrespPrevstimVasessions,
    RegressDcZPrevrespPrevstimVasessions,
    RegressDcPrevrespPrevstimVasessionsPrevrespsessions,
    RegressDcPrevrespPrevstimVasessionsPrevpupil,
    RegressDcPrevrespPrevstimVasessionsPrevrt,
    RegressDcPrevrespPrevstimVasessionsPrevrtPrevpupil,
    RegressDcZVisualgamma,
    RegressDcZMotorslope,
    RegressDcZMotorstart,
    RegressDcZPrevrespVisualgamma,
    RegressDcZPrevrespMotorslope,
    RegressDcZPrevrespMotorstart,
}

/// Broad family a recipe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// Binary-choice models on a precomputed stimulus coding; parameters are
    /// split by categorical columns.
    StimCoding,
    /// Linear-model formulas on trial-level predictors.
    Regression,
}

impl ModelFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::StimCoding => "stimcoding",
            ModelFamily::Regression => "regression",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ModelId {
    /// All identifiers, in catalog order.
    pub const ALL: [ModelId; 41] = [
        ModelId::StimcodingNohist,
        ModelId::StimcodingNohistOnlyz,
        ModelId::StimcodingNohistOnlydc,
        ModelId::StimcodingDcPrevresp,
        ModelId::StimcodingZPrevresp,
        ModelId::StimcodingDcZPrevresp,
        ModelId::StimcodingSzNohist,
        ModelId::StimcodingSzDcPrevresp,
        ModelId::StimcodingSzZPrevresp,
        ModelId::StimcodingSzDcZPrevresp,
        ModelId::StimcodingDcZPrevrespPharma,
        ModelId::StimcodingDcPrevrespSessions,
        ModelId::StimcodingDcZPrevrespSessions,
        ModelId::StimcodingDcPrevcorrect,
        ModelId::StimcodingZPrevcorrect,
        ModelId::StimcodingDcZPrevcorrect,
        ModelId::RegressNohist,
        ModelId::RegressDcPrevresp,
        ModelId::RegressDc2Prevresp,
        ModelId::RegressDcPrevrespPrevrt,
        ModelId::RegressDcZPrevresp,
        ModelId::RegressDcZPrevrespPrevrt,
        ModelId::RegressDcZPrev2resp,
        ModelId::RegressDcZPrev3resp,
        ModelId::RegressDcPrevrespPrevstimPrevpupil,
        ModelId::RegressDcPrevrespPrevstimPrevrt,
        ModelId::RegressDcPrevrespPrevstimPrevrtPrevpupil,
        ModelId::RegressDcZPrevrespPrevstimPrevpupil,
        ModelId::RegressDcZPrevrespPrevstimPrevrtPrevpupil,
        ModelId::RegressDcPrevrespPrevstimVasessions,
        ModelId::RegressDcZPrevrespPrevstimVasessions,
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevrespsessions,
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevpupil,
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevrt,
        ModelId::RegressDcPrevrespPrevstimVasessionsPrevrtPrevpupil,
        ModelId::RegressDcZVisualgamma,
        ModelId::RegressDcZMotorslope,
        ModelId::RegressDcZMotorstart,
        ModelId::RegressDcZPrevrespVisualgamma,
        ModelId::RegressDcZPrevrespMotorslope,
        ModelId::RegressDcZPrevrespMotorstart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::StimcodingNohist => "stimcoding_nohist",
            ModelId::StimcodingNohistOnlyz => "stimcoding_nohist_onlyz",
            ModelId::StimcodingNohistOnlydc => "stimcoding_nohist_onlydc",
            ModelId::StimcodingDcPrevresp => "stimcoding_dc_prevresp",
            ModelId::StimcodingZPrevresp => "stimcoding_z_prevresp",
            ModelId::StimcodingDcZPrevresp => "stimcoding_dc_z_prevresp",
            ModelId::StimcodingSzNohist => "stimcoding_sz_nohist",
            ModelId::StimcodingSzDcPrevresp => "stimcoding_sz_dc_prevresp",
            ModelId::StimcodingSzZPrevresp => "stimcoding_sz_z_prevresp",
            ModelId::StimcodingSzDcZPrevresp => "stimcoding_sz_dc_z_prevresp",
            ModelId::StimcodingDcZPrevrespPharma => "stimcoding_dc_z_prevresp_pharma",
            ModelId::StimcodingDcPrevrespSessions => "stimcoding_dc_prevresp_sessions",
            ModelId::StimcodingDcZPrevrespSessions => "stimcoding_dc_z_prevresp_sessions",
            ModelId::StimcodingDcPrevcorrect => "stimcoding_dc_prevcorrect",
            ModelId::StimcodingZPrevcorrect => "stimcoding_z_prevcorrect",
            ModelId::StimcodingDcZPrevcorrect => "stimcoding_dc_z_prevcorrect",
            ModelId::RegressNohist => "regress_nohist",
            ModelId::RegressDcPrevresp => "regress_dc_prevresp",
            ModelId::RegressDc2Prevresp => "regress_dc2_prevresp",
            ModelId::RegressDcPrevrespPrevrt => "regress_dc_prevresp_prevrt",
            ModelId::RegressDcZPrevresp => "regress_dc_z_prevresp",
            ModelId::RegressDcZPrevrespPrevrt => "regress_dc_z_prevresp_prevrt",
            ModelId::RegressDcZPrev2resp => "regress_dc_z_prev2resp",
            ModelId::RegressDcZPrev3resp => "regress_dc_z_prev3resp",
            ModelId::RegressDcPrevrespPrevstimPrevpupil => "regress_dc_prevresp_prevstim_prevpupil",
            ModelId::RegressDcPrevrespPrevstimPrevrt => "regress_dc_prevresp_prevstim_prevrt",
            ModelId::RegressDcPrevrespPrevstimPrevrtPrevpupil => "regress_dc_prevresp_prevstim_prevrt_prevpupil",
            ModelId::RegressDcZPrevrespPrevstimPrevpupil => "regress_dc_z_prevresp_prevstim_prevpupil",
            ModelId::RegressDcZPrevrespPrevstimPrevrtPrevpupil => "regress_dc_z_prevresp_prevstim_prevrt_prevpupil",
            ModelId::RegressDcPrevrespPrevstimVasessions => "regress_dc_prevresp_prevstim_vasessions",
            ModelId::RegressDcZPrevrespPrevstimVasessions => "regress_dc_z_prevresp_prevstim_vasessions",
            ModelId::RegressDcPrevrespPrevstimVasessionsPrevrespsessions => "regress_dc_prevresp_prevstim_vasessions_prevrespsessions",
            ModelId::RegressDcPrevrespPrevstimVasessionsPrevpupil => "regress_dc_prevresp_prevstim_vasessions_prevpupil",
            ModelId::RegressDcPrevrespPrevstimVasessionsPrevrt => "regress_dc_prevresp_prevstim_vasessions_prevrt",
            ModelId::RegressDcPrevrespPrevstimVasessionsPrevrtPrevpupil => "regress_dc_prevresp_prevstim_vasessions_prevrt_prevpupil",
            ModelId::RegressDcZVisualgamma => "regress_dc_z_visualgamma",
            ModelId::RegressDcZMotorslope => "regress_dc_z_motorslope",
            ModelId::RegressDcZMotorstart => "regress_dc_z_motorstart",
            ModelId::RegressDcZPrevrespVisualgamma => "regress_dc_z_prevresp_visualgamma",
            ModelId::RegressDcZPrevrespMotorslope => "regress_dc_z_prevresp_motorslope",
            ModelId::RegressDcZPrevrespMotorstart => "regress_dc_z_prevresp_motorstart",
        }
    }

    /// Family implied by the identifier prefix.
    pub fn family(&self) -> ModelFamily {
        if self.as_str().starts_with("stimcoding_") {
            ModelFamily::StimCoding
        } else {
            ModelFamily::Regression
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ModelError;

    /// Exact, case-sensitive match on the public name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}
