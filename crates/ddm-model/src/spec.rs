//! Resolved model specification handed to the inference engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::ids::{ModelFamily, ModelId};
use crate::link::LinkFunction;
use crate::parameter::Parameter;

/// Probability of the contaminant mixture component. Identical for every recipe.
pub const P_OUTLIER: f64 = 0.05;

/// Stimulus column used by every stimcoding recipe.
pub const STIM_COLUMN: &str = "stimulus";

/// A linear-model formula for one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegressorSpec {
    pub parameter: Parameter,
    /// Patsy-style formula, e.g. `v ~ 1 + stimulus + prevresp`.
    pub formula: String,
    pub link: LinkFunction,
}

impl RegressorSpec {
    /// Regressor with the parameter's default link.
    pub fn new(parameter: Parameter, formula: impl Into<String>) -> Self {
        Self {
            parameter,
            formula: formula.into(),
            link: parameter.default_link(),
        }
    }
}

/// A parameter split by one or more categorical columns (stimcoding only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDependency {
    pub parameter: Parameter,
    pub columns: Vec<String>,
}

impl ParameterDependency {
    pub fn new(parameter: Parameter, columns: &[&str]) -> Self {
        Self {
            parameter,
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// Structural flags of a stimcoding model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StimCoding {
    pub stim_col: String,
    pub split_param: Parameter,
    pub drift_criterion: bool,
    pub bias: bool,
}

impl StimCoding {
    pub fn new(drift_criterion: bool, bias: bool) -> Self {
        Self {
            stim_col: STIM_COLUMN.to_string(),
            split_param: Parameter::V,
            drift_criterion,
            bias,
        }
    }
}

/// Everything the inference engine needs to build one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpecification {
    pub model: ModelId,
    /// Opaque correlation id supplied by the caller.
    pub trace_id: u32,
    pub regressors: Vec<RegressorSpec>,
    pub depends_on: Vec<ParameterDependency>,
    pub include: Vec<Parameter>,
    pub group_only_nodes: Vec<Parameter>,
    pub group_only_regressors: bool,
    pub p_outlier: f64,
    pub keep_regressor_trace: bool,
    pub stim_coding: Option<StimCoding>,
}

impl ModelSpecification {
    pub fn model_name(&self) -> &'static str {
        self.model.as_str()
    }

    pub fn family(&self) -> ModelFamily {
        if self.stim_coding.is_some() {
            ModelFamily::StimCoding
        } else {
            ModelFamily::Regression
        }
    }

    pub fn regressor(&self, parameter: Parameter) -> Option<&RegressorSpec> {
        self.regressors.iter().find(|r| r.parameter == parameter)
    }

    pub fn dependency(&self, parameter: Parameter) -> Option<&ParameterDependency> {
        self.depends_on.iter().find(|d| d.parameter == parameter)
    }

    pub fn is_group_only(&self, parameter: Parameter) -> bool {
        self.group_only_nodes.contains(&parameter)
    }

    pub fn artifact(&self) -> FitArtifact {
        FitArtifact::new(self.model, self.trace_id)
    }
}

impl fmt::Display for ModelSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "model: {} (trace {})", self.model, self.trace_id)?;
        writeln!(f, "family: {}", self.family())?;
        if let Some(stim) = &self.stim_coding {
            writeln!(
                f,
                "stim_col: {}, split_param: {}, drift_criterion: {}, bias: {}",
                stim.stim_col, stim.split_param, stim.drift_criterion, stim.bias
            )?;
        }
        if !self.regressors.is_empty() {
            writeln!(f, "regressors:")?;
            for reg in &self.regressors {
                writeln!(f, "  {} [{}]", reg.formula, reg.link)?;
            }
        }
        if !self.depends_on.is_empty() {
            writeln!(f, "depends_on:")?;
            for dep in &self.depends_on {
                writeln!(f, "  {}: {}", dep.parameter, dep.columns.join(", "))?;
            }
        }
        writeln!(f, "include: {}", join_params(&self.include))?;
        writeln!(f, "group_only_nodes: {}", join_params(&self.group_only_nodes))?;
        writeln!(f, "p_outlier: {}", self.p_outlier)?;
        write!(f, "keep_regressor_trace: {}", self.keep_regressor_trace)
    }
}

fn join_params(params: &[Parameter]) -> String {
    params
        .iter()
        .map(Parameter::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Naming convention for a persisted fit; nothing here touches the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitArtifact {
    pub model: ModelId,
    pub trace_id: u32,
}

impl FitArtifact {
    pub fn new(model: ModelId, trace_id: u32) -> Self {
        Self { model, trace_id }
    }

    pub fn file_name(&self) -> String {
        format!("modelfit-md{}.model", self.trace_id)
    }

    /// `{base}/{model_name}/modelfit-md{trace_id}.model`
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(self.model.as_str()).join(self.file_name())
    }
}

/// Extract the data columns a formula refers to, in order of first use.
///
/// Only the right-hand side is scanned. The intercept, numeric literals and
/// the categorical wrapper `C(...)` are not columns.
pub fn formula_columns(formula: &str) -> Vec<String> {
    let rhs = formula.split_once('~').map_or(formula, |(_, rhs)| rhs);
    let chars: Vec<char> = rhs.chars().collect();
    let mut out: Vec<String> = Vec::new();
    let mut idx = 0;
    while idx < chars.len() {
        let ch = chars[idx];
        if ch.is_ascii_alphabetic() || ch == '_' {
            let start = idx;
            while idx < chars.len() && (chars[idx].is_ascii_alphanumeric() || chars[idx] == '_') {
                idx += 1;
            }
            let token: String = chars[start..idx].iter().collect();
            let next = chars[idx..].iter().find(|c| !c.is_whitespace());
            let is_call = next == Some(&'(');
            if !is_call && !out.contains(&token) {
                out.push(token);
            }
        } else {
            idx += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_columns_skip_intercept_and_wrappers() {
        assert_eq!(
            formula_columns("v ~ 1 + stimulus + prevresp:C(transitionprob)"),
            vec!["stimulus", "prevresp", "transitionprob"]
        );
        assert_eq!(
            formula_columns("v ~ (1 + prevresp)*stimulus"),
            vec!["prevresp", "stimulus"]
        );
        assert_eq!(formula_columns("a ~ 1 + C(session)"), vec!["session"]);
        assert!(formula_columns("z ~ 1").is_empty());
    }

    #[test]
    fn formula_columns_dedupe_in_first_use_order() {
        assert_eq!(
            formula_columns("z ~ 1 + prevresp*prevrt + prevresp:prevrt"),
            vec!["prevresp", "prevrt"]
        );
    }

    #[test]
    fn regressor_picks_default_link() {
        let z = RegressorSpec::new(Parameter::Z, "z ~ 1 + prevresp");
        assert_eq!(z.link, LinkFunction::Logistic);
        let v = RegressorSpec::new(Parameter::V, "v ~ 1 + stimulus");
        assert_eq!(v.link, LinkFunction::Identity);
    }

    #[test]
    fn artifact_path_follows_convention() {
        let artifact = FitArtifact::new(ModelId::RegressDcZPrevresp, 3);
        assert_eq!(
            artifact.path(Path::new("/fits")),
            PathBuf::from("/fits/regress_dc_z_prevresp/modelfit-md3.model")
        );
    }
}
