//! Shared types for drift-diffusion model recipes.
//!
//! - **ids**: the closed set of model identifiers and their families
//! - **parameter**: diffusion-model parameters and their canonical order
//! - **link**: link functions applied to regression targets
//! - **spec**: the resolved specification and the fit-artifact naming convention
//! - **trial**: trial records and table column names

pub mod error;
pub mod ids;
pub mod link;
pub mod parameter;
pub mod spec;
pub mod trial;

pub use error::{ModelError, Result};
pub use ids::{ModelFamily, ModelId};
pub use link::LinkFunction;
pub use parameter::Parameter;
pub use spec::{
    FitArtifact, ModelSpecification, P_OUTLIER, ParameterDependency, RegressorSpec, STIM_COLUMN,
    StimCoding, formula_columns,
};
pub use trial::{TrialRecord, columns};
