//! Dataset conditioning for model recipes.
//!
//! Recipes do not edit trial data in place. Each step on a [`TrialTable`]
//! yields a new table and records itself, which lets the non-idempotent
//! stimulus recoding refuse to run twice.

pub mod error;
pub mod frame;
pub mod sessions;
pub mod transforms;

pub use error::{ConditionError, Result};
pub use frame::{Transform, TrialTable};
pub use sessions::{SessionMap, balance_design_matrix, canonicalize_sessions};
pub use transforms::{drop_incomplete, recode_stim_coding};
