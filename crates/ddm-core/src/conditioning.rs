//! Runs a recipe's transform steps against a trial table.

use tracing::debug;

use ddm_catalog::{ModelRecipe, TransformStep};
use ddm_condition::{ConditionError, TrialTable};

use crate::error::{ResolveError, Result};
use crate::options::ResolveOptions;

/// Apply every step of `recipe` in order. The input table is not modified.
///
/// A missing column in a missingness gate is reported as
/// [`ResolveError::DataIncomplete`]: there is no lower-detail fallback for it.
pub fn condition(
    recipe: &ModelRecipe,
    table: &TrialTable,
    options: &ResolveOptions,
) -> Result<TrialTable> {
    let mut current = table.clone();
    for step in recipe.transforms {
        let rows_before = current.height();
        current = match *step {
            TransformStep::RecodeStimCoding => current.recode_stim_coding()?,
            TransformStep::DropIncomplete(columns) => {
                current.drop_incomplete(columns).map_err(|err| match err {
                    ConditionError::MissingColumn { column } => ResolveError::DataIncomplete {
                        model: recipe.id,
                        column,
                    },
                    other => other.into(),
                })?
            }
            TransformStep::CanonicalizeSessions {
                balance_if_remapped,
            } => {
                let (remapped_table, remapped) =
                    current.canonicalize_sessions(&options.session_map)?;
                if remapped && balance_if_remapped {
                    remapped_table.balance_design_matrix()?
                } else {
                    remapped_table
                }
            }
            TransformStep::BalanceDesign => current.balance_design_matrix()?,
        };
        debug!(
            model = %recipe.id,
            step = %step,
            rows_before,
            rows_after = current.height(),
            "applied transform"
        );
    }
    Ok(current)
}
