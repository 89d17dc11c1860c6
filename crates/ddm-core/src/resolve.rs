use tracing::{info, info_span};

use ddm_catalog::{ModelCatalog, default_catalog};
use ddm_condition::TrialTable;
use ddm_model::{ModelId, ModelSpecification};

use crate::branch::{check_columns, select_variants};
use crate::builder::build_specification;
use crate::conditioning::condition;
use crate::error::{ResolveError, Result};
use crate::options::ResolveOptions;
use crate::profile::DataProfile;

/// A specification together with the conditioned data it was resolved against.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub specification: ModelSpecification,
    pub data: TrialTable,
}

/// Resolve a model by its public name against the built-in catalog.
///
/// # Errors
///
/// [`ResolveError::UnknownModel`] for names that are not catalogued, plus
/// everything [`resolve_model`] returns.
pub fn resolve(name: &str, table: &TrialTable, options: &ResolveOptions) -> Result<ResolvedModel> {
    let id: ModelId = name
        .parse()
        .map_err(|_| ResolveError::UnknownModel(name.to_string()))?;
    resolve_model(default_catalog(), id, table, options)
}

/// Condition `table` for the recipe of `id`, select its variants and build
/// the specification. `table` itself is left untouched.
pub fn resolve_model(
    catalog: &ModelCatalog,
    id: ModelId,
    table: &TrialTable,
    options: &ResolveOptions,
) -> Result<ResolvedModel> {
    let recipe = catalog
        .get(id)
        .ok_or_else(|| ResolveError::UnknownModel(id.to_string()))?;
    let span = info_span!("resolve", model = %id, trace_id = options.trace_id);
    let _guard = span.enter();

    let data = condition(recipe, table, options)?;
    let profile = DataProfile::from_table(&data)?;
    let selections = select_variants(recipe, &profile)?;
    check_columns(recipe, &selections, &data)?;
    let specification = build_specification(recipe, &selections, options.trace_id);

    info!(
        rows = data.height(),
        regressors = specification.regressors.len(),
        dependencies = specification.depends_on.len(),
        transitionprob = profile.has_transitionprob,
        coherence_levels = profile.coherence_levels,
        "resolved model specification"
    );
    Ok(ResolvedModel {
        specification,
        data,
    })
}
