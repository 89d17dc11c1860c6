//! CSV to resolved model, the path behind `ddm resolve`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use ddm_condition::TrialTable;
use ddm_core::{ResolveOptions, ResolvedModel, resolve};
use ddm_ingest::read_trials_csv;

/// Load a trial CSV and resolve `model` against it.
pub fn resolve_csv(model: &str, csv: &Path, options: &ResolveOptions) -> Result<ResolvedModel> {
    let df = read_trials_csv(csv).with_context(|| format!("read {}", csv.display()))?;
    let table = TrialTable::new(df).context("build trial table")?;
    info!(path = %csv.display(), rows = table.height(), "trial table loaded");
    let resolved = resolve(model, &table, options).with_context(|| format!("resolve {model}"))?;
    Ok(resolved)
}
