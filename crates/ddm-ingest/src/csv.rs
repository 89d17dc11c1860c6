//! CSV reading for trial tables.

use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use ddm_common::missing_columns;
use ddm_model::columns;

use crate::error::{IngestError, Result};

/// Rows sampled for dtype inference. Lag columns are often null for the
/// first trials of a block, so this is larger than a header peek.
const INFER_SCHEMA_ROWS: usize = 1000;

/// Reads a trial CSV into a `DataFrame` and checks the required columns.
///
/// Empty cells become nulls, which is what the missingness gates filter on.
pub fn read_trials_csv(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    validate_trial_columns(&df, path)?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded trial table"
    );
    Ok(df)
}

/// Checks that every required trial column is present.
pub fn validate_trial_columns(df: &DataFrame, path: &Path) -> Result<()> {
    let missing = missing_columns(df, &columns::REQUIRED);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        })
    }
}
