//! Session-level conditioning: label canonicalization and design balancing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ddm_common::distinct_i64;
use ddm_model::columns::{SESSION, SUBJECT};

use crate::error::{ConditionError, Result};

const SESSION_COUNT: &str = "__n_sessions";

/// Explicit relabelling of session ids onto contiguous integers.
///
/// The mapping is a property of the dataset, never inferred. The default is
/// the pupil dataset's `{1 → 1, 5 → 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMap(BTreeMap<i64, i64>);

impl SessionMap {
    pub fn new(entries: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn get(&self, label: i64) -> Option<i64> {
        self.0.get(&label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SessionMap {
    fn default() -> Self {
        Self::new([(1, 1), (5, 2)])
    }
}

impl fmt::Display for SessionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}={v}")).collect();
        f.write_str(&parts.join(","))
    }
}

impl FromStr for SessionMap {
    type Err = ConditionError;

    /// Parse `1=1,5=2` style mappings.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = |reason: &str| ConditionError::InvalidSessionMap {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let mut entries = BTreeMap::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (from, to) = part
                .split_once('=')
                .ok_or_else(|| invalid("expected LABEL=INDEX pairs"))?;
            let from: i64 = from.trim().parse().map_err(|_| invalid("label is not an integer"))?;
            let to: i64 = to.trim().parse().map_err(|_| invalid("index is not an integer"))?;
            if entries.insert(from, to).is_some() {
                return Err(invalid("label mapped twice"));
            }
        }
        if entries.is_empty() {
            return Err(invalid("no entries"));
        }
        Ok(Self(entries))
    }
}

/// Relabel sessions through `map` when the labels have gaps.
///
/// Labels have gaps when there are fewer distinct labels than the largest
/// label (e.g. `{1, 5}`). Returns the frame and whether a remap happened.
///
/// # Errors
///
/// Returns [`ConditionError::UnmappedSession`] when a remap is needed and a
/// label has no entry in `map`.
pub fn canonicalize_sessions(df: &DataFrame, map: &SessionMap) -> Result<(DataFrame, bool)> {
    let labels = distinct_i64(df, SESSION)?;
    let Some(&largest) = labels.last() else {
        return Ok((df.clone(), false));
    };
    if largest <= labels.len() as i64 {
        return Ok((df.clone(), false));
    }
    if let Some(&label) = labels.iter().find(|label| map.get(**label).is_none()) {
        return Err(ConditionError::UnmappedSession { label });
    }

    let sessions = df.column(SESSION)?.cast(&DataType::Int64)?;
    let remapped: Int64Chunked = sessions
        .i64()?
        .into_iter()
        .map(|label| label.and_then(|l| map.get(l)))
        .collect();
    let mut out = df.clone();
    out.with_column(remapped.with_name(SESSION.into()).into_series())?;
    debug!(labels = ?labels, map = %map, "canonicalized session labels");
    Ok((out, true))
}

/// Drop subjects that did not complete as many sessions as the most
/// complete subject.
///
/// A subject is kept iff its distinct-session count equals the maximum
/// distinct-session count over all subjects.
pub fn balance_design_matrix(df: &DataFrame) -> Result<DataFrame> {
    let counts = df
        .clone()
        .lazy()
        .group_by([col(SUBJECT)])
        .agg([col(SESSION)
            .n_unique()
            .cast(DataType::Int64)
            .alias(SESSION_COUNT)])
        .collect()?;
    let Some(most) = counts.column(SESSION_COUNT)?.i64()?.max() else {
        return Ok(df.clone());
    };

    let incomplete = counts
        .lazy()
        .filter(col(SESSION_COUNT).lt(lit(most)))
        .collect()?;
    if incomplete.height() == 0 {
        return Ok(df.clone());
    }

    let balanced = df
        .clone()
        .lazy()
        .filter(
            col(SESSION)
                .n_unique()
                .over([col(SUBJECT)])
                .cast(DataType::Int64)
                .eq(lit(most)),
        )
        .collect()?;
    info!(
        dropped_subjects = incomplete.height(),
        sessions = most,
        dropped_trials = df.height() - balanced.height(),
        "balanced design matrix"
    );
    Ok(balanced)
}
