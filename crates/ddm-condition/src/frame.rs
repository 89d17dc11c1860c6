use std::fmt;

use polars::prelude::*;

use ddm_common::{has_column, missing_columns};
use ddm_model::TrialRecord;
use ddm_model::columns::{REQUIRED, RESPONSE, RT, SESSION, STIMULUS, SUBJECT};

use crate::error::{ConditionError, Result};
use crate::sessions::{SessionMap, balance_design_matrix, canonicalize_sessions};
use crate::transforms::{drop_incomplete, recode_stim_coding};

/// A conditioning step that has been applied to a [`TrialTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    RecodeStimCoding,
    BalanceDesignMatrix,
    CanonicalizeSessions,
    DropIncomplete { columns: Vec<String> },
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecodeStimCoding => f.write_str("recode_stim_coding"),
            Self::BalanceDesignMatrix => f.write_str("balance_design_matrix"),
            Self::CanonicalizeSessions => f.write_str("canonicalize_sessions"),
            Self::DropIncomplete { columns } => {
                write!(f, "drop_incomplete({})", columns.join(", "))
            }
        }
    }
}

/// Trial data plus the history of conditioning applied to it.
///
/// Every transform returns a new table; the receiver is never modified, so
/// resolving several recipes against one dataset is safe.
#[derive(Debug, Clone)]
pub struct TrialTable {
    data: DataFrame,
    applied: Vec<Transform>,
}

impl TrialTable {
    /// Wrap a frame that carries every required trial column.
    pub fn new(data: DataFrame) -> Result<Self> {
        if let Some(column) = missing_columns(&data, &REQUIRED).into_iter().next() {
            return Err(ConditionError::MissingColumn { column });
        }
        Ok(Self {
            data,
            applied: Vec::new(),
        })
    }

    /// Build a table from in-memory records.
    ///
    /// An optional field becomes a column only if at least one record has it.
    pub fn from_records(records: &[TrialRecord]) -> Result<Self> {
        let mut columns = vec![
            Column::new(
                SUBJECT.into(),
                records.iter().map(|r| r.subj_idx).collect::<Vec<_>>(),
            ),
            Column::new(
                SESSION.into(),
                records.iter().map(|r| r.session).collect::<Vec<_>>(),
            ),
            Column::new(
                STIMULUS.into(),
                records.iter().map(|r| r.stimulus).collect::<Vec<_>>(),
            ),
            Column::new(
                RESPONSE.into(),
                records.iter().map(|r| r.response).collect::<Vec<_>>(),
            ),
            Column::new(RT.into(), records.iter().map(|r| r.rt).collect::<Vec<_>>()),
        ];

        let optional: Vec<[(&'static str, Option<f64>); 14]> =
            records.iter().map(TrialRecord::optional_fields).collect();
        for idx in 0..14 {
            if !optional.iter().any(|fields| fields[idx].1.is_some()) {
                continue;
            }
            let name = optional.first().map_or("", |fields| fields[idx].0);
            let values: Vec<Option<f64>> = optional.iter().map(|fields| fields[idx].1).collect();
            columns.push(Column::new(name.into(), values));
        }

        Self::new(DataFrame::new(columns)?)
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn has_column(&self, name: &str) -> bool {
        has_column(&self.data, name)
    }

    pub fn applied(&self) -> &[Transform] {
        &self.applied
    }

    pub fn is_applied(&self, transform: &Transform) -> bool {
        self.applied.contains(transform)
    }

    fn derive(&self, data: DataFrame, transform: Transform) -> Self {
        let mut applied = self.applied.clone();
        applied.push(transform);
        Self { data, applied }
    }

    /// Split the signed stimulus into coherence and identity.
    ///
    /// # Errors
    ///
    /// [`ConditionError::AlreadyApplied`] if this table was already recoded,
    /// plus anything [`recode_stim_coding`] returns.
    pub fn recode_stim_coding(&self) -> Result<Self> {
        if self.is_applied(&Transform::RecodeStimCoding) {
            return Err(ConditionError::AlreadyApplied {
                transform: Transform::RecodeStimCoding.to_string(),
            });
        }
        let data = recode_stim_coding(&self.data)?;
        Ok(self.derive(data, Transform::RecodeStimCoding))
    }

    pub fn balance_design_matrix(&self) -> Result<Self> {
        let data = balance_design_matrix(&self.data)?;
        Ok(self.derive(data, Transform::BalanceDesignMatrix))
    }

    /// Relabel gapped sessions. The returned flag is true when a remap happened;
    /// the transform is only recorded in that case.
    pub fn canonicalize_sessions(&self, map: &SessionMap) -> Result<(Self, bool)> {
        let (data, remapped) = canonicalize_sessions(&self.data, map)?;
        if remapped {
            Ok((self.derive(data, Transform::CanonicalizeSessions), true))
        } else {
            Ok((self.clone(), false))
        }
    }

    pub fn drop_incomplete(&self, columns: &[&str]) -> Result<Self> {
        let data = drop_incomplete(&self.data, columns)?;
        let transform = Transform::DropIncomplete {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        };
        Ok(self.derive(data, transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TrialRecord> {
        let mut a = TrialRecord::new(1, 1, -0.5, 0, 0.61);
        a.prevresp = Some(1.0);
        let b = TrialRecord::new(1, 1, 0.5, 1, 0.48);
        vec![a, b]
    }

    #[test]
    fn from_records_adds_only_populated_optionals() {
        let table = TrialTable::from_records(&records()).unwrap();
        assert_eq!(table.height(), 2);
        assert!(table.has_column("prevresp"));
        assert!(!table.has_column("prevrt"));
        assert!(!table.has_column("transitionprob"));
        assert_eq!(table.data().column("prevresp").unwrap().null_count(), 1);
    }

    #[test]
    fn new_requires_trial_columns() {
        let df = df!("subj_idx" => [1i64], "stimulus" => [1.0f64]).unwrap();
        let err = TrialTable::new(df).unwrap_err();
        assert!(matches!(err, ConditionError::MissingColumn { column } if column == "session"));
    }

    #[test]
    fn transform_display() {
        assert_eq!(Transform::RecodeStimCoding.to_string(), "recode_stim_coding");
        let drop = Transform::DropIncomplete {
            columns: vec!["prevresp".into(), "prevrt".into()],
        };
        assert_eq!(drop.to_string(), "drop_incomplete(prevresp, prevrt)");
    }
}
