//! Frame-level conditioning transforms.
//!
//! These are pure functions from one `DataFrame` to a new one. They do not
//! track what has already been applied; [`crate::TrialTable`] does that and
//! is the interface recipes go through.
//!
//! [`recode_stim_coding`] in particular is not idempotent: running it on an
//! already recoded frame turns every coherence into 0 or 1.

use polars::prelude::*;
use tracing::debug;

use ddm_common::{has_column, missing_columns};
use ddm_model::columns::{
    COHERENCE, PREV2CORRECT, PREV2RESP, PREV2STIM, PREV3CORRECT, PREV3RESP, PREV3STIM,
    PREVCORRECT, PREVRESP, PREVSTIM, STIMULUS,
};

use crate::error::{ConditionError, Result};

/// Lagged response/stimulus pairs and the correctness column derived from each.
const CORRECTNESS_LAGS: [(&str, &str, &str); 3] = [
    (PREVRESP, PREVSTIM, PREVCORRECT),
    (PREV2RESP, PREV2STIM, PREV2CORRECT),
    (PREV3RESP, PREV3STIM, PREV3CORRECT),
];

/// Split the signed stimulus into magnitude and identity.
///
/// - `coherence = |stimulus|`
/// - `stimulus = 1` for positive values, `0` otherwise (nulls stay null)
/// - `prevcorrect`, `prev2correct`, `prev3correct` = 1 where the lagged
///   response equals the lagged stimulus, else 0, for each lag whose two
///   columns are present
///
/// # Errors
///
/// Returns [`ConditionError::StimulusCoding`] when the recoded stimulus does
/// not take exactly two values.
pub fn recode_stim_coding(df: &DataFrame) -> Result<DataFrame> {
    if !has_column(df, STIMULUS) {
        return Err(ConditionError::MissingColumn {
            column: STIMULUS.to_string(),
        });
    }

    let mut exprs = vec![
        col(STIMULUS).abs().alias(COHERENCE),
        col(STIMULUS)
            .gt(lit(0))
            .cast(DataType::Int64)
            .alias(STIMULUS),
    ];

    for (resp, stim, derived) in CORRECTNESS_LAGS {
        if has_column(df, resp) && has_column(df, stim) {
            exprs.push(
                when(col(resp).eq(col(stim)))
                    .then(lit(1i64))
                    .otherwise(lit(0i64))
                    .alias(derived),
            );
        } else {
            debug!(column = derived, "lag columns absent, skipping correctness derivation");
        }
    }

    let recoded = df.clone().lazy().with_columns(exprs).collect()?;

    let levels = recoded.column(STIMULUS)?.n_unique()?;
    if levels != 2 {
        return Err(ConditionError::StimulusCoding { levels });
    }
    Ok(recoded)
}

/// Keep only trials with a value in every listed column.
///
/// Float columns also treat NaN as missing.
///
/// # Errors
///
/// Returns [`ConditionError::MissingColumn`] for the first listed column
/// that the frame does not carry at all.
pub fn drop_incomplete(df: &DataFrame, required: &[&str]) -> Result<DataFrame> {
    if let Some(column) = missing_columns(df, required).into_iter().next() {
        return Err(ConditionError::MissingColumn { column });
    }

    let mut predicate: Option<Expr> = None;
    for name in required {
        let mut present = col(*name).is_not_null();
        if df.column(name)?.dtype().is_float() {
            present = present.and(col(*name).is_not_nan());
        }
        predicate = Some(match predicate {
            Some(acc) => acc.and(present),
            None => present,
        });
    }
    let Some(predicate) = predicate else {
        return Ok(df.clone());
    };

    let filtered = df.clone().lazy().filter(predicate).collect()?;
    debug!(
        columns = ?required,
        dropped = df.height() - filtered.height(),
        kept = filtered.height(),
        "dropped incomplete trials"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn i64_values(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
        df.column(name)
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect()
    }

    fn f64_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
        df.column(name)
            .unwrap()
            .cast(&DataType::Float64)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn splits_sign_and_magnitude() {
        let df = df!(
            "stimulus" => [-2i64, -1, 1, 2]
        )
        .unwrap();
        let out = recode_stim_coding(&df).unwrap();
        assert_eq!(
            i64_values(&out, COHERENCE),
            vec![Some(2), Some(1), Some(1), Some(2)]
        );
        assert_eq!(
            i64_values(&out, STIMULUS),
            vec![Some(0), Some(0), Some(1), Some(1)]
        );
    }

    #[test]
    fn single_stimulus_identity_is_rejected() {
        let df = df!("stimulus" => [0.5f64, 1.0, 2.0]).unwrap();
        let err = recode_stim_coding(&df).unwrap_err();
        assert!(matches!(err, ConditionError::StimulusCoding { levels: 1 }));
    }

    #[test]
    fn null_stimulus_counts_as_a_third_identity() {
        let df = df!("stimulus" => [Some(-1.0f64), Some(1.0), None]).unwrap();
        let err = recode_stim_coding(&df).unwrap_err();
        assert!(matches!(err, ConditionError::StimulusCoding { levels: 3 }));
    }

    #[test]
    fn derives_prevcorrect_when_lag_present() {
        let df = df!(
            "stimulus" => [-1i64, 1, 1, -1],
            "prevresp" => [Some(1i64), Some(1), Some(0), None],
            "prevstim" => [Some(1i64), Some(0), Some(0), Some(1)]
        )
        .unwrap();
        let out = recode_stim_coding(&df).unwrap();
        assert_eq!(
            i64_values(&out, PREVCORRECT),
            vec![Some(1), Some(0), Some(1), Some(0)]
        );
        assert!(!has_column(&out, PREV2CORRECT));
        assert!(!has_column(&out, PREV3CORRECT));
    }

    #[test]
    fn derives_deeper_lags_when_present() {
        let df = df!(
            "stimulus" => [-1i64, 1],
            "prevresp" => [1i64, 0],
            "prevstim" => [1i64, 1],
            "prev2resp" => [0i64, 0],
            "prev2stim" => [0i64, 1]
        )
        .unwrap();
        let out = recode_stim_coding(&df).unwrap();
        assert_eq!(i64_values(&out, PREV2CORRECT), vec![Some(1), Some(0)]);
        assert!(!has_column(&out, PREV3CORRECT));
    }

    #[test]
    fn recoding_twice_corrupts_coherence() {
        let df = df!("stimulus" => [-0.2f64, -0.1, 0.1, 0.2]).unwrap();
        let once = recode_stim_coding(&df).unwrap();
        let twice = recode_stim_coding(&once).unwrap();
        let once_coh = f64_values(&once, COHERENCE);
        let twice_coh = f64_values(&twice, COHERENCE);
        assert_eq!(once_coh, vec![Some(0.2), Some(0.1), Some(0.1), Some(0.2)]);
        assert_eq!(twice_coh, vec![Some(0.0), Some(0.0), Some(1.0), Some(1.0)]);
    }

    #[test]
    fn drop_incomplete_filters_nulls_and_nans() {
        let df = df!(
            "prevrt" => [Some(0.4f64), None, Some(f64::NAN), Some(0.3)],
            "prevresp" => [Some(1i64), Some(0), Some(1), None]
        )
        .unwrap();
        let out = drop_incomplete(&df, &["prevrt"]).unwrap();
        assert_eq!(out.height(), 2);
        let out = drop_incomplete(&df, &["prevrt", "prevresp"]).unwrap();
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn drop_incomplete_requires_columns() {
        let df = df!("prevrt" => [0.4f64]).unwrap();
        let err = drop_incomplete(&df, &["prevpupil"]).unwrap_err();
        assert!(matches!(err, ConditionError::MissingColumn { column } if column == "prevpupil"));
    }

    proptest! {
        #[test]
        fn recoding_yields_two_identities_or_fails(
            stimuli in proptest::collection::vec(-3.0f64..3.0, 1..40)
        ) {
            let df = df!("stimulus" => stimuli.clone()).unwrap();
            let positive = stimuli.iter().any(|s| *s > 0.0);
            let non_positive = stimuli.iter().any(|s| *s <= 0.0);

            match recode_stim_coding(&df) {
                Ok(out) => {
                    prop_assert!(positive && non_positive);
                    let mut identities = i64_values(&out, STIMULUS);
                    identities.sort();
                    identities.dedup();
                    prop_assert_eq!(identities, vec![Some(0), Some(1)]);
                    let coherence = f64_values(&out, COHERENCE);
                    for (raw, coh) in stimuli.iter().zip(coherence) {
                        prop_assert_eq!(coh, Some(raw.abs()));
                    }
                }
                Err(err) => {
                    prop_assert!(!(positive && non_positive));
                    prop_assert!(matches!(err, ConditionError::StimulusCoding { levels: 1 }), "expected StimulusCoding {{ levels: 1 }} error");
                }
            }
        }
    }
}
