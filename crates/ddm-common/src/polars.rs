//! Polars column helpers.
//!
//! Small lookups over a `DataFrame` that the conditioning transforms and the
//! branch predicates share: column presence, distinct counts and integer
//! label extraction.

use std::collections::BTreeSet;

use polars::prelude::*;

/// Returns true if the frame carries a column with exactly this name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Names from `required` that the frame does not carry, in input order.
pub fn missing_columns(df: &DataFrame, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !has_column(df, name))
        .map(|name| (*name).to_string())
        .collect()
}

/// Number of distinct values in a column. A null counts as one value.
///
/// Returns 0 for a column that is not present.
pub fn n_distinct(df: &DataFrame, name: &str) -> PolarsResult<usize> {
    match df.column(name) {
        Ok(column) => column.n_unique(),
        Err(_) => Ok(0),
    }
}

/// Sorted distinct non-null values of a column interpreted as integers.
pub fn distinct_i64(df: &DataFrame, name: &str) -> PolarsResult<Vec<i64>> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    let values: BTreeSet<i64> = column.i64()?.into_iter().flatten().collect();
    Ok(values.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df!(
            "subj_idx" => [1i64, 1, 2, 2],
            "session" => [5i64, 1, 1, 5],
            "coherence" => [Some(0.1f64), Some(0.2), None, Some(0.1)]
        )
        .unwrap()
    }

    #[test]
    fn test_has_column() {
        let df = frame();
        assert!(has_column(&df, "session"));
        assert!(!has_column(&df, "transitionprob"));
        assert!(!has_column(&df, "SESSION"));
    }

    #[test]
    fn test_missing_columns() {
        let df = frame();
        assert_eq!(
            missing_columns(&df, &["rt", "session", "stimulus"]),
            vec!["rt".to_string(), "stimulus".to_string()]
        );
    }

    #[test]
    fn test_n_distinct_counts_null() {
        let df = frame();
        assert_eq!(n_distinct(&df, "coherence").unwrap(), 3);
        assert_eq!(n_distinct(&df, "subj_idx").unwrap(), 2);
        assert_eq!(n_distinct(&df, "absent").unwrap(), 0);
    }

    #[test]
    fn test_distinct_i64_sorted() {
        let df = frame();
        assert_eq!(distinct_i64(&df, "session").unwrap(), vec![1, 5]);
        assert!(distinct_i64(&df, "absent").is_err());
    }
}
