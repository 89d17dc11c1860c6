use polars::prelude::*;

use ddm_condition::{ConditionError, SessionMap, Transform, TrialTable};
use ddm_common::distinct_i64;

fn pupil_trials() -> TrialTable {
    let df = df!(
        "subj_idx" => [1i64, 1, 1, 1, 2, 2, 3, 3],
        "session" => [1i64, 1, 5, 5, 1, 1, 1, 5],
        "stimulus" => [-0.2f64, 0.2, -0.1, 0.1, -0.2, 0.2, 0.1, -0.1],
        "response" => [0i64, 1, 0, 1, 1, 1, 0, 0],
        "rt" => [0.5f64, 0.6, 0.7, 0.8, 0.5, 0.4, 0.9, 1.1],
        "prevpupil" => [None, Some(0.3f64), Some(-0.1), Some(0.2), None, Some(0.4), Some(0.1), Some(0.0)]
    )
    .expect("df");
    TrialTable::new(df).expect("trial table")
}

#[test]
fn transforms_leave_the_source_table_untouched() {
    let source = pupil_trials();
    let before = source.data().clone();

    let recoded = source.recode_stim_coding().expect("recode");
    let dropped = source.drop_incomplete(&["prevpupil"]).expect("drop");
    let (remapped, _) = source
        .canonicalize_sessions(&SessionMap::default())
        .expect("sessions");
    let balanced = source.balance_design_matrix().expect("balance");

    assert!(source.data().equals_missing(&before));
    assert!(source.applied().is_empty());
    assert!(!source.has_column("coherence"));
    assert!(recoded.has_column("coherence"));
    assert_eq!(dropped.height(), 6);
    assert_eq!(
        distinct_i64(remapped.data(), "session").expect("sessions"),
        vec![1, 2]
    );
    assert_eq!(balanced.height(), 6);
}

#[test]
fn recoding_is_refused_on_a_recoded_table() {
    let once = pupil_trials().recode_stim_coding().expect("recode");
    let err = once.recode_stim_coding().expect_err("second recode");
    assert!(matches!(err, ConditionError::AlreadyApplied { transform } if transform == "recode_stim_coding"));

    let coherence: Vec<Option<f64>> = once
        .data()
        .column("coherence")
        .and_then(|c| c.cast(&DataType::Float64))
        .expect("coherence")
        .f64()
        .expect("f64")
        .into_iter()
        .collect();
    assert_eq!(coherence[0], Some(0.2));
    assert_eq!(coherence[2], Some(0.1));
}

#[test]
fn pupil_pipeline_records_each_step() {
    let table = pupil_trials()
        .recode_stim_coding()
        .expect("recode")
        .drop_incomplete(&["prevpupil"])
        .expect("drop");
    let (table, remapped) = table
        .canonicalize_sessions(&SessionMap::default())
        .expect("sessions");
    assert!(remapped);
    let table = table.balance_design_matrix().expect("balance");

    assert_eq!(
        table.applied(),
        &[
            Transform::RecodeStimCoding,
            Transform::DropIncomplete {
                columns: vec!["prevpupil".to_string()]
            },
            Transform::CanonicalizeSessions,
            Transform::BalanceDesignMatrix,
        ]
    );
    // subject 2 never ran the second session
    assert_eq!(distinct_i64(table.data(), "subj_idx").expect("subjects"), vec![1, 3]);
    assert_eq!(table.height(), 5);
}

#[test]
fn contiguous_sessions_record_no_remap() {
    let df = df!(
        "subj_idx" => [1i64, 1],
        "session" => [1i64, 2],
        "stimulus" => [-1.0f64, 1.0],
        "response" => [0i64, 1],
        "rt" => [0.5f64, 0.6]
    )
    .expect("df");
    let table = TrialTable::new(df).expect("table");
    let (same, remapped) = table
        .canonicalize_sessions(&SessionMap::default())
        .expect("sessions");
    assert!(!remapped);
    assert!(same.applied().is_empty());
}
