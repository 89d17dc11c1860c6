use polars::prelude::*;

use ddm_condition::TrialTable;
use ddm_core::{ResolveOptions, resolve};

fn trials(with_transitionprob: bool) -> TrialTable {
    let mut df = df!(
        "subj_idx" => [1i64, 1, 1, 1, 2, 2, 2, 2],
        "session" => [1i64, 1, 1, 1, 1, 1, 1, 1],
        "stimulus" => [-1.0f64, 1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0],
        "response" => [0i64, 1, 1, 1, 1, 0, 0, 1],
        "rt" => [0.61f64, 0.52, 0.48, 0.77, 0.55, 0.69, 0.58, 0.50],
        "prevresp" => [0.0f64, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0]
    )
    .expect("df");
    if with_transitionprob {
        df.with_column(Column::new(
            "transitionprob".into(),
            [0.2f64, 0.2, 0.2, 0.2, 0.8, 0.8, 0.8, 0.8],
        ))
        .expect("transitionprob");
    }
    TrialTable::new(df).expect("table")
}

#[test]
fn regression_specification_snapshot() {
    let resolved = resolve(
        "regress_dc_z_prevresp",
        &trials(false),
        &ResolveOptions::default(),
    )
    .expect("resolve");
    insta::assert_snapshot!("regress_dc_z_prevresp", resolved.specification.to_string());
}

#[test]
fn stimcoding_specification_snapshot() {
    let options = ResolveOptions::default().with_trace_id(7);
    let resolved = resolve("stimcoding_dc_z_prevresp", &trials(true), &options).expect("resolve");
    insta::assert_snapshot!("stimcoding_dc_z_prevresp", resolved.specification.to_string());
}

#[test]
fn specification_json_shape() {
    let resolved = resolve(
        "regress_dc_z_prevresp",
        &trials(true),
        &ResolveOptions::default(),
    )
    .expect("resolve");
    let json = serde_json::to_value(&resolved.specification).expect("json");
    assert_eq!(json["model"], "regress_dc_z_prevresp");
    assert_eq!(json["regressors"][0]["formula"], "v ~ 1 + stimulus + C(transitionprob):prevresp");
    assert_eq!(json["regressors"][1]["link"], "logistic");
    assert_eq!(json["p_outlier"], 0.05);
    assert!(json["stim_coding"].is_null());
}
