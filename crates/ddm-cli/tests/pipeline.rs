//! End-to-end runs from a CSV on disk to a rendered report.

use std::io::Write;
use std::path::Path;

use ddm_cli::pipeline::resolve_csv;
use ddm_cli::report::ResolutionReport;
use ddm_core::ResolveOptions;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file.flush().expect("flush csv");
    file
}

const TRIALS: &str = "\
subj_idx,session,stimulus,response,rt,prevresp,prevstim
1,1,-0.1,0,0.61,1.0,1.0
1,1,0.1,1,0.52,0.0,0.0
1,1,-0.2,0,0.47,1.0,1.0
1,1,0.2,1,0.73,0.0,0.0
2,1,-0.1,1,0.66,0.0,0.0
2,1,0.1,1,0.58,1.0,1.0
";

#[test]
fn stimcoding_from_csv() {
    let file = write_csv(TRIALS);
    let options = ResolveOptions::new().with_trace_id(4);
    let resolved =
        resolve_csv("stimcoding_dc_z_prevresp", file.path(), &options).expect("resolve");

    let spec = &resolved.specification;
    assert_eq!(spec.model_name(), "stimcoding_dc_z_prevresp");
    assert_eq!(spec.depends_on.len(), 3);
    assert_eq!(resolved.data.height(), 6);

    let transforms = resolved
        .data
        .applied()
        .iter()
        .map(ToString::to_string)
        .collect();
    let report = ResolutionReport::new(spec, Path::new("/fits"), resolved.data.height(), transforms);
    let rendered = report.render_pretty();
    assert!(rendered.contains("conditioning: recode_stim_coding"));
    assert!(rendered.contains("rows: 6"));
    assert!(rendered.ends_with("/fits/stimcoding_dc_z_prevresp/modelfit-md4.model"));
}

#[test]
fn report_serializes_specification_and_artifact() {
    let file = write_csv(TRIALS);
    let resolved = resolve_csv("regress_dc_z_prevresp", file.path(), &ResolveOptions::default())
        .expect("resolve");
    let report = ResolutionReport::new(&resolved.specification, Path::new("out"), 6, Vec::new());
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["specification"]["model"], "regress_dc_z_prevresp");
    assert_eq!(json["artifact"], "out/regress_dc_z_prevresp/modelfit-md0.model");
    assert_eq!(json["rows"], 6);
}

#[test]
fn unknown_model_names_the_model() {
    let file = write_csv(TRIALS);
    let err = resolve_csv("regress_everything", file.path(), &ResolveOptions::default())
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("resolve regress_everything"), "{message}");
}

#[test]
fn missing_required_column_is_reported() {
    let file = write_csv("subj_idx,session,stimulus,rt\n1,1,0.1,0.5\n");
    let err = resolve_csv("regress_nohist", file.path(), &ResolveOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("response"));
}

#[test]
fn missing_file_is_an_error() {
    let err = resolve_csv(
        "regress_nohist",
        Path::new("/nonexistent/trials.csv"),
        &ResolveOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/trials.csv"));
}
