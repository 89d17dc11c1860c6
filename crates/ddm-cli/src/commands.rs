use anyhow::{Context, Result};

use ddm_catalog::default_catalog;
use ddm_cli::pipeline::resolve_csv;
use ddm_cli::report::{ResolutionReport, catalog_table};
use ddm_core::ResolveOptions;
use ddm_model::ModelFamily;

use crate::cli::{FamilyArg, ListFormatArg, ModelsArgs, ResolveArgs, SpecFormatArg};

pub fn run_models(args: &ModelsArgs) -> Result<()> {
    let catalog = default_catalog();
    let recipes: Vec<_> = match args.family {
        Some(family) => catalog.by_family(family_from_arg(family)).collect(),
        None => catalog.iter().collect(),
    };
    match args.format {
        ListFormatArg::Table => println!("{}", catalog_table(recipes)),
        ListFormatArg::Json => {
            let json = serde_json::to_string_pretty(&recipes).context("serialize catalog")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let options = ResolveOptions::new()
        .with_session_map(args.session_map.clone())
        .with_trace_id(args.trace_id);
    let resolved = resolve_csv(&args.model, &args.csv, &options)?;
    let transforms = resolved
        .data
        .applied()
        .iter()
        .map(ToString::to_string)
        .collect();
    let report = ResolutionReport::new(
        &resolved.specification,
        &args.base_path,
        resolved.data.height(),
        transforms,
    );
    match args.format {
        SpecFormatArg::Pretty => println!("{}", report.render_pretty()),
        SpecFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize specification")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn family_from_arg(arg: FamilyArg) -> ModelFamily {
    match arg {
        FamilyArg::Stimcoding => ModelFamily::StimCoding,
        FamilyArg::Regression => ModelFamily::Regression,
    }
}
