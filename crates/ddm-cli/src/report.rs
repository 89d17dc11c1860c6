//! Human and machine renderings of catalog entries and resolutions.

use std::path::{Path, PathBuf};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use ddm_catalog::ModelRecipe;
use ddm_model::ModelSpecification;

/// Catalog listing, one row per recipe.
pub fn catalog_table<'a>(recipes: impl IntoIterator<Item = &'a ModelRecipe>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Model", "Family", "Modulates", "Conditioning", "Trace", "Description"]);
    apply_table_style(&mut table);
    for recipe in recipes {
        let modulates: Vec<&str> = recipe.modulated().map(|p| p.as_str()).collect();
        let conditioning: Vec<String> = recipe.transforms.iter().map(ToString::to_string).collect();
        table.add_row(vec![
            recipe.name().to_string(),
            recipe.family().to_string(),
            modulates.join(", "),
            conditioning.join(" → "),
            if recipe.keep_regressor_trace { "yes" } else { "-" }.to_string(),
            recipe.description.to_string(),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

/// Everything `ddm resolve` reports.
#[derive(Debug, Serialize)]
pub struct ResolutionReport<'a> {
    pub specification: &'a ModelSpecification,
    pub artifact: PathBuf,
    pub rows: usize,
    pub transforms: Vec<String>,
}

impl<'a> ResolutionReport<'a> {
    pub fn new(
        specification: &'a ModelSpecification,
        base_path: &Path,
        rows: usize,
        transforms: Vec<String>,
    ) -> Self {
        Self {
            specification,
            artifact: specification.artifact().path(base_path),
            rows,
            transforms,
        }
    }

    pub fn render_pretty(&self) -> String {
        let applied = if self.transforms.is_empty() {
            "none".to_string()
        } else {
            self.transforms.join(", ")
        };
        format!(
            "{}\n\nconditioning: {}\nrows: {}\nartifact: {}",
            self.specification,
            applied,
            self.rows,
            self.artifact.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddm_catalog::default_catalog;
    use ddm_model::{ModelId, P_OUTLIER, Parameter, RegressorSpec};

    #[test]
    fn catalog_table_lists_every_recipe() {
        let table = catalog_table(default_catalog().iter());
        assert_eq!(table.row_count(), ModelId::ALL.len());
        let rendered = table.to_string();
        assert!(rendered.contains("stimcoding_dc_z_prevresp_pharma"));
        assert!(rendered.contains("regress_dc_z_motorstart"));
    }

    #[test]
    fn pretty_report_includes_artifact_path() {
        let spec = ModelSpecification {
            model: ModelId::RegressNohist,
            trace_id: 2,
            regressors: vec![RegressorSpec::new(Parameter::V, "v ~ 1 + stimulus")],
            depends_on: vec![],
            include: vec![Parameter::Z, Parameter::Sv],
            group_only_nodes: vec![Parameter::Sv],
            group_only_regressors: false,
            p_outlier: P_OUTLIER,
            keep_regressor_trace: false,
            stim_coding: None,
        };
        let report = ResolutionReport::new(&spec, Path::new("fits"), 12, vec![]);
        let rendered = report.render_pretty();
        assert!(rendered.starts_with("model: regress_nohist (trace 2)"));
        assert!(rendered.contains("conditioning: none"));
        assert!(rendered.ends_with("artifact: fits/regress_nohist/modelfit-md2.model"));
    }
}
