//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ddm_condition::SessionMap;

#[derive(Parser)]
#[command(
    name = "ddm",
    version,
    about = "Resolve drift-diffusion model recipes against trial data",
    long_about = "Look up a model recipe by name, condition a trial-level CSV the way the \
                  recipe requires, and print the resulting model specification.\n\n\
                  No model is fitted and nothing is written to disk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the catalogued model recipes.
    Models(ModelsArgs),

    /// Resolve one model against a trial CSV and print its specification.
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct ModelsArgs {
    /// Only list recipes of this family.
    #[arg(long = "family", value_enum)]
    pub family: Option<FamilyArg>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ListFormatArg,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Model name, e.g. `regress_dc_z_prevresp`.
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Trial-level CSV with subj_idx, session, stimulus, response and rt columns.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Opaque id carried into the specification and the artifact name.
    #[arg(long = "trace-id", default_value_t = 0)]
    pub trace_id: u32,

    /// Directory the fit artifact path is reported under.
    #[arg(long = "base-path", value_name = "DIR", default_value = ".")]
    pub base_path: PathBuf,

    /// Session relabelling used by pupil recipes, as LABEL=INDEX pairs.
    #[arg(long = "session-map", value_name = "MAP", default_value = "1=1,5=2")]
    pub session_map: SessionMap,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "pretty")]
    pub format: SpecFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FamilyArg {
    Stimcoding,
    Regression,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SpecFormatArg {
    Pretty,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
