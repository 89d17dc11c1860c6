//! Trial table ingestion.
//!
//! Loads a trial-level CSV into a Polars `DataFrame` and checks the input
//! contract (subject, session, stimulus, response and response time columns).

pub mod csv;
pub mod error;

pub use csv::{read_trials_csv, validate_trial_columns};
pub use error::{IngestError, Result};
