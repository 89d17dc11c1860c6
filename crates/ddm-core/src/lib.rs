//! Recipe resolution: identifier + trial table → model specification.
//!
//! Resolution runs in a fixed order:
//!
//! 1. look the recipe up in the catalog
//! 2. apply its conditioning steps to a copy of the table
//! 3. profile the conditioned table and select one variant per parameter
//! 4. check the chosen terms only reference columns that exist
//! 5. assemble the [`ddm_model::ModelSpecification`]

pub mod branch;
pub mod builder;
pub mod conditioning;
pub mod error;
pub mod options;
pub mod profile;
pub mod resolve;

pub use branch::{Selection, check_columns, select_variants};
pub use builder::build_specification;
pub use conditioning::condition;
pub use error::{ResolveError, Result};
pub use options::ResolveOptions;
pub use profile::{DataProfile, Variant};
pub use resolve::{ResolvedModel, resolve, resolve_model};
