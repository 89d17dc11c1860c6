//! Static catalog of drift-diffusion model recipes.
//!
//! Each [`ModelRecipe`] names the conditioning its dataset needs and, per
//! modulated parameter, the formula or dependency variants to choose from.
//! [`default_catalog`] builds the registry on first use.

pub mod catalog;
pub mod recipe;
mod regression;
mod stimcoding;

pub use catalog::{ModelCatalog, default_catalog};
pub use recipe::{Branch, ModelRecipe, ParameterRule, RecipeKind, Term, TransformStep};
