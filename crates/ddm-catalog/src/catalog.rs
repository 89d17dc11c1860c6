//! Identifier → recipe registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use ddm_model::{ModelFamily, ModelId, Result};

use crate::recipe::ModelRecipe;
use crate::{regression, stimcoding};

/// Read-only registry of every model recipe.
///
/// Built once per process by [`default_catalog`]; lookups by [`ModelId`] are
/// O(1).
pub struct ModelCatalog {
    recipes: HashMap<ModelId, &'static ModelRecipe>,
}

impl ModelCatalog {
    fn from_recipes(recipes: impl IntoIterator<Item = &'static ModelRecipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn get(&self, id: ModelId) -> Option<&'static ModelRecipe> {
        self.recipes.get(&id).copied()
    }

    /// Look up a recipe by its public name.
    ///
    /// # Errors
    ///
    /// [`ddm_model::ModelError::UnknownModel`] if the name is not catalogued.
    pub fn get_by_name(&self, name: &str) -> Result<&'static ModelRecipe> {
        let id: ModelId = name.parse()?;
        self.get(id)
            .ok_or_else(|| ddm_model::ModelError::UnknownModel(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All recipes, in [`ModelId`] order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ModelRecipe> + '_ {
        ModelId::ALL
            .into_iter()
            .filter_map(move |id| self.get(id))
    }

    pub fn by_family(
        &self,
        family: ModelFamily,
    ) -> impl Iterator<Item = &'static ModelRecipe> + '_ {
        self.iter().filter(move |r| r.family() == family)
    }
}

static DEFAULT_CATALOG: OnceLock<ModelCatalog> = OnceLock::new();

/// The process-wide catalog with every built-in recipe.
pub fn default_catalog() -> &'static ModelCatalog {
    DEFAULT_CATALOG.get_or_init(|| {
        ModelCatalog::from_recipes(stimcoding::RECIPES.iter().chain(regression::RECIPES))
    })
}
