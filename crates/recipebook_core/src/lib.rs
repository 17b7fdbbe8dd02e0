//! Core domain logic for the recipe catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::recipe::{Difficulty, Ingredient, Notes, Recipe};
pub use model::reference::{Category, CategoryId, UnitId, UnitOfMeasure};
pub use repo::recipe_repo::{
    IngredientRecord, NotesRecord, RecipeId, RecipeRecord, RecipeRepository, RepoError,
    RepoResult, SqliteRecipeRepository,
};
pub use repo::reference_repo::{
    CategoryRepository, SqliteCategoryRepository, SqliteUnitOfMeasureRepository,
    UnitOfMeasureRepository,
};
pub use seed::catalog::{CatalogSeeder, SeedError, SeedReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
