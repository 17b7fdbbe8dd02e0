//! Recipe aggregate model.
//!
//! # Responsibility
//! - Define the transient recipe aggregate (recipe + notes + ingredients +
//!   category references) assembled in memory before persistence.
//! - Provide graph-building helpers that keep ingredient order stable.
//!
//! # Invariants
//! - The aggregate holds no identity; row ids exist only in persisted
//!   records.
//! - Category references are resolved `CategoryId`s, so every reference row
//!   was looked up before the aggregate can mention it.
//! - Ingredient back-references materialize as `recipe_id` columns at save
//!   time, not as fields of this model.

use crate::model::reference::{CategoryId, UnitId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How demanding a recipe is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Trivial,
    Easy,
    Moderate,
    Hard,
}

/// One ingredient line of a recipe.
///
/// `amount` is an exact decimal; fractional quantities like `0.25` teaspoon
/// must survive storage without binary-float drift. This model accepts any
/// value silently, including negatives and empty descriptions; the
/// repository write path is where the non-negative amount invariant is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub description: String,
    pub amount: Decimal,
    pub unit_id: UnitId,
}

impl Ingredient {
    pub fn new(description: impl Into<String>, amount: Decimal, unit_id: UnitId) -> Self {
        Self {
            description: description.into(),
            amount,
            unit_id,
        }
    }
}

/// Free-text preparation notes owned by exactly one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    pub recipe_notes: String,
}

impl Notes {
    pub fn new(recipe_notes: impl Into<String>) -> Self {
        Self {
            recipe_notes: recipe_notes.into(),
        }
    }
}

/// Transient recipe aggregate, built in memory and persisted as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub description: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub directions: String,
    pub notes: Option<Notes>,
    /// Declaration order is preserved through persistence.
    pub ingredients: Vec<Ingredient>,
    /// Resolved references to pre-existing category rows.
    pub categories: Vec<CategoryId>,
}

impl Recipe {
    /// Starts an aggregate with no notes, ingredients or categories.
    pub fn new(
        description: impl Into<String>,
        prep_time: u32,
        cook_time: u32,
        servings: u32,
        difficulty: Difficulty,
        directions: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            prep_time,
            cook_time,
            servings,
            difficulty,
            directions: directions.into(),
            notes: None,
            ingredients: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Attaches the (single) notes entity, replacing any previous one.
    pub fn set_notes(&mut self, notes: Notes) {
        self.notes = Some(notes);
    }

    /// Appends one ingredient line. Duplicates are accepted silently.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Adds a category reference unless the aggregate already carries it.
    pub fn add_category(&mut self, category_id: CategoryId) {
        if !self.categories.contains(&category_id) {
            self.categories.push(category_id);
        }
    }
}
