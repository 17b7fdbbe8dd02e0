//! Recipe repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist recipe aggregates (recipe + notes + ingredients + category
//!   links) as a unit, one transaction per aggregate.
//! - Reassemble full aggregates from storage for read use-cases.
//!
//! # Invariants
//! - Write paths validate ingredient amounts before any SQL mutation.
//! - Row ids are assigned by SQLite on insert; callers never choose them.
//! - Back-reference `recipe_id` columns always equal the owning recipe row.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::recipe::{Difficulty, Recipe};
use crate::model::reference::{CategoryId, UnitId};
use rusqlite::{params, Connection, Transaction};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Row id of a `recipe` row, assigned by the database.
pub type RecipeId = i64;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog persistence and query operations.
///
/// Absence is not an error here: `get` returns `Ok(None)` for an unknown id.
#[derive(Debug)]
pub enum RepoError {
    Validation(String),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "invalid recipe aggregate: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted recipe data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Validation(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persisted notes row, carrying the back-reference to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesRecord {
    pub id: i64,
    /// Back-reference; always equals the owning recipe row id.
    pub recipe_id: RecipeId,
    pub recipe_notes: String,
}

/// Persisted ingredient row, carrying the back-reference to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecord {
    pub id: i64,
    /// Back-reference; always equals the owning recipe row id.
    pub recipe_id: RecipeId,
    pub description: String,
    pub amount: Decimal,
    pub unit_id: UnitId,
}

/// Fully reassembled recipe aggregate as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub id: RecipeId,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub directions: String,
    pub notes: Option<NotesRecord>,
    /// Ordered as declared on the transient aggregate.
    pub ingredients: Vec<IngredientRecord>,
    pub category_ids: Vec<CategoryId>,
}

/// Repository interface for recipe aggregate persistence.
pub trait RecipeRepository {
    /// Persists one aggregate and returns its new row id.
    fn save(&mut self, recipe: &Recipe) -> RepoResult<RecipeId>;
    /// Persists several aggregates, each in its own transaction.
    fn save_all(&mut self, recipes: &[Recipe]) -> RepoResult<Vec<RecipeId>>;
    /// Reassembles one aggregate by row id.
    fn get(&self, id: RecipeId) -> RepoResult<Option<RecipeRecord>>;
    /// Counts recipe rows currently in the store.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed recipe repository.
pub struct SqliteRecipeRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteRecipeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl RecipeRepository for SqliteRecipeRepository<'_> {
    fn save(&mut self, recipe: &Recipe) -> RepoResult<RecipeId> {
        validate_recipe(recipe)?;

        let tx = self.conn.transaction()?;
        let id = insert_aggregate(&tx, recipe)?;
        tx.commit()?;

        Ok(id)
    }

    fn save_all(&mut self, recipes: &[Recipe]) -> RepoResult<Vec<RecipeId>> {
        for recipe in recipes {
            validate_recipe(recipe)?;
        }

        let mut ids = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            let tx = self.conn.transaction()?;
            ids.push(insert_aggregate(&tx, recipe)?);
            tx.commit()?;
        }

        Ok(ids)
    }

    fn get(&self, id: RecipeId) -> RepoResult<Option<RecipeRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, prep_time, cook_time, servings, difficulty, directions
             FROM recipe
             WHERE id = ?1;",
        )?;

        let mut rows = stmt.query([id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let difficulty_text: String = row.get("difficulty")?;
        let difficulty = parse_difficulty(&difficulty_text).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid difficulty `{difficulty_text}` in recipe.difficulty"
            ))
        })?;

        let record = RecipeRecord {
            id: row.get("id")?,
            description: row.get("description")?,
            prep_time: row.get("prep_time")?,
            cook_time: row.get("cook_time")?,
            servings: row.get("servings")?,
            difficulty,
            directions: row.get("directions")?,
            notes: load_notes(self.conn, id)?,
            ingredients: load_ingredients(self.conn, id)?,
            category_ids: load_category_ids(self.conn, id)?,
        };

        Ok(Some(record))
    }

    fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recipe;", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn validate_recipe(recipe: &Recipe) -> RepoResult<()> {
    for ingredient in &recipe.ingredients {
        if ingredient.amount < Decimal::ZERO {
            return Err(RepoError::Validation(format!(
                "ingredient `{}` has negative amount {}",
                ingredient.description, ingredient.amount
            )));
        }
    }
    Ok(())
}

fn insert_aggregate(tx: &Transaction<'_>, recipe: &Recipe) -> RepoResult<RecipeId> {
    tx.execute(
        "INSERT INTO recipe (description, prep_time, cook_time, servings, difficulty, directions)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![
            recipe.description.as_str(),
            recipe.prep_time,
            recipe.cook_time,
            recipe.servings,
            difficulty_to_db(recipe.difficulty),
            recipe.directions.as_str(),
        ],
    )?;
    let recipe_id = tx.last_insert_rowid();

    if let Some(notes) = &recipe.notes {
        tx.execute(
            "INSERT INTO notes (recipe_id, recipe_notes) VALUES (?1, ?2);",
            params![recipe_id, notes.recipe_notes.as_str()],
        )?;
    }

    for (position, ingredient) in recipe.ingredients.iter().enumerate() {
        tx.execute(
            "INSERT INTO ingredient (recipe_id, description, amount, unit_id, position)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                recipe_id,
                ingredient.description.as_str(),
                ingredient.amount.to_string(),
                ingredient.unit_id,
                position as i64,
            ],
        )?;
    }

    for category_id in &recipe.categories {
        tx.execute(
            "INSERT INTO recipe_category (recipe_id, category_id) VALUES (?1, ?2);",
            params![recipe_id, category_id],
        )?;
    }

    Ok(recipe_id)
}

fn load_notes(conn: &Connection, recipe_id: RecipeId) -> RepoResult<Option<NotesRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, recipe_id, recipe_notes
         FROM notes
         WHERE recipe_id = ?1;",
    )?;

    let mut rows = stmt.query([recipe_id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(NotesRecord {
            id: row.get("id")?,
            recipe_id: row.get("recipe_id")?,
            recipe_notes: row.get("recipe_notes")?,
        }));
    }

    Ok(None)
}

fn load_ingredients(conn: &Connection, recipe_id: RecipeId) -> RepoResult<Vec<IngredientRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, recipe_id, description, amount, unit_id
         FROM ingredient
         WHERE recipe_id = ?1
         ORDER BY position ASC;",
    )?;

    let mut rows = stmt.query([recipe_id])?;
    let mut ingredients = Vec::new();
    while let Some(row) = rows.next()? {
        let amount_text: String = row.get("amount")?;
        let amount = Decimal::from_str(&amount_text).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid amount value `{amount_text}` in ingredient.amount"
            ))
        })?;

        ingredients.push(IngredientRecord {
            id: row.get("id")?,
            recipe_id: row.get("recipe_id")?,
            description: row.get("description")?,
            amount,
            unit_id: row.get("unit_id")?,
        });
    }

    Ok(ingredients)
}

fn load_category_ids(conn: &Connection, recipe_id: RecipeId) -> RepoResult<Vec<CategoryId>> {
    let mut stmt = conn.prepare(
        "SELECT category_id
         FROM recipe_category
         WHERE recipe_id = ?1
         ORDER BY category_id ASC;",
    )?;

    let mut rows = stmt.query([recipe_id])?;
    let mut ids = Vec::new();
    while let Some(row) = rows.next()? {
        ids.push(row.get("category_id")?);
    }

    Ok(ids)
}

fn difficulty_to_db(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Trivial => "trivial",
        Difficulty::Easy => "easy",
        Difficulty::Moderate => "moderate",
        Difficulty::Hard => "hard",
    }
}

fn parse_difficulty(value: &str) -> Option<Difficulty> {
    match value {
        "trivial" => Some(Difficulty::Trivial),
        "easy" => Some(Difficulty::Easy),
        "moderate" => Some(Difficulty::Moderate),
        "hard" => Some(Difficulty::Hard),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{difficulty_to_db, parse_difficulty};
    use crate::model::recipe::Difficulty;

    #[test]
    fn difficulty_encoding_round_trips() {
        for difficulty in [
            Difficulty::Trivial,
            Difficulty::Easy,
            Difficulty::Moderate,
            Difficulty::Hard,
        ] {
            assert_eq!(parse_difficulty(difficulty_to_db(difficulty)), Some(difficulty));
        }
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert_eq!(parse_difficulty("impossible"), None);
    }
}
