//! Reference-data repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Resolve pre-existing unit-of-measure and category rows by description.
//! - Enumerate the installed reference rows for test fixtures and
//!   diagnostics.
//!
//! # Invariants
//! - Lookups match the description column exactly; no normalization.
//! - Absence is representable (`Ok(None)`); the caller decides whether a
//!   miss is fatal.
//! - These repositories are read-only; reference rows are installed by
//!   migrations, never by callers.

use crate::model::reference::{Category, UnitOfMeasure};
use crate::repo::recipe_repo::RepoResult;
use rusqlite::Connection;

/// Lookup contract for unit-of-measure reference rows.
pub trait UnitOfMeasureRepository {
    /// Finds one unit by exact description match.
    fn find_by_description(&self, description: &str) -> RepoResult<Option<UnitOfMeasure>>;
    /// Returns all units ordered by description.
    fn list_units(&self) -> RepoResult<Vec<UnitOfMeasure>>;
}

/// Lookup contract for category reference rows.
pub trait CategoryRepository {
    /// Finds one category by exact description match.
    fn find_by_description(&self, description: &str) -> RepoResult<Option<Category>>;
    /// Returns all categories ordered by description.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
}

/// SQLite-backed unit-of-measure repository.
pub struct SqliteUnitOfMeasureRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUnitOfMeasureRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UnitOfMeasureRepository for SqliteUnitOfMeasureRepository<'_> {
    fn find_by_description(&self, description: &str) -> RepoResult<Option<UnitOfMeasure>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description
             FROM unit_of_measure
             WHERE description = ?1;",
        )?;

        let mut rows = stmt.query([description])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(UnitOfMeasure {
                id: row.get("id")?,
                description: row.get("description")?,
            }));
        }

        Ok(None)
    }

    fn list_units(&self) -> RepoResult<Vec<UnitOfMeasure>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description
             FROM unit_of_measure
             ORDER BY description ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut units = Vec::new();
        while let Some(row) = rows.next()? {
            units.push(UnitOfMeasure {
                id: row.get("id")?,
                description: row.get("description")?,
            });
        }

        Ok(units)
    }
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn find_by_description(&self, description: &str) -> RepoResult<Option<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description
             FROM category
             WHERE description = ?1;",
        )?;

        let mut rows = stmt.query([description])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(Category {
                id: row.get("id")?,
                description: row.get("description")?,
            }));
        }

        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description
             FROM category
             ORDER BY description ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(Category {
                id: row.get("id")?,
                description: row.get("description")?,
            });
        }

        Ok(categories)
    }
}
