//! Reference-data entities: units of measure and categories.
//!
//! These rows pre-exist in the store (installed by schema migrations) and
//! are looked up by description, never created, by the seeding layer.

use serde::{Deserialize, Serialize};

/// Row id of a `unit_of_measure` row, assigned by the database.
pub type UnitId = i64;

/// Row id of a `category` row, assigned by the database.
pub type CategoryId = i64;

/// A unit of measure referenced by ingredients ("Teaspoon", "Cup", ...).
///
/// `description` is the external lookup key and is unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub id: UnitId,
    pub description: String,
}

/// A cuisine category referenced by recipes ("American", "Mexican", ...).
///
/// `description` is the external lookup key and is unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub description: String,
}
