//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define persistence contracts for recipes and reference data.
//! - Isolate SQLite query details from the seeding orchestration.
//!
//! # Invariants
//! - Recipe writes validate ingredient amounts before any SQL mutation.
//! - Read paths represent absence as `Ok(None)`; errors are reserved for
//!   transport failures, validation and invalid persisted state.
//! - Reference repositories are read-only; reference rows are installed by
//!   migrations, never by callers.

pub mod recipe_repo;
pub mod reference_repo;
