//! Seed-data orchestration for the recipe catalog.
//!
//! # Responsibility
//! - Resolve required reference rows and fail fast on any miss.
//! - Build the literal starter aggregates and persist them as a batch.
//!
//! # Invariants
//! - The resolve phase completes before the first save; a missing reference
//!   row therefore aborts with zero recipes written.
//! - One seeder instance runs at most once.

pub mod catalog;
