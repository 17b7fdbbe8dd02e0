//! Recipe catalog domain model.
//!
//! # Responsibility
//! - Define the transient aggregate shapes assembled by the seeding layer.
//! - Define the reference-data shapes resolved from pre-existing rows.
//!
//! # Invariants
//! - Transient aggregates carry no identity; ids are assigned by the
//!   persistence layer on save.
//! - Child entities point back at their owning recipe via a foreign-key
//!   field, never a second ownership edge.

pub mod recipe;
pub mod reference;
