//! Phrasebook domain model.
//!
//! # Responsibility
//! - Define the catalog/topic/phrase shapes shared by loader and screens.
//! - Own catalog-level invariants (unique topic ids).
//!
//! # Invariants
//! - A `Catalog` only exists in validated form.
//! - Catalog content is never mutated after construction.

pub mod catalog;
