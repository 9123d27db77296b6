//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).

mod acronym;
mod sort;

pub use acronym::{Acronym, AcronymId, NewAcronym};
pub use sort::{AcronymSort, SortDirection, SortField};
