//! StampFinder Search - catalog filtering and sorting
//!
//! [`SearchOptions`] filter the catalog by value, year, category,
//! availability and free text, sort it by a [`StampSort`], and mirror
//! themselves in URL parameters.

pub mod field;
pub mod options;

pub use field::{StampField, StampSort};
pub use options::SearchOptions;
