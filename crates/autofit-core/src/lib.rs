//! # autofit-core
//!
//! Finds the largest font size at which a line of text fits a box.
//!
//! This crate holds the search and its cache with zero dependencies on any text
//! engine. Measurement is supplied by the caller through [`Measurer`] (or a
//! [`ContentMeasurer`] wrapped in [`BoundsMeasurer`]); backends like
//! `autofit-text` provide concrete measurers.

mod cache;
mod config;
mod field;
mod measure;
mod primitives;
mod search;
mod shared;

pub use cache::*;
pub use config::*;
pub use field::*;
pub use measure::*;
pub use primitives::*;
pub use search::*;
pub use shared::*;
