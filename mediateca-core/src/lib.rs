//! Media catalog data model and query engine.
//!
//! This crate defines the in-memory catalog of movies and series, the
//! rating arithmetic, episode numbering, asset-path resolution, and the
//! filter/statistics queries, without any knowledge of file formats or
//! front ends. The `mediateca-import` crate layers ingestion and history
//! persistence on top; `mediateca-cli` exposes both.
//!
//! The catalog is single-owner, single-threaded mutable state: callers
//! pass an explicit [`Catalog`] handle into every operation and must
//! serialize mutating calls themselves if embedded in a concurrent host.

pub mod assets;
pub mod catalog;
pub mod entry;
pub mod query;

pub use catalog::Catalog;
pub use entry::{Episode, MediaEntry, MediaKind};
pub use query::{
    RatingBand, Relation, Statistics, compare_to_base, compute_statistics, filter_by_band_truncated,
    filter_by_genre, filter_by_rating_range, render_report,
};
