//! File ingestion and rating-history persistence for the media catalog.
//!
//! This crate owns everything that touches the filesystem: parsing the
//! pipe-delimited command format, applying update files to a
//! [`mediateca_core::Catalog`] with per-line error collection, the
//! append/rewrite history file, and settings-based resolution of where
//! that file lives.

pub mod command;
pub mod history;
pub mod ingest;
pub mod settings;

pub use command::{Command, ParsedLine, parse_line, split_fields};
pub use history::{History, HistoryError, LoadStats};
pub use ingest::{IngestError, IngestReport, LineError, ingest_file, ingest_reader};
