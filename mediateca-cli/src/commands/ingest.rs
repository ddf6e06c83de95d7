//! The `ingest` command: load a command file and print its report.

use std::path::Path;

use mediateca_core::Catalog;
use mediateca_import::{History, ingest_file};

use super::warn_marker;

/// Ingest a command file, print the full report, and collapse the
/// history into a snapshot of the resulting ratings.
pub fn run_ingest(catalog: &mut Catalog, history: &History, file: &Path) {
    let report = match ingest_file(catalog, file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {e}", warn_marker());
            return;
        }
    };

    print!("{}", report.render());

    if let Err(e) = history.rewrite_snapshot(catalog) {
        eprintln!("{} No se pudo actualizar el historial: {e}", warn_marker());
        return;
    }
    println!("\nHistorial guardado en: {}", history.path().display());
}
