//! Apply a command file to the catalog and report what happened.
//!
//! Ingestion never aborts on a bad line: malformed numeric fields become
//! per-line entries in the report and processing continues. The only
//! hard failure is being unable to read the input at all.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use mediateca_core::{Catalog, Statistics, compute_statistics};
use thiserror::Error;

use crate::command::{Command, ParsedLine, parse_line};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no se pudo abrir el archivo {path}: {source}")]
    Open {
        path: String,
        source: io::Error,
    },
    #[error("error de lectura: {0}")]
    Read(#[from] io::Error),
}

/// One rejected line: the processed-line ordinal, the raw text, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    pub line: usize,
    pub raw: String,
    pub reason: String,
}

/// Outcome of one ingestion run.
///
/// Counters follow the command semantics: `entries_added` counts actual
/// inserts (duplicates are silent no-ops), `ratings_updated` counts
/// `CALIFICACION` lines that matched an existing title.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Source file, when ingesting from disk.
    pub source: Option<PathBuf>,
    /// Non-comment, non-blank lines seen.
    pub lines_processed: usize,
    pub ratings_updated: usize,
    pub entries_added: usize,
    pub errors: Vec<LineError>,
    /// Catalog size after ingestion.
    pub catalog_total: usize,
    /// Statistics snapshot taken after ingestion.
    pub statistics: Statistics,
}

impl IngestReport {
    /// The full narrative block shown to the user.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== ARCHIVO PROCESADO EXITOSAMENTE ===\n\n");
        if let Some(source) = &self.source {
            out.push_str(&format!("Archivo: {}\n", source.display()));
        }
        out.push_str(&format!("Lineas procesadas: {}\n", self.lines_processed));
        out.push_str(&format!(
            "Calificaciones actualizadas: {}\n",
            self.ratings_updated
        ));
        out.push_str(&format!("Videos agregados: {}\n", self.entries_added));
        out.push_str(&format!("Total videos en catalogo: {}\n\n", self.catalog_total));

        if !self.errors.is_empty() {
            out.push_str("=== ERRORES ENCONTRADOS ===\n");
            for error in &self.errors {
                out.push_str(&format!(
                    "Error en linea {}: {} ({})\n",
                    error.line, error.raw, error.reason
                ));
            }
            out.push('\n');
        }

        out.push_str("=== ESTADISTICAS DEL CATALOGO ===\n");
        out.push_str(&self.statistics.render());
        out
    }
}

/// Ingest a command file from disk.
pub fn ingest_file(catalog: &mut Catalog, path: &Path) -> Result<IngestReport, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut report = ingest_reader(catalog, BufReader::new(file))?;
    report.source = Some(path.to_path_buf());
    Ok(report)
}

/// Ingest commands from any buffered reader.
///
/// Blank lines and lines starting with `#` are skipped without being
/// counted. Every other line counts as processed, whether or not it has
/// any effect.
pub fn ingest_reader<R: BufRead>(
    catalog: &mut Catalog,
    reader: R,
) -> Result<IngestReport, IngestError> {
    let mut lines_processed = 0usize;
    let mut ratings_updated = 0usize;
    let mut entries_added = 0usize;
    let mut errors = Vec::new();

    for line_result in reader.lines() {
        let line = line_result?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        lines_processed += 1;

        match parse_line(&line) {
            ParsedLine::Skip => {}
            ParsedLine::Invalid { reason } => errors.push(LineError {
                line: lines_processed,
                raw: line,
                reason,
            }),
            ParsedLine::Command(command) => {
                apply(catalog, command, &mut ratings_updated, &mut entries_added);
            }
        }
    }

    Ok(IngestReport {
        source: None,
        lines_processed,
        ratings_updated,
        entries_added,
        errors,
        catalog_total: catalog.len(),
        statistics: compute_statistics(catalog),
    })
}

fn apply(
    catalog: &mut Catalog,
    command: Command,
    ratings_updated: &mut usize,
    entries_added: &mut usize,
) {
    match command {
        Command::SetRating { title, rating } => {
            // Update-only: an absent title is a silent no-op.
            if let Some(entry) = catalog.find_by_title_mut(&title) {
                entry.set_rating(rating);
                *ratings_updated += 1;
            }
        }
        Command::AddMovie(entry) | Command::AddSeries(entry) => {
            if catalog.insert_if_absent(entry) {
                *entries_added += 1;
            }
        }
        Command::UserRating { title, score, .. } => {
            // The user field is carried by the format but unused here.
            if let Some(entry) = catalog.find_by_title_mut(&title) {
                entry.apply_user_rating(score);
            }
        }
        Command::SetGenre { title, genre } => {
            for entry in catalog.iter_mut().filter(|e| e.title == title) {
                entry.set_genre(genre.clone());
            }
        }
    }
}
