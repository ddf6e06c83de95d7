//! Rating-history persistence.
//!
//! The history file is both a log and a snapshot: single edits append
//! `CALIFICACION|title|rating|timestamp` lines, while bulk changes
//! rewrite the whole file as one current-rating line per catalog entry.
//! Lines use the same comment/skip rules as the command-file parser, so
//! the file can in principle be re-ingested by it.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use mediateca_core::Catalog;
use thiserror::Error;

use crate::command::split_fields;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("error de E/S en el historial {path}: {source}")]
    Io {
        path: String,
        source: io::Error,
    },
}

/// Fixed comment header written at the top of every fresh history file.
const HEADER: &str = "\
# Historial de calificaciones - Mediateca
# Formato: CALIFICACION|Título del Video|Nueva Calificación|Fecha y Hora
# Este archivo se actualiza automáticamente cuando calificas videos
";

/// Counters from replaying the history into a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// `CALIFICACION` lines applied to a matching entry.
    pub applied: usize,
    /// `CALIFICACION` lines dropped: unknown title or unparsable rating.
    pub ignored: usize,
    /// Whether a missing file was created and seeded with baselines.
    pub created: bool,
}

/// Handle on the on-disk rating history.
#[derive(Debug, Clone)]
pub struct History {
    path: PathBuf,
}

impl History {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replay persisted ratings into the catalog.
    ///
    /// A missing file is created and pre-populated with one baseline
    /// line per current catalog entry, making it self-describing on
    /// first run. Unmatched titles neither error nor insert.
    pub fn load_into(&self, catalog: &mut Catalog) -> Result<LoadStats, HistoryError> {
        let mut stats = LoadStats::default();

        if !self.path.exists() {
            self.write_baseline(catalog)?;
            stats.created = true;
            return Ok(stats);
        }

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        for line_result in BufReader::new(file).lines() {
            let line = line_result.map_err(|e| self.io_error(e))?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields = split_fields(&line);
            if fields.len() < 3 || fields[0] != "CALIFICACION" {
                continue;
            }
            let rating: f64 = match fields[2].parse() {
                Ok(value) => value,
                Err(_) => {
                    log::warn!(
                        "skipping history line with unparsable rating '{}'",
                        fields[2]
                    );
                    stats.ignored += 1;
                    continue;
                }
            };
            match catalog.find_by_title_mut(&fields[1]) {
                Some(entry) => {
                    entry.set_rating(rating);
                    stats.applied += 1;
                }
                None => {
                    log::warn!("history rating for unknown title '{}' ignored", fields[1]);
                    stats.ignored += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Append one rating line with a timestamp. Used for single,
    /// isolated edits.
    pub fn append_rating(&self, title: &str, rating: f64) -> Result<(), HistoryError> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "CALIFICACION|{title}|{rating}|{}", timestamp())
            .map_err(|e| self.io_error(e))
    }

    /// Truncate and rewrite the file as a snapshot of current ratings,
    /// one three-field line per entry in catalog order.
    pub fn rewrite_snapshot(&self, catalog: &Catalog) -> Result<(), HistoryError> {
        let mut contents = String::from(HEADER);
        contents.push('\n');
        contents.push_str(&format!("# Calificaciones actualizadas - {}\n", timestamp()));
        for entry in catalog {
            contents.push_str(&format!("CALIFICACION|{}|{}\n", entry.title, entry.rating));
        }
        self.write_all(&contents)
    }

    /// First-run file: header plus the baseline ratings of the catalog.
    fn write_baseline(&self, catalog: &Catalog) -> Result<(), HistoryError> {
        let mut contents = String::from(HEADER);
        contents.push('\n');
        contents.push_str("# Datos iniciales del catálogo (calificaciones base)\n");
        for entry in catalog {
            contents.push_str(&format!("CALIFICACION|{}|{}\n", entry.title, entry.rating));
        }
        self.write_all(&contents)
    }

    fn write_all(&self, contents: &str) -> Result<(), HistoryError> {
        self.ensure_parent()?;
        fs::write(&self.path, contents).map_err(|e| self.io_error(e))
    }

    fn ensure_parent(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

/// ctime-style local timestamp, e.g. `Thu Aug  7 14:02:11 2026`.
fn timestamp() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}
