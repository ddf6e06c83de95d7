//! The media entry model: movies and series with shared catalog fields.
//!
//! An entry is a shared header (title, rating, genre, director, year) plus
//! a kind-specific payload. Rating arithmetic lives here so every mutation
//! path (interactive edits, file ingestion, history replay) goes through
//! the same three operations with their distinct clamping rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One catalog record: a movie or a series.
///
/// The title is the unique key across the catalog (exact match, case- and
/// whitespace-sensitive). Ratings live on the 0.0–10.0 scale; see the
/// individual mutators for which of them enforce that range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaEntry {
    pub title: String,
    pub rating: f64,
    pub genre: String,
    pub director: String,
    /// Release year; 0 for series, since the source data does not track
    /// series start years.
    pub release_year: i32,
    pub kind: MediaKind,
}

/// Kind-specific payload of a [`MediaEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaKind {
    Movie {
        duration_minutes: u32,
    },
    Series {
        episodes_per_season: u32,
        season_count: u32,
        total_episode_count: u32,
    },
}

/// One episode position within a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Episode {
    /// 1-based season number.
    pub season: u32,
    /// 1-based episode number within its season.
    pub number_in_season: u32,
    /// 1-based episode number across the whole series.
    pub absolute: u32,
}

impl MediaEntry {
    /// Build a movie entry. Argument order mirrors the `PELICULA` wire format.
    pub fn movie(
        title: impl Into<String>,
        rating: f64,
        duration_minutes: u32,
        genre: impl Into<String>,
        director: impl Into<String>,
        release_year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            rating,
            genre: genre.into(),
            director: director.into(),
            release_year,
            kind: MediaKind::Movie { duration_minutes },
        }
    }

    /// Build a series entry. Argument order mirrors the `SERIE` wire format.
    pub fn series(
        title: impl Into<String>,
        rating: f64,
        episodes_per_season: u32,
        genre: impl Into<String>,
        season_count: u32,
        total_episode_count: u32,
        director: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            rating,
            genre: genre.into(),
            director: director.into(),
            release_year: 0,
            kind: MediaKind::Series {
                episodes_per_season,
                season_count,
                total_episode_count,
            },
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self.kind, MediaKind::Series { .. })
    }

    pub fn is_movie(&self) -> bool {
        matches!(self.kind, MediaKind::Movie { .. })
    }

    /// Kind label as used in the data files and reports.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            MediaKind::Movie { .. } => "Pelicula",
            MediaKind::Series { .. } => "Serie",
        }
    }

    // ── Rating arithmetic ───────────────────────────────────────────────

    /// Fold a user score (1–10) into the rating as a simple average with
    /// the previous value: `rating = (rating + score) / 2`.
    ///
    /// This is not a running mean; repeated calls with the same score
    /// converge toward it geometrically without ever reaching it. Both
    /// operands are already within range, so no re-clamp is needed.
    pub fn apply_user_rating(&mut self, score: i32) {
        self.rating = (self.rating + f64::from(score)) / 2.0;
    }

    /// Shift the rating by a fixed increment, clamped to [0.0, 10.0].
    ///
    /// Clamping is lossy at the boundaries: `+1.0` followed by `-1.0`
    /// does not restore a rating that hit the cap in between.
    pub fn adjust_rating(&mut self, delta: f64) {
        self.rating = (self.rating + delta).clamp(0.0, 10.0);
    }

    /// Overwrite the rating without clamping.
    ///
    /// Ingestion and history replay use this as a pass-through, so a
    /// malformed input file can push the value outside [0, 10].
    pub fn set_rating(&mut self, value: f64) {
        self.rating = value;
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    // ── Display ─────────────────────────────────────────────────────────

    /// One-line human-readable summary, rating formatted to one decimal.
    ///
    /// Field order and labels are an external contract: the report
    /// renderers and the tests both depend on the exact shape.
    pub fn describe(&self) -> String {
        match self.kind {
            MediaKind::Movie { duration_minutes } => format!(
                "Película: {} | Género: {} | Duración: {} min | Director: {} | Año: {} | Calificación: {:.1}",
                self.title, self.genre, duration_minutes, self.director, self.release_year, self.rating
            ),
            MediaKind::Series {
                season_count,
                total_episode_count,
                ..
            } => format!(
                "Serie: {} | Género: {} | Temporadas: {} | Episodios: {} | Director: {} | Calificación: {:.1}",
                self.title, self.genre, season_count, total_episode_count, self.director, self.rating
            ),
        }
    }

    // ── Episode numbering ───────────────────────────────────────────────

    /// Enumerate every episode of a series in airing order.
    ///
    /// Seasons hold `episodes_per_season` episodes except possibly the
    /// last one, which is shortened when the total is not a multiple.
    /// Movies produce an empty guide.
    pub fn episodes(&self) -> Vec<Episode> {
        let MediaKind::Series {
            episodes_per_season,
            season_count,
            total_episode_count,
        } = self.kind
        else {
            return Vec::new();
        };

        let mut guide = Vec::new();
        let mut absolute = 1u32;
        for season in 1..=season_count {
            let remaining = total_episode_count.saturating_sub(absolute - 1);
            let in_this_season = episodes_per_season.min(remaining);
            for number_in_season in 1..=in_this_season {
                guide.push(Episode {
                    season,
                    number_in_season,
                    absolute,
                });
                absolute += 1;
            }
        }
        guide
    }

    /// Map an absolute episode number to its season position.
    ///
    /// Episode N is the `((N-1) mod eps)+1`-th episode of season
    /// `ceil(N/eps)`. Returns `None` for movies and for numbers outside
    /// `1..=total_episode_count`.
    pub fn locate_episode(&self, absolute: u32) -> Option<Episode> {
        let MediaKind::Series {
            episodes_per_season,
            total_episode_count,
            ..
        } = self.kind
        else {
            return None;
        };
        if absolute == 0 || absolute > total_episode_count || episodes_per_season == 0 {
            return None;
        }
        Some(Episode {
            season: absolute.div_ceil(episodes_per_season),
            number_in_season: (absolute - 1) % episodes_per_season + 1,
            absolute,
        })
    }
}

/// Equality is by title only: the title is the catalog key.
impl PartialEq for MediaEntry {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for MediaEntry {}

impl fmt::Display for MediaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
