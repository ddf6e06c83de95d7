//! Filtering and statistics over the catalog.
//!
//! Two distinct rating filters are exposed on purpose: the truncated-band
//! variant buckets by `rating as i32`, the range variant uses real-valued
//! inclusive bounds. They answer different questions (8.96 falls in the
//! 7–8 truncated band but in no real-valued bucket) and must not be
//! collapsed into one.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::entry::{MediaEntry, MediaKind};

// ── Rating bands ────────────────────────────────────────────────────────────

/// One of the five fixed rating buckets used for coarse filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingBand {
    OneToTwo,
    ThreeToFour,
    FiveToSix,
    SevenToEight,
    NineToTen,
}

#[derive(Debug, Error)]
#[error("rango de calificación desconocido '{0}' (se esperaba 1-2, 3-4, 5-6, 7-8 o 9-10)")]
pub struct ParseRatingBandError(String);

impl RatingBand {
    pub const ALL: [RatingBand; 5] = [
        RatingBand::OneToTwo,
        RatingBand::ThreeToFour,
        RatingBand::FiveToSix,
        RatingBand::SevenToEight,
        RatingBand::NineToTen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RatingBand::OneToTwo => "1-2",
            RatingBand::ThreeToFour => "3-4",
            RatingBand::FiveToSix => "5-6",
            RatingBand::SevenToEight => "7-8",
            RatingBand::NineToTen => "9-10",
        }
    }

    /// Integer bounds for the truncated-band filter.
    pub fn integer_bounds(self) -> (i32, i32) {
        match self {
            RatingBand::OneToTwo => (1, 2),
            RatingBand::ThreeToFour => (3, 4),
            RatingBand::FiveToSix => (5, 6),
            RatingBand::SevenToEight => (7, 8),
            RatingBand::NineToTen => (9, 10),
        }
    }

    /// Real-valued inclusive bounds for the range filter.
    pub fn rating_bounds(self) -> (f64, f64) {
        let (lo, hi) = self.integer_bounds();
        (f64::from(lo), f64::from(hi))
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingBand {
    type Err = ParseRatingBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatingBand::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| ParseRatingBandError(s.to_string()))
    }
}

// ── Filters ─────────────────────────────────────────────────────────────────

/// Entries whose genre matches exactly, in catalog order.
pub fn filter_by_genre<'a>(catalog: &'a Catalog, genre: &str) -> Vec<&'a MediaEntry> {
    catalog.iter().filter(|e| e.genre == genre).collect()
}

/// Entries whose truncated rating (`rating as i32`) falls in the band.
pub fn filter_by_band_truncated(catalog: &Catalog, band: RatingBand) -> Vec<&MediaEntry> {
    let (lo, hi) = band.integer_bounds();
    catalog
        .iter()
        .filter(|e| {
            let truncated = e.rating as i32;
            truncated >= lo && truncated <= hi
        })
        .collect()
}

/// Entries whose real-valued rating falls inside the band's inclusive bounds.
pub fn filter_by_rating_range(catalog: &Catalog, band: RatingBand) -> Vec<&MediaEntry> {
    let (lo, hi) = band.rating_bounds();
    catalog
        .iter()
        .filter(|e| e.rating >= lo && e.rating <= hi)
        .collect()
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Aggregate snapshot of the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub movie_count: usize,
    pub series_count: usize,
    pub total_count: usize,
    /// Mean rating across all entries; 0.0 for an empty catalog.
    pub mean_rating: f64,
    /// Most frequent genre and its count; `None` when the catalog is empty.
    pub top_genre: Option<(String, usize)>,
    /// Most frequent director and its count; `None` when the catalog is empty.
    pub top_director: Option<(String, usize)>,
}

impl Statistics {
    /// The labeled summary block appended to reports.
    pub fn render(&self) -> String {
        let (genre, genre_count) = match &self.top_genre {
            Some((name, count)) => (name.as_str(), *count),
            None => ("N/A", 0),
        };
        let (director, director_count) = match &self.top_director {
            Some((name, count)) => (name.as_str(), *count),
            None => ("N/A", 0),
        };
        format!(
            "Películas: {}\n\
             Series: {}\n\
             Total videos: {}\n\
             Calificación promedio: {:.1}\n\
             Género más popular: {} ({} videos)\n\
             Director más representado: {} ({} videos)\n",
            self.movie_count,
            self.series_count,
            self.total_count,
            self.mean_rating,
            genre,
            genre_count,
            director,
            director_count,
        )
    }
}

/// Compute counts, mean rating and the mode genre/director.
///
/// Modes are counted in a `BTreeMap` and selected with a strictly-greater
/// comparison, so ties deterministically resolve to the lexicographically
/// first key.
pub fn compute_statistics(catalog: &Catalog) -> Statistics {
    let mut movie_count = 0usize;
    let mut series_count = 0usize;
    let mut rating_sum = 0.0f64;
    let mut genres: BTreeMap<&str, usize> = BTreeMap::new();
    let mut directors: BTreeMap<&str, usize> = BTreeMap::new();

    for entry in catalog {
        match entry.kind {
            MediaKind::Movie { .. } => movie_count += 1,
            MediaKind::Series { .. } => series_count += 1,
        }
        rating_sum += entry.rating;
        *genres.entry(&entry.genre).or_default() += 1;
        *directors.entry(&entry.director).or_default() += 1;
    }

    let total_count = catalog.len();
    let mean_rating = if total_count == 0 {
        0.0
    } else {
        rating_sum / total_count as f64
    };

    Statistics {
        movie_count,
        series_count,
        total_count,
        mean_rating,
        top_genre: mode_of(&genres),
        top_director: mode_of(&directors),
    }
}

/// First key reaching the maximum count, in key order.
fn mode_of(counts: &BTreeMap<&str, usize>) -> Option<(String, usize)> {
    let mut best: Option<(&str, usize)> = None;
    for (&key, &count) in counts {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, count)| (key.to_string(), count))
}

// ── Comparison against a base entry ─────────────────────────────────────────

/// How an entry's rating relates to the base entry's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Relation {
    Better,
    Worse,
    Equal,
}

impl Relation {
    /// Report label for this relation.
    pub fn label(self) -> &'static str {
        match self {
            Relation::Better => "MEJOR",
            Relation::Worse => "MENOR",
            Relation::Equal => "IGUAL",
        }
    }
}

/// Classify every other entry against the one named by `base_title`.
///
/// The base entry itself is excluded by position, not by title equality,
/// so the result covers the rest of the catalog in order. Returns `None`
/// when the base title is absent.
pub fn compare_to_base<'a>(
    catalog: &'a Catalog,
    base_title: &str,
) -> Option<(&'a MediaEntry, Vec<(&'a MediaEntry, Relation)>)> {
    let base_index = catalog.position_of(base_title)?;
    let base = catalog.get(base_index)?;

    let comparisons = catalog
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != base_index)
        .map(|(_, entry)| {
            let relation = if entry.rating > base.rating {
                Relation::Better
            } else if entry.rating < base.rating {
                Relation::Worse
            } else {
                Relation::Equal
            };
            (entry, relation)
        })
        .collect();

    Some((base, comparisons))
}

// ── Report rendering ────────────────────────────────────────────────────────

/// Plain-text query report: a header, one `describe()` line per match
/// separated by blank lines, and an explicit empty-result sentence when
/// nothing matched.
pub fn render_report(header: &str, empty_note: &str, matches: &[&MediaEntry]) -> String {
    let mut out = String::new();
    out.push_str(header);
    out.push_str("\n\n");
    if matches.is_empty() {
        out.push_str(empty_note);
        out.push('\n');
    } else {
        for entry in matches {
            out.push_str(&entry.describe());
            out.push_str("\n\n");
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
