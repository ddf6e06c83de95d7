//! The catalog store: an insertion-ordered collection of media entries
//! keyed by exact title.
//!
//! Lookups are linear; the catalog is a bounded, in-memory collection and
//! needs no index. Title uniqueness is enforced at insert time; a second
//! insert with an existing title is a silent no-op, never an overwrite.

use std::collections::BTreeSet;

use crate::entry::MediaEntry;

/// Process-local media catalog.
///
/// Created once at startup from the built-in defaults, then mutated in
/// place by ingestion commands and rating edits. Only ratings are ever
/// persisted; the collection itself is rebuilt on every run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<MediaEntry>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default catalog the application starts from.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for entry in default_entries() {
            catalog.insert_if_absent(entry);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MediaEntry> {
        self.entries.iter_mut()
    }

    /// Exact-match title lookup.
    pub fn find_by_title(&self, title: &str) -> Option<&MediaEntry> {
        self.entries.iter().find(|e| e.title == title)
    }

    /// Exact-match title lookup, mutable.
    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut MediaEntry> {
        self.entries.iter_mut().find(|e| e.title == title)
    }

    /// Position of a title in insertion order, if present.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.title == title)
    }

    /// Entry at a position in insertion order.
    pub fn get(&self, index: usize) -> Option<&MediaEntry> {
        self.entries.get(index)
    }

    /// Insert an entry unless its title is already present.
    ///
    /// Returns `true` when the entry was actually added.
    pub fn insert_if_absent(&mut self, entry: MediaEntry) -> bool {
        if self.find_by_title(&entry.title).is_some() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Stable sort, highest rating first. Ties keep their current order.
    pub fn sort_by_rating_descending(&mut self) {
        self.entries.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    }

    /// The entry with the maximum rating; first-encountered wins on ties.
    pub fn best_rated(&self) -> Option<&MediaEntry> {
        let mut best: Option<&MediaEntry> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.rating <= current.rating => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// Titles of the entries satisfying a predicate, in catalog order.
    ///
    /// Feeds selection lists in front ends.
    pub fn titles_where(&self, predicate: impl Fn(&MediaEntry) -> bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| predicate(e))
            .map(|e| e.title.clone())
            .collect()
    }

    /// All titles in catalog order.
    pub fn titles(&self) -> Vec<String> {
        self.titles_where(|_| true)
    }

    /// Distinct genres, sorted.
    pub fn genres(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.entries.iter().map(|e| e.genre.as_str()).collect();
        set.into_iter().map(str::to_owned).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MediaEntry;
    type IntoIter = std::slice::Iter<'a, MediaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The bundled default dataset: nine movies and twelve series.
fn default_entries() -> Vec<MediaEntry> {
    vec![
        MediaEntry::movie(
            "La princesa Mononoke",
            8.4,
            134,
            "Fantasia",
            "Hayao Miyazaki",
            1997,
        ),
        MediaEntry::movie(
            "El viaje de Chihiro",
            8.6,
            125,
            "Fantasia",
            "Hayao Miyazaki",
            2001,
        ),
        MediaEntry::movie("Look Back", 8.1, 90, "Drama", "Kiyotaka Oshiyama", 2021),
        MediaEntry::movie(
            "Star Wars Episodio I La amenaza fantasma",
            6.5,
            136,
            "Ciencia Ficcion",
            "George Lucas",
            1999,
        ),
        MediaEntry::movie(
            "Star Wars Episodio II El ataque de los clones",
            6.5,
            142,
            "Ciencia Ficcion",
            "George Lucas",
            2002,
        ),
        MediaEntry::movie(
            "Star Wars Episodio III La venganza de los Sith",
            7.5,
            140,
            "Ciencia Ficcion",
            "George Lucas",
            2005,
        ),
        MediaEntry::movie(
            "Star Wars Episodio IV Una nueva esperanza",
            8.6,
            121,
            "Ciencia Ficcion",
            "George Lucas",
            1977,
        ),
        MediaEntry::movie(
            "Star Wars Episodio V El imperio contraataca",
            8.7,
            124,
            "Ciencia Ficcion",
            "Irvin Kershner",
            1980,
        ),
        MediaEntry::movie(
            "Star Wars Episodio VI El retorno del Jedi",
            8.3,
            131,
            "Ciencia Ficcion",
            "Richard Marquand",
            1983,
        ),
        MediaEntry::series("Jujutsu Kaisen", 8.7, 24, "Accion", 2, 47, "Sunghoo Park"),
        MediaEntry::series("Pokemon", 7.5, 22, "Aventura", 25, 1200, "Kunihiko Yuyama"),
        MediaEntry::series("Violet Evergarden", 8.8, 24, "Drama", 1, 13, "Taichi Ishidate"),
        MediaEntry::series("Kimetsu no Yaiba", 8.7, 24, "Accion", 3, 55, "Haruo Sotozaki"),
        MediaEntry::series("Attack on Titan", 9.0, 24, "Accion", 4, 87, "Tetsuro Araki"),
        MediaEntry::series("Blue Lock", 8.3, 24, "Deporte", 1, 24, "Tetsuaki Watanabe"),
        MediaEntry::series(
            "Star Wars The Clone Wars",
            8.4,
            22,
            "Ciencia Ficcion",
            7,
            133,
            "Dave Filoni",
        ),
        MediaEntry::series("Ann", 7.9, 45, "Drama", 1, 10, "Unknown"),
        MediaEntry::series("Nadie nos va a extrañar", 8.1, 45, "Crimen", 1, 10, "Unknown"),
        MediaEntry::series(
            "Si la vida te da mandarinas",
            7.8,
            45,
            "Comedia",
            1,
            10,
            "Unknown",
        ),
        MediaEntry::series("Goblin", 8.9, 70, "Romance", 1, 16, "Lee Eung-bok"),
        MediaEntry::series("Alien Stage", 8.5, 15, "Musical", 1, 6, "Unknown"),
    ]
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
