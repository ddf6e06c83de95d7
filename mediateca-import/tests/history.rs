use std::fs;

use mediateca_core::{Catalog, MediaEntry};
use mediateca_import::History;
use tempfile::TempDir;

fn history_in(dir: &TempDir) -> History {
    History::new(dir.path().join("historialDatos.txt"))
}

fn two_entry_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert_if_absent(MediaEntry::movie("Dune", 7.8, 155, "SciFi", "DV", 2021));
    catalog.insert_if_absent(MediaEntry::series("Goblin", 8.9, 70, "Romance", 1, 16, "LEB"));
    catalog
}

#[test]
fn missing_file_is_created_with_baseline_ratings() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);
    let mut catalog = two_entry_catalog();

    let stats = history.load_into(&mut catalog).unwrap();
    assert!(stats.created);
    assert_eq!(stats.applied, 0);

    let contents = fs::read_to_string(history.path()).unwrap();
    assert!(contents.starts_with("# Historial de calificaciones - Mediateca"));
    assert!(contents.contains("# Datos iniciales del catálogo (calificaciones base)"));
    assert!(contents.contains("CALIFICACION|Dune|7.8"));
    assert!(contents.contains("CALIFICACION|Goblin|8.9"));
}

#[test]
fn load_applies_matching_ratings_verbatim() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);
    fs::write(
        history.path(),
        "# cabecera\n\nCALIFICACION|Dune|9.9\nCALIFICACION|Desconocida|5.0\n",
    )
    .unwrap();

    let mut catalog = two_entry_catalog();
    let stats = history.load_into(&mut catalog).unwrap();

    assert!(!stats.created);
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.ignored, 1);
    assert_eq!(catalog.find_by_title("Dune").unwrap().rating, 9.9);
    // Unmatched titles never insert.
    assert_eq!(catalog.len(), 2);
}

#[test]
fn load_is_an_unclamped_pass_through() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);
    fs::write(history.path(), "CALIFICACION|Dune|11.5\n").unwrap();

    let mut catalog = two_entry_catalog();
    history.load_into(&mut catalog).unwrap();
    assert_eq!(catalog.find_by_title("Dune").unwrap().rating, 11.5);
}

#[test]
fn malformed_rating_lines_are_ignored() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);
    fs::write(
        history.path(),
        "CALIFICACION|Dune|no-numero\nCALIFICACION|Goblin|9.5\n",
    )
    .unwrap();

    let mut catalog = two_entry_catalog();
    let stats = history.load_into(&mut catalog).unwrap();
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.ignored, 1);
    assert_eq!(catalog.find_by_title("Dune").unwrap().rating, 7.8);
}

#[test]
fn append_writes_a_timestamped_line_the_loader_accepts() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);

    history.append_rating("Dune", 8.4).unwrap();
    history.append_rating("Goblin", 9.0).unwrap();

    let contents = fs::read_to_string(history.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("CALIFICACION|Dune|8.4|"));
    // Four fields: the timestamp rides along and the loader ignores it.
    assert_eq!(lines[0].split('|').count(), 4);

    let mut catalog = two_entry_catalog();
    let stats = history.load_into(&mut catalog).unwrap();
    assert_eq!(stats.applied, 2);
    assert_eq!(catalog.find_by_title("Goblin").unwrap().rating, 9.0);
}

#[test]
fn snapshot_replaces_prior_contents() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);
    history.append_rating("Dune", 1.0).unwrap();

    let catalog = two_entry_catalog();
    history.rewrite_snapshot(&catalog).unwrap();

    let contents = fs::read_to_string(history.path()).unwrap();
    assert!(contents.contains("# Calificaciones actualizadas - "));
    assert!(contents.contains("CALIFICACION|Dune|7.8\n"));
    assert!(!contents.contains("CALIFICACION|Dune|1|"));
}

#[test]
fn snapshot_then_load_round_trips_ratings() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);

    // Mutate ratings through the arithmetic paths, then snapshot.
    let mut catalog = two_entry_catalog();
    catalog.find_by_title_mut("Dune").unwrap().apply_user_rating(10);
    catalog.find_by_title_mut("Goblin").unwrap().adjust_rating(0.5);
    let dune_rating = catalog.find_by_title("Dune").unwrap().rating;
    let goblin_rating = catalog.find_by_title("Goblin").unwrap().rating;
    history.rewrite_snapshot(&catalog).unwrap();

    // A fresh identically-seeded store reads back the same values.
    let mut fresh = two_entry_catalog();
    let stats = history.load_into(&mut fresh).unwrap();
    assert_eq!(stats.applied, 2);
    assert_eq!(fresh.find_by_title("Dune").unwrap().rating, dune_rating);
    assert_eq!(fresh.find_by_title("Goblin").unwrap().rating, goblin_rating);
}
