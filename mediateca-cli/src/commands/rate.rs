//! Rating edits: the user-score average and fixed-increment adjustments.
//!
//! Both write through to the history immediately: the score path
//! collapses the file into a snapshot, the adjustment path appends one
//! timestamped line.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediateca_core::Catalog;
use mediateca_import::History;

use super::warn_marker;

/// Fold a 1–10 user score into an entry's rating.
pub fn run_rate(catalog: &mut Catalog, history: &History, title: &str, score: u8) {
    let Some(entry) = catalog.find_by_title_mut(title) else {
        eprintln!("{} No se encontró el video: {title}", warn_marker());
        return;
    };

    let previous = entry.rating;
    entry.apply_user_rating(i32::from(score));
    let updated = entry.rating;

    if let Err(e) = history.rewrite_snapshot(catalog) {
        eprintln!("{} No se pudo guardar el historial: {e}", warn_marker());
        return;
    }

    println!("Calificación actualizada para: {title}");
    println!("Calificación anterior: {previous:.1}");
    println!("Nueva calificación: {updated:.1}");
    println!(
        "\n{} Historial guardado en: {}",
        "\u{2713}".if_supports_color(Stdout, |t| t.green()),
        history.path().display()
    );
}

/// Shift an entry's rating by a fixed increment, clamped to [0, 10].
pub fn run_adjust(catalog: &mut Catalog, history: &History, title: &str, delta: f64) {
    let Some(entry) = catalog.find_by_title_mut(title) else {
        eprintln!("{} No se encontró el video: {title}", warn_marker());
        return;
    };

    let previous = entry.rating;
    entry.adjust_rating(delta);
    let updated = entry.rating;

    if let Err(e) = history.append_rating(title, updated) {
        eprintln!("{} No se pudo guardar el historial: {e}", warn_marker());
        return;
    }

    println!("Calificación ajustada:");
    println!("Video: {title}");
    println!("Calificación anterior: {previous:.1}");
    println!("Nueva calificación: {updated:.1}");
}
