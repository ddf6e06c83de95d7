//! The `episodes` command: print a series' episode guide.

use mediateca_core::{Catalog, assets};

use super::warn_marker;

/// List every episode of a series as `T<S>E<E> - Episodio <N>` lines,
/// plus the resolved path hint for the first episode.
pub fn run_episodes(catalog: &Catalog, title: &str) {
    let Some(entry) = catalog.find_by_title(title) else {
        eprintln!("{} No se encontró el video: {title}", warn_marker());
        return;
    };
    if !entry.is_series() {
        eprintln!("{} No es una serie: {title}", warn_marker());
        let series = catalog.titles_where(|e| e.is_series());
        if !series.is_empty() {
            eprintln!("Series disponibles: {}", series.join(", "));
        }
        return;
    }

    println!("{entry}\n");
    for episode in entry.episodes() {
        println!(
            "T{}E{} - Episodio {}",
            episode.season, episode.number_in_season, episode.absolute
        );
    }
    println!(
        "\nRuta del primer episodio: {}",
        assets::episode_video_path(std::path::Path::new("."), title, 1, 1).display()
    );
}
