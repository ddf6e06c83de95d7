//! Read-only catalog views: filters, listings, rankings and statistics.

use mediateca_core::{
    Catalog, MediaEntry, RatingBand, compare_to_base, compute_statistics, filter_by_band_truncated,
    filter_by_genre, filter_by_rating_range, render_report,
};

use super::warn_marker;

pub fn run_filter_genre(catalog: &Catalog, genre: &str) {
    let matches = filter_by_genre(catalog, genre);
    print!(
        "{}",
        render_report(
            &format!("Videos del género \"{genre}\":"),
            "No se encontraron videos que cumplan con el criterio seleccionado.",
            &matches,
        )
    );
}

/// Real-valued inclusive bounds variant.
pub fn run_filter_range(catalog: &Catalog, band: RatingBand) {
    let matches = filter_by_rating_range(catalog, band);
    print!(
        "{}",
        render_report(
            &format!("Videos con calificación en el rango {band}:"),
            "No se encontraron videos que cumplan con el criterio seleccionado.",
            &matches,
        )
    );
}

/// Truncated-band variant: entries bucketed by the integer part of the
/// rating.
pub fn run_filter_band(catalog: &Catalog, band: RatingBand) {
    let matches = filter_by_band_truncated(catalog, band);
    print!(
        "{}",
        render_report(
            &format!("Películas y Series en el rango de calificación {band}:"),
            &format!("No se encontraron videos en el rango {band}."),
            &matches,
        )
    );
}

pub fn run_sort(catalog: &mut Catalog) {
    catalog.sort_by_rating_descending();
    let entries: Vec<&MediaEntry> = catalog.iter().collect();
    print!(
        "{}",
        render_report(
            "Catálogo ordenado por calificación (mayor a menor):",
            "No hay videos en el catálogo.",
            &entries,
        )
    );
}

pub fn run_best(catalog: &Catalog) {
    match catalog.best_rated() {
        Some(best) => {
            println!("Video con mejor calificación:\n");
            println!("{best}");
        }
        None => println!("No hay videos en el catálogo."),
    }
}

pub fn run_compare(catalog: &Catalog, title: &str) {
    let Some((base, comparisons)) = compare_to_base(catalog, title) else {
        eprintln!("{} No se encontró el video: {title}", warn_marker());
        return;
    };

    println!("Videos similares a: {}", base.title);
    println!("Calificación base: {}\n", base.rating);
    for (entry, relation) in comparisons {
        println!("{}: {entry}\n", relation.label());
    }
}

pub fn run_stats(catalog: &Catalog, json: bool) {
    let stats = compute_statistics(catalog);
    if json {
        match serde_json::to_string_pretty(&stats) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => eprintln!("{} No se pudo serializar: {e}", warn_marker()),
        }
        return;
    }
    println!("=== ESTADISTICAS DEL CATALOGO ===");
    print!("{}", stats.render());
}

pub fn run_list(catalog: &Catalog, json: bool) {
    if json {
        let entries: Vec<&MediaEntry> = catalog.iter().collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => eprintln!("{} No se pudo serializar: {e}", warn_marker()),
        }
        return;
    }
    let entries: Vec<&MediaEntry> = catalog.iter().collect();
    print!(
        "{}",
        render_report(
            "Videos en el catálogo:",
            "No hay videos en el catálogo.",
            &entries,
        )
    );
}

/// Show one entry with its resolved cover and playback path hints.
pub fn run_show(catalog: &Catalog, title: &str, base: &std::path::Path) {
    let Some(entry) = catalog.find_by_title(title) else {
        eprintln!("{} No se encontró el video: {title}", warn_marker());
        return;
    };

    println!("{entry}\n");
    println!(
        "Portada: {}",
        mediateca_core::assets::cover_path_or_default(base, &entry.title).display()
    );
    println!(
        "Video: {}",
        mediateca_core::assets::video_path(base, entry).display()
    );
}

pub fn run_genres(catalog: &Catalog) {
    for genre in catalog.genres() {
        println!("{genre}");
    }
}
