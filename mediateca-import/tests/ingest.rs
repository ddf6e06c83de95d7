use std::io::Cursor;

use mediateca_core::{Catalog, MediaEntry};
use mediateca_import::{IngestError, ingest_file, ingest_reader};

fn ingest(catalog: &mut Catalog, input: &str) -> mediateca_import::IngestReport {
    ingest_reader(catalog, Cursor::new(input.to_string())).unwrap()
}

#[test]
fn pelicula_inserts_once() {
    let mut catalog = Catalog::new();
    let input = "PELICULA|Dune|7.8|155|SciFi|Denis Villeneuve|2021\n\
                 PELICULA|Dune|7.8|155|SciFi|Denis Villeneuve|2021\n";
    let report = ingest(&mut catalog, input);

    assert_eq!(catalog.len(), 1);
    assert_eq!(report.lines_processed, 2);
    assert_eq!(report.entries_added, 1);
    assert!(report.errors.is_empty());

    let dune = catalog.find_by_title("Dune").unwrap();
    assert!(dune.is_movie());
    assert_eq!(dune.release_year, 2021);
}

#[test]
fn calificacion_updates_existing_entry_only() {
    let mut catalog = Catalog::new();
    catalog.insert_if_absent(MediaEntry::movie("Dune", 7.8, 155, "SciFi", "DV", 2021));

    let report = ingest(&mut catalog, "CALIFICACION|Dune|9.1\n");
    assert_eq!(report.ratings_updated, 1);
    assert_eq!(report.entries_added, 0);
    assert_eq!(catalog.find_by_title("Dune").unwrap().rating, 9.1);

    // Absent title: silent no-op, not an error.
    let report = ingest(&mut catalog, "CALIFICACION|No existe|5.0\n");
    assert_eq!(report.ratings_updated, 0);
    assert!(report.errors.is_empty());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn malformed_number_records_one_error_and_skips_the_insert() {
    let mut catalog = Catalog::new();
    let report = ingest(&mut catalog, "PELICULA|X|notanumber|10|G|D|2000\n");

    assert_eq!(report.errors.len(), 1);
    assert!(catalog.find_by_title("X").is_none());
    let error = &report.errors[0];
    assert_eq!(error.line, 1);
    assert_eq!(error.raw, "PELICULA|X|notanumber|10|G|D|2000");
    assert!(error.reason.contains("notanumber"));
}

#[test]
fn comments_and_blank_lines_are_not_counted() {
    let mut catalog = Catalog::new();
    let input = "# comentario\n\
                 \n\
                 PELICULA|Dune|7.8|155|SciFi|DV|2021\n\
                 # otro comentario\n";
    let report = ingest(&mut catalog, input);
    assert_eq!(report.lines_processed, 1);
}

#[test]
fn unknown_commands_count_as_processed_but_do_nothing() {
    let mut catalog = Catalog::new();
    let report = ingest(&mut catalog, "BORRAR|Dune\nCALIFICACION|Dune\n");
    assert_eq!(report.lines_processed, 2);
    assert_eq!(report.entries_added, 0);
    assert!(report.errors.is_empty());
}

#[test]
fn usuario_calificacion_averages_into_the_entry() {
    let mut catalog = Catalog::new();
    catalog.insert_if_absent(MediaEntry::movie("Dune", 7.8, 155, "SciFi", "DV", 2021));

    ingest(&mut catalog, "USUARIO_CALIFICACION|diego|Dune|10\n");
    let rating = catalog.find_by_title("Dune").unwrap().rating;
    assert!((rating - 8.9).abs() < 1e-9);
}

#[test]
fn genero_rewrites_the_genre() {
    let mut catalog = Catalog::new();
    catalog.insert_if_absent(MediaEntry::movie("Dune", 7.8, 155, "SciFi", "DV", 2021));

    ingest(&mut catalog, "GENERO|Dune|Ciencia Ficcion\n");
    assert_eq!(catalog.find_by_title("Dune").unwrap().genre, "Ciencia Ficcion");
}

#[test]
fn serie_line_inserts_a_series() {
    let mut catalog = Catalog::new();
    let report = ingest(&mut catalog, "SERIE|Goblin|8.9|70|Romance|1|16|Lee Eung-bok\n");
    assert_eq!(report.entries_added, 1);
    let goblin = catalog.find_by_title("Goblin").unwrap();
    assert!(goblin.is_series());
    assert_eq!(goblin.genre, "Romance");
}

#[test]
fn report_renders_counters_errors_and_statistics() {
    let mut catalog = Catalog::new();
    let input = "PELICULA|Dune|7.8|155|SciFi|DV|2021\n\
                 PELICULA|X|bad|10|G|D|2000\n";
    let report = ingest(&mut catalog, input);
    let rendered = report.render();

    assert!(rendered.starts_with("=== ARCHIVO PROCESADO EXITOSAMENTE ==="));
    assert!(rendered.contains("Lineas procesadas: 2"));
    assert!(rendered.contains("Videos agregados: 1"));
    assert!(rendered.contains("Total videos en catalogo: 1"));
    assert!(rendered.contains("=== ERRORES ENCONTRADOS ==="));
    assert!(rendered.contains("Error en linea 2: PELICULA|X|bad|10|G|D|2000"));
    assert!(rendered.contains("=== ESTADISTICAS DEL CATALOGO ==="));
    assert!(rendered.contains("Películas: 1"));
}

#[test]
fn report_omits_the_error_section_when_clean() {
    let mut catalog = Catalog::new();
    let report = ingest(&mut catalog, "PELICULA|Dune|7.8|155|SciFi|DV|2021\n");
    assert!(!report.render().contains("=== ERRORES ENCONTRADOS ==="));
}

#[test]
fn missing_file_is_a_hard_error() {
    let mut catalog = Catalog::new();
    let result = ingest_file(&mut catalog, std::path::Path::new("/no/such/file.txt"));
    assert!(matches!(result, Err(IngestError::Open { .. })));
}

#[test]
fn mixed_file_applies_everything_in_order() {
    let mut catalog = Catalog::with_defaults();
    let input = "\
# Actualización semanal
CALIFICACION|Attack on Titan|9.2
PELICULA|Dune|7.8|155|SciFi|Denis Villeneuve|2021
USUARIO_CALIFICACION|diego|Dune|10
GENERO|Dune|Ciencia Ficcion
SERIE|Frieren|9.1|28|Fantasia|1|28|Keiichiro Saito
";
    let report = ingest(&mut catalog, input);

    assert_eq!(report.lines_processed, 5);
    assert_eq!(report.ratings_updated, 1);
    assert_eq!(report.entries_added, 2);
    assert!(report.errors.is_empty());
    assert_eq!(report.catalog_total, 23);

    assert_eq!(catalog.find_by_title("Attack on Titan").unwrap().rating, 9.2);
    let dune = catalog.find_by_title("Dune").unwrap();
    assert!((dune.rating - 8.9).abs() < 1e-9);
    assert_eq!(dune.genre, "Ciencia Ficcion");
}
