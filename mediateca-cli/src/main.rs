//! mediateca CLI
//!
//! Command-line interface for the movie/series catalog: ingest update
//! files, filter and rank the catalog, edit ratings, and inspect the
//! statistics. Every run rebuilds the catalog from the built-in defaults
//! and replays the persisted rating history before dispatching.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediateca_core::{Catalog, RatingBand};
use mediateca_import::History;
use mediateca_import::settings;

mod commands;

use commands::{config, episodes, ingest, query, rate};

#[derive(Parser)]
#[command(name = "mediateca")]
#[command(about = "Catálogo de películas y series", long_about = None)]
struct Cli {
    /// Ruta del archivo de historial de calificaciones
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cargar un archivo de datos pipe-delimitado en el catálogo
    Ingest {
        /// Archivo de comandos (CALIFICACION, PELICULA, SERIE, ...)
        file: PathBuf,
    },

    /// Mostrar videos por género o calificación
    Filter {
        #[command(subcommand)]
        mode: FilterMode,
    },

    /// Mostrar los episodios de una serie
    Episodes {
        /// Título exacto de la serie
        title: String,
    },

    /// Calificar un video (promedia con la calificación anterior)
    Rate {
        /// Título exacto del video
        title: String,
        /// Calificación del 1 al 10
        #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
        score: u8,
    },

    /// Ajustar una calificación con un incremento fijo (p. ej. +0.5, -1.0)
    Adjust {
        /// Título exacto del video
        title: String,
        /// Incremento a aplicar, acotado a [0, 10]
        #[arg(allow_hyphen_values = true)]
        delta: f64,
    },

    /// Listar el catálogo ordenado por calificación (mayor a menor)
    Sort,

    /// Mostrar el video mejor calificado
    Best,

    /// Comparar todos los videos contra uno base
    Compare {
        /// Título exacto del video base
        title: String,
    },

    /// Mostrar las estadísticas del catálogo
    Stats {
        /// Emitir las estadísticas como JSON
        #[arg(long)]
        json: bool,
    },

    /// Listar el catálogo completo
    List {
        /// Emitir el catálogo como JSON
        #[arg(long)]
        json: bool,
    },

    /// Mostrar un video con sus rutas de portada y reproducción
    Show {
        /// Título exacto del video
        title: String,
        /// Directorio base de los recursos (portadas y videos)
        #[arg(long, default_value = ".")]
        base: PathBuf,
    },

    /// Listar los géneros presentes en el catálogo
    Genres,

    /// Administrar la configuración
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum FilterMode {
    /// Por género exacto
    Genre {
        genre: String,
    },
    /// Por rango real de calificación (1-2, 3-4, 5-6, 7-8, 9-10)
    Range {
        band: RatingBand,
    },
    /// Por banda de calificación truncada a entero (1-2, ..., 9-10)
    Band {
        band: RatingBand,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Mostrar la configuración actual
    Show,

    /// Fijar la ruta del archivo de historial
    SetPath {
        path: PathBuf,
    },

    /// Borrar la ruta configurada del historial
    ClearPath,

    /// Imprimir la ruta del archivo de configuración
    Path,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Config management works on the settings file alone; it must not
    // touch (or create) the history file.
    if let Commands::Config { action } = &cli.command {
        match action {
            ConfigAction::Show => config::run_show(),
            ConfigAction::SetPath { path } => config::run_set_path(path),
            ConfigAction::ClearPath => config::run_clear_path(),
            ConfigAction::Path => config::run_path(),
        }
        return;
    }

    let history = History::new(settings::resolve_history_path(cli.history.clone()));
    let mut catalog = Catalog::with_defaults();
    match history.load_into(&mut catalog) {
        Ok(stats) if stats.created => {
            println!(
                "Historial creado en: {}\n",
                history.path().display()
            );
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!(
                "{} No se pudo leer el historial: {e}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            );
            return;
        }
    }

    match cli.command {
        Commands::Ingest { file } => ingest::run_ingest(&mut catalog, &history, &file),
        Commands::Filter { mode } => match mode {
            FilterMode::Genre { genre } => query::run_filter_genre(&catalog, &genre),
            FilterMode::Range { band } => query::run_filter_range(&catalog, band),
            FilterMode::Band { band } => query::run_filter_band(&catalog, band),
        },
        Commands::Episodes { title } => episodes::run_episodes(&catalog, &title),
        Commands::Rate { title, score } => rate::run_rate(&mut catalog, &history, &title, score),
        Commands::Adjust { title, delta } => {
            rate::run_adjust(&mut catalog, &history, &title, delta)
        }
        Commands::Sort => query::run_sort(&mut catalog),
        Commands::Best => query::run_best(&catalog),
        Commands::Compare { title } => query::run_compare(&catalog, &title),
        Commands::Stats { json } => query::run_stats(&catalog, json),
        Commands::List { json } => query::run_list(&catalog, json),
        Commands::Show { title, base } => query::run_show(&catalog, &title, &base),
        Commands::Genres => query::run_genres(&catalog),
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
