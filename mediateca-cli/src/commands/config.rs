//! The `config` command: inspect and edit the settings file.

use std::path::Path;

use mediateca_import::settings;

use super::warn_marker;

pub fn run_show() {
    match settings::load_settings_string() {
        Some(contents) => print!("{contents}"),
        None => println!("(sin configuración guardada)"),
    }
}

pub fn run_set_path(path: &Path) {
    match settings::save_history_path(Some(path)) {
        Ok(()) => println!("Ruta del historial fijada en: {}", path.display()),
        Err(e) => eprintln!("{} No se pudo guardar la configuración: {e}", warn_marker()),
    }
}

pub fn run_clear_path() {
    match settings::save_history_path(None) {
        Ok(()) => println!("Ruta del historial restablecida al valor por defecto."),
        Err(e) => eprintln!("{} No se pudo guardar la configuración: {e}", warn_marker()),
    }
}

pub fn run_path() {
    println!("{}", settings::settings_path().display());
}
