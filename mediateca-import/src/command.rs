//! Parser for the pipe-delimited command-line format.
//!
//! One command per line:
//! ```text
//! PELICULA|Dune|7.8|155|SciFi|Denis Villeneuve|2021
//! SERIE|Goblin|8.9|70|Romance|1|16|Lee Eung-bok
//! CALIFICACION|Dune|9.1
//! USUARIO_CALIFICACION|diego|Dune|8
//! GENERO|Dune|Ciencia Ficcion
//! ```
//!
//! Fields are split on `|` and trimmed of spaces and tabs. The first
//! field selects the command. Unknown commands and recognized commands
//! with too few fields are skipped without error; a recognized command
//! with its field count met but an unparsable numeric field is invalid
//! and surfaces in the ingestion report.

use mediateca_core::MediaEntry;

/// A recognized, fully parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `CALIFICACION|title|rating`: overwrite the rating of an existing
    /// entry; no insert.
    SetRating { title: String, rating: f64 },
    /// `PELICULA|title|rating|duration|genre|director|year`: insert a
    /// movie if the title is absent.
    AddMovie(MediaEntry),
    /// `SERIE|title|rating|eps_per_season|genre|seasons|total_eps|director`
    /// insert a series if the title is absent.
    AddSeries(MediaEntry),
    /// `USUARIO_CALIFICACION|user|title|score`: fold a user score into
    /// the matching entry's rating.
    UserRating {
        user: String,
        title: String,
        score: i32,
    },
    /// `GENERO|title|genre`: overwrite the genre of every entry sharing
    /// the title.
    SetGenre { title: String, genre: String },
}

/// Outcome of parsing a single non-comment line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// Unknown command or too few fields; counted but silently skipped.
    Skip,
    Command(Command),
    /// Recognized command with a malformed numeric field.
    Invalid { reason: String },
}

/// Split a line on `|`, trimming spaces and tabs from every field.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split('|')
        .map(|field| field.trim_matches([' ', '\t']).to_string())
        .collect()
}

/// Parse one non-comment line of the command format.
pub fn parse_line(line: &str) -> ParsedLine {
    let fields = split_fields(line);
    let Some(kind) = fields.first() else {
        return ParsedLine::Skip;
    };

    match (kind.as_str(), fields.len()) {
        ("CALIFICACION", n) if n >= 3 => match parse_f64(&fields[2], "calificación") {
            Ok(rating) => ParsedLine::Command(Command::SetRating {
                title: fields[1].clone(),
                rating,
            }),
            Err(reason) => ParsedLine::Invalid { reason },
        },
        ("PELICULA", n) if n >= 7 => match parse_movie(&fields) {
            Ok(entry) => ParsedLine::Command(Command::AddMovie(entry)),
            Err(reason) => ParsedLine::Invalid { reason },
        },
        ("SERIE", n) if n >= 8 => match parse_series(&fields) {
            Ok(entry) => ParsedLine::Command(Command::AddSeries(entry)),
            Err(reason) => ParsedLine::Invalid { reason },
        },
        ("USUARIO_CALIFICACION", n) if n >= 4 => match parse_i32(&fields[3], "calificación") {
            Ok(score) => ParsedLine::Command(Command::UserRating {
                user: fields[1].clone(),
                title: fields[2].clone(),
                score,
            }),
            Err(reason) => ParsedLine::Invalid { reason },
        },
        ("GENERO", n) if n >= 3 => ParsedLine::Command(Command::SetGenre {
            title: fields[1].clone(),
            genre: fields[2].clone(),
        }),
        _ => ParsedLine::Skip,
    }
}

fn parse_movie(fields: &[String]) -> Result<MediaEntry, String> {
    let rating = parse_f64(&fields[2], "calificación")?;
    let duration = parse_u32(&fields[3], "duración")?;
    let year = parse_i32(&fields[6], "año")?;
    Ok(MediaEntry::movie(
        fields[1].clone(),
        rating,
        duration,
        fields[4].clone(),
        fields[5].clone(),
        year,
    ))
}

fn parse_series(fields: &[String]) -> Result<MediaEntry, String> {
    let rating = parse_f64(&fields[2], "calificación")?;
    let episodes_per_season = parse_u32(&fields[3], "episodios por temporada")?;
    let season_count = parse_u32(&fields[5], "temporadas")?;
    let total_episode_count = parse_u32(&fields[6], "episodios totales")?;
    Ok(MediaEntry::series(
        fields[1].clone(),
        rating,
        episodes_per_season,
        fields[4].clone(),
        season_count,
        total_episode_count,
        fields[7].clone(),
    ))
}

fn parse_f64(value: &str, field: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("valor no numérico en campo {field}: '{value}'"))
}

fn parse_i32(value: &str, field: &str) -> Result<i32, String> {
    value
        .parse()
        .map_err(|_| format!("valor no numérico en campo {field}: '{value}'"))
}

fn parse_u32(value: &str, field: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("valor no numérico en campo {field}: '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_trimmed_of_spaces_and_tabs() {
        assert_eq!(
            split_fields(" CALIFICACION |\tDune\t| 9.1 "),
            vec!["CALIFICACION", "Dune", "9.1"]
        );
    }

    #[test]
    fn calificacion_parses() {
        let parsed = parse_line("CALIFICACION|Dune|9.1");
        assert_eq!(
            parsed,
            ParsedLine::Command(Command::SetRating {
                title: "Dune".to_string(),
                rating: 9.1,
            })
        );
    }

    #[test]
    fn pelicula_parses_all_fields() {
        let parsed = parse_line("PELICULA|Dune|7.8|155|SciFi|Denis Villeneuve|2021");
        let ParsedLine::Command(Command::AddMovie(entry)) = parsed else {
            panic!("expected AddMovie, got {parsed:?}");
        };
        assert_eq!(entry.title, "Dune");
        assert_eq!(entry.rating, 7.8);
        assert_eq!(entry.genre, "SciFi");
        assert_eq!(entry.director, "Denis Villeneuve");
        assert_eq!(entry.release_year, 2021);
        assert!(entry.is_movie());
    }

    #[test]
    fn serie_parses_all_fields() {
        let parsed = parse_line("SERIE|Goblin|8.9|70|Romance|1|16|Lee Eung-bok");
        let ParsedLine::Command(Command::AddSeries(entry)) = parsed else {
            panic!("expected AddSeries, got {parsed:?}");
        };
        assert_eq!(entry.title, "Goblin");
        assert_eq!(entry.director, "Lee Eung-bok");
        assert!(entry.is_series());
        assert_eq!(entry.release_year, 0);
    }

    #[test]
    fn usuario_calificacion_parses() {
        let parsed = parse_line("USUARIO_CALIFICACION|diego|Dune|8");
        assert_eq!(
            parsed,
            ParsedLine::Command(Command::UserRating {
                user: "diego".to_string(),
                title: "Dune".to_string(),
                score: 8,
            })
        );
    }

    #[test]
    fn unknown_command_is_skipped() {
        assert_eq!(parse_line("DESCONOCIDO|x|y"), ParsedLine::Skip);
    }

    #[test]
    fn too_few_fields_is_skipped_not_an_error() {
        assert_eq!(parse_line("CALIFICACION|Dune"), ParsedLine::Skip);
        assert_eq!(parse_line("PELICULA|Dune|7.8|155|SciFi|Denis"), ParsedLine::Skip);
    }

    #[test]
    fn malformed_number_is_invalid_with_the_field_named() {
        let ParsedLine::Invalid { reason } = parse_line("PELICULA|X|notanumber|10|G|D|2000")
        else {
            panic!("expected Invalid");
        };
        assert!(reason.contains("calificación"));
        assert!(reason.contains("notanumber"));
    }

    #[test]
    fn malformed_year_is_invalid() {
        let ParsedLine::Invalid { reason } = parse_line("PELICULA|X|7.0|10|G|D|MMXX") else {
            panic!("expected Invalid");
        };
        assert!(reason.contains("año"));
    }
}
