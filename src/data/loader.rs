use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::error::{CatalogError, FormatReason};
use super::model::{Catalog, PlanetRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a planet catalog from a text file.
///
/// Format, one planet per line:
///
/// ```text
/// Earth,5.97,149.6,Moon
/// Mars,0.642,227.9,Phobos,Deimos
/// Venus,4.87,108.2
/// ```
///
/// The first malformed line aborts the whole load.
pub fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let catalog = parse(file, path)?;
    log::info!("Loaded {} planets from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load a catalog from any reader (same rules as [`load_file`]).
pub fn load_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    parse(reader, Path::new("<reader>"))
}

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

fn parse<R: Read>(mut reader: R, origin: &Path) -> Result<Catalog, CatalogError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| CatalogError::Io {
            path: origin.to_path_buf(),
            source,
        })?;

    // No headers, ragged rows, quotes taken literally, fields trimmed.
    let mut splitter = ReaderBuilder::new();
    splitter
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All);

    let mut catalog = Catalog::default();

    // Physical lines, so error positions count blank lines too.
    for (index, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let line = index as u64 + 1;
        let text = std::str::from_utf8(raw).map_err(|e| CatalogError::Format {
            line,
            reason: FormatReason::Encoding(e.to_string()),
        })?;
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let planet = split_line(&splitter, text)
            .and_then(|record| parse_record(&record))
            .map_err(|reason| CatalogError::Format { line, reason })?;

        if let Some(previous) = catalog.insert(planet) {
            log::warn!(
                "{}:{line}: duplicate planet '{}' replaces earlier entry",
                origin.display(),
                previous.name()
            );
        }
    }

    Ok(catalog)
}

/// Split one non-blank line into trimmed fields.
fn split_line(splitter: &ReaderBuilder, text: &str) -> Result<StringRecord, FormatReason> {
    let mut record = StringRecord::new();
    splitter
        .from_reader(text.as_bytes())
        .read_record(&mut record)
        .map_err(|e| FormatReason::Encoding(e.to_string()))?;
    Ok(record)
}

/// Turn one split line into a record.
fn parse_record(record: &StringRecord) -> Result<PlanetRecord, FormatReason> {
    if record.len() < 3 {
        return Err(FormatReason::MissingFields {
            found: record.len(),
        });
    }

    let name = &record[0];
    let mass = parse_number(&record[1], "mass")?;
    let distance = parse_number(&record[2], "distance")?;
    let moons = record
        .iter()
        .skip(3)
        .filter(|moon| !moon.is_empty())
        .map(str::to_string)
        .collect();

    Ok(PlanetRecord::new(name, mass, distance, moons))
}

fn parse_number(field: &str, label: &'static str) -> Result<f64, FormatReason> {
    field.parse::<f64>().map_err(|_| FormatReason::NotANumber {
        field: label,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    fn load_str(text: &str) -> Result<Catalog, CatalogError> {
        load_reader(text.as_bytes())
    }

    fn write_catalog(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_earth_line() {
        let catalog = load_str("Earth,5.97,149.6,Moon\n").unwrap();
        let earth = catalog.lookup("earth").unwrap();
        assert_eq!(earth.name(), "Earth");
        assert_eq!(earth.mass(), 5.97);
        assert_eq!(earth.distance(), 149.6);
        assert_eq!(earth.moons(), ["Moon"]);
    }

    #[test]
    fn keeps_moon_order() {
        let catalog = load_str("Mars,0.642,227.9,Phobos,Deimos").unwrap();
        let mars = catalog.lookup("Mars").unwrap();
        assert_eq!(mars.moons().len(), 2);
        assert_eq!(mars.moons(), ["Phobos", "Deimos"]);
    }

    #[test]
    fn moonless_planet_has_empty_list() {
        let catalog = load_str("Venus,4.87,108.2\nMercury,0.33,57.9,\n").unwrap();
        assert!(catalog.lookup("venus").unwrap().moons().is_empty());
        assert!(catalog.lookup("mercury").unwrap().moons().is_empty());
    }

    #[test]
    fn lookup_returns_file_casing_for_any_query_case() {
        let catalog = load_str("Earth,5.97,149.6,Moon\nJupiter,1898,778.5,Io,Europa\n").unwrap();
        for query in ["earth", "EARTH", " Earth ", "eArTh"] {
            assert_eq!(catalog.lookup(query).unwrap().name(), "Earth");
        }
        assert_eq!(catalog.lookup("JUPITER").unwrap().name(), "Jupiter");
    }

    #[test]
    fn missing_planet_is_none() {
        let catalog = load_str("Earth,5.97,149.6,Moon\n").unwrap();
        assert!(catalog.lookup("Vulcan").is_none());
    }

    #[test]
    fn skips_blank_lines_and_trims_fields() {
        let catalog = load_str("\n  Earth , 5.97 ,149.6, Moon \r\n\n   \nMars,0.642,227.9\n").unwrap();
        assert_eq!(catalog.len(), 2);
        let earth = catalog.lookup("earth").unwrap();
        assert_eq!(earth.name(), "Earth");
        assert_eq!(earth.moons(), ["Moon"]);
    }

    #[test]
    fn comma_only_line_is_format_error() {
        let err = load_str("Earth,5.97,149.6\n,,\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Format {
                line: 2,
                reason: FormatReason::NotANumber { field: "mass", .. }
            }
        ));

        let err = load_str(" , \n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Format {
                line: 1,
                reason: FormatReason::MissingFields { found: 2 }
            }
        ));
    }

    #[test]
    fn error_line_counts_blank_lines() {
        assert_eq!(load_str("\n\nPluto,1\n").unwrap_err().line(), Some(3));
        assert_eq!(
            load_str("Earth,5.97,149.6\r\n  \r\n\r\nMars,red,227.9\r\n")
                .unwrap_err()
                .line(),
            Some(4)
        );
    }

    #[test]
    fn too_few_fields_is_format_error() {
        let err = load_str("Earth,5.97,149.6,Moon\nPluto,0.013\n").unwrap_err();
        match err {
            CatalogError::Format { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, FormatReason::MissingFields { found: 2 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_mass_is_format_error() {
        let err = load_str("Earth,heavy,149.6,Moon\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Format {
                line: 1,
                reason: FormatReason::NotANumber { field: "mass", .. }
            }
        ));
    }

    #[test]
    fn non_numeric_distance_is_format_error() {
        let err = load_str("Mars,0.642,far,Phobos\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Format {
                reason: FormatReason::NotANumber { field: "distance", .. },
                ..
            }
        ));
        assert_eq!(err.to_string(), "line 1: distance 'far' is not a number");
    }

    #[test]
    fn first_bad_line_rejects_whole_load() {
        let err = load_str("Earth,5.97,149.6\nbad line\nMars,0.642,227.9\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn duplicate_name_last_one_wins() {
        let catalog = load_str("Earth,5.97,149.6,Moon\nEARTH,6.0,150.0\n").unwrap();
        assert_eq!(catalog.len(), 1);
        let earth = catalog.lookup("earth").unwrap();
        assert_eq!(earth.name(), "EARTH");
        assert_eq!(earth.mass(), 6.0);
        assert!(earth.moons().is_empty());
    }

    #[test]
    fn invalid_utf8_is_format_error() {
        let err = load_reader(&b"Earth,5.97,149.6,Mo\xffon\n"[..]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Format {
                reason: FormatReason::Encoding(_),
                ..
            }
        ));
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        assert!(load_str("").unwrap().is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let file = write_catalog("Earth,5.97,149.6,Moon\nMars,0.642,227.9,Phobos,Deimos\n");
        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("mars").unwrap().moons(), ["Phobos", "Deimos"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planets.txt");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { path: p } if p == path));
    }

    #[test]
    fn directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_file(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
