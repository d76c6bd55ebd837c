use std::path::{Path, PathBuf};

use planet_explorer::data::images::ImageLocator;
use planet_explorer::data::loader::load_file;
use planet_explorer::data::{Catalog, PlanetRecord};

pub const INVALID_NAME: &str = "Please enter a valid planet name.";
pub const NOT_LISTED: &str = "No, this planet is not in the list.";
pub const NO_CATALOG: &str = "No catalog loaded.";

// ---------------------------------------------------------------------------
// Queries the buttons can ask
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Details,
    Mass,
    Moons,
    Exists,
}

impl Query {
    /// Button order in the UI.
    pub const ALL: [Query; 4] = [Query::Details, Query::Mass, Query::Moons, Query::Exists];

    pub fn label(self) -> &'static str {
        match self {
            Query::Details => "Show Details",
            Query::Mass => "Show Mass",
            Query::Moons => "Show Number of Moons",
            Query::Exists => "Check If Planet Exists",
        }
    }
}

/// What the picture area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// Nothing to show (no details query yet, or a short answer).
    Hidden,
    /// Details were shown but there is no picture on disk.
    Unavailable,
    Available(PathBuf),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog (None only if the startup load was skipped).
    pub catalog: Option<Catalog>,

    /// File the catalog came from.
    pub catalog_path: Option<PathBuf>,

    pub images: ImageLocator,

    /// Contents of the planet name field.
    pub query: String,

    /// Answer text of the last successful query.
    pub output: String,

    pub image: ImageSlot,

    pub dark_mode: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(images: ImageLocator) -> Self {
        Self {
            catalog: None,
            catalog_path: None,
            images,
            query: String::new(),
            output: String::new(),
            image: ImageSlot::Hidden,
            dark_mode: false,
            status_message: None,
        }
    }

    /// Replace the catalog and clear answers that referred to the old one.
    pub fn set_catalog(&mut self, catalog: Catalog, source: PathBuf) {
        self.catalog = Some(catalog);
        self.catalog_path = Some(source);
        self.output.clear();
        self.image = ImageSlot::Hidden;
        self.status_message = None;
    }

    /// Load a catalog file; on failure keep the current one and report.
    pub fn load_catalog(&mut self, path: &Path) {
        match load_file(path) {
            Ok(catalog) => self.set_catalog(catalog, path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load catalog: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Answer `query` for the planet named in the query field.
    pub fn run(&mut self, query: Query) {
        let Some(catalog) = &self.catalog else {
            self.status_message = Some(NO_CATALOG.to_string());
            return;
        };
        let found: Option<PlanetRecord> = catalog.lookup(&self.query).cloned();

        match found {
            Some(record) => {
                self.status_message = None;
                self.output = match query {
                    Query::Details => record.to_string(),
                    Query::Mass => record.mass_summary(),
                    Query::Moons => record.moon_summary(),
                    Query::Exists => record.existence_summary(),
                };
                self.image = match query {
                    Query::Details => self
                        .images
                        .locate(&record)
                        .map_or(ImageSlot::Unavailable, ImageSlot::Available),
                    _ => ImageSlot::Hidden,
                };
            }
            None if query == Query::Exists => {
                self.status_message = None;
                self.output = NOT_LISTED.to_string();
                self.image = ImageSlot::Hidden;
            }
            None => {
                log::debug!("No planet named '{}'", self.query.trim());
                self.status_message = Some(INVALID_NAME.to_string());
            }
        }
    }

    /// Put `name` in the query field and show its details.
    pub fn select_planet(&mut self, name: &str) {
        self.query = name.to_string();
        self.run(Query::Details);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Number of planets in the current catalog.
    pub fn planet_count(&self) -> usize {
        self.catalog.as_ref().map_or(0, Catalog::len)
    }
}
