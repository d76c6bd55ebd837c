use std::ffi::OsString;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Window constants
// ---------------------------------------------------------------------------

pub const WINDOW_TITLE: &str = "Solar System Explorer";
pub const WINDOW_SIZE: [f32; 2] = [600.0, 500.0];
/// Edge length of the square planet picture.
pub const IMAGE_SIZE: f32 = 200.0;

pub const DEFAULT_CATALOG: &str = "planets.txt";
pub const DEFAULT_IMAGES_DIR: &str = "images";

// ---------------------------------------------------------------------------
// Launch settings
// ---------------------------------------------------------------------------

/// Where to find the catalog and pictures.
///
/// Usage: `planet-explorer [CATALOG] [IMAGES_DIR]`
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub images_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }
}

impl Settings {
    /// Build settings from positional arguments (program name already skipped).
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut settings = Settings::default();
        let mut args = args.into_iter();

        if let Some(catalog) = args.next() {
            settings.catalog_path = catalog.into();
        }
        if let Some(images) = args.next() {
            settings.images_dir = images.into();
        }
        let ignored: Vec<OsString> = args.collect();
        if !ignored.is_empty() {
            log::warn!("Ignoring extra arguments: {ignored:?}");
        }

        settings
    }
}
