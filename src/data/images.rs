use std::path::{Path, PathBuf};

use super::model::PlanetRecord;

/// Finds the optional picture for a planet: `<dir>/<key>.jpg`.
#[derive(Debug, Clone)]
pub struct ImageLocator {
    dir: PathBuf,
}

impl ImageLocator {
    pub const EXTENSION: &'static str = "jpg";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the image for `record` would live, whether or not it exists.
    pub fn path_for(&self, record: &PlanetRecord) -> PathBuf {
        self.dir
            .join(format!("{}.{}", record.key(), Self::EXTENSION))
    }

    /// The image for `record`, or `None` if there is no such file.
    pub fn locate(&self, record: &PlanetRecord) -> Option<PathBuf> {
        let path = self.path_for(record);
        if path.is_file() {
            Some(path)
        } else {
            log::debug!("No image for {} at {}", record.name(), path.display());
            None
        }
    }
}
