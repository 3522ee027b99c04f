/// Loading catalogs from JSON files
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::Catalog;
use crate::error::ScheduleError;
use crate::model::{Course, CourseId, Section};

/// One catalog file as produced by an ingestion run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub courses: Vec<CatalogCourse>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A course entry together with its persisted id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCourse {
    pub id: CourseId,
    pub abbrev: String,
    pub name: String,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = ScheduleError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::new();
        for entry in file.courses {
            catalog.insert_course(entry.id, Course::new(entry.abbrev, entry.name)?)?;
        }
        for section in file.sections {
            catalog.push_section(section);
        }
        Ok(catalog)
    }
}

impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        CatalogFile {
            courses: catalog
                .courses()
                .map(|(id, c)| CatalogCourse {
                    id,
                    abbrev: c.abbrev().to_string(),
                    name: c.name().to_string(),
                })
                .collect(),
            sections: catalog.sections().to_vec(),
        }
    }
}

impl Catalog {
    /// Loads a single catalog JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ScheduleError> {
        let content = fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        Catalog::try_from(file)
    }

    /// Loads and merges every `*.json` file in `dir`
    ///
    /// # Arguments
    /// * `dir` - Directory holding catalog files
    ///
    /// # Returns
    /// * `Ok(Catalog)` - All courses and sections found; an empty catalog if
    ///   the directory does not exist
    /// * `Err` - If a file can't be read or parsed, or two files define the
    ///   same course id
    pub fn load_from_directory(dir: &Path) -> Result<Self, ScheduleError> {
        let mut catalog = Catalog::new();

        if !dir.is_dir() {
            warn!("Catalog directory {} does not exist", dir.display());
            return Ok(catalog);
        }

        // Sorted so duplicate-id errors are reproducible
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        paths.sort();

        for path in paths {
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let part = Catalog::load_from_file(&path)?;
            info!(
                "Loaded {} courses and {} sections from {}",
                part.course_count(),
                part.section_count(),
                path.display()
            );
            catalog.merge(part)?;
        }

        Ok(catalog)
    }
}
