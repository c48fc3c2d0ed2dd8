// Seed data: the initial course and student records the service starts from.
//
// Sources
// - Built in (`SeedData::default`), matching the demo catalog.
// - A JSON document, from a string or a file.

use crate::modules::registration::core::catalog::{CatalogError, CourseCatalog};
use crate::modules::registration::core::course::{Course, CourseError};
use crate::modules::registration::core::roster::{RosterError, StudentRoster};
use crate::modules::registration::core::student::Student;
use crate::modules::registration::service::RegistrationService;
use crate::shared::infrastructure::registration_journal::RegistrationJournal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    pub description: String,
    pub capacity: u32,
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub courses: Vec<CourseRecord>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

impl Default for SeedData {
    fn default() -> Self {
        let course = |code: &str, title: &str, description: &str, capacity: u32, schedule: &str| {
            CourseRecord {
                code: code.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                capacity,
                schedule: schedule.to_string(),
            }
        };
        let student = |id: &str, name: &str| StudentRecord {
            id: id.to_string(),
            name: name.to_string(),
        };

        Self {
            courses: vec![
                course(
                    "CS101",
                    "Introduction to Computer Science",
                    "Learn the basics of computer science",
                    30,
                    "MWF 9:00-10:00",
                ),
                course(
                    "MATH101",
                    "Calculus I",
                    "Introduction to Calculus",
                    25,
                    "TTh 10:00-11:30",
                ),
                course(
                    "PHYS101",
                    "Physics I",
                    "Introduction to Physics",
                    20,
                    "MWF 11:00-12:00",
                ),
            ],
            students: vec![student("S001", "John Doe"), student("S002", "Jane Smith")],
        }
    }
}

impl SeedData {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn build_service<TJournal>(
        self,
        journal: TJournal,
    ) -> Result<RegistrationService<TJournal>, SeedError>
    where
        TJournal: RegistrationJournal,
    {
        let mut catalog = CourseCatalog::new();
        for record in self.courses {
            catalog.add(Course::new(
                record.code,
                record.title,
                record.description,
                record.capacity,
                record.schedule,
            )?)?;
        }

        let mut roster = StudentRoster::new();
        for record in self.students {
            roster.add(Student::new(record.id, record.name))?;
        }

        tracing::debug!(
            courses = catalog.len(),
            students = roster.len(),
            "seed loaded"
        );
        Ok(RegistrationService::new(catalog, roster, journal))
    }
}
