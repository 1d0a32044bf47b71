//! Static course catalog and sample student profile.
//!
//! The catalog is configuration data: loaded once at startup (embedded TOML
//! by default, optionally from a file) and immutable afterwards. Catalog
//! order is observable: it is the stable tie-break for elective scoring and
//! the order of remaining core courses in a plan.

use crate::core::models::{Course, StudentProfile};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Catalog bundled with the binary.
const CATALOG_DEFAULTS: &str = include_str!("../assets/catalog.toml");

#[derive(Debug, Clone, Deserialize)]
struct ProfileSpec {
    name: String,
    major: String,
    completed: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    profile: ProfileSpec,
    courses: Vec<Course>,
}

/// The full course catalog plus the demo student profile
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    profile: ProfileSpec,
}

impl Catalog {
    /// Parse a catalog from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Ok(Self {
            courses: file.courses,
            profile: file.profile,
        })
    }

    /// Load the catalog compiled into the binary
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog is invalid TOML. This should never
    /// happen in practice since the catalog is compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_toml(CATALOG_DEFAULTS).expect("Failed to parse compiled-in catalog")
    }

    /// Load a catalog from a TOML file on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog {}: {e}", path.display()))?;
        Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse catalog {}: {e}", path.display()))
    }

    /// All courses in curriculum order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by code
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// The fixed sample student shipped with the catalog.
    ///
    /// Completed codes without a catalog entry are skipped; the completion
    /// order from the catalog file is preserved.
    #[must_use]
    pub fn sample_profile(&self) -> StudentProfile {
        let completed = self
            .profile
            .completed
            .iter()
            .filter_map(|code| self.course(code).cloned())
            .collect();

        StudentProfile {
            name: self.profile.name.clone(),
            major: self.profile.major.clone(),
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseCategory;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded();
        assert!(!catalog.courses().is_empty());
    }

    #[test]
    fn test_course_lookup() {
        let catalog = Catalog::embedded();
        let course = catalog.course("CS 3443").expect("CS 3443 in catalog");
        assert_eq!(course.name, "Data Structures & Algorithms");
        assert_eq!(course.category, CourseCategory::Core);
        assert!(catalog.course("CS 9999").is_none());
    }

    #[test]
    fn test_sample_profile_has_fifteen_completed() {
        let catalog = Catalog::embedded();
        let profile = catalog.sample_profile();
        assert_eq!(profile.completed.len(), 15);
        assert!(profile.completed_codes().contains("CS 1113"));
    }

    #[test]
    fn test_prereqs_reference_known_courses() {
        let catalog = Catalog::embedded();
        for course in catalog.courses() {
            for prereq in &course.prereqs {
                assert!(
                    catalog.course(prereq).is_some(),
                    "{} has unknown prereq {prereq}",
                    course.code
                );
            }
        }
    }

    #[test]
    fn test_from_toml_minimal() {
        let toml_str = r#"
[profile]
name = "T"
major = "CS"
completed = ["CS 1"]

[[courses]]
code = "CS 1"
name = "Intro"
category = "core"

[[courses]]
code = "CS 2"
name = "Next"
category = "elective"
prereqs = ["CS 1"]
tags = ["project"]
"#;
        let catalog = Catalog::from_toml(toml_str).expect("valid catalog");
        assert_eq!(catalog.courses().len(), 2);
        assert_eq!(catalog.sample_profile().completed.len(), 1);
    }

    #[test]
    fn test_unknown_completed_codes_skipped() {
        let toml_str = r#"
[profile]
name = "T"
major = "CS"
completed = ["CS 1", "CS 404"]

[[courses]]
code = "CS 1"
name = "Intro"
category = "core"
"#;
        let catalog = Catalog::from_toml(toml_str).expect("valid catalog");
        assert_eq!(catalog.sample_profile().completed.len(), 1);
    }
}
