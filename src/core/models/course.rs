//! Course model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether a course is part of the required curriculum or an elective.
///
/// Core courses are taken in curriculum order; electives are scored and
/// ranked against the student's survey answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    /// Required curriculum course
    Core,
    /// Approved elective
    Elective,
}

/// Represents one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "CS 4243")
    pub code: String,

    /// Display title
    pub name: String,

    /// Course codes that must all be completed before this course is eligible
    #[serde(default)]
    pub prereqs: Vec<String>,

    /// Core or elective
    pub category: CourseCategory,

    /// Topic labels used for preference scoring (e.g., "security", "ai-ml")
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Course {
    /// Create a new course with no prerequisites or tags
    #[must_use]
    pub const fn new(code: String, name: String, category: CourseCategory) -> Self {
        Self {
            code,
            name,
            prereqs: Vec::new(),
            category,
            tags: Vec::new(),
        }
    }

    /// Whether this course is an elective
    #[must_use]
    pub fn is_elective(&self) -> bool {
        self.category == CourseCategory::Elective
    }

    /// Whether the course carries any of the given tags
    #[must_use]
    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        self.tags.iter().any(|t| tags.contains(&t.as_str()))
    }

    /// Whether every prerequisite appears in the completed set
    #[must_use]
    pub fn prereqs_satisfied(&self, completed: &HashSet<String>) -> bool {
        self.prereqs.iter().all(|p| completed.contains(p))
    }
}

/// A fixed sample student used by the advising demo
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    /// Display name
    pub name: String,
    /// Declared major
    pub major: String,
    /// Courses already finished, in completion order
    pub completed: Vec<Course>,
}

impl StudentProfile {
    /// Codes of all completed courses
    #[must_use]
    pub fn completed_codes(&self) -> HashSet<String> {
        self.completed.iter().map(|c| c.code.clone()).collect()
    }
}
