//! Recommendation output model

use serde::{Deserialize, Serialize};

/// One recommended course with its human-readable justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedCourse {
    /// Course code (e.g., "CS 4243")
    pub code: String,
    /// Display title
    pub name: String,
    /// Concatenated canned-sentence justification
    pub reason: String,
}

/// Output of one planning request.
///
/// The two lists partition a single ordered candidate list: `next_term` takes
/// the first `ceil(n/2)` entries and `following_term` the rest. A course
/// appears in at most one list and never in the completed set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Courses suggested for the upcoming term
    pub next_term: Vec<RecommendedCourse>,
    /// Courses suggested for the term after
    pub following_term: Vec<RecommendedCourse>,
}

impl RecommendationResult {
    /// Total number of recommended courses across both terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.next_term.len() + self.following_term.len()
    }

    /// Whether no courses were recommended
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_term.is_empty() && self.following_term.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let result = RecommendationResult {
            next_term: vec![RecommendedCourse {
                code: "CS 3443".to_string(),
                name: "Data Structures & Algorithms".to_string(),
                reason: "Core curriculum.".to_string(),
            }],
            following_term: Vec::new(),
        };

        let json = serde_json::to_string(&result).expect("serializable");
        assert!(json.contains("\"nextTerm\""));
        assert!(json.contains("\"followingTerm\""));
    }

    #[test]
    fn test_len_and_empty() {
        let mut result = RecommendationResult::default();
        assert!(result.is_empty());

        result.following_term.push(RecommendedCourse {
            code: "CS 4433".to_string(),
            name: "Introduction to Database Systems".to_string(),
            reason: "Elective.".to_string(),
        });
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
    }
}
