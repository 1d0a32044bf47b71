//! Survey answers for one planning request.
//!
//! Parsing is lenient: the UI submits free text, and any value
//! outside the recognized set behaves exactly like an absent answer. Every
//! consumer (tree walk, scoring, reasons) must treat `None` and unrecognized
//! identically.

use serde::{Deserialize, Serialize};

/// How much coursework the student wants next term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    /// Focus on balance / adjustment
    Light,
    /// Steady pace
    Medium,
    /// Fast-track
    Heavy,
}

impl Workload {
    /// Parse a raw survey value; unrecognized input yields `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }

    /// Branch key used by the decision tree
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

/// The student's preferred way of learning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    /// Visual material (graphics, UI, XR)
    Visual,
    /// Projects and applied work
    HandsOn,
    /// Individual, self-paced work
    Independent,
}

impl LearningStyle {
    /// Parse a raw survey value; unrecognized input yields `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visual" => Some(Self::Visual),
            "hands-on" => Some(Self::HandsOn),
            "independent" => Some(Self::Independent),
            _ => None,
        }
    }

    /// Branch key used by the decision tree
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::HandsOn => "hands-on",
            Self::Independent => "independent",
        }
    }
}

/// The student's attitude toward group projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupWork {
    /// Enjoys group projects
    Love,
    /// No strong preference
    Neutral,
    /// Prefers working solo
    Dislike,
}

impl GroupWork {
    /// Parse a raw survey value; unrecognized input yields `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "love" => Some(Self::Love),
            "neutral" => Some(Self::Neutral),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }

    /// Branch key used by the decision tree
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Neutral => "neutral",
            Self::Dislike => "dislike",
        }
    }
}

/// One questionnaire submission. Constructed fresh per request, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    /// Preferred workload; `None` routes through default branches
    pub workload: Option<Workload>,
    /// Preferred learning style; `None` routes through default branches
    pub learning_style: Option<LearningStyle>,
    /// Group-work preference; `None` routes through default branches
    pub group_work: Option<GroupWork>,
    /// Free-text career goal, matched case-insensitively against fixed keywords
    #[serde(default)]
    pub career_goal: String,
}

impl SurveyAnswers {
    /// Build answers from raw survey strings.
    ///
    /// Absent and unrecognized values are indistinguishable downstream; both
    /// become `None`.
    #[must_use]
    pub fn from_parts(
        workload: Option<&str>,
        learning_style: Option<&str>,
        group_work: Option<&str>,
        career_goal: Option<&str>,
    ) -> Self {
        Self {
            workload: workload.and_then(Workload::parse),
            learning_style: learning_style.and_then(LearningStyle::parse),
            group_work: group_work.and_then(GroupWork::parse),
            career_goal: career_goal.unwrap_or_default().to_string(),
        }
    }

    /// Career goal lowered for keyword matching
    #[must_use]
    pub fn career_goal_lower(&self) -> String {
        self.career_goal.to_lowercase()
    }
}
