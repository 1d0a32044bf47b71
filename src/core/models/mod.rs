//! Data model shared by the intent resolver and the recommender.

pub mod course;
pub mod recommendation;
pub mod survey;

pub use course::{Course, CourseCategory, StudentProfile};
pub use recommendation::{RecommendationResult, RecommendedCourse};
pub use survey::{GroupWork, LearningStyle, SurveyAnswers, Workload};
