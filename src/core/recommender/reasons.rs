//! Human-readable justifications for recommended courses.
//!
//! Each reason is a concatenation of applicable canned sentences in a fixed
//! order: category framing, learning-style match, group-work match,
//! career-goal match, workload framing. A course matching none of them gets
//! one generic fallback sentence.

use super::scoring::{COLLABORATIVE_TAGS, GROUP_TAGS, HANDS_ON_TAGS, VISUAL_TAGS};
use crate::core::models::{Course, GroupWork, LearningStyle, SurveyAnswers, Workload};

const CORE_SENTENCE: &str = "This course is part of the core OSU Computer Science curriculum, so it directly moves you toward finishing the major.";
const ELECTIVE_SENTENCE: &str = "This course counts as an approved CS elective, letting you shape the degree around your interests.";

const VISUAL_SENTENCE: &str = "The material is very visual (graphics / UI / XR oriented), which lines up with your visual learning preference.";
const HANDS_ON_SENTENCE: &str = "It's built around projects and applied work, which fits your preference for hands-on learning.";
const INDEPENDENT_SENTENCE: &str = "Most of the work is individual rather than group-based, which matches your independent learning style.";

const GROUP_LOVE_SENTENCE: &str = "It includes substantial team-based project work, which fits your preference for collaborative classes.";
const GROUP_DISLIKE_SENTENCE: &str = "It focuses more on individual assignments than large group projects, which matches your preference to work solo.";

const SECURITY_SENTENCE: &str = "The topics are directly related to cybersecurity, which you mentioned as a career interest.";
const AI_SENTENCE: &str = "It builds core AI / machine-learning skills that support your long-term goal in that area.";
const GAMES_SENTENCE: &str = "It focuses on game development, which aligns with your interest in working on games.";
const MOBILE_SENTENCE: &str = "It targets mobile app development, matching your interest in mobile / app-based careers.";
const BACKEND_SENTENCE: &str = "It strengthens backend / infrastructure skills like databases, systems, or cloud computing.";

const WORKLOAD_LIGHT_SENTENCE: &str = "Given that you prefer a lighter workload, this course is a reasonable addition without overloading your schedule.";
const WORKLOAD_MEDIUM_SENTENCE: &str =
    "It fits well into a steady, medium-load semester with a balanced amount of work.";
const WORKLOAD_HEAVY_SENTENCE: &str = "Because you're comfortable with a heavier load, this course helps you make faster progress through the degree.";

const FALLBACK_SENTENCE: &str =
    "This course fits naturally into your progress toward the OSU CS degree.";

/// Build the justification paragraph for one recommended course.
#[must_use]
pub fn build_reason(course: &Course, answers: &SurveyAnswers) -> String {
    let mut sentences: Vec<&str> = Vec::new();

    // 1) Core vs elective framing
    if course.is_elective() {
        sentences.push(ELECTIVE_SENTENCE);
    } else {
        sentences.push(CORE_SENTENCE);
    }

    // 2) Learning style alignment
    match answers.learning_style {
        Some(LearningStyle::Visual) if course.has_any_tag(VISUAL_TAGS) => {
            sentences.push(VISUAL_SENTENCE);
        }
        Some(LearningStyle::HandsOn) if course.has_any_tag(HANDS_ON_TAGS) => {
            sentences.push(HANDS_ON_SENTENCE);
        }
        Some(LearningStyle::Independent) if !course.has_any_tag(GROUP_TAGS) => {
            sentences.push(INDEPENDENT_SENTENCE);
        }
        _ => {}
    }

    // 3) Group-work preference
    match answers.group_work {
        Some(GroupWork::Love) if course.has_any_tag(COLLABORATIVE_TAGS) => {
            sentences.push(GROUP_LOVE_SENTENCE);
        }
        Some(GroupWork::Dislike) if !course.has_any_tag(GROUP_TAGS) => {
            sentences.push(GROUP_DISLIKE_SENTENCE);
        }
        _ => {}
    }

    // 4) Career goal alignment
    let goal = answers.career_goal_lower();
    if goal.contains("security") && course.has_any_tag(&["security"]) {
        sentences.push(SECURITY_SENTENCE);
    }
    if (goal.contains("ai") || goal.contains("machine")) && course.has_any_tag(&["ai-ml"]) {
        sentences.push(AI_SENTENCE);
    }
    if goal.contains("game") && course.has_any_tag(&["games"]) {
        sentences.push(GAMES_SENTENCE);
    }
    if goal.contains("mobile") && course.has_any_tag(&["mobile"]) {
        sentences.push(MOBILE_SENTENCE);
    }
    if goal.contains("backend") && course.has_any_tag(&["databases", "cloud", "systems"]) {
        sentences.push(BACKEND_SENTENCE);
    }

    // 5) Workload fit
    match answers.workload {
        Some(Workload::Light) => sentences.push(WORKLOAD_LIGHT_SENTENCE),
        Some(Workload::Medium) => sentences.push(WORKLOAD_MEDIUM_SENTENCE),
        Some(Workload::Heavy) => sentences.push(WORKLOAD_HEAVY_SENTENCE),
        None => {}
    }

    if sentences.is_empty() {
        return FALLBACK_SENTENCE.to_string();
    }

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseCategory;

    fn course(category: CourseCategory, tags: &[&str]) -> Course {
        let mut c = Course::new("CS 0000".to_string(), "Test Course".to_string(), category);
        c.tags = tags.iter().map(ToString::to_string).collect();
        c
    }

    #[test]
    fn test_category_framing_always_present() {
        let answers = SurveyAnswers::default();

        let core_reason = build_reason(&course(CourseCategory::Core, &[]), &answers);
        assert!(core_reason.starts_with(CORE_SENTENCE));

        let elective_reason = build_reason(&course(CourseCategory::Elective, &[]), &answers);
        assert!(elective_reason.starts_with(ELECTIVE_SENTENCE));
    }

    #[test]
    fn test_sentence_order_is_fixed() {
        let c = course(CourseCategory::Elective, &["security", "project", "team"]);
        let answers = SurveyAnswers::from_parts(
            Some("heavy"),
            Some("hands-on"),
            Some("love"),
            Some("security engineer"),
        );

        let reason = build_reason(&c, &answers);
        let elective_pos = reason.find(ELECTIVE_SENTENCE).expect("elective framing");
        let style_pos = reason.find(HANDS_ON_SENTENCE).expect("style sentence");
        let group_pos = reason.find(GROUP_LOVE_SENTENCE).expect("group sentence");
        let career_pos = reason.find(SECURITY_SENTENCE).expect("career sentence");
        let workload_pos = reason.find(WORKLOAD_HEAVY_SENTENCE).expect("workload framing");

        assert!(elective_pos < style_pos);
        assert!(style_pos < group_pos);
        assert!(group_pos < career_pos);
        assert!(career_pos < workload_pos);
    }

    #[test]
    fn test_workload_sentences() {
        let c = course(CourseCategory::Core, &[]);

        let light = SurveyAnswers::from_parts(Some("light"), None, None, None);
        assert!(build_reason(&c, &light).contains(WORKLOAD_LIGHT_SENTENCE));

        let medium = SurveyAnswers::from_parts(Some("medium"), None, None, None);
        assert!(build_reason(&c, &medium).contains(WORKLOAD_MEDIUM_SENTENCE));

        let none = SurveyAnswers::default();
        assert!(!build_reason(&c, &none).contains(WORKLOAD_MEDIUM_SENTENCE));
    }

    #[test]
    fn test_no_style_sentence_without_matching_tags() {
        let c = course(CourseCategory::Elective, &["databases"]);
        let answers = SurveyAnswers::from_parts(None, Some("visual"), None, None);
        assert!(!build_reason(&c, &answers).contains(VISUAL_SENTENCE));
    }
}
