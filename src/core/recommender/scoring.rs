//! Elective scoring against survey answers.
//!
//! Weights, tag sets, and quota caps are fixed advising policy; they are
//! named constants rather than derived values.

use crate::core::models::{Course, GroupWork, LearningStyle, SurveyAnswers, Workload};

/// Tags that count as visual material
pub const VISUAL_TAGS: &[&str] = &["graphics", "visual", "xr"];
/// Tags that count as hands-on / applied work
pub const HANDS_ON_TAGS: &[&str] = &["project", "mobile", "games", "internship", "cloud"];
/// Tags that mark group-based coursework
pub const GROUP_TAGS: &[&str] = &["team", "project"];
/// Tags that count as collaborative project work
pub const COLLABORATIVE_TAGS: &[&str] = &["team", "project", "capstone"];
/// Tags that count toward backend / infrastructure careers
pub const BACKEND_TAGS: &[&str] = &["databases", "cloud", "systems"];

/// Bonus for a learning-style tag match (visual or hands-on)
pub const STYLE_MATCH_BONUS: i32 = 3;
/// Bonus for independent learners when a course has no group work
pub const INDEPENDENT_BONUS: i32 = 2;
/// Bonus when the student loves group work and the course is collaborative
pub const GROUP_LOVE_BONUS: i32 = 2;
/// Bonus when the student dislikes group work and the course has none
pub const GROUP_DISLIKE_BONUS: i32 = 1;
/// Bonus for a direct career-goal tag match (security, ai-ml, games, mobile)
pub const CAREER_MATCH_BONUS: i32 = 4;
/// Bonus for a backend career goal matching infrastructure tags
pub const BACKEND_MATCH_BONUS: i32 = 3;

/// Electives scoring at or below this are dropped from the candidate list
pub const SCORE_KEEP_THRESHOLD: i32 = 0;

/// Recommendation quota for a light workload
pub const QUOTA_LIGHT: usize = 2;
/// Recommendation quota for a medium (or unrecognized) workload
pub const QUOTA_MEDIUM: usize = 4;
/// Recommendation quota for a heavy workload
pub const QUOTA_HEAVY: usize = 6;

/// Score one elective against the survey answers.
///
/// Pure integer sum of the matching bonuses; malformed or absent answers
/// simply contribute nothing.
#[must_use]
pub fn score_elective(course: &Course, answers: &SurveyAnswers) -> i32 {
    let mut score = 0;

    match answers.learning_style {
        Some(LearningStyle::Visual) if course.has_any_tag(VISUAL_TAGS) => {
            score += STYLE_MATCH_BONUS;
        }
        Some(LearningStyle::HandsOn) if course.has_any_tag(HANDS_ON_TAGS) => {
            score += STYLE_MATCH_BONUS;
        }
        Some(LearningStyle::Independent) if !course.has_any_tag(GROUP_TAGS) => {
            score += INDEPENDENT_BONUS;
        }
        _ => {}
    }

    match answers.group_work {
        Some(GroupWork::Love) if course.has_any_tag(COLLABORATIVE_TAGS) => {
            score += GROUP_LOVE_BONUS;
        }
        Some(GroupWork::Dislike) if !course.has_any_tag(GROUP_TAGS) => {
            score += GROUP_DISLIKE_BONUS;
        }
        _ => {}
    }

    let goal = answers.career_goal_lower();
    if goal.contains("security") && course.has_any_tag(&["security"]) {
        score += CAREER_MATCH_BONUS;
    }
    if (goal.contains("ai") || goal.contains("machine")) && course.has_any_tag(&["ai-ml"]) {
        score += CAREER_MATCH_BONUS;
    }
    if goal.contains("game") && course.has_any_tag(&["games"]) {
        score += CAREER_MATCH_BONUS;
    }
    if goal.contains("mobile") && course.has_any_tag(&["mobile"]) {
        score += CAREER_MATCH_BONUS;
    }
    if goal.contains("backend") && course.has_any_tag(BACKEND_TAGS) {
        score += BACKEND_MATCH_BONUS;
    }

    score
}

/// Number of courses to recommend for the given workload answer.
///
/// An unrecognized or missing workload takes the medium quota.
#[must_use]
pub const fn workload_quota(workload: Option<Workload>) -> usize {
    match workload {
        Some(Workload::Light) => QUOTA_LIGHT,
        Some(Workload::Heavy) => QUOTA_HEAVY,
        Some(Workload::Medium) | None => QUOTA_MEDIUM,
    }
}
