//! Course-plan recommender.
//!
//! `plan` is a pure function from survey answers plus a completed-course set
//! to a two-term recommendation. Pipeline:
//!
//! 1. Filter the catalog to eligible courses (not completed, prereqs met)
//! 2. Walk the decision tree and keep the eligible suggestions, in tree order
//! 3. Score the remaining eligible electives and keep positive scores,
//!    sorted descending (stable, so ties keep catalog order)
//! 4. Append the remaining eligible core courses in catalog order
//! 5. Truncate to the workload quota, attach reasons, split ceil(n/2) / rest
//!
//! Malformed answers never fail; they route through defaults everywhere.

pub mod reasons;
pub mod scoring;
pub mod tree;

use crate::core::catalog::Catalog;
use crate::core::models::{Course, RecommendationResult, RecommendedCourse, SurveyAnswers};
use std::collections::HashSet;

/// Produce a two-term course plan for the given answers and completed set.
///
/// Deterministic and total: identical inputs yield identical ordered output,
/// and no input can make it fail.
#[must_use]
pub fn plan(
    answers: &SurveyAnswers,
    completed: &HashSet<String>,
    catalog: &Catalog,
) -> RecommendationResult {
    let eligible: Vec<&Course> = catalog
        .courses()
        .iter()
        .filter(|c| !completed.contains(&c.code) && c.prereqs_satisfied(completed))
        .collect();

    // Tree suggestions, intersected with the eligible set in tree order.
    let tree_codes = tree::walk(&tree::ADVISING_TREE, answers);
    let mut used: HashSet<&str> = HashSet::new();
    let mut ordered: Vec<&Course> = Vec::new();

    for code in tree_codes {
        if used.contains(code) {
            continue;
        }
        if let Some(course) = eligible.iter().find(|c| c.code == *code).copied() {
            used.insert(course.code.as_str());
            ordered.push(course);
        }
    }

    // Positive-scoring electives, best first; stable sort keeps catalog order
    // for ties.
    let mut scored: Vec<(&Course, i32)> = eligible
        .iter()
        .filter(|c| c.is_elective() && !used.contains(c.code.as_str()))
        .map(|c| (*c, scoring::score_elective(c, answers)))
        .filter(|(_, score)| *score > scoring::SCORE_KEEP_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    for (course, _) in scored {
        used.insert(course.code.as_str());
        ordered.push(course);
    }

    // Remaining core courses in catalog order.
    for course in eligible {
        if !course.is_elective() && !used.contains(course.code.as_str()) {
            ordered.push(course);
        }
    }

    let quota = scoring::workload_quota(answers.workload).min(ordered.len());
    let chosen: Vec<RecommendedCourse> = ordered
        .into_iter()
        .take(quota)
        .map(|course| RecommendedCourse {
            code: course.code.clone(),
            name: course.name.clone(),
            reason: reasons::build_reason(course, answers),
        })
        .collect();

    let half = chosen.len().div_ceil(2);
    let mut next_term = chosen;
    let following_term = next_term.split_off(half);

    RecommendationResult {
        next_term,
        following_term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Workload;

    fn catalog() -> Catalog {
        Catalog::embedded()
    }

    fn sample_completed() -> HashSet<String> {
        catalog().sample_profile().completed_codes()
    }

    #[test]
    fn test_never_recommends_completed_courses() {
        let completed = sample_completed();
        let answers = SurveyAnswers::from_parts(Some("heavy"), Some("hands-on"), None, None);
        let result = plan(&answers, &completed, &catalog());

        for course in result.next_term.iter().chain(&result.following_term) {
            assert!(!completed.contains(&course.code), "{} was completed", course.code);
        }
    }

    #[test]
    fn test_never_recommends_unsatisfied_prereqs() {
        let completed = sample_completed();
        let cat = catalog();
        let answers = SurveyAnswers::from_parts(Some("heavy"), Some("visual"), None, None);
        let result = plan(&answers, &completed, &cat);

        for rec in result.next_term.iter().chain(&result.following_term) {
            let course = cat.course(&rec.code).expect("recommended course in catalog");
            assert!(course.prereqs_satisfied(&completed), "{} missing prereqs", rec.code);
        }
    }

    #[test]
    fn test_light_workload_returns_one_per_term() {
        let answers = SurveyAnswers::from_parts(Some("light"), None, None, None);
        let result = plan(&answers, &sample_completed(), &catalog());

        assert_eq!(result.len(), scoring::QUOTA_LIGHT);
        assert_eq!(result.next_term.len(), 1);
        assert_eq!(result.following_term.len(), 1);
    }

    #[test]
    fn test_quota_matches_workload() {
        let completed = sample_completed();
        let cat = catalog();

        let heavy = SurveyAnswers::from_parts(Some("heavy"), Some("hands-on"), Some("love"), None);
        let result = plan(&heavy, &completed, &cat);
        assert!(result.len() <= scoring::QUOTA_HEAVY);

        let unknown = SurveyAnswers::from_parts(Some("??"), None, None, None);
        let result = plan(&unknown, &completed, &cat);
        assert!(result.len() <= scoring::QUOTA_MEDIUM);
        assert_eq!(unknown.workload, None);
    }

    #[test]
    fn test_terms_never_overlap() {
        let answers = SurveyAnswers::from_parts(Some("heavy"), Some("hands-on"), Some("love"), None);
        let result = plan(&answers, &sample_completed(), &catalog());

        let next: HashSet<&str> = result.next_term.iter().map(|c| c.code.as_str()).collect();
        for course in &result.following_term {
            assert!(!next.contains(course.code.as_str()));
        }
    }

    #[test]
    fn test_idempotent() {
        let answers = SurveyAnswers::from_parts(
            Some("medium"),
            Some("visual"),
            Some("love"),
            Some("security and ai"),
        );
        let completed = sample_completed();
        let cat = catalog();

        let first = plan(&answers, &completed, &cat);
        let second = plan(&answers, &completed, &cat);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tree_suggestions_lead_the_plan() {
        // medium/hands-on/love leaf: CS 4273, CS 4523, CS 3443, CS 4433.
        // CS 4523 is ineligible for the sample student (needs CS 3443), so
        // the plan leads with the remaining three in tree order.
        let answers = SurveyAnswers::from_parts(Some("medium"), Some("hands-on"), Some("love"), None);
        let result = plan(&answers, &sample_completed(), &catalog());

        let codes: Vec<&str> = result
            .next_term
            .iter()
            .chain(&result.following_term)
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(&codes[..3], &["CS 4273", "CS 3443", "CS 4433"]);
    }

    #[test]
    fn test_scored_electives_ranked_after_tree_picks() {
        // heavy/hands-on + love + no goal: CS 4153 and CS 4173 both score
        // +3 (hands-on) +2 (love); the tie keeps catalog order.
        let answers = SurveyAnswers::from_parts(Some("heavy"), Some("hands-on"), Some("love"), None);
        let result = plan(&answers, &sample_completed(), &catalog());

        let codes: Vec<&str> = result
            .next_term
            .iter()
            .chain(&result.following_term)
            .map(|c| c.code.as_str())
            .collect();

        let mobile = codes.iter().position(|c| *c == "CS 4153");
        let games = codes.iter().position(|c| *c == "CS 4173");
        assert!(mobile.is_some() && games.is_some());
        assert!(mobile < games);
    }

    #[test]
    fn test_career_goal_pulls_in_matching_elective() {
        let answers = SurveyAnswers::from_parts(
            Some("medium"),
            None,
            None,
            Some("interested in AI and machine learning"),
        );
        let result = plan(&answers, &sample_completed(), &catalog());

        let codes: Vec<&str> = result
            .next_term
            .iter()
            .chain(&result.following_term)
            .map(|c| c.code.as_str())
            .collect();
        assert!(codes.contains(&"CS 4793"), "ai-ml elective should be selected: {codes:?}");
    }

    #[test]
    fn test_zero_scoring_electives_are_dropped() {
        // No style/group/goal answers: every elective outside the tree leaf
        // scores 0 and is discarded, leaving only the tree picks.
        let answers = SurveyAnswers::from_parts(Some("medium"), None, None, None);
        let result = plan(&answers, &sample_completed(), &catalog());

        let codes: Vec<&str> = result
            .next_term
            .iter()
            .chain(&result.following_term)
            .map(|c| c.code.as_str())
            .collect();
        // medium fallback leaf: CS 3443, CS 4323, CS 4433, CS 4273; CS 4323
        // is ineligible (needs CS 3443).
        assert_eq!(codes, vec!["CS 3443", "CS 4433", "CS 4273"]);
    }

    #[test]
    fn test_everything_completed_yields_empty_plan() {
        let cat = catalog();
        let completed: HashSet<String> =
            cat.courses().iter().map(|c| c.code.clone()).collect();
        let answers = SurveyAnswers::from_parts(Some("heavy"), None, None, None);

        let result = plan(&answers, &completed, &cat);
        assert!(result.is_empty());
    }

    #[test]
    fn test_each_recommendation_has_a_reason() {
        let answers = SurveyAnswers::from_parts(Some("medium"), Some("visual"), None, None);
        let result = plan(&answers, &sample_completed(), &catalog());

        assert!(!result.is_empty());
        for course in result.next_term.iter().chain(&result.following_term) {
            assert!(!course.reason.is_empty());
        }
    }

    #[test]
    fn test_quota_constant_sanity() {
        assert_eq!(scoring::workload_quota(Some(Workload::Light)), 2);
        assert_eq!(scoring::workload_quota(Some(Workload::Heavy)), 6);
    }
}
