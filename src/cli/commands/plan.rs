//! Plan command handler

use campus_advisor::config::Config;
use campus_advisor::core::catalog::Catalog;
use campus_advisor::core::models::{RecommendationResult, SurveyAnswers};
use campus_advisor::core::recommender;
use campus_advisor::verbose;
use std::collections::HashSet;
use std::path::Path;

/// Handle the plan command
pub fn run(
    workload: Option<&str>,
    learning_style: Option<&str>,
    group_work: Option<&str>,
    career_goal: Option<&str>,
    completed: &[String],
    json: bool,
    config: &Config,
) {
    let catalog = if config.paths.catalog_file.is_empty() {
        Catalog::embedded()
    } else {
        match Catalog::load_from_file(Path::new(&config.paths.catalog_file)) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    };

    let completed_set: HashSet<String> = if completed.is_empty() {
        verbose!("No --completed codes given; using the catalog's sample student");
        catalog.sample_profile().completed_codes()
    } else {
        completed.iter().cloned().collect()
    };

    let answers = SurveyAnswers::from_parts(workload, learning_style, group_work, career_goal);
    let result = recommender::plan(&answers, &completed_set, &catalog);

    if json {
        print_json(&result);
    } else {
        print_plain(&result);
    }
}

fn print_json(result: &RecommendationResult) {
    match serde_json::to_string_pretty(result) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("✗ Failed to serialize plan: {e}");
            std::process::exit(1);
        }
    }
}

fn print_plain(result: &RecommendationResult) {
    if result.is_empty() {
        println!("No eligible courses to recommend.");
        return;
    }

    println!("Next term:");
    for course in &result.next_term {
        println!("  {} - {}", course.code, course.name);
        println!("    {}", course.reason);
    }

    if !result.following_term.is_empty() {
        println!("\nFollowing term:");
        for course in &result.following_term {
            println!("  {} - {}", course.code, course.name);
            println!("    {}", course.reason);
        }
    }
}
