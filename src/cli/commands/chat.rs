//! Chat command handler

use campus_advisor::config::Config;
use campus_advisor::core::assistant::Assistant;
use campus_advisor::core::intent::NavigationIntent;
use campus_advisor::verbose;

/// Handle the chat command
pub fn run(message: &str, offline: bool, role: &str, json: bool, config: &Config) {
    let assistant = Assistant::from_config(config, role);

    let intent = if offline {
        verbose!("Answering with the rule-based resolver (--offline)");
        assistant.resolve_offline(message)
    } else {
        if !assistant.is_online() {
            verbose!("No API key configured; answering with the rule-based resolver");
        }
        assistant.respond(message)
    };

    if json {
        print_json(&intent);
    } else {
        print_plain(&intent);
    }
}

fn print_json(intent: &NavigationIntent) {
    match serde_json::to_string_pretty(intent) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("✗ Failed to serialize reply: {e}");
            std::process::exit(1);
        }
    }
}

fn print_plain(intent: &NavigationIntent) {
    println!("{}", intent.response);
    if let Some(navigation) = &intent.navigation {
        println!("→ navigate to {}", navigation.route);
    }
}
