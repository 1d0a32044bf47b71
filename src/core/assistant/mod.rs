//! Chat assistant with an LLM primary path and a rule-based fallback.
//!
//! The assistant asks Gemini first when an API key is configured. Any failure
//! there (no key, network error, exhausted model chain) degrades to the
//! deterministic [`IntentResolver`], so a chat message always gets an answer.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::core::config::Config;
use crate::core::intent::{IntentResolver, NavigationIntent, RouteRegistry};

/// Default persona when the caller doesn't specify one
pub const DEFAULT_ROLE: &str = "student";

/// Build the system prompt for the given user role over the known routes.
///
/// The prompt pins the model to the JSON reply shape the rest of the
/// pipeline expects and enumerates the navigable pages so the model only
/// ever proposes real routes.
#[must_use]
pub fn system_prompt(role: &str, registry: &RouteRegistry) -> String {
    let mut routes_block = String::new();
    for route in registry.routes() {
        routes_block.push_str(&format!("- {} ({})\n", route.path, route.name));
    }

    format!(
        "You are the Smart Campus AI assistant for a university advising app. \
The current user's role is: {role}.

You help users navigate the app and answer questions about advising, \
appointments, and courses.

The app has these pages:
{routes_block}
Always respond with a single JSON object and nothing else, in this shape:
{{\"response\": \"<your reply to the user>\", \"navigation\": {{\"route\": \"<page path>\", \"shouldNavigate\": true}}}}

If the user is not asking to go to a page, set \"navigation\" to null. \
Only use routes from the list above. Keep replies concise and friendly."
    )
}

/// Chat assistant combining the Gemini client with the offline resolver
pub struct Assistant {
    client: GeminiClient,
    resolver: IntentResolver,
    role: String,
}

impl Assistant {
    /// Build an assistant from loaded configuration and a user role
    #[must_use]
    pub fn from_config(config: &Config, role: &str) -> Self {
        let client = GeminiClient::new(
            config.assistant.api_key.clone(),
            config.assistant.model.clone(),
            config.assistant.endpoint.clone(),
        );
        Self {
            client,
            resolver: IntentResolver::default(),
            role: role.to_string(),
        }
    }

    /// Whether the LLM path is available
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.client.is_configured()
    }

    /// Answer a message, preferring the LLM and falling back to rules.
    ///
    /// Never fails: an LLM error is logged and the rule-based resolver
    /// produces the reply instead.
    #[must_use]
    pub fn respond(&self, message: &str) -> NavigationIntent {
        if self.client.is_configured() {
            let prompt = system_prompt(&self.role, self.resolver.registry());
            match self.client.generate(&prompt, message) {
                Ok(intent) => return intent,
                Err(err) => {
                    crate::warn!("Assistant falling back to rule-based replies: {err}");
                }
            }
        }
        self.resolver.resolve(message)
    }

    /// Answer a message with the rule-based resolver only
    #[must_use]
    pub fn resolve_offline(&self, message: &str) -> NavigationIntent {
        self.resolver.resolve(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_lists_every_route() {
        let registry = RouteRegistry::embedded();
        let prompt = system_prompt(DEFAULT_ROLE, &registry);

        for route in registry.routes() {
            assert!(prompt.contains(&route.path), "missing {}", route.path);
        }
        assert!(prompt.contains("shouldNavigate"));
    }

    #[test]
    fn test_system_prompt_embeds_role() {
        let registry = RouteRegistry::embedded();
        let prompt = system_prompt("advisor", &registry);
        assert!(prompt.contains("The current user's role is: advisor"));
    }

    #[test]
    fn test_unconfigured_assistant_uses_resolver() {
        let config = Config::from_defaults();
        let assistant = Assistant::from_config(&config, DEFAULT_ROLE);
        assert!(!assistant.is_online());

        let intent = assistant.respond("go to calendar");
        assert_eq!(
            intent.navigation.map(|n| n.route),
            Some("/calendar".to_string())
        );
    }

    #[test]
    fn test_resolve_offline_ignores_configuration() {
        let mut config = Config::from_defaults();
        config.assistant.api_key = "some-key".to_string();
        let assistant = Assistant::from_config(&config, DEFAULT_ROLE);
        assert!(assistant.is_online());

        let intent = assistant.resolve_offline("hello");
        assert!(intent.navigation.is_none());
    }
}
