//! Deterministic chat-intent resolver.
//!
//! This is the always-available fallback behind the LLM assistant: given a
//! free-text message it decides whether the user wants to navigate to a known
//! page, and otherwise produces a canned informational reply. It never fails
//! and has no I/O.
//!
//! Route matching is substring-based and first-match-wins over the registry
//! order. A message mentioning two pages resolves to whichever route is
//! checked first; this is a deliberate convention, not a scored best-match.

pub mod routes;

pub use routes::{RouteEntry, RouteRegistry};

use serde::{Deserialize, Serialize};

/// Navigation verbs that signal the user wants to move to a page.
const NAV_VERBS: &[&str] = &[
    "go to",
    "navigate to",
    "open",
    "show me",
    "take me to",
    "visit",
    "view",
];

const GREETING_WORDS: &[&str] = &["hello", "hi", "hey"];
const APPOINTMENT_WORDS: &[&str] = &["appointment", "meeting"];
const HELP_WORDS: &[&str] = &["help", "what can you do"];
const IDENTITY_WORDS: &[&str] = &["who are you", "what are you"];

const GREETING_REPLY: &str = "Hello! I'm your Smart Campus assistant. I can help you navigate the app, answer questions about advising, and assist with appointments. How can I help you today?";

const APPOINTMENT_REPLY: &str =
    "You can view and manage your appointments on the Calendar page. Would you like me to take you there?";

const HELP_REPLY: &str = "I can help you with:
- Navigating to different pages (Calendar, Dashboard, Profile, Settings)
- Answering questions about the Smart Campus app
- Providing information about appointments and advising

Try asking me to \"go to calendar\" or \"show me my profile\"!";

const IDENTITY_REPLY: &str = "I'm the Smart Campus AI assistant, designed to help students and advisors navigate the advising system and answer questions.";

/// A navigation instruction for the calling UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    /// Route path to navigate to (e.g., "/calendar")
    pub route: String,
    /// Always `true` when present; kept for wire compatibility
    #[serde(rename = "shouldNavigate")]
    pub should_navigate: bool,
}

/// Output of resolving one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    /// Human-readable reply
    pub response: String,
    /// Present iff the message was judged a navigation request
    pub navigation: Option<Navigation>,
}

impl NavigationIntent {
    /// A plain text reply with no navigation
    #[must_use]
    pub const fn reply(response: String) -> Self {
        Self {
            response,
            navigation: None,
        }
    }

    /// A reply paired with a navigation target
    #[must_use]
    pub const fn navigate(response: String, route: String) -> Self {
        Self {
            response,
            navigation: Some(Navigation {
                route,
                should_navigate: true,
            }),
        }
    }
}

/// Rule-based intent resolver over an ordered route registry
#[derive(Debug, Clone, Default)]
pub struct IntentResolver {
    registry: RouteRegistry,
}

impl IntentResolver {
    /// Create a resolver over an explicit registry
    #[must_use]
    pub const fn new(registry: RouteRegistry) -> Self {
        Self { registry }
    }

    /// The registry this resolver matches against
    #[must_use]
    pub const fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Resolve a free-text message into a reply and optional navigation.
    ///
    /// Total function: empty or unparseable input falls through to the
    /// generic echo reply.
    #[must_use]
    pub fn resolve(&self, message: &str) -> NavigationIntent {
        let normalized = message.to_lowercase().trim().to_string();

        if let Some(route) = self.detect_route(&normalized) {
            return NavigationIntent::navigate(
                format!("I'll take you to the {}.", route.name),
                route.path.clone(),
            );
        }

        if contains_any(&normalized, GREETING_WORDS) {
            NavigationIntent::reply(GREETING_REPLY.to_string())
        } else if contains_any(&normalized, APPOINTMENT_WORDS) {
            NavigationIntent::reply(APPOINTMENT_REPLY.to_string())
        } else if contains_any(&normalized, HELP_WORDS) {
            NavigationIntent::reply(HELP_REPLY.to_string())
        } else if contains_any(&normalized, IDENTITY_WORDS) {
            NavigationIntent::reply(IDENTITY_REPLY.to_string())
        } else {
            NavigationIntent::reply(format!(
                "I understand you're asking about \"{message}\". I can help you navigate the app or answer questions about advising. Try asking me to go to a specific page, or ask about appointments, calendar, or your profile."
            ))
        }
    }

    /// Detect a routing intent in an already-normalized message.
    ///
    /// A route matches when the message contains one of its keywords AND
    /// either a navigation verb or the route's own path segment. First match
    /// in registry order wins.
    fn detect_route(&self, normalized: &str) -> Option<&RouteEntry> {
        for route in self.registry.routes() {
            for keyword in &route.keywords {
                if normalized.contains(keyword.as_str()) {
                    let has_nav_verb = contains_any(normalized, NAV_VERBS);
                    if has_nav_verb || normalized.contains(route.path_segment()) {
                        return Some(route);
                    }
                }
            }
        }
        None
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
