//! Route registry for chat navigation.
//!
//! The registry is an ordered list, not a map: the resolver returns the
//! first matching route, so iteration order is part of the observable
//! contract and must be reproducible.

use serde::Deserialize;

/// Registry bundled with the binary.
const ROUTES_DEFAULTS: &str = include_str!("../../assets/routes.toml");

/// One navigable page and the phrases that refer to it
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    /// Route path (e.g., "/calendar")
    pub path: String,
    /// Friendly page name used in replies (e.g., "calendar")
    pub name: String,
    /// Keyword phrases matched as substrings of the message
    pub keywords: Vec<String>,
}

impl RouteEntry {
    /// The path with its leading slash stripped, as users type it
    #[must_use]
    pub fn path_segment(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}

#[derive(Debug, Deserialize)]
struct RoutesFile {
    routes: Vec<RouteEntry>,
}

/// Ordered collection of navigable routes
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<RouteEntry>,
}

impl RouteRegistry {
    /// Build a registry from an explicit ordered list of entries
    #[must_use]
    pub const fn new(routes: Vec<RouteEntry>) -> Self {
        Self { routes }
    }

    /// Parse a registry from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let file: RoutesFile = toml::from_str(toml_str)?;
        Ok(Self::new(file.routes))
    }

    /// Load the registry compiled into the binary
    ///
    /// # Panics
    ///
    /// Panics if the embedded registry is invalid TOML. This should never
    /// happen in practice since the registry is compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_toml(ROUTES_DEFAULTS).expect("Failed to parse compiled-in route registry")
    }

    /// All routes in priority order
    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::embedded()
    }
}
