//! Ordered route policy.
//!
//! The policy is an explicit data structure (no declarative annotations):
//! an ordered list of `(pattern, rule)` pairs evaluated top to bottom.
//! First match wins; paths matching nothing require authentication.
//!
//! - No IO
//! - No panics
//! - Pure evaluation per request

/// Outcome of matching a request path against the policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessRule {
    /// Forward the request without demanding credentials.
    PermitAll,

    /// Demand verified credentials before forwarding.
    RequireAuthentication,
}

/// A path pattern: exact, or a `/prefix/**` wildcard.
///
/// A wildcard pattern matches the prefix itself and any path below it
/// (`/public/**` matches `/public` and `/public/hello`, not `/publicity`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Exact(String),
    Prefix(String),
}

impl PathPattern {
    /// Parse a pattern string; a trailing `/**` makes it a prefix pattern.
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
        }
    }
}

/// Ordered `(pattern, rule)` table; immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    rules: Vec<(PathPattern, AccessRule)>,
}

impl RoutePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a permit-all rule.
    pub fn permit(mut self, pattern: &str) -> Self {
        self.rules
            .push((PathPattern::parse(pattern), AccessRule::PermitAll));
        self
    }

    /// Append an explicit require-authentication rule.
    pub fn authenticated(mut self, pattern: &str) -> Self {
        self.rules.push((
            PathPattern::parse(pattern),
            AccessRule::RequireAuthentication,
        ));
        self
    }

    /// Evaluate `path` top to bottom; the first matching rule wins and
    /// unmatched paths require authentication.
    pub fn evaluate(&self, path: &str) -> AccessRule {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, rule)| *rule)
            .unwrap_or(AccessRule::RequireAuthentication)
    }
}
