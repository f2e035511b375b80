//! Default implementation of the greeting use case.

use std::time::Duration;

use async_trait::async_trait;

use hexamod_domain::Greeting;

use crate::port::GetGreetingUseCase;

/// Environment variable consulted on every public greeting (not cached).
const VERSION_VAR: &str = "APP_VERSION";

/// Substituted when `APP_VERSION` is absent, empty, or unreadable.
const DEFAULT_VERSION: &str = "v1";

const SECURE_MESSAGE: &str = "This is SECURE data from Hexagonal Multi-Module Service!";

/// Simulated downstream latency on the secure path.
const SECURE_DELAY: Duration = Duration::from_millis(100);

/// Stateless greeting service; safe to share behind an `Arc`.
#[derive(Debug, Default, Clone)]
pub struct GreetingService;

impl GreetingService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GetGreetingUseCase for GreetingService {
    async fn public_greeting(&self) -> Greeting {
        let version = resolve_version(std::env::var(VERSION_VAR).ok());
        Greeting::new(public_message(&version))
    }

    async fn secure_greeting(&self) -> Greeting {
        // Non-blocking suspension: concurrent callers do not hold a thread.
        tokio::time::sleep(SECURE_DELAY).await;
        Greeting::new(SECURE_MESSAGE)
    }
}

/// Version string to advertise, given the raw environment lookup.
///
/// Absent and empty are treated identically; a failed lookup (e.g. non-UTF-8
/// value) arrives here as `None` and takes the default too.
fn resolve_version(raw: Option<String>) -> String {
    match raw {
        Some(version) if !version.is_empty() => version,
        _ => DEFAULT_VERSION.to_string(),
    }
}

fn public_message(version: &str) -> String {
    format!("Hello from Hexagonal Multi-Module Public Endpoint! Version: {version}")
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn resolve_version_prefers_the_supplied_value() {
        assert_eq!(resolve_version(Some("2.3.1".to_string())), "2.3.1");
    }

    #[test]
    fn resolve_version_defaults_when_absent_or_empty() {
        assert_eq!(resolve_version(None), DEFAULT_VERSION);
        assert_eq!(resolve_version(Some(String::new())), DEFAULT_VERSION);
    }

    #[test]
    fn public_message_ends_with_the_version() {
        let message = public_message("v7");

        assert!(message.starts_with("Hello from Hexagonal Multi-Module Public Endpoint!"));
        assert!(message.ends_with("Version: v7"));
    }

    #[tokio::test]
    async fn public_greeting_never_fails_and_carries_a_version() {
        let greeting = GreetingService::new().public_greeting().await;

        assert!(greeting
            .message()
            .starts_with("Hello from Hexagonal Multi-Module Public Endpoint! Version: "));
    }

    #[tokio::test]
    async fn secure_greeting_returns_the_fixed_message() {
        let greeting = GreetingService::new().secure_greeting().await;

        assert_eq!(greeting.message(), SECURE_MESSAGE);
    }

    #[tokio::test]
    async fn secure_greeting_never_resolves_before_the_delay() {
        let started = Instant::now();
        GreetingService::new().secure_greeting().await;

        assert!(started.elapsed() >= SECURE_DELAY);
    }
}
