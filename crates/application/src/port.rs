//! Inbound port for obtaining greetings.

use async_trait::async_trait;

use hexamod_domain::Greeting;

/// Use-case boundary for producing greetings.
///
/// Object-safe so adapters can hold it as `Arc<dyn GetGreetingUseCase>`.
#[async_trait]
pub trait GetGreetingUseCase: Send + Sync {
    /// Greeting for the public surface. Never fails.
    async fn public_greeting(&self) -> Greeting;

    /// Greeting for the authenticated surface. Resolves only after a fixed
    /// delay simulating a downstream dependency.
    async fn secure_greeting(&self) -> Greeting;
}
