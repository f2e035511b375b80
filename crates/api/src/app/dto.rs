//! Response DTOs and their mapping from domain types.

use serde::Serialize;

use hexamod_domain::Greeting;

/// JSON body of every greeting-bearing response: exactly one `message` key.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    message: String,
}

impl From<Greeting> for GreetingResponse {
    fn from(greeting: Greeting) -> Self {
        Self {
            message: greeting.into_message(),
        }
    }
}

/// Fixed body of the debug ping endpoint.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health body, shaped like the actuator surface it stands in for.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
