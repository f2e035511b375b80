//! `hexamod-application` — use-case layer: inbound ports and their services.
//!
//! Adapters depend on the port traits defined here, never on concrete
//! services; wiring the two together happens at process start.

pub mod port;
pub mod service;

pub use port::GetGreetingUseCase;
pub use service::GreetingService;
