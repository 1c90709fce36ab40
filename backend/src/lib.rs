//! Blog backend: a small REST service for bloggers and their posts.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: entities, ports and services.
//! - [`inbound`]: Actix HTTP handlers.
//! - [`outbound`]: SQLite repositories.
//! - [`server`]: application assembly.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
