//! Middleware components for the Salesfly SDK.
//!
//! Middleware uses Tower patterns and can be composed with
//! `ServiceBuilder` to add cross-cutting concerns around request
//! dispatch.
//!
//! ## Usage
//!
//! ```ignore
//! use salesfly::middleware::LoggingMiddleware;
//!
//! let salesfly = Salesfly::builder()
//!     .api_key(key)
//!     .with_middleware(LoggingMiddleware::new())
//!     .build()?;
//! ```

// Re-export tower types for convenience
pub use tower::{Layer, Service, ServiceBuilder};

mod logging;

pub use logging::LoggingMiddleware;
