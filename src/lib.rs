//! Salesfly REST API client for Rust
//!
//! Typed bindings for the Salesfly REST API: IP geolocation, currency
//! conversion, transactional mail, SMS, PDF generation, and account
//! usage metering.
//!
//! Every endpoint performs exactly one HTTP round trip. Successful JSON
//! responses carry their payload under a `data` key, which the client
//! unwraps into the endpoint's result type; non-2xx responses map to
//! [`SalesflyError::Response`] with the API's status, message, and
//! machine-readable code.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesfly::{Salesfly, types::ApiKey};
//! use salesfly::api::geolocation::GeoOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let salesfly = Salesfly::builder()
//!         .api_key(ApiKey::new("sk_live_abc123")?)
//!         .build()?;
//!
//!     let location = salesfly.geoip("8.8.8.8", &GeoOptions::default()).await?;
//!     println!("Country: {:?}", location.country);
//!
//!     let usage = salesfly.usage().await?;
//!     println!("Used {} of {} requests", usage.used, usage.allowed);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Salesfly API modules (geolocation, currency, mail, pdf, sms, usage)
//! - [`client`] - HTTP client and the unified [`Salesfly`] facade
//! - [`error`] - Error types
//! - [`middleware`] - Tower middleware for request dispatch
//! - [`types`] - API key and shared type definitions
//!
//! ## Error Handling
//!
//! The SDK uses the [`SalesflyError`] enum for error handling:
//!
//! ```rust,ignore
//! use salesfly::SalesflyError;
//!
//! match result {
//!     Ok(response) => { /* handle success */ }
//!     Err(SalesflyError::Response { status, message, code }) => {
//!         eprintln!("API error {status} ({code:?}): {message}");
//!     }
//!     Err(SalesflyError::Http(e)) => {
//!         eprintln!("HTTP error: {e}");
//!     }
//!     Err(e) => {
//!         eprintln!("Other error: {e}");
//!     }
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod middleware;
pub mod types;

pub use client::{Salesfly, SalesflyBuilder, SalesflyClient, SalesflyClientBuilder};
pub use error::{Result, SalesflyError};
pub use types::ApiKey;
