//! Salesfly HTTP client module
//!
//! This module contains the SalesflyClient and related types.

mod http_client;
pub use http_client::{SalesflyClient, SalesflyClientBuilder};

mod salesfly;
pub use salesfly::Salesfly;

mod builder;
pub use builder::SalesflyBuilder;
