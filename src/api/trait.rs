//! Salesfly API trait and context
//!
//! Provides the base trait and context for all Salesfly API implementations.

use std::sync::Arc;

use crate::client::SalesflyClient;

/// Context holding shared resources for Salesfly API implementations.
///
/// Wraps the HTTP client that API implementations use to make requests.
#[derive(Clone)]
pub struct SalesflyContext {
    /// The Salesfly HTTP client for making API requests
    pub(crate) client: Arc<SalesflyClient>,
}

impl std::fmt::Debug for SalesflyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesflyContext")
            .field("client", &"SalesflyClient { .. }")
            .finish()
    }
}

impl SalesflyContext {
    /// Create a new SalesflyContext
    pub fn new(client: Arc<SalesflyClient>) -> Self {
        Self { client }
    }

    /// Get a reference to the Salesfly HTTP client.
    pub fn client(&self) -> &SalesflyClient {
        &self.client
    }
}

/// Trait for Salesfly API implementations.
///
/// All API modules implement this trait to provide access to the
/// shared context.
pub trait SalesflyApi: Send + Sync {
    /// Get a reference to the Salesfly context
    fn context(&self) -> &SalesflyContext;

    /// Get the name of this API for logging and error context.
    ///
    /// Implementors should override this to return a descriptive name
    /// (e.g., "geolocation", "currency", "mail").
    fn api_name(&self) -> &'static str {
        "unknown"
    }
}
