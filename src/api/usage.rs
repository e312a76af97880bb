//! Usage API
//!
//! Programmatic visibility into request consumption across products for
//! the current subscription period.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::r#trait::{SalesflyApi, SalesflyContext};
use crate::error::Result;

/// Allowed and used requests for the current subscription period.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiUsage {
    /// Requests allowed per month
    pub allowed: u64,
    /// Requests made this month
    pub used: u64,
}

impl ApiUsage {
    /// Requests left in the current period.
    pub fn remaining(&self) -> u64 {
        self.allowed.saturating_sub(self.used)
    }
}

/// Usage API
pub struct UsageApi {
    context: Arc<SalesflyContext>,
}

impl UsageApi {
    /// Create a new UsageApi instance
    pub fn new(context: Arc<SalesflyContext>) -> Self {
        Self { context }
    }

    /// Get usage for the current subscription period
    ///
    /// GET /v1/usage
    pub async fn get(&self) -> Result<ApiUsage> {
        self.context.client.get("/v1/usage", &[]).await
    }
}

impl SalesflyApi for UsageApi {
    fn context(&self) -> &SalesflyContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "usage"
    }
}
