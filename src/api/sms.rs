//! SMS API
//!
//! Sends a single text message.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::r#trait::{SalesflyApi, SalesflyContext};
use crate::error::Result;

/// Receipt for a sent text message.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsReceipt {
    /// Message identifier assigned by the API
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    /// Price charged for the message
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Serialize)]
struct SmsRequest<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
}

/// SMS API
pub struct SmsApi {
    context: Arc<SalesflyContext>,
}

impl SmsApi {
    /// Create a new SmsApi instance
    pub fn new(context: Arc<SalesflyContext>) -> Self {
        Self { context }
    }

    /// Send a text message
    ///
    /// POST /v1/sms/send
    ///
    /// # Arguments
    /// * `from` - Sender name or number
    /// * `to` - Recipient number in E.164 format
    /// * `text` - Message body
    pub async fn send(&self, from: &str, to: &str, text: &str) -> Result<SmsReceipt> {
        let request = SmsRequest { from, to, text };
        self.context.client.post("/v1/sms/send", &request).await
    }
}

impl SalesflyApi for SmsApi {
    fn context(&self) -> &SalesflyContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "sms"
    }
}
