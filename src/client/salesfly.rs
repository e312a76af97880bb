//! Unified Salesfly SDK client

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::currency::{
    CurrencyApi, CurrencyChange, CurrencyConvert, CurrencyOptions, CurrencyRate, CurrencyTimeframe,
};
use crate::api::geolocation::{GeoLocationApi, GeoOptions, IpLocation};
use crate::api::mail::{MailApi, MailMessage, MailReceipt};
use crate::api::pdf::{PdfApi, PdfOptions};
use crate::api::sms::{SmsApi, SmsReceipt};
use crate::api::usage::{ApiUsage, UsageApi};
use crate::api::SalesflyContext;
use crate::error::Result;

/// Unified Salesfly client
///
/// This is the main entry point for the SDK. It provides access to all
/// Salesfly APIs through a unified interface.
///
/// # Example
///
/// ```rust,ignore
/// use salesfly::Salesfly;
/// use salesfly::types::ApiKey;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let salesfly = Salesfly::builder()
///         .api_key(ApiKey::new("sk_live_abc123")?)
///         .build()?;
///
///     let location = salesfly.geoip("8.8.8.8", &Default::default()).await?;
///     println!("Country: {:?}", location.country);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Salesfly {
    context: Arc<SalesflyContext>,
}

impl Salesfly {
    pub fn builder() -> super::builder::SalesflyBuilder {
        super::builder::SalesflyBuilder::default()
    }

    /// Get the shared context for building API structs directly.
    pub fn context(&self) -> Arc<SalesflyContext> {
        self.context.clone()
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        self.context.client().base_url()
    }

    // Geolocation API

    /// Look up a single IP address.
    pub async fn geoip(&self, ip: &str, options: &GeoOptions) -> Result<IpLocation> {
        GeoLocationApi::new(self.context.clone()).get(ip, options).await
    }

    /// Look up the caller's own IP address.
    pub async fn geoip_current(&self, options: &GeoOptions) -> Result<IpLocation> {
        GeoLocationApi::new(self.context.clone())
            .get_current(options)
            .await
    }

    /// Look up several IP addresses in one round trip.
    pub async fn geoip_bulk(
        &self,
        ips: &[&str],
        options: &GeoOptions,
    ) -> Result<Vec<IpLocation>> {
        GeoLocationApi::new(self.context.clone())
            .get_bulk(ips, options)
            .await
    }

    // Currency API

    /// Get the latest exchange rates.
    pub async fn currency_latest(&self, options: &CurrencyOptions) -> Result<CurrencyRate> {
        CurrencyApi::new(self.context.clone()).latest(options).await
    }

    /// Get exchange rates for a past date.
    pub async fn currency_historical(
        &self,
        date: NaiveDate,
        options: &CurrencyOptions,
    ) -> Result<CurrencyRate> {
        CurrencyApi::new(self.context.clone())
            .historical(date, options)
            .await
    }

    /// Convert an amount between two currencies.
    pub async fn currency_convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
        date: Option<NaiveDate>,
    ) -> Result<CurrencyConvert> {
        CurrencyApi::new(self.context.clone())
            .convert(amount, from, to, date)
            .await
    }

    /// Get rate changes between two dates.
    pub async fn currency_change(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        options: &CurrencyOptions,
    ) -> Result<CurrencyChange> {
        CurrencyApi::new(self.context.clone())
            .change(start_date, end_date, options)
            .await
    }

    /// Get daily rates for one currency over a period.
    pub async fn currency_timeframe(
        &self,
        currency: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        base: Option<&str>,
    ) -> Result<CurrencyTimeframe> {
        CurrencyApi::new(self.context.clone())
            .timeframe(currency, start_date, end_date, base)
            .await
    }

    // Mail API

    /// Send a mail message.
    pub async fn mail_send(&self, message: &MailMessage) -> Result<MailReceipt> {
        MailApi::new(self.context.clone()).send(message).await
    }

    // PDF API

    /// Create a PDF document, returning the raw bytes.
    pub async fn pdf_create(&self, options: &PdfOptions) -> Result<Vec<u8>> {
        PdfApi::new(self.context.clone()).create(options).await
    }

    // SMS API

    /// Send a text message.
    pub async fn sms_send(&self, from: &str, to: &str, text: &str) -> Result<SmsReceipt> {
        SmsApi::new(self.context.clone()).send(from, to, text).await
    }

    // Usage API

    /// Get usage for the current subscription period.
    pub async fn usage(&self) -> Result<ApiUsage> {
        UsageApi::new(self.context.clone()).get().await
    }
}

impl From<Arc<SalesflyContext>> for Salesfly {
    fn from(context: Arc<SalesflyContext>) -> Self {
        Self { context }
    }
}

impl std::fmt::Debug for Salesfly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Salesfly")
            .field("base_url", &self.base_url())
            .finish_non_exhaustive()
    }
}
