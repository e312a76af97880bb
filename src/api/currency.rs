//! Currency API
//!
//! Foreign exchange rates: latest and historical quotes, single
//! conversions, change over a period, and daily rates for a timeframe.
//! Dates travel on the wire as `YYYY-MM-DD`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::r#trait::{SalesflyApi, SalesflyContext};
use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional parameters for rate queries.
#[derive(Debug, Clone, Default)]
pub struct CurrencyOptions {
    /// Base currency, ISO 4217 code. The API defaults to USD.
    pub base: Option<String>,
    /// Restrict the result to these quote currencies.
    pub currencies: Option<Vec<String>>,
}

impl CurrencyOptions {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(base) = &self.base {
            query.push(("base", base.clone()));
        }
        if let Some(currencies) = &self.currencies {
            query.push(("currencies", currencies.join(",")));
        }
        query
    }
}

/// Exchange rates for a base currency on a given date.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyRate {
    pub base: String,
    pub date: String,
    #[serde(default)]
    pub timestamp: i64,
    pub rates: HashMap<String, f64>,
}

/// Result of a single currency conversion.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyConvert {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub date: String,
    #[serde(default)]
    pub timestamp: i64,
    pub rate: f64,
    pub result: f64,
}

/// Per-currency rate movement between two dates.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyRateChange {
    #[serde(rename = "start")]
    pub start_rate: f64,
    #[serde(rename = "end")]
    pub end_rate: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Rate movements for a set of currencies between two dates.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyChange {
    pub base: String,
    pub start_date: String,
    pub end_date: String,
    pub rates: HashMap<String, CurrencyRateChange>,
}

/// Daily rates for one currency over a period.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyTimeframe {
    pub base: String,
    pub currency: String,
    pub start_date: String,
    pub end_date: String,
    /// Number of days covered
    #[serde(default)]
    pub timespan: u32,
    /// Date (`YYYY-MM-DD`) to rate
    pub rates: HashMap<String, f64>,
}

/// Currency API
pub struct CurrencyApi {
    context: Arc<SalesflyContext>,
}

impl CurrencyApi {
    /// Create a new CurrencyApi instance
    pub fn new(context: Arc<SalesflyContext>) -> Self {
        Self { context }
    }

    /// Get the latest exchange rates
    ///
    /// GET /v1/currency/latest
    pub async fn latest(&self, options: &CurrencyOptions) -> Result<CurrencyRate> {
        self.context
            .client
            .get("/v1/currency/latest", &options.to_query())
            .await
    }

    /// Get exchange rates for a past date
    ///
    /// GET /v1/currency/historical/{date}
    pub async fn historical(
        &self,
        date: NaiveDate,
        options: &CurrencyOptions,
    ) -> Result<CurrencyRate> {
        let path = format!("/v1/currency/historical/{}", date.format(DATE_FORMAT));
        self.context.client.get(&path, &options.to_query()).await
    }

    /// Convert an amount between two currencies
    ///
    /// GET /v1/currency/convert/{amount}/{from}/{to}?date={date}
    ///
    /// `date` defaults to today (UTC) when not given.
    pub async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
        date: Option<NaiveDate>,
    ) -> Result<CurrencyConvert> {
        let date = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
        let path = format!("/v1/currency/convert/{amount}/{from}/{to}");
        let query = [("date", date.format(DATE_FORMAT).to_string())];
        self.context.client.get(&path, &query).await
    }

    /// Get rate changes between two dates
    ///
    /// GET /v1/currency/change/{start}/{end}
    pub async fn change(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        options: &CurrencyOptions,
    ) -> Result<CurrencyChange> {
        let path = format!(
            "/v1/currency/change/{}/{}",
            start_date.format(DATE_FORMAT),
            end_date.format(DATE_FORMAT)
        );
        self.context.client.get(&path, &options.to_query()).await
    }

    /// Get daily rates for one currency over a period
    ///
    /// GET /v1/currency/timeframe/{currency}/{start}/{end}?base={base}
    ///
    /// `base` defaults to USD when not given.
    pub async fn timeframe(
        &self,
        currency: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        base: Option<&str>,
    ) -> Result<CurrencyTimeframe> {
        let path = format!(
            "/v1/currency/timeframe/{}/{}/{}",
            currency,
            start_date.format(DATE_FORMAT),
            end_date.format(DATE_FORMAT)
        );
        let query = [("base", base.unwrap_or("USD").to_string())];
        self.context.client.get(&path, &query).await
    }
}

impl SalesflyApi for CurrencyApi {
    fn context(&self) -> &SalesflyContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "currency"
    }
}
