//! Salesfly API modules
//!
//! This module contains submodules for the Salesfly product APIs:
//!
//! - [`geolocation`] - IP geolocation lookups
//! - [`currency`] - Exchange rates and conversions
//! - [`mail`] - Transactional mail
//! - [`pdf`] - PDF document creation
//! - [`sms`] - Text messages
//! - [`usage`] - Account usage metering
//!
//! Each module exposes an API struct built over a shared
//! [`SalesflyContext`], plus the typed request options and response
//! objects for its endpoints.

pub mod currency;
pub mod geolocation;
pub mod mail;
pub mod pdf;
pub mod sms;
pub mod r#trait;
pub mod usage;

pub use currency::{
    CurrencyApi, CurrencyChange, CurrencyConvert, CurrencyOptions, CurrencyRate,
    CurrencyRateChange, CurrencyTimeframe,
};
pub use geolocation::{
    GeoLocationApi, GeoOptions, IpCurrency, IpLanguage, IpLocation, IpSecurity, IpTimezone,
};
pub use mail::{Attachment, MailApi, MailMessage, MailReceipt, MAX_ATTACHMENTS, MAX_RECIPIENTS, MAX_TAGS};
pub use pdf::{
    PageOrientation, PdfApi, PdfEncryption, PdfOptions, PdfPermissions, TextAlign,
    WatermarkPosition,
};
pub use r#trait::{SalesflyApi, SalesflyContext};
pub use sms::{SmsApi, SmsReceipt};
pub use usage::{ApiUsage, UsageApi};
