//! PDF API
//!
//! Creates PDF documents from HTML or a URL. This is a binary endpoint:
//! the response body is the PDF itself, not a JSON envelope.
//!
//! ## Example
//!
//! ```ignore
//! use salesfly::api::pdf::{PageOrientation, PdfOptions};
//!
//! let options = PdfOptions {
//!     document_url: Some("https://example.com".to_string()),
//!     orientation: Some(PageOrientation::Landscape),
//!     ..Default::default()
//! };
//! let bytes = pdf_api.create(&options).await?;
//! std::fs::write("example.pdf", &bytes)?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::r#trait::{SalesflyApi, SalesflyContext};
use crate::error::{Result, SalesflyError};

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

/// Header/footer text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Watermark placement on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkPosition {
    TopLeft,
    TopRight,
    Center,
    BottomLeft,
    BottomRight,
}

/// Document encryption algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdfEncryption {
    #[serde(rename = "aes-256")]
    Aes256,
    #[serde(rename = "aes-128")]
    Aes128,
    #[serde(rename = "rc4-128")]
    Rc4_128,
    #[serde(rename = "rc4-40")]
    Rc4_40,
}

/// User permissions on an encrypted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfPermissions {
    All,
    None,
}

/// Options for creating PDF documents.
///
/// Only options that are set travel on the wire; everything else keeps
/// the API's server-side default. One of `document_url` or
/// `document_html` is required, and `document_url` wins when both are
/// set. Sizes and margins accept values labeled with units, e.g. "20mm".
#[derive(Debug, Clone, Default, Serialize)]
pub struct PdfOptions {
    /// A URL pointing to a web page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    /// A string containing HTML
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_html: Option<String>,
    /// Name of the returned document. Defaults to "document".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<String>,
    /// Defaults to portrait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<PageOrientation>,
    /// Paper format, e.g. "A4" (the default) or "Letter"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_format: Option<String>,
    /// Takes priority over `page_format` when set together with `page_height`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_height: Option<String>,
    /// Pages to print, e.g. "1-5, 8, 11-13". Empty means all pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ranges: Option<String>,
    /// Rendering scale, between 0.1 and 2.0. Defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    /// Defaults to center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_align: Option<TextAlign>,
    /// Left and right margin for the header, in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_margin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_margin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_url: Option<String>,
    /// Print background graphics. Defaults to false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,
    /// Give CSS @page size priority over width/height/format options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_css_page_size: Option<bool>,
    /// A URL pointing to a PNG or JPEG watermark image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark_url: Option<String>,
    /// Defaults to center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark_position: Option<WatermarkPosition>,
    /// Horizontal watermark shift, in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark_offset_x: Option<i32>,
    /// Vertical watermark shift, in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark_offset_y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// RFC 3066 language tag for the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<PdfEncryption>,
    /// Required when encryption is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
    /// Defaults to all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PdfPermissions>,
}

impl PdfOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.document_url.is_none() && self.document_html.is_none() {
            return Err(SalesflyError::Config(
                "PDF options require document_url or document_html".to_string(),
            ));
        }
        if let Some(scale) = self.scale {
            if !(0.1..=2.0).contains(&scale) {
                return Err(SalesflyError::Config(format!(
                    "PDF scale must be between 0.1 and 2.0, got {scale}"
                )));
            }
        }
        Ok(())
    }

    /// JSON body for the create request. `document_url` takes priority
    /// over `document_html` when both are set.
    pub(crate) fn to_body(&self) -> Result<serde_json::Value> {
        self.validate()?;
        let mut body = serde_json::to_value(self)?;
        if let Some(map) = body.as_object_mut() {
            if map.contains_key("document_url") {
                map.remove("document_html");
            }
        }
        Ok(body)
    }
}

/// PDF API
pub struct PdfApi {
    context: Arc<SalesflyContext>,
}

impl PdfApi {
    /// Create a new PdfApi instance
    pub fn new(context: Arc<SalesflyContext>) -> Self {
        Self { context }
    }

    /// Create a PDF document
    ///
    /// POST /v1/pdf/create with `Accept: application/pdf`
    ///
    /// Returns the raw PDF bytes. No `data` unwrapping happens on this
    /// endpoint; error responses map per the shared envelope rules.
    pub async fn create(&self, options: &PdfOptions) -> Result<Vec<u8>> {
        let body = options.to_body()?;
        self.context
            .client
            .post_raw("/v1/pdf/create", &body, "application/pdf")
            .await
    }
}

impl SalesflyApi for PdfApi {
    fn context(&self) -> &SalesflyContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "pdf"
    }
}
