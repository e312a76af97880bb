//! PDF API tests using WireMock
//!
//! The PDF endpoint is binary: success responses are the document bytes,
//! with no `data` envelope.

use salesfly::api::pdf::{PageOrientation, PdfOptions};
use salesfly::types::ApiKey;
use salesfly::{Salesfly, SalesflyError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> Salesfly {
    Salesfly::builder()
        .api_key(ApiKey::new("sk_test_1234567890").unwrap())
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

const PDF_MAGIC: &[u8] = b"%PDF-1.7 fake document bytes";

#[tokio::test]
async fn test_create_returns_raw_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(PDF_MAGIC.to_vec(), "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let options = PdfOptions {
        document_url: Some("https://example.com".to_string()),
        ..Default::default()
    };
    let bytes = test_client(&mock_server).pdf_create(&options).await.unwrap();

    assert_eq!(bytes, PDF_MAGIC);
}

#[tokio::test]
async fn test_create_sends_pdf_accept_header_and_set_options_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/create"))
        .and(header("Accept", "application/pdf"))
        .and(body_partial_json(serde_json::json!({
            "document_url": "https://example.com",
            "orientation": "landscape",
            "page_format": "A4"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(PDF_MAGIC.to_vec(), "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = PdfOptions {
        document_url: Some("https://example.com".to_string()),
        orientation: Some(PageOrientation::Landscape),
        page_format: Some("A4".to_string()),
        ..Default::default()
    };
    test_client(&mock_server).pdf_create(&options).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let map = body.as_object().unwrap();
    // Only the three options that were set travel on the wire.
    assert_eq!(map.len(), 3);
}

#[tokio::test]
async fn test_create_rejects_empty_options_locally() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/create"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PDF_MAGIC.to_vec(), "application/pdf"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).pdf_create(&PdfOptions::default()).await;

    assert!(matches!(result, Err(SalesflyError::Config(_))));
}

#[tokio::test]
async fn test_create_maps_error_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pdf/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": 400,
            "message": "Unable to fetch document_url",
            "code": "err-bad-document"
        })))
        .mount(&mock_server)
        .await;

    let options = PdfOptions {
        document_url: Some("https://unreachable.example".to_string()),
        ..Default::default()
    };
    let err = test_client(&mock_server).pdf_create(&options).await.unwrap_err();

    assert!(matches!(err, SalesflyError::Response { status: 400, .. }));
    assert_eq!(err.code(), Some("err-bad-document"));
}
