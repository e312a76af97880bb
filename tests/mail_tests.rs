//! Mail API tests using WireMock

use salesfly::api::mail::MailMessage;
use salesfly::types::ApiKey;
use salesfly::{Salesfly, SalesflyError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> Salesfly {
    Salesfly::builder()
        .api_key(ApiKey::new("sk_test_1234567890").unwrap())
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

fn receipt_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "id": "msg-123",
            "accepted_recipients": 1,
            "rejected_recipients": 0
        }
    })
}

#[tokio::test]
async fn test_send_returns_receipt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mail/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_body()))
        .mount(&mock_server)
        .await;

    let message = MailMessage::new(
        "ola@example.com",
        "Hello",
        "Hello world",
        &["kari@example.com"],
    );
    let receipt = test_client(&mock_server).mail_send(&message).await.unwrap();

    assert_eq!(receipt.id, "msg-123");
    assert_eq!(receipt.accepted_recipients, 1);
    assert_eq!(receipt.rejected_recipients, 0);
}

#[tokio::test]
async fn test_send_posts_multipart_form_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mail/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut message = MailMessage::new(
        "ola@example.com",
        "Hello",
        "Hello world",
        &["kari@example.com", "per@example.com"],
    );
    message.add_cc("cc@example.com");
    message.add_tag("newsletter");
    message.html = Some("<p>Hello world</p>".to_string());
    message.require_tls = Some(true);
    message.add_attachment("notes.txt", b"some notes".to_vec());

    test_client(&mock_server).mail_send(&message).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let request = &requests[0];

    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"from\""));
    assert!(body.contains("ola@example.com"));
    // Repeated recipient fields, one per address
    assert_eq!(body.matches("name=\"to\"").count(), 2);
    assert!(body.contains("cc@example.com"));
    assert!(body.contains("name=\"tags\""));
    assert!(body.contains("newsletter"));
    assert!(body.contains("name=\"html\""));
    // Booleans are lowercase on the wire
    assert!(body.contains("name=\"require_tls\""));
    assert!(body.contains("true"));
    // Attachment travels as a file part
    assert!(body.contains("name=\"attachments\""));
    assert!(body.contains("filename=\"notes.txt\""));
    assert!(body.contains("some notes"));
    // Unset options produce no field
    assert!(!body.contains("name=\"test_mode\""));
    assert!(!body.contains("name=\"reply_to\""));
}

#[tokio::test]
async fn test_send_rejects_message_without_recipients() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mail/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let message = MailMessage::new("ola@example.com", "Hello", "Hello world", &[]);
    let result = test_client(&mock_server).mail_send(&message).await;

    assert!(matches!(result, Err(SalesflyError::Config(_))));
}

#[tokio::test]
async fn test_send_rejects_too_many_recipients() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mail/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut message = MailMessage::new(
        "ola@example.com",
        "Hello",
        "Hello world",
        &["kari@example.com"],
    );
    for i in 0..50 {
        message.add_bcc(format!("bcc{i}@example.com"));
    }
    let result = test_client(&mock_server).mail_send(&message).await;

    assert!(matches!(result, Err(SalesflyError::Config(_))));
}

#[tokio::test]
async fn test_send_maps_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/mail/send"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "status": 422,
            "message": "Invalid recipient address",
            "code": "err-invalid-recipient"
        })))
        .mount(&mock_server)
        .await;

    let message = MailMessage::new(
        "ola@example.com",
        "Hello",
        "Hello world",
        &["not-an-address"],
    );
    let err = test_client(&mock_server).mail_send(&message).await.unwrap_err();

    assert!(matches!(err, SalesflyError::Response { status: 422, .. }));
    assert_eq!(err.code(), Some("err-invalid-recipient"));
}
