//! Mail sending example for the salesfly crate
//!
//! Run with: SALESFLY_API_KEY=sk_live_... cargo run --example send_mail

use salesfly::api::mail::MailMessage;
use salesfly::{types::ApiKey, Salesfly};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SALESFLY_API_KEY")?;

    let salesfly = Salesfly::builder()
        .api_key(ApiKey::new(api_key)?)
        .build()?;

    let mut message = MailMessage::new(
        "ola@example.com",
        "Greetings from Rust",
        "Hello from the salesfly crate!",
        &["kari@example.com"],
    );
    message.html = Some("<p>Hello from the <b>salesfly</b> crate!</p>".to_string());
    message.add_tag("demo");
    // Validate without delivering
    message.test_mode = Some(true);

    let receipt = salesfly.mail_send(&message).await?;
    println!("Message ID: {}", receipt.id);
    println!("Accepted:   {}", receipt.accepted_recipients);
    println!("Rejected:   {}", receipt.rejected_recipients);

    Ok(())
}
