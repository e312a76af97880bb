//! Geolocation lookup example for the salesfly crate
//!
//! Run with: SALESFLY_API_KEY=sk_live_... cargo run --example geolocation

use salesfly::api::geolocation::GeoOptions;
use salesfly::{types::ApiKey, Salesfly};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SALESFLY_API_KEY")?;

    let salesfly = Salesfly::builder()
        .api_key(ApiKey::new(api_key)?)
        .build()?;

    let options = GeoOptions {
        security: true,
        ..Default::default()
    };
    let location = salesfly.geoip("8.8.8.8", &options).await?;

    println!("IP:      {}", location.ip);
    println!("Country: {:?}", location.country);
    println!("City:    {:?}", location.city);
    if let Some(security) = &location.security {
        println!("Proxy:   {}", security.is_proxy);
    }

    let usage = salesfly.usage().await?;
    println!(
        "Used {} of {} requests this month",
        usage.used, usage.allowed
    );

    Ok(())
}
