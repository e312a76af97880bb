//! IP Geolocation API
//!
//! Looks up geographic, network, and threat information for IPv4 and IPv6
//! addresses. Endpoints accept a single address, the caller's own address
//! (`myip`), or a comma-separated batch.
//!
//! ## Example
//!
//! ```ignore
//! use salesfly::api::geolocation::{GeoLocationApi, GeoOptions};
//!
//! let location = geo_api.get("8.8.8.8", &GeoOptions::default()).await?;
//! println!("{:?} {:?}", location.country, location.city);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::r#trait::{SalesflyApi, SalesflyContext};
use crate::client::SalesflyClient;
use crate::error::Result;

/// Optional parameters for geolocation lookups.
#[derive(Debug, Clone, Default)]
pub struct GeoOptions {
    /// Comma-separated list of fields to return (e.g. "ip,country_code,city").
    /// When unset, all fields are returned.
    pub fields: Option<String>,
    /// Resolve and include the reverse DNS hostname.
    pub hostname: bool,
    /// Include proxy/crawler/TOR threat data.
    pub security: bool,
}

impl GeoOptions {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(fields) = &self.fields {
            query.push(("fields", fields.clone()));
        }
        if self.hostname {
            query.push(("hostname", "true".to_string()));
        }
        if self.security {
            query.push(("security", "true".to_string()));
        }
        query
    }
}

/// Geolocation data for a single IP address.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IpLocation {
    /// The looked-up IP address
    pub ip: String,
    /// Address family: "ipv4" or "ipv6"
    #[serde(rename = "type", default)]
    pub ip_type: Option<String>,
    /// Reverse DNS hostname (only with `GeoOptions::hostname`)
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub continent_code: Option<String>,
    #[serde(rename = "country_name", default)]
    pub country: Option<String>,
    #[serde(rename = "country_name_native", default)]
    pub country_native: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    /// ISO 3166-1 alpha-3 country code
    #[serde(default)]
    pub country_code3: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(rename = "region_name", default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub phone_prefix: Option<String>,
    #[serde(default)]
    pub currencies: Vec<IpCurrency>,
    #[serde(default)]
    pub languages: Vec<IpLanguage>,
    /// URL of the country flag image
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub flag_emoji: Option<String>,
    #[serde(default)]
    pub is_eu: bool,
    #[serde(rename = "internet_tld", default)]
    pub tld: Option<String>,
    #[serde(default)]
    pub timezone: Option<IpTimezone>,
    /// Threat data (only with `GeoOptions::security`)
    #[serde(default)]
    pub security: Option<IpSecurity>,
}

/// Currency used in the country of an IP address.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IpCurrency {
    pub code: String,
    #[serde(rename = "num_code", default)]
    pub numeric_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "name_plural", default)]
    pub plural_name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "symbol_native", default)]
    pub native_symbol: Option<String>,
    #[serde(default)]
    pub decimal_digits: u8,
}

/// Language spoken in the country of an IP address.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IpLanguage {
    pub code: String,
    #[serde(default)]
    pub code2: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub native_name: Option<String>,
    /// Right-to-left script
    #[serde(default)]
    pub rtl: bool,
}

/// Timezone at the location of an IP address.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IpTimezone {
    /// IANA timezone identifier (e.g. "Europe/Oslo")
    pub id: String,
    #[serde(default)]
    pub localtime: Option<String>,
    /// Offset from GMT in seconds
    #[serde(default)]
    pub gmt_offset: i32,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub daylight_saving: bool,
}

/// Threat data for an IP address.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IpSecurity {
    #[serde(default)]
    pub is_proxy: bool,
    #[serde(default)]
    pub proxy_type: Option<String>,
    #[serde(default)]
    pub is_crawler: bool,
    #[serde(default)]
    pub crawler_name: Option<String>,
    #[serde(default)]
    pub crawler_type: Option<String>,
    #[serde(default)]
    pub is_tor: bool,
    #[serde(default)]
    pub threat_level: Option<String>,
    #[serde(default)]
    pub threat_types: Vec<String>,
}

/// IP Geolocation API
pub struct GeoLocationApi {
    context: Arc<SalesflyContext>,
}

impl GeoLocationApi {
    /// Create a new GeoLocationApi instance
    pub fn new(context: Arc<SalesflyContext>) -> Self {
        Self { context }
    }

    /// Look up a single IP address
    ///
    /// GET /v1/geoip/{ip}
    pub async fn get(&self, ip: &str, options: &GeoOptions) -> Result<IpLocation> {
        let path = format!("/v1/geoip/{}", SalesflyClient::encode_path_segment(ip));
        self.context.client.get(&path, &options.to_query()).await
    }

    /// Look up the IP address the request originates from
    ///
    /// GET /v1/geoip/myip
    pub async fn get_current(&self, options: &GeoOptions) -> Result<IpLocation> {
        self.get("myip", options).await
    }

    /// Look up several IP addresses in one round trip
    ///
    /// GET /v1/geoip/{ip1,ip2,...}
    ///
    /// Returns one entry per requested address, in request order.
    pub async fn get_bulk(&self, ips: &[&str], options: &GeoOptions) -> Result<Vec<IpLocation>> {
        let joined = ips.join(",");
        let path = format!("/v1/geoip/{}", SalesflyClient::encode_path_segment(&joined));
        self.context.client.get(&path, &options.to_query()).await
    }
}

impl SalesflyApi for GeoLocationApi {
    fn context(&self) -> &SalesflyContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "geolocation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_options_empty_query() {
        let options = GeoOptions::default();
        assert!(options.to_query().is_empty());
    }

    #[test]
    fn test_geo_options_full_query() {
        let options = GeoOptions {
            fields: Some("ip,country_code".to_string()),
            hostname: true,
            security: true,
        };
        assert_eq!(
            options.to_query(),
            vec![
                ("fields", "ip,country_code".to_string()),
                ("hostname", "true".to_string()),
                ("security", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_ip_location_parsing() {
        let json = r#"{
            "ip": "190.93.246.1",
            "type": "ipv4",
            "continent": "North America",
            "continent_code": "NA",
            "country_name": "United States",
            "country_code": "US",
            "country_code3": "USA",
            "capital": "Washington D.C.",
            "latitude": 37.751,
            "longitude": -97.822,
            "currencies": [
                {"code": "USD", "name": "US Dollar", "symbol": "$", "decimal_digits": 2}
            ],
            "languages": [
                {"code": "en", "code2": "eng", "name": "English", "rtl": false}
            ],
            "is_eu": false,
            "internet_tld": ".us",
            "timezone": {
                "id": "America/Chicago",
                "gmt_offset": -21600,
                "code": "CST",
                "daylight_saving": true
            }
        }"#;

        let location: IpLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.ip, "190.93.246.1");
        assert_eq!(location.ip_type.as_deref(), Some("ipv4"));
        assert_eq!(location.country.as_deref(), Some("United States"));
        assert_eq!(location.country_code3.as_deref(), Some("USA"));
        assert!((location.latitude - 37.751).abs() < f64::EPSILON);
        assert_eq!(location.currencies[0].code, "USD");
        assert_eq!(location.languages[0].code, "en");
        assert_eq!(location.timezone.as_ref().unwrap().id, "America/Chicago");
        assert!(!location.is_eu);
        assert!(location.security.is_none());
    }

    #[test]
    fn test_ip_location_sparse_fields() {
        // A fields-filtered response omits most keys.
        let json = r#"{"ip": "8.8.8.8", "country_code": "US"}"#;

        let location: IpLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.ip, "8.8.8.8");
        assert_eq!(location.country_code.as_deref(), Some("US"));
        assert!(location.hostname.is_none());
        assert!(location.currencies.is_empty());
    }

    #[test]
    fn test_ip_security_parsing() {
        let json = r#"{
            "is_proxy": true,
            "proxy_type": "vpn",
            "is_crawler": false,
            "is_tor": false,
            "threat_level": "high",
            "threat_types": ["proxy", "anonymizer"]
        }"#;

        let security: IpSecurity = serde_json::from_str(json).unwrap();
        assert!(security.is_proxy);
        assert_eq!(security.proxy_type.as_deref(), Some("vpn"));
        assert_eq!(security.threat_types, vec!["proxy", "anonymizer"]);
    }
}
