//! Signed webhook deliveries from the billing provider.

use crate::error::{self, Result};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::collections::HashMap;

/// Maximum age of a signed delivery, in seconds.
pub const TOLERANCE: u64 = 300;

type HmacSha256 = Hmac<Sha256>;

/// Checks a `Stripe-Signature` header (`t=<unix>,v1=<hex>[,v1=<hex>...]`)
/// against the raw request body.
pub fn verify_signature(header: &str, payload: &[u8], secret: &str, now: i64) -> Result<()> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for item in header.split(',') {
        match item.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse::<i64>().ok(),
            Some(("v1", value)) => signatures.push(value),
            _ => {}
        }
    }

    let Some(timestamp) = timestamp else {
        return Err(error::INVALID_SIGNATURE);
    };

    if now.abs_diff(timestamp) > TOLERANCE {
        return Err(error::INVALID_SIGNATURE);
    }

    let matches = signatures.into_iter().any(|signature| {
        let Ok(signature) = hex::decode(signature) else {
            return false;
        };

        mac(timestamp, payload, secret)
            .map(|mac| mac.verify_slice(&signature).is_ok())
            .unwrap_or(false)
    });

    if matches {
        Ok(())
    } else {
        Err(error::INVALID_SIGNATURE)
    }
}

/// Produces a header value the way the provider signs deliveries.
pub fn sign(payload: &[u8], secret: &str, timestamp: i64) -> Result<String> {
    let mac = mac(timestamp, payload, secret)?;

    Ok(format!(
        "t={},v1={}",
        timestamp,
        hex::encode(mac.finalize().into_bytes())
    ))
}

fn mac(timestamp: i64, payload: &[u8], secret: &str) -> Result<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| error::INTERNAL)?;

    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    Ok(mac)
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: EventData,
}

#[derive(Debug, Deserialize)]
pub struct EventData {
    pub object: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    pub customer: Option<String>,
    pub subscription: Option<String>,
    pub client_reference_id: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub customer: String,
    pub status: String,
    pub current_period_end: Option<i64>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
}

#[derive(Debug, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer: Option<String>,
    pub subscription: Option<String>,
    #[serde(default)]
    pub amount_paid: i64,
    #[serde(default)]
    pub amount_due: i64,
    pub currency: String,
    pub status_transitions: Option<StatusTransitions>,
}

#[derive(Debug, Deserialize)]
pub struct StatusTransitions {
    pub paid_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";
    const BODY: &[u8] = br#"{"id":"evt_1","type":"invoice.paid"}"#;

    #[test]
    fn signed_payload_verifies() {
        let header = sign(BODY, SECRET, 1_700_000_000).unwrap();

        assert!(verify_signature(&header, BODY, SECRET, 1_700_000_010).is_ok());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let header = sign(BODY, SECRET, 1_700_000_000).unwrap();

        let result = verify_signature(&header, b"{}", SECRET, 1_700_000_000);

        assert_eq!(result.unwrap_err().code(), error::INVALID_SIGNATURE.code());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let header = sign(BODY, "whsec_other", 1_700_000_000).unwrap();

        assert!(verify_signature(&header, BODY, SECRET, 1_700_000_000).is_err());
    }

    #[test]
    fn stale_timestamp_is_rejected() {
        let header = sign(BODY, SECRET, 1_700_000_000).unwrap();

        assert!(verify_signature(&header, BODY, SECRET, 1_700_000_000 + TOLERANCE as i64 + 1).is_err());
    }

    #[test]
    fn any_matching_v1_is_enough() {
        let valid = sign(BODY, SECRET, 1_700_000_000).unwrap();
        let v1 = valid.split_once(",v1=").unwrap().1;
        let header = format!("t=1700000000,v1=deadbeef,v1={v1},v0=ignored");

        assert!(verify_signature(&header, BODY, SECRET, 1_700_000_000).is_ok());
    }

    #[test]
    fn extreme_timestamp_is_rejected() {
        let header = format!("t={},v1=00", i64::MIN);

        assert!(verify_signature(&header, BODY, SECRET, 1_700_000_000).is_err());
        assert!(verify_signature(&header, BODY, SECRET, i64::MAX).is_err());
    }

    #[test]
    fn malformed_header_is_rejected() {
        assert!(verify_signature("garbage", BODY, SECRET, 0).is_err());
        assert!(verify_signature("v1=abcd", BODY, SECRET, 0).is_err());
    }

    #[test]
    fn subscription_object_parses() {
        let object = serde_json::json!({
            "id": "sub_1",
            "customer": "cus_1",
            "status": "past_due",
            "current_period_end": 1_700_000_000,
            "cancel_at_period_end": true,
            "items": { "data": [] },
        });

        let subscription: Subscription = serde_json::from_value(object).unwrap();

        assert_eq!(subscription.status, "past_due");
        assert!(subscription.cancel_at_period_end);
    }
}
