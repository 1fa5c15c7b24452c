//! Variant-walking caller-ID lookup.
//!
//! Digit variants are tried in decreasing plausibility order against the
//! single lookup endpoint; the first variant that yields an extracted name
//! wins and the rest are not tried. An input producing zero variants yields
//! an empty report rather than an error.

use crate::client::{build_client, declared_charset};
use crate::decode::best_decode;
use crate::error::Result;
use crate::extract::extract_name;
use osprey_core::OspreyConfig;
use osprey_phone::{build_variants, try_parse_phone, NormalizedNumber};
use reqwest::header::REFERER;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Result of one phone check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneReport {
    /// Display renderings, present only when the input validated
    pub number: Option<NormalizedNumber>,
    /// Extracted caller name, if any variant produced one
    pub caller_name: Option<String>,
}

impl PhoneReport {
    /// Render the report as display lines: the number block for a valid
    /// input, then zero or one name line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(number) = &self.number {
            lines.push(number.display_block());
        }
        if let Some(name) = &self.caller_name {
            lines.push(format!("probable name: {name}"));
        }
        lines
    }
}

/// Look up a phone number: validate, generate variants, walk them until a
/// name is extracted.
pub async fn check_phone(raw: &str, config: &OspreyConfig) -> Result<PhoneReport> {
    let phone = &config.phone;

    let parsed = try_parse_phone(raw, &phone.default_region);
    let number = parsed.as_ref().map(NormalizedNumber::from_parsed);

    // A validated number seeds variants from its E.164 form; anything else
    // falls back to the raw digits.
    let seed = number
        .as_ref()
        .map_or_else(|| raw.to_string(), |n| n.e164.clone());
    let country_code = parsed
        .as_ref()
        .map_or_else(|| phone.calling_code.clone(), |n| {
            NormalizedNumber::country_code(n).to_string()
        });

    let variants = build_variants(&seed, &phone.calling_code);
    if variants.is_empty() {
        debug!(input = raw, "no usable digit variants");
        return Ok(PhoneReport {
            number,
            caller_name: None,
        });
    }

    let client = build_client(
        Duration::from_secs(config.probe.phone_timeout_secs),
        &phone.browser_user_agent,
    )?;

    for variant in &variants {
        let url = phone
            .lookup_url
            .replacen("{number}", variant, 1)
            .replacen("{country_code}", &country_code, 1);

        if let Some(name) = lookup(&client, &url, &phone.referer).await {
            debug!(%variant, "caller name extracted");
            return Ok(PhoneReport {
                number,
                caller_name: Some(name),
            });
        }
    }

    Ok(PhoneReport {
        number,
        caller_name: None,
    })
}

/// One lookup attempt; any failure is just "no name from this variant".
async fn lookup(client: &Client, url: &str, referer: &str) -> Option<String> {
    let response = match client.get(url).header(REFERER, referer).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!(url, "lookup failed: {e}");
            return None;
        }
    };

    if !response.status().is_success() {
        debug!(url, status = response.status().as_u16(), "lookup rejected");
        return None;
    }

    let declared = declared_charset(response.headers());
    let bytes = response.bytes().await.ok()?;
    let (text, _) = best_decode(&bytes, declared.as_deref());
    extract_name(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_with_number_and_name() {
        let report = PhoneReport {
            number: Some(NormalizedNumber {
                e164: "+966501234567".to_string(),
                international: "+966 50 123 4567".to_string(),
                national: "050 123 4567".to_string(),
                carrier: "-".to_string(),
            }),
            caller_name: Some("Ali".to_string()),
        };

        let lines = report.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("E164: +966501234567"));
        assert_eq!(lines[1], "probable name: Ali");
    }

    #[test]
    fn test_lines_empty_report() {
        assert!(PhoneReport::default().lines().is_empty());
    }
}
