//! Sequential shaped email probes.
//!
//! The email table is probed in order, not concurrently: each endpoint
//! needs its own request shaping, and a shared connection pool already
//! covers the small fixed list. One target's failure never aborts the rest.

use crate::client::{build_client, declared_charset};
use crate::decode::best_decode;
use crate::error::{error_category, Result};
use osprey_core::{ProbeConfig, ProbeResult};
use osprey_target::{
    email_targets, BodyShape, ClassifierRegistry, ProbeMethod, ProbeTarget, ResponseSnapshot,
};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// User agent presented to the email endpoints.
const EMAIL_USER_AGENT: &str = "Mozilla/5.0";

/// Probe every configured email target for `email`, in table order.
///
/// Skipped targets get a SKIPPED result without a request; transport
/// failures get an ERROR result; everything else is classified through the
/// registry.
pub async fn check_email(
    email: &str,
    config: &ProbeConfig,
    registry: &ClassifierRegistry,
) -> Result<Vec<ProbeResult>> {
    let client = build_client(
        Duration::from_secs(config.email_timeout_secs),
        EMAIL_USER_AGENT,
    )?;

    let mut results = Vec::with_capacity(email_targets().len());
    for target in email_targets() {
        if let Some(reason) = target.skip_reason {
            debug!(label = target.label, "skipping target: {reason}");
            results.push(ProbeResult::skipped(target.label, reason));
            continue;
        }
        results.push(probe_target(&client, target, email, registry).await);
    }
    Ok(results)
}

/// Issue one shaped request and classify the response.
async fn probe_target(
    client: &Client,
    target: &ProbeTarget,
    email: &str,
    registry: &ClassifierRegistry,
) -> ProbeResult {
    let url = target.expand_url(email);

    let mut request = match target.method {
        ProbeMethod::Get => client.get(&url),
        ProbeMethod::Post => client.post(&url),
    };
    for (name, value) in target.headers {
        request = request.header(*name, *value);
    }
    request = match target.body {
        BodyShape::None => request,
        BodyShape::EmptyForm => request.form(&HashMap::<String, String>::new()),
        BodyShape::Form { field } => request.form(&HashMap::from([(field, email)])),
        BodyShape::Json { field } => request.json(&HashMap::from([(field, email)])),
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(label = target.label, "probe failed: {e}");
            return ProbeResult::transport_error(target.label, error_category(&e));
        }
    };

    let status = response.status().as_u16();
    let declared = declared_charset(response.headers());
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(label = target.label, "body read failed: {e}");
            return ProbeResult::transport_error(target.label, error_category(&e));
        }
    };

    let (body, encoding) = best_decode(&bytes, declared.as_deref());
    debug!(label = target.label, status, encoding, "probe completed");

    let snapshot = ResponseSnapshot::new(url, status, body);
    let classification = registry.classify(target.label, &snapshot);
    ProbeResult::new(
        target.label,
        status,
        snapshot.body,
        classification.verdict,
        classification.message,
    )
}

/// Render email probe results as display lines, one per target.
#[must_use]
pub fn render_results(results: &[ProbeResult]) -> Vec<String> {
    results.iter().map(ProbeResult::summary_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use osprey_core::Verdict;

    #[test]
    fn test_render_results_one_line_per_target() {
        let results = vec![
            ProbeResult::new("Twitter", 200, "{}", Verdict::Exists, "address linked"),
            ProbeResult::skipped("TikTok (mobile)", "requires mobile device parameters"),
            ProbeResult::transport_error("Vimeo (forgot)", "timeout"),
        ];

        let lines = render_results(&results);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Twitter: address linked");
        assert!(lines[1].starts_with("TikTok (mobile):"));
        assert!(lines[2].contains("timeout"));
    }
}
