//! Concurrent username fan-out.
//!
//! All site probes are issued as sibling futures and joined together; none
//! is allowed to fail the batch. A probe that errors resolves to "not
//! linked", so a single dead site never hides the others' results.

use crate::client::{build_client, declared_charset};
use crate::decode::best_decode;
use crate::error::Result;
use osprey_core::identifier::normalize_username;
use osprey_core::ProbeConfig;
use osprey_target::{has_negative_hint, SiteList};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Outcome of probing one site for a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOutcome {
    /// The probed URL (template already expanded)
    pub url: String,
    /// Whether the profile looked present (success status, no negative hint)
    pub linked: bool,
}

/// Partitioned fan-out results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsernameReport {
    /// URLs where the profile looked present, in site-list order
    pub found: Vec<String>,
    /// URLs that answered negatively or failed, in site-list order
    pub unconfirmed: Vec<String>,
}

impl UsernameReport {
    /// Partition per-site outcomes, preserving site-list order.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<SiteOutcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            if outcome.linked {
                report.found.push(outcome.url);
            } else {
                report.unconfirmed.push(outcome.url);
            }
        }
        report
    }

    /// Render the report as display lines.
    ///
    /// Found entries keep their full URL; unconfirmed entries are shortened
    /// to the bare domain. An empty report yields the single "nothing
    /// confirmed" line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.found.is_empty() {
            lines.push("found on:".to_string());
            lines.extend(self.found.iter().map(|url| format!("- {url}")));
        }
        if !self.unconfirmed.is_empty() {
            lines.push("not found / unconfirmed on:".to_string());
            lines.extend(
                self.unconfirmed
                    .iter()
                    .map(|url| format!("- {}", domain_only(url))),
            );
        }
        if lines.is_empty() {
            lines.push("no platforms confirmed".to_string());
        }
        lines
    }
}

/// Probe every site in the list for `username`, concurrently.
pub async fn check_username(
    username: &str,
    sites: &SiteList,
    config: &ProbeConfig,
) -> Result<UsernameReport> {
    let username = normalize_username(username);
    let client = build_client(
        Duration::from_secs(config.username_timeout_secs),
        &config.user_agent,
    )?;

    let probes = sites
        .expand(username)
        .into_iter()
        .map(|url| probe_site(&client, url));
    let outcomes = futures::future::join_all(probes).await;

    debug!(
        total = outcomes.len(),
        linked = outcomes.iter().filter(|o| o.linked).count(),
        "username fan-out complete"
    );
    Ok(UsernameReport::from_outcomes(outcomes))
}

/// GET one site; any failure counts as "not linked".
async fn probe_site(client: &Client, url: String) -> SiteOutcome {
    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!(%url, "site probe failed: {e}");
            return SiteOutcome { url, linked: false };
        }
    };

    let status = response.status().as_u16();
    let declared = declared_charset(response.headers());
    let body = match response.bytes().await {
        Ok(bytes) => best_decode(&bytes, declared.as_deref()).0,
        Err(_) => String::new(),
    };

    let linked = status < 400 && !has_negative_hint(&body);
    SiteOutcome { url, linked }
}

/// Strip scheme, a leading `www.` and any path, leaving the bare domain.
fn domain_only(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.split('/').next().unwrap_or(rest).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(url: &str, linked: bool) -> SiteOutcome {
        SiteOutcome {
            url: url.to_string(),
            linked,
        }
    }

    #[test]
    fn test_partition_preserves_order() {
        let report = UsernameReport::from_outcomes(vec![
            outcome("https://a.example/jo", true),
            outcome("https://b.example/jo", false),
            outcome("https://c.example/jo", true),
            outcome("https://d.example/jo", false),
            outcome("https://e.example/jo", true),
        ]);

        assert_eq!(report.found.len(), 3);
        assert_eq!(report.unconfirmed.len(), 2);
        assert_eq!(report.found[0], "https://a.example/jo");
        assert_eq!(report.unconfirmed, vec![
            "https://b.example/jo".to_string(),
            "https://d.example/jo".to_string(),
        ]);
    }

    #[test]
    fn test_lines_render_found_full_and_missing_domain_only() {
        let report = UsernameReport::from_outcomes(vec![
            outcome("https://a.example/u/jo", true),
            outcome("https://www.b.example/jo/profile", false),
        ]);

        let lines = report.lines();
        assert!(lines.contains(&"- https://a.example/u/jo".to_string()));
        assert!(lines.contains(&"- b.example".to_string()));
    }

    #[test]
    fn test_lines_empty_report() {
        let report = UsernameReport::default();
        assert_eq!(report.lines(), vec!["no platforms confirmed".to_string()]);
    }

    #[test]
    fn test_domain_only() {
        assert_eq!(domain_only("https://www.example.com/u/jo"), "example.com");
        assert_eq!(domain_only("http://example.com"), "example.com");
        assert_eq!(domain_only("example.com/path"), "example.com");
    }
}
