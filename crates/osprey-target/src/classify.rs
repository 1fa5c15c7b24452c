//! Response classification strategies and the dispatch registry.
//!
//! Each probed target resolves a raw HTTP response into a [`Verdict`] plus a
//! short message. Targets with a recognizable response shape get a bespoke
//! strategy; everything else falls through to a generic heuristic (status
//! threshold plus a negative-keyword scan). The registry maps target labels
//! to strategies, so adding a target rule is a pure data change.

use osprey_core::Verdict;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Phrases whose presence in a response body indicates "not found".
///
/// Both apostrophe spellings of "couldn't" appear in the wild.
pub const NEGATIVE_HINTS: &[&str] = &[
    "not found",
    "doesn't exist",
    "page not found",
    "404",
    "sorry, this page isn't available",
    "user not found",
    "couldn\u{2019}t find",
    "couldn't find",
    "no such user",
    "profile is unavailable",
    "invalid email",
    "no account",
    "does not exist",
    "unknown email",
];

/// How many characters of the body the generic heuristic scans.
const SCAN_WINDOW: usize = 2000;

/// Scan the leading window of `text` (lower-cased) for any negative hint.
#[must_use]
pub fn has_negative_hint(text: &str) -> bool {
    let window = text.chars().take(SCAN_WINDOW).collect::<String>().to_lowercase();
    NEGATIVE_HINTS.iter().any(|hint| window.contains(hint))
}

/// Everything a classification strategy may inspect about one response.
///
/// Decoupled from the HTTP client so strategies stay unit-testable.
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    /// Final URL the response came from
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Decoded body text (may be empty)
    pub body: String,
}

impl ResponseSnapshot {
    /// Create a snapshot.
    #[must_use]
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }
}

/// Verdict plus its human-readable explanation.
#[derive(Debug, Clone)]
pub struct Classification {
    /// The three-way (plus skipped/error) verdict
    pub verdict: Verdict,
    /// Short message for the result line
    pub message: String,
}

impl Classification {
    /// Create a classification.
    #[must_use]
    pub fn new(verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            verdict,
            message: message.into(),
        }
    }
}

/// A strategy converting one response snapshot into a classification.
pub trait ClassifyResponse: Send + Sync {
    /// Classify a response.
    fn classify(&self, snapshot: &ResponseSnapshot) -> Classification;
}

/// Microsoft sign-in discovery: JSON body with an `IfExistsResult` code.
///
/// Values 1 and 2 mean the address is known to some identity provider;
/// anything else (including a missing field) counts as absent.
pub struct MicrosoftIdpRule;

impl ClassifyResponse for MicrosoftIdpRule {
    fn classify(&self, snapshot: &ResponseSnapshot) -> Classification {
        match serde_json::from_str::<Value>(&snapshot.body) {
            Ok(json) => {
                let code = json.get("IfExistsResult").and_then(Value::as_i64);
                if matches!(code, Some(1 | 2)) {
                    Classification::new(Verdict::Exists, "address known to Microsoft sign-in")
                } else {
                    Classification::new(Verdict::Absent, "no Microsoft account for this address")
                }
            }
            Err(e) => {
                debug!(url = %snapshot.url, "unexpected Microsoft response shape: {e}");
                Classification::new(
                    Verdict::Inconclusive,
                    format!("unexpected response shape (status {})", snapshot.status),
                )
            }
        }
    }
}

/// Twitter email availability: JSON pair of `valid` and `available` booleans.
///
/// An address that is valid *and* available has no account behind it;
/// anything else is treated as linked.
pub struct TwitterEmailRule;

impl ClassifyResponse for TwitterEmailRule {
    fn classify(&self, snapshot: &ResponseSnapshot) -> Classification {
        match serde_json::from_str::<Value>(&snapshot.body) {
            Ok(json) => {
                let flag = |key| json.get(key).and_then(Value::as_bool).unwrap_or(false);
                if flag("valid") && flag("available") {
                    Classification::new(Verdict::Absent, "address not used on Twitter")
                } else {
                    Classification::new(Verdict::Exists, "address linked on Twitter")
                }
            }
            Err(e) => {
                debug!(url = %snapshot.url, "unexpected Twitter response shape: {e}");
                Classification::new(
                    Verdict::Inconclusive,
                    format!("unexpected response shape (status {})", snapshot.status),
                )
            }
        }
    }
}

/// Generic fallback: success status with no negative hint counts as a
/// likely-linked identifier, anything else as unconfirmed.
pub struct GenericHeuristic;

impl ClassifyResponse for GenericHeuristic {
    fn classify(&self, snapshot: &ResponseSnapshot) -> Classification {
        if snapshot.status < 400 && !has_negative_hint(&snapshot.body) {
            Classification::new(Verdict::Exists, "accepted / likely linked")
        } else {
            Classification::new(Verdict::Absent, "unconfirmed / rejected")
        }
    }
}

/// Dispatch table mapping target labels to classification strategies.
///
/// Unknown labels fall through to the generic heuristic.
pub struct ClassifierRegistry {
    rules: HashMap<String, Arc<dyn ClassifyResponse>>,
    fallback: Arc<dyn ClassifyResponse>,
}

impl ClassifierRegistry {
    /// Create an empty registry with the generic fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: Arc::new(GenericHeuristic),
        }
    }

    /// Create a registry preloaded with the bespoke built-in rules.
    #[must_use]
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        registry.insert("Microsoft (officeapps.live)", Arc::new(MicrosoftIdpRule));
        registry.insert("Twitter", Arc::new(TwitterEmailRule));
        registry
    }

    /// Register (or replace) a strategy for a target label.
    pub fn insert(&mut self, label: impl Into<String>, rule: Arc<dyn ClassifyResponse>) {
        let label = label.into();
        debug!(label = %label, "registered classification rule");
        self.rules.insert(label, rule);
    }

    /// Whether a bespoke rule is registered for `label`.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.rules.contains_key(label)
    }

    /// Classify a response for the given target label.
    #[must_use]
    pub fn classify(&self, label: &str, snapshot: &ResponseSnapshot) -> Classification {
        self.rules
            .get(label)
            .unwrap_or(&self.fallback)
            .classify(snapshot)
    }
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}
