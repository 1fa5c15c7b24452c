//! Shared probe types used across the Osprey workspace.
//!
//! This module defines the verdict taxonomy and the per-target probe result
//! record that the executors produce and the rendering layer consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single probe outcome.
///
/// Every probed target resolves to exactly one verdict; targets known to
/// require credentials the engine does not hold are skipped proactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// An account tied to the identifier likely exists on the target.
    Exists,
    /// The target reported no matching account, or a negative hint was seen.
    Absent,
    /// The response could not be mapped to exists/absent (unexpected shape).
    Inconclusive,
    /// The target was not probed (requires session/device parameters).
    Skipped,
    /// The probe itself failed (timeout, DNS, TLS, connection refused).
    Error,
}

impl Verdict {
    /// Get a human-readable display name for the verdict.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Exists => "likely exists",
            Self::Absent => "not found",
            Self::Inconclusive => "inconclusive",
            Self::Skipped => "skipped",
            Self::Error => "probe error",
        }
    }

    /// Whether the verdict counts as a positive existence signal.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Exists)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of probing a single target for one identifier.
///
/// Created by the probe executor, immutable once produced. The decoded body
/// is carried along so callers can re-inspect it (e.g. name extraction); it
/// may be empty when the transport failed before a body arrived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Target label (email targets) or full URL (username targets).
    pub target: String,
    /// HTTP status code; absent on network failure.
    pub status: Option<u16>,
    /// Decoded response body text, possibly empty.
    pub body: String,
    /// Classification of the outcome.
    pub verdict: Verdict,
    /// Short human-readable explanation.
    pub message: String,
}

impl ProbeResult {
    /// Create a result for a completed HTTP exchange.
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        status: u16,
        body: impl Into<String>,
        verdict: Verdict,
        message: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            status: Some(status),
            body: body.into(),
            verdict,
            message: message.into(),
        }
    }

    /// Create a result for a target that was skipped without a request.
    #[must_use]
    pub fn skipped(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: None,
            body: String::new(),
            verdict: Verdict::Skipped,
            message: reason.into(),
        }
    }

    /// Create a result for a transport failure (no response received).
    #[must_use]
    pub fn transport_error(target: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: None,
            body: String::new(),
            verdict: Verdict::Error,
            message: format!("network failure ({})", category.into()),
        }
    }

    /// Render the result as one short output line.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.target, self.message)
    }
}
