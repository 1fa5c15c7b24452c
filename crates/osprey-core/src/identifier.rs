//! Syntactic classification of raw input strings.
//!
//! Decides whether an arbitrary input looks like an email address, a phone
//! number, or a username. Purely syntactic; no network and no side effects.
//! Phone inputs are only screened here — real parsing and validation is
//! delegated to the phone crate.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .expect("email regex is hardcoded and valid")
});

static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.]{3,30}$").expect("username regex is hardcoded and valid")
});

/// Check whether `s` is a syntactically valid email address.
///
/// Accepts the usual `local@domain.tld` shape: ASCII letters/digits plus
/// `._%+-` in the local part and a registrable-looking domain with a TLD of
/// at least two letters. Case-insensitive.
#[must_use]
pub fn is_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// Trim surrounding whitespace and strip at most one leading `@`.
#[must_use]
pub fn normalize_username(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('@').unwrap_or(s)
}

/// Check whether `s` (after normalization) is a plausible username:
/// 3-30 characters drawn from letters, digits, `_` and `.`.
#[must_use]
pub fn is_username(s: &str) -> bool {
    USERNAME_PATTERN.is_match(normalize_username(s))
}

/// Check whether `s` is shaped like a phone number: an optional leading `+`,
/// then digits possibly broken up by spaces, dashes, dots or parentheses,
/// with at least 8 digits overall.
///
/// This is a screen, not validation — the phone crate decides validity.
#[must_use]
pub fn looks_like_phone(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    let mut digits = 0usize;
    for (i, c) in s.chars().enumerate() {
        match c {
            '0'..='9' => digits += 1,
            '+' if i == 0 => {}
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    digits >= 8
}

/// The three identifier kinds the engine knows how to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Social-platform username
    Username,
}

impl IdentifierKind {
    /// Best-effort detection of the identifier kind from a raw string.
    ///
    /// Tried in order: email, phone, username. Returns `None` when the input
    /// matches none of the three shapes.
    #[must_use]
    pub fn detect(s: &str) -> Option<Self> {
        let s = s.trim();
        if is_email(s) {
            Some(Self::Email)
        } else if looks_like_phone(s) {
            Some(Self::Phone)
        } else if is_username(s) {
            Some(Self::Username)
        } else {
            None
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Username => "username",
        };
        write!(f, "{name}")
    }
}
