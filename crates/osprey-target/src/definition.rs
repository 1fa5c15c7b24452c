//! Probe target definitions.
//!
//! Each target describes how to elicit a diagnostic response from one
//! heterogeneous endpoint: HTTP method, URL template, body shaping and any
//! extra headers. The built-in email table is static configuration; targets
//! known to require device parameters or a session are marked skipped and
//! never probed.

use crate::error::{Result, TargetError};
use serde::Serialize;

/// HTTP method used for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeMethod {
    /// Plain GET against the (expanded) URL
    Get,
    /// POST with a shaped body
    Post,
}

/// How the identifier is carried in a POST body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyShape {
    /// No body (GET targets)
    None,
    /// POST with an empty form body
    EmptyForm,
    /// URL-encoded form with the identifier under `field`
    Form {
        /// Form field name carrying the identifier
        field: &'static str,
    },
    /// JSON object with the identifier under `field`
    Json {
        /// JSON key carrying the identifier
        field: &'static str,
    },
}

/// One external endpoint probed for a given identifier kind.
///
/// Immutable static configuration. The URL template carries at most one
/// `{}` substitution slot for the identifier.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeTarget {
    /// Short label identifying the target service
    pub label: &'static str,
    /// HTTP method
    pub method: ProbeMethod,
    /// URL template with an optional `{}` slot
    pub url: &'static str,
    /// Body shaping rule for POST targets
    pub body: BodyShape,
    /// Extra request headers beyond the shared defaults
    pub headers: &'static [(&'static str, &'static str)],
    /// When set, the target is never probed and this reason is reported
    pub skip_reason: Option<&'static str>,
}

impl ProbeTarget {
    /// Substitute the identifier into the URL template.
    ///
    /// Templates without a slot are returned unchanged (some endpoints take
    /// the identifier in the body instead).
    #[must_use]
    pub fn expand_url(&self, identifier: &str) -> String {
        self.url.replacen("{}", identifier, 1)
    }

    /// Whether this target is skipped unconditionally.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skip_reason.is_some()
    }

    /// Validate the definition: scheme and slot count.
    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(TargetError::InvalidDefinition {
                label: self.label.to_string(),
                reason: format!("URL must be http(s), got '{}'", self.url),
            });
        }

        if self.url.matches("{}").count() > 1 {
            return Err(TargetError::InvalidDefinition {
                label: self.label.to_string(),
                reason: "URL template may carry at most one substitution slot".to_string(),
            });
        }

        if self.method == ProbeMethod::Get && !matches!(self.body, BodyShape::None) {
            return Err(TargetError::InvalidDefinition {
                label: self.label.to_string(),
                reason: "GET targets cannot carry a body".to_string(),
            });
        }

        Ok(())
    }
}

/// Built-in email probe targets, in probing order.
///
/// The shaping per entry mirrors what each endpoint expects from its own
/// web client; none of these endpoints document an existence check.
static EMAIL_TARGETS: &[ProbeTarget] = &[
    ProbeTarget {
        label: "Microsoft (officeapps.live)",
        method: ProbeMethod::Get,
        url: "https://odc.officeapps.live.com/odc/emailhrd/getidp?hm=0&emailAddress={}",
        body: BodyShape::None,
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "Twitter",
        method: ProbeMethod::Get,
        url: "https://twitter.com/users/email_available?email={}",
        body: BodyShape::None,
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "TikTok (mobile)",
        method: ProbeMethod::Get,
        url: "https://api16-normal-c-alisg.tiktokv.com/passport/email/send_code/v1/",
        body: BodyShape::None,
        headers: &[],
        skip_reason: Some("requires mobile device parameters"),
    },
    ProbeTarget {
        label: "Instagram (recovery)",
        method: ProbeMethod::Post,
        url: "https://www.instagram.com/accounts/account_recovery_send_ajax/",
        body: BodyShape::Form {
            field: "email_or_username",
        },
        headers: &[("X-Requested-With", "XMLHttpRequest")],
        skip_reason: None,
    },
    ProbeTarget {
        label: "SoundCloud (reset)",
        method: ProbeMethod::Get,
        url: "https://api-mobile.soundcloud.com/users/passwords/reset?client_id=Fiy8xlRI0xJNNGDLbPmGUjTpPRESPx8C&email={}",
        body: BodyShape::None,
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "Noon (reset)",
        method: ProbeMethod::Post,
        url: "https://www.noon.com/_svc/customer-v1/auth/reset_password",
        body: BodyShape::Json { field: "email" },
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "ACAPS (password)",
        method: ProbeMethod::Post,
        url: "https://www.acaps.org/user/password",
        body: BodyShape::Form { field: "name" },
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "Vimeo (forgot)",
        method: ProbeMethod::Post,
        url: "https://vimeo.com/forgot_password",
        body: BodyShape::Form { field: "email" },
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "NewsAPI (reset)",
        method: ProbeMethod::Post,
        url: "https://newsapi.org/reset-password",
        body: BodyShape::Form { field: "email" },
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "NewsAPI (home)",
        method: ProbeMethod::Get,
        url: "https://newsapi.org",
        body: BodyShape::None,
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "DarkwebID (login)",
        method: ProbeMethod::Get,
        url: "https://secure.darkwebid.com/user/login",
        body: BodyShape::None,
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "Snapchat (accounts)",
        method: ProbeMethod::Get,
        url: "https://accounts.snapchat.com",
        body: BodyShape::None,
        headers: &[],
        skip_reason: None,
    },
    ProbeTarget {
        label: "Snapchat (merlin login)",
        method: ProbeMethod::Post,
        url: "https://accounts.snapchat.com/accounts/merlin/login",
        body: BodyShape::EmptyForm,
        headers: &[],
        skip_reason: Some("requires session/CSRF token"),
    },
];

/// The ordered built-in email target table.
#[must_use]
pub fn email_targets() -> &'static [ProbeTarget] {
    EMAIL_TARGETS
}
