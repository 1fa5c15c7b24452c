//! High-level check entry points.
//!
//! `ProbeEngine` owns the configuration and the classification registry,
//! re-validates raw input, dispatches to the right executor, and returns
//! the ordered display lines the rendering layer consumes. Malformed input
//! fails soft with a user-facing line, never an error.

use crate::error::Result;
use crate::{email, phone, username};
use osprey_core::identifier::{is_email, is_username};
use osprey_core::{IdentifierKind, OspreyConfig};
use osprey_target::{ClassifierRegistry, SiteList};
use tracing::info;

/// One engine per caller context; checks are independent and the engine
/// holds no per-check state, so concurrent invocations are safe.
pub struct ProbeEngine {
    config: OspreyConfig,
    registry: ClassifierRegistry,
}

impl ProbeEngine {
    /// Create an engine with the built-in classification rules.
    #[must_use]
    pub fn new(config: OspreyConfig) -> Self {
        Self {
            config,
            registry: ClassifierRegistry::with_builtin_rules(),
        }
    }

    /// Create an engine with a custom classification registry.
    #[must_use]
    pub fn with_registry(config: OspreyConfig, registry: ClassifierRegistry) -> Self {
        Self { config, registry }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &OspreyConfig {
        &self.config
    }

    /// Detect the identifier kind and run the matching check.
    pub async fn check(&self, input: &str) -> Result<Vec<String>> {
        match IdentifierKind::detect(input) {
            Some(IdentifierKind::Email) => self.check_email(input).await,
            Some(IdentifierKind::Phone) => self.check_phone(input).await,
            Some(IdentifierKind::Username) => self.check_username(input).await,
            None => Ok(vec![
                "could not classify input as email, phone number or username".to_string(),
            ]),
        }
    }

    /// Probe the email target table and render one line per target.
    pub async fn check_email(&self, email: &str) -> Result<Vec<String>> {
        let email = email.trim();
        if !is_email(email) {
            return Ok(vec!["invalid email format, try again".to_string()]);
        }

        info!(kind = "email", "starting check");
        let results = email::check_email(email, &self.config.probe, &self.registry).await?;
        Ok(email::render_results(&results))
    }

    /// Fan out over the site list and render the found/unconfirmed split.
    pub async fn check_username(&self, raw: &str) -> Result<Vec<String>> {
        if !is_username(raw) {
            return Ok(vec![
                "invalid username format (3-30 letters, digits, '_' or '.')".to_string(),
            ]);
        }

        info!(kind = "username", "starting check");
        let sites = SiteList::load(&self.config.probe.sites_file).await;
        let report = username::check_username(raw, &sites, &self.config.probe).await?;
        Ok(report.lines())
    }

    /// Walk phone variants and render the number block plus any name found.
    pub async fn check_phone(&self, raw: &str) -> Result<Vec<String>> {
        info!(kind = "phone", "starting check");
        let report = phone::check_phone(raw, &self.config).await?;
        Ok(report.lines())
    }
}
