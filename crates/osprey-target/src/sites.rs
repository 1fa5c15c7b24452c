//! Username site-list loading.
//!
//! The username probe fans out over an external, caller-supplied list of
//! URL templates (one `{}` slot each). Blank lines and `#` comments are
//! ignored. A missing or unreadable file degrades to an empty list so the
//! check reports "nothing confirmed" instead of erroring.

use std::path::Path;
use tracing::{debug, warn};

/// Ordered list of username probe URL templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteList {
    templates: Vec<String>,
}

impl SiteList {
    /// Load a site list from a text file, degrading to empty on failure.
    pub async fn load(path: &Path) -> Self {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                let list = Self::from_lines(&contents);
                debug!(count = list.len(), path = %path.display(), "loaded site list");
                list
            }
            Err(e) => {
                warn!(path = %path.display(), "site list unavailable, probing nothing: {e}");
                Self::default()
            }
        }
    }

    /// Parse a site list from raw text, preserving line order.
    #[must_use]
    pub fn from_lines(contents: &str) -> Self {
        let templates = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(ToString::to_string)
            .collect();
        Self { templates }
    }

    /// The templates in file order.
    #[must_use]
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Expand every template with the given username, in order.
    ///
    /// A template without a `{}` slot is probed as-is.
    #[must_use]
    pub fn expand(&self, username: &str) -> Vec<String> {
        self.templates
            .iter()
            .map(|template| template.replacen("{}", username, 1))
            .collect()
    }
}
