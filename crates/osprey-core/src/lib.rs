//! Osprey Core - Foundation crate for the Osprey reconnaissance aggregator.
//!
//! This crate provides the shared vocabulary that every other Osprey crate
//! depends on: probe verdicts and results, identifier syntax classification,
//! error handling, and configuration management.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`identifier`] - Syntactic classification of raw input strings
//! - [`types`] - Shared probe types (`Verdict`, `ProbeResult`)
//!
//! # Example
//!
//! ```rust
//! use osprey_core::{identifier, IdentifierKind};
//!
//! assert!(identifier::is_email("a.b+c@sub.example.co"));
//! assert_eq!(
//!     IdentifierKind::detect("@John_Doe99"),
//!     Some(IdentifierKind::Username)
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod identifier;
pub mod types;

// Re-export commonly used types
pub use config::{OspreyConfig, PhoneConfig, ProbeConfig};
pub use error::{ConfigError, ConfigResult, OspreyError, Result};
pub use identifier::IdentifierKind;
pub use types::{ProbeResult, Verdict};
