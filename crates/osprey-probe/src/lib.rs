//! Osprey Probe - HTTP probe execution and response interpretation.
//!
//! This crate issues the actual requests against the configured targets and
//! turns whatever comes back into verdicts and display lines. Email targets
//! are probed sequentially (each needs distinct request shaping), username
//! targets are fanned out concurrently, and phone lookups walk the candidate
//! digit variants until a caller name is extracted.
//!
//! # Modules
//!
//! - [`engine`] - High-level check entry points returning display lines
//! - [`email`] - Sequential shaped email probes
//! - [`username`] - Concurrent username fan-out
//! - [`phone`] - Variant-walking caller-ID lookup
//! - [`decode`] - Permissive charset decoding
//! - [`extract`] - Caller-name extraction strategies
//! - [`client`] - Per-check HTTP client construction
//!
//! # Example
//!
//! ```rust,ignore
//! use osprey_core::OspreyConfig;
//! use osprey_probe::ProbeEngine;
//!
//! let engine = ProbeEngine::new(OspreyConfig::default());
//! let lines = engine.check("someone@example.com").await?;
//! for line in lines {
//!     println!("{line}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod decode;
pub mod email;
pub mod engine;
pub mod error;
pub mod extract;
pub mod phone;
pub mod username;

// Re-export commonly used types
pub use decode::best_decode;
pub use engine::ProbeEngine;
pub use error::{ProbeError, Result};
pub use extract::extract_name;
pub use phone::PhoneReport;
pub use username::UsernameReport;
