//! Teaser Guard
//!
//! Validates generated investment summaries before they are accepted.
//!
//! The guard provides two independent gating checks:
//! - Structural completeness: the detected sector's required metric keywords
//!   must appear among the financial metric keys
//! - Anonymity: the serialized result must not contain the real company name
//!   (in any case, with or without internal spaces) nor match a leak pattern
//!
//! plus a sanitizer that rewrites leaked literals before validation runs, and
//! a non-gating citation-coverage check.
//!
//! # Examples
//!
//! ```
//! use teaser_guard::{Guard, GuardConfig, ValidationStatus};
//! use serde_json::json;
//!
//! let guard = Guard::new(GuardConfig::default()).unwrap();
//! let result = json!({
//!     "sector": "Tech",
//!     "slide_2": {"metrics": {"Total Revenue (INR Cr)": "120"}}
//! });
//! let review = guard.review(&result, "Acme Widgets");
//! assert_eq!(review.status, ValidationStatus::Accepted);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod sanitize;
mod validator;

pub use config::{GuardConfig, SectorRule};
pub use error::GuardError;
pub use sanitize::sanitize;
pub use validator::{Guard, RejectionReason, ValidationResult, ValidationStatus};
