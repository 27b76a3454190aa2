//! Teaser Domain Layer
//!
//! This crate contains the core domain model for the teaser pipeline: the
//! fundamental concepts, value objects, and trait interfaces that all other
//! layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Chunk**: the atomic unit of extracted, attributable source text
//! - **Fingerprint**: stable content-addressed chunk identity
//! - **Sector**: industry classification driving metric rules and visuals
//! - **AnalysisResult**: the structured, anonymized output contract
//! - **CostLedger**: per-company spend accumulation
//!
//! ## Architecture
//!
//! - Pure domain types only
//! - Trait definitions for external collaborators (text generation)
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod cost;
pub mod result;
pub mod sector;
pub mod traits;

// Re-exports for convenience
pub use chunk::{Chunk, ChunkId, ChunkKind};
pub use cost::CostLedger;
pub use result::{AnalysisResult, ChartData, Citation, SlideOne, SlideThree, SlideTwo};
pub use sector::Sector;
pub use traits::{Generation, TextGenerator};
