// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`transform`]: AI image transformation service
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Methods return `Result` with port error types

pub mod transform;

// Re-export main types for convenience
pub use transform::{ImageTransformer, TransformError, TransformRequest, TransformedImage};
