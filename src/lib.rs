//! Embedded sound assets for the intercom.
//!
//! This library provides the named sound payloads the intercom firmware
//! tools consult. It includes:
//! - A fixed, compile-time registry of named sound assets
//! - Name resolution with explicit presence handling
//! - Placeholder payloads standing in for externally generated audio
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  lookup/require  │ ← Main interface
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │  SoundRegistry   │────▶│ Embedded Sounds  │
//! │  (static table)  │     │  (placeholder)   │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use intercom_sound::lookup;
//!
//! // Resolve the doorbell chime
//! match lookup("ding_dong") {
//!     Some(asset) => assert_eq!(asset.data(), &[0x00, 0x00, 0x00, 0x00][..]),
//!     None => unreachable!("the chime is always registered"),
//! }
//!
//! // Unknown names resolve to nothing; that is not an error
//! assert!(lookup("unknown").is_none());
//! ```
//!
//! The registry is populated once at compile time and never mutated, so
//! lookups are safe from any number of concurrent threads without
//! synchronization. Sound generation and playback are external concerns;
//! this crate only hands out read access to the payload bytes.

pub mod embedded;
pub mod error;
pub mod registry;

// Re-export commonly used items for convenience
pub use embedded::{DING_DONG, DING_DONG_DATA};
pub use error::SoundError;
pub use registry::{lookup, registry, require, sound_names, SoundAsset, SoundRegistry};
