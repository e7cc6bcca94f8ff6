//! Gilded Hamper Core - Shared types library.
//!
//! This crate provides common types used across all Gilded Hamper components:
//! - `storefront` - The session-scoped storefront core embedded by the UI shell
//! - `integration-tests` - Cross-crate behavioural tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no content
//! fetching. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, rupee prices, and ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
