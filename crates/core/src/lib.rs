//! Backoffice Core - Shared types library.
//!
//! This crate provides common types used across all backoffice components:
//! - `admin` - Storage, repositories and services behind the dashboard
//! - `cli` - Command-line front end composing the admin library
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
