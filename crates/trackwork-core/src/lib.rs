//! # Trackwork Core
//!
//! Core components shared by every trackwork crate.
//!
//! At the moment this is the [`exception`] module, which defines the single
//! error type raised by route helpers, namespaces, the request collaborator
//! and the settings loader.

pub mod exception;

pub use exception::{Error, Result};
