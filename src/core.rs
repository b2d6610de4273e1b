//! Core framework types.
//!
//! # Examples
//!
//! ```
//! use trackwork::core::exception::Error;
//!
//! let err = Error::HelperNotFound("songPath".to_string());
//! assert_eq!(err.to_string(), "Route helper not found: songPath");
//! ```

pub use trackwork_core::*;
