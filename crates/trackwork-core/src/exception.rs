//! Error types for trackwork.
//!
//! Every fallible operation in the framework returns [`Result`], whose error
//! half is the [`Error`] enum below. Errors are raised synchronously at the
//! offending call and are never retried.

/// Errors raised by route helpers, namespaces, requests and settings.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// A compiled helper was called with a number of arguments outside
	/// `[min, max]`.
	///
	/// The message carries the original pattern verbatim.
	#[error("Incorrect number of arguments passed to route helper for {pattern}")]
	ArgumentCount {
		/// Pattern the helper was compiled from.
		pattern: String,
		/// Number of required placeholders.
		min: usize,
		/// Total number of placeholders.
		max: usize,
		/// Number of arguments actually supplied.
		actual: usize,
	},

	/// A helper could not be resolved by name.
	#[error("Route helper not found: {0}")]
	HelperNotFound(String),

	/// A route pattern could not be compiled.
	#[error("Invalid route pattern '{pattern}': {reason}")]
	InvalidPattern {
		/// The offending pattern.
		pattern: String,
		/// Why it was rejected.
		reason: String,
	},

	/// A record argument carried no id.
	#[error("Argument {position} passed to route helper for {pattern} has no id")]
	MissingIdentifier {
		/// Pattern the helper was compiled from.
		pattern: String,
		/// Zero-based position of the argument.
		position: usize,
	},

	/// An argument of an unsupported shape was supplied.
	#[error("Invalid route argument: {0}")]
	InvalidArgument(String),

	/// A request could not be built.
	#[error("Invalid request: {0}")]
	InvalidRequest(String),

	/// Settings could not be loaded or failed validation.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Result type alias used throughout trackwork.
pub type Result<T> = std::result::Result<T, Error>;
