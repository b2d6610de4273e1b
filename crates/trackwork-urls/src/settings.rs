//! Settings for URL generation.
//!
//! Loaded from a `[urls]`-style TOML table:
//!
//! ```toml
//! default_scheme = "http"
//! default_host = "localhost"
//! path_suffix = "Path"
//! url_suffix = "Url"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use trackwork_core::exception::{Error, Result};

/// URL generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlSettings {
	/// Scheme used when the request did not arrive over TLS.
	pub default_scheme: String,
	/// Host used when the request carries no `Host` header.
	pub default_host: String,
	/// Suffix appended to a route name to name its path helper.
	pub path_suffix: String,
	/// Suffix appended to a route name to name its url helper.
	pub url_suffix: String,
}

impl Default for UrlSettings {
	fn default() -> Self {
		Self {
			default_scheme: "http".to_string(),
			default_host: "localhost".to_string(),
			path_suffix: "Path".to_string(),
			url_suffix: "Url".to_string(),
		}
	}
}

impl UrlSettings {
	/// Parse and validate settings from TOML.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::settings::UrlSettings;
	///
	/// let settings = UrlSettings::from_toml_str(r#"default_host = "www.example.com""#).unwrap();
	/// assert_eq!(settings.default_host, "www.example.com");
	/// assert_eq!(settings.default_scheme, "http");
	///
	/// assert!(UrlSettings::from_toml_str(r#"default_scheme = "1http""#).is_err());
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self =
			toml::from_str(source).map_err(|e| Error::Configuration(e.to_string()))?;
		settings.validate()?;
		tracing::debug!(?settings, "loaded url settings");
		Ok(settings)
	}

	/// Check every field.
	///
	/// # Errors
	///
	/// Returns [`Error::Configuration`] naming the first invalid field.
	pub fn validate(&self) -> Result<()> {
		if !is_valid_scheme(&self.default_scheme) {
			return Err(Error::Configuration(format!(
				"default_scheme '{}' is not a valid URI scheme",
				self.default_scheme
			)));
		}
		if self.default_host.is_empty()
			|| self
				.default_host
				.chars()
				.any(|c| c == '/' || c.is_whitespace())
		{
			return Err(Error::Configuration(format!(
				"default_host '{}' is not a valid host",
				self.default_host
			)));
		}
		if self.path_suffix.is_empty() {
			return Err(Error::Configuration("path_suffix must not be empty".to_string()));
		}
		if self.url_suffix.is_empty() {
			return Err(Error::Configuration("url_suffix must not be empty".to_string()));
		}
		if self.path_suffix == self.url_suffix {
			return Err(Error::Configuration(
				"path_suffix and url_suffix must differ".to_string(),
			));
		}
		Ok(())
	}
}

// RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
	let mut chars = scheme.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
