//! Path and url helpers compiled from route patterns.
//!
//! [`path`] compiles a pattern into a [`PathHelper`], which renders an
//! absolute path from positional arguments. [`url`] compiles a pattern into a
//! [`UrlHelper`], which renders `scheme://host` followed by the output of the
//! path helper registered for the same route. The url helper does not render
//! the pattern itself: it looks the path helper up by name through the
//! [`HelperContext`] every time it is called.
//!
//! # Examples
//!
//! ```
//! use trackwork_http::Request;
//! use trackwork_urls::helpers::{path, url};
//! use trackwork_urls::registry::HelperRegistry;
//! use trackwork_urls::route_args;
//!
//! let mut registry = HelperRegistry::new();
//! registry.register("songPath", path("/songs/:id").unwrap());
//! registry.register("songUrl", url("/songs/:id", "song").unwrap());
//!
//! let request = Request::builder().host("www.example.com").build().unwrap();
//! let cx = registry.context(&request);
//!
//! assert_eq!(cx.call("songPath", &route_args![7]).unwrap(), "/songs/7");
//! assert_eq!(
//!     cx.call("songUrl", &route_args![7]).unwrap(),
//!     "http://www.example.com/songs/7"
//! );
//! ```

use crate::args::RouteArg;
use crate::context::HelperContext;
use crate::pattern::RoutePattern;
use crate::settings::UrlSettings;
use std::fmt;
use trackwork_core::exception::{Error, Result};

/// The two flavours of route helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperKind {
	/// Renders an absolute path.
	Path,
	/// Renders an absolute URL.
	Url,
}

impl HelperKind {
	/// The name suffix configured for this kind.
	pub fn suffix<'s>(&self, settings: &'s UrlSettings) -> &'s str {
		match self {
			Self::Path => &settings.path_suffix,
			Self::Url => &settings.url_suffix,
		}
	}
}

impl fmt::Display for HelperKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path => f.write_str("path"),
			Self::Url => f.write_str("url"),
		}
	}
}

/// Derive the registry name of a helper from its route name.
///
/// # Examples
///
/// ```
/// use trackwork_urls::helpers::{helper_name, HelperKind};
/// use trackwork_urls::settings::UrlSettings;
///
/// let settings = UrlSettings::default();
/// assert_eq!(helper_name("bandAlbum", HelperKind::Path, &settings), "bandAlbumPath");
/// assert_eq!(helper_name("bandAlbum", HelperKind::Url, &settings), "bandAlbumUrl");
/// ```
pub fn helper_name(base: &str, kind: HelperKind, settings: &UrlSettings) -> String {
	format!("{}{}", base, kind.suffix(settings))
}

/// A compiled route helper.
///
/// Helpers are immutable and shared read-only between requests.
pub trait RouteHelper: fmt::Debug + Send + Sync {
	/// The pattern this helper was compiled from.
	fn pattern(&self) -> &RoutePattern;

	/// Which kind of helper this is.
	fn kind(&self) -> HelperKind;

	/// Render the helper for the given arguments.
	fn render(&self, cx: &HelperContext<'_>, args: &[RouteArg]) -> Result<String>;
}

/// Renders absolute paths from a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHelper {
	pattern: RoutePattern,
}

impl PathHelper {
	/// Wrap an already compiled pattern.
	pub fn new(pattern: RoutePattern) -> Self {
		Self { pattern }
	}

	/// Render the path without a request context.
	///
	/// Path building only depends on the arguments, so this is the same as
	/// [`RouteHelper::render`].
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::helpers::path;
	/// use trackwork_urls::route_args;
	///
	/// let helper = path("/songs/:id").unwrap();
	/// assert_eq!(helper.build(&route_args![0]).unwrap(), "/songs/0");
	///
	/// let err = helper.build(&[]).unwrap_err();
	/// assert_eq!(
	///     err.to_string(),
	///     "Incorrect number of arguments passed to route helper for /songs/:id"
	/// );
	/// ```
	pub fn build(&self, args: &[RouteArg]) -> Result<String> {
		let rendered = self.pattern.render(args)?;
		tracing::trace!(pattern = %self.pattern, path = %rendered, "rendered path helper");
		Ok(rendered)
	}
}

impl RouteHelper for PathHelper {
	fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	fn kind(&self) -> HelperKind {
		HelperKind::Path
	}

	fn render(&self, _cx: &HelperContext<'_>, args: &[RouteArg]) -> Result<String> {
		self.build(args)
	}
}

/// Renders absolute URLs by delegating to a registered path helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlHelper {
	pattern: RoutePattern,
	path_helper: String,
}

impl UrlHelper {
	/// Build a url helper that delegates to the path helper named
	/// `path_helper`.
	pub fn new(pattern: RoutePattern, path_helper: impl Into<String>) -> Self {
		Self {
			pattern,
			path_helper: path_helper.into(),
		}
	}

	/// Name of the path helper this url helper resolves at call time.
	pub fn path_helper(&self) -> &str {
		&self.path_helper
	}
}

impl RouteHelper for UrlHelper {
	fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	fn kind(&self) -> HelperKind {
		HelperKind::Url
	}

	fn render(&self, cx: &HelperContext<'_>, args: &[RouteArg]) -> Result<String> {
		// Arity errors name this helper's pattern, not the path helper's.
		self.pattern.check_arity(args.len())?;

		let helper = cx.resolve(&self.path_helper)?;
		if helper.kind() != HelperKind::Path {
			tracing::warn!(
				name = %self.path_helper,
				kind = %helper.kind(),
				"url helper delegate is not a path helper"
			);
			return Err(Error::HelperNotFound(self.path_helper.clone()));
		}

		let path = helper.render(cx, args)?;
		let rendered = format!("{}://{}{}", cx.scheme(), cx.host(), path);
		tracing::trace!(pattern = %self.pattern, url = %rendered, "rendered url helper");
		Ok(rendered)
	}
}

/// Compile a pattern into a path helper.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the pattern is malformed.
pub fn path(pattern: &str) -> Result<PathHelper> {
	Ok(PathHelper::new(RoutePattern::parse(pattern)?))
}

/// Compile a pattern into a url helper for the route called `name`.
///
/// The url helper delegates to the helper registered as `<name>Path`, using
/// the default suffix. Use [`url_with`] when the suffix is configured
/// differently.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the pattern is malformed.
pub fn url(pattern: &str, name: &str) -> Result<UrlHelper> {
	url_with(pattern, name, &UrlSettings::default())
}

/// Compile a pattern into a url helper whose path helper name uses the
/// suffix from `settings`.
///
/// # Examples
///
/// ```
/// use trackwork_urls::helpers::url_with;
/// use trackwork_urls::settings::UrlSettings;
///
/// let settings = UrlSettings {
///     path_suffix: "_path".to_string(),
///     url_suffix: "_url".to_string(),
///     ..UrlSettings::default()
/// };
/// let helper = url_with("/songs/:id", "song", &settings).unwrap();
/// assert_eq!(helper.path_helper(), "song_path");
/// ```
pub fn url_with(pattern: &str, name: &str, settings: &UrlSettings) -> Result<UrlHelper> {
	let path_helper = helper_name(name, HelperKind::Path, settings);
	Ok(UrlHelper::new(RoutePattern::parse(pattern)?, path_helper))
}
