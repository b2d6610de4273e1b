//! Helper registry.
//!
//! Route declaration registers helpers here by name during configuration;
//! views later resolve them through a [`HelperContext`]. The registry is
//! filled once at startup and only read afterwards.
//!
//! # Examples
//!
//! ```
//! use trackwork_http::Request;
//! use trackwork_urls::registry::HelperRegistry;
//! use trackwork_urls::route_args;
//!
//! let mut registry = HelperRegistry::new();
//! registry.register_route("bandAlbum", "/bands/:band_id/albums/:id").unwrap();
//!
//! assert_eq!(registry.names(), vec!["bandAlbumPath", "bandAlbumUrl"]);
//!
//! let request = Request::builder().host("www.example.com").build().unwrap();
//! let cx = registry.context(&request);
//! assert_eq!(
//!     cx.call("bandAlbumUrl", &route_args![7, 8]).unwrap(),
//!     "http://www.example.com/bands/7/albums/8"
//! );
//! ```

use crate::context::HelperContext;
use crate::helpers::{HelperKind, PathHelper, RouteHelper, UrlHelper, helper_name};
use crate::namespace::Namespace;
use crate::pattern::RoutePattern;
use crate::settings::UrlSettings;
use std::collections::HashMap;
use std::sync::Arc;
use trackwork_core::exception::{Error, Result};
use trackwork_http::Request;

/// Resolves helpers by name.
///
/// Url helpers receive one of these through their [`HelperContext`] instead
/// of looking helpers up from global state.
pub trait HelperResolver {
	/// Look up the helper registered under `name`.
	///
	/// # Errors
	///
	/// Returns [`Error::HelperNotFound`] when nothing is registered under
	/// `name`.
	fn resolve(&self, name: &str) -> Result<Arc<dyn RouteHelper>>;
}

/// Name-keyed store of compiled helpers.
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
	helpers: HashMap<String, Arc<dyn RouteHelper>>,
	settings: UrlSettings,
}

impl HelperRegistry {
	/// An empty registry with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// An empty registry with the given settings.
	///
	/// # Errors
	///
	/// Returns [`Error::Configuration`] if the settings fail validation.
	pub fn with_settings(settings: UrlSettings) -> Result<Self> {
		settings.validate()?;
		Ok(Self {
			helpers: HashMap::new(),
			settings,
		})
	}

	/// The settings helpers render with.
	pub fn settings(&self) -> &UrlSettings {
		&self.settings
	}

	/// Register a helper, returning the one it replaced, if any.
	pub fn register(
		&mut self,
		name: impl Into<String>,
		helper: impl RouteHelper + 'static,
	) -> Option<Arc<dyn RouteHelper>> {
		let name = name.into();
		tracing::debug!(
			name = %name,
			kind = %helper.kind(),
			pattern = %helper.pattern(),
			"registering route helper"
		);
		let previous = self.helpers.insert(name.clone(), Arc::new(helper));
		if previous.is_some() {
			tracing::warn!(name = %name, "route helper replaced an existing registration");
		}
		previous
	}

	/// Compile `pattern` once and register both its path helper and its url
	/// helper under names derived from `name`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidPattern`] if the pattern is malformed; nothing
	/// is registered in that case.
	pub fn register_route(&mut self, name: &str, pattern: &str) -> Result<()> {
		let pattern = RoutePattern::parse(pattern)?;
		let path_name = helper_name(name, HelperKind::Path, &self.settings);
		let url_name = helper_name(name, HelperKind::Url, &self.settings);

		self.register(path_name.clone(), PathHelper::new(pattern.clone()));
		self.register(url_name, UrlHelper::new(pattern, path_name));
		Ok(())
	}

	/// Register a route declared inside a namespace.
	///
	/// The helper names are qualified with [`Namespace::qname`] and the
	/// pattern with [`Namespace::qpath`].
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::namespace::Namespace;
	/// use trackwork_urls::registry::HelperRegistry;
	/// use trackwork_urls::route_args;
	///
	/// let admin = Namespace::new("admin");
	/// let mut registry = HelperRegistry::new();
	/// registry.register_namespaced_route(&admin, "photo", "photos/:id").unwrap();
	///
	/// let helper = registry.get("adminPhotoPath").unwrap();
	/// assert_eq!(helper.pattern().as_str(), "/admin/photos/:id");
	/// ```
	pub fn register_namespaced_route(
		&mut self,
		namespace: &Namespace<'_>,
		name: &str,
		pattern: &str,
	) -> Result<()> {
		self.register_route(&namespace.qname(name), &namespace.qpath(pattern))
	}

	/// The helper registered under `name`, if any.
	pub fn get(&self, name: &str) -> Option<Arc<dyn RouteHelper>> {
		self.helpers.get(name).cloned()
	}

	/// Whether a helper is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.helpers.contains_key(name)
	}

	/// Registered helper names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.helpers.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Number of registered helpers.
	pub fn len(&self) -> usize {
		self.helpers.len()
	}

	/// Whether no helper is registered.
	pub fn is_empty(&self) -> bool {
		self.helpers.is_empty()
	}

	/// Bind this registry and its settings to a request.
	pub fn context<'a>(&'a self, request: &'a Request) -> HelperContext<'a> {
		HelperContext::new(request, self, &self.settings)
	}
}

impl HelperResolver for HelperRegistry {
	fn resolve(&self, name: &str) -> Result<Arc<dyn RouteHelper>> {
		self.get(name)
			.ok_or_else(|| Error::HelperNotFound(name.to_string()))
	}
}
