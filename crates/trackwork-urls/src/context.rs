//! Request-bound invocation context for route helpers.

use crate::args::RouteArg;
use crate::helpers::RouteHelper;
use crate::registry::HelperResolver;
use crate::settings::UrlSettings;
use std::fmt;
use std::sync::Arc;
use trackwork_core::exception::Result;
use trackwork_http::Request;

/// Everything a helper can see while it renders: the current request, the
/// helpers it may delegate to, and the URL settings.
///
/// A context is cheap to build and borrows all three; build one per request.
#[derive(Clone, Copy)]
pub struct HelperContext<'a> {
	request: &'a Request,
	helpers: &'a dyn HelperResolver,
	settings: &'a UrlSettings,
}

impl<'a> HelperContext<'a> {
	/// Bind a request, a helper resolver and settings together.
	///
	/// Usually obtained from [`HelperRegistry::context`](crate::registry::HelperRegistry::context).
	pub fn new(
		request: &'a Request,
		helpers: &'a dyn HelperResolver,
		settings: &'a UrlSettings,
	) -> Self {
		Self {
			request,
			helpers,
			settings,
		}
	}

	/// The request being handled.
	pub fn request(&self) -> &'a Request {
		self.request
	}

	/// The settings helpers render with.
	pub fn settings(&self) -> &'a UrlSettings {
		self.settings
	}

	/// `https` for TLS requests, otherwise the configured default scheme.
	pub fn scheme(&self) -> &'a str {
		if self.request.is_secure() {
			self.request.scheme()
		} else {
			&self.settings.default_scheme
		}
	}

	/// The request's `Host` header, or the configured default host.
	pub fn host(&self) -> &'a str {
		self.request
			.host()
			.unwrap_or(self.settings.default_host.as_str())
	}

	/// Look up a helper by name.
	pub fn resolve(&self, name: &str) -> Result<Arc<dyn RouteHelper>> {
		self.helpers.resolve(name).inspect_err(|err| {
			tracing::warn!(name, error = %err, "route helper resolution failed");
		})
	}

	/// Resolve a helper by name and render it, the way a view calls a
	/// dynamically registered helper.
	pub fn call(&self, name: &str, args: &[RouteArg]) -> Result<String> {
		self.resolve(name)?.render(self, args)
	}
}

impl fmt::Debug for HelperContext<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HelperContext")
			.field("request", self.request)
			.field("settings", self.settings)
			.finish_non_exhaustive()
	}
}
