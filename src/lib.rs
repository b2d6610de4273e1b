//! # Trackwork
//!
//! Route helpers and routing namespaces for MVC-style web applications.
//!
//! Routes are declared as patterns such as `/bands/:band_id/albums/:id`.
//! Each route compiles into two helpers that views call by name: a path
//! helper rendering `/bands/7/albums/8`, and a url helper rendering
//! `http://www.example.com/bands/7/albums/8` from the current request.
//! Namespaces group routes under a shared path prefix and controller module.
//!
//! ## Feature Flags
//!
//! - `http` - request types read by url helpers
//! - `urls` - patterns, helpers, the helper registry and namespaces
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```
//! use trackwork::prelude::*;
//!
//! let api = Namespace::new("api");
//!
//! let mut registry = HelperRegistry::new();
//! registry.register_route("bandAlbum", "/bands/:band_id/albums/:id").unwrap();
//! registry.register_namespaced_route(&api, "song", "songs/:id.:format?").unwrap();
//!
//! let request = Request::builder().host("www.example.com").build().unwrap();
//! let cx = registry.context(&request);
//!
//! assert_eq!(
//!     cx.call("bandAlbumUrl", &route_args![7, 0]).unwrap(),
//!     "http://www.example.com/bands/7/albums/0"
//! );
//! assert_eq!(cx.call("apiSongPath", &route_args![7, "json"]).unwrap(), "/api/songs/7.json");
//! assert_eq!(api.qmodule("SongsController"), "Api::SongsController");
//! ```

pub mod core;

#[cfg(feature = "http")]
pub use trackwork_http as http;

#[cfg(feature = "urls")]
pub use trackwork_urls as urls;

#[cfg(feature = "urls")]
pub use trackwork_urls::route_args;

pub use trackwork_core::exception::{Error, Result};

/// Commonly used types.
pub mod prelude {
	pub use crate::{Error, Result};

	#[cfg(feature = "http")]
	pub use trackwork_http::{Request, RequestBuilder};

	#[cfg(feature = "urls")]
	pub use trackwork_urls::{
		HelperContext, HelperKind, HelperRegistry, HelperResolver, ModuleOption, Namespace,
		NamespaceOptions, PathHelper, RouteArg, RouteHelper, RouteKey, RoutePattern, UrlHelper,
		UrlSettings, path, route_args, url, url_with,
	};
}
