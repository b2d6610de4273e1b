//! # Trackwork URLs
//!
//! Route helpers and routing namespaces.
//!
//! - [`pattern`]: parse `/bands/:band_id/albums/:id`-style patterns and
//!   interpolate positional arguments into them
//! - [`helpers`]: path and url helpers compiled from patterns
//! - [`registry`] and [`context`]: name-keyed helper lookup bound to the
//!   current request
//! - [`namespace`]: nested routing scopes that qualify paths, controller
//!   modules and helper names
//!
//! ## Quick Start
//!
//! ```
//! use trackwork_http::Request;
//! use trackwork_urls::namespace::Namespace;
//! use trackwork_urls::registry::HelperRegistry;
//! use trackwork_urls::route_args;
//!
//! let mut registry = HelperRegistry::new();
//! registry.register_route("song", "/songs/:id.:format?").unwrap();
//!
//! let admin = Namespace::new("admin");
//! registry.register_namespaced_route(&admin, "song", "songs/:id").unwrap();
//!
//! let request = Request::builder().host("www.example.com").build().unwrap();
//! let cx = registry.context(&request);
//!
//! assert_eq!(cx.call("songPath", &route_args![7]).unwrap(), "/songs/7");
//! assert_eq!(cx.call("songPath", &route_args![7, "json"]).unwrap(), "/songs/7.json");
//! assert_eq!(
//!     cx.call("adminSongUrl", &route_args![7]).unwrap(),
//!     "http://www.example.com/admin/songs/7"
//! );
//! ```

pub mod args;
pub mod context;
pub mod helpers;
pub mod namespace;
pub mod pattern;
pub mod registry;
pub mod settings;

pub use args::{RouteArg, RouteKey};
pub use context::HelperContext;
pub use helpers::{HelperKind, PathHelper, RouteHelper, UrlHelper, helper_name, path, url, url_with};
pub use namespace::{ModuleOption, Namespace, NamespaceOptions};
pub use pattern::{Placeholder, RoutePattern, Token, tokenize};
pub use registry::{HelperRegistry, HelperResolver};
pub use settings::UrlSettings;
