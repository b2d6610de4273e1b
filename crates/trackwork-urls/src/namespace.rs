//! Routing namespaces.
//!
//! A [`Namespace`] is a named routing scope. Namespaces nest: each one points
//! at the scope it was declared in, and qualification walks that chain from
//! the root down to produce URL prefixes ([`Namespace::qpath`]), controller
//! module paths ([`Namespace::qmodule`]) and helper names
//! ([`Namespace::qname`]).
//!
//! # Examples
//!
//! ```
//! use trackwork_urls::namespace::Namespace;
//!
//! let net = Namespace::new("net");
//! let http = net.child("http");
//!
//! assert_eq!(http.qpath("proxies"), "/net/http/proxies");
//! assert_eq!(http.qmodule("ProxiesController"), "Net::Http::ProxiesController");
//! assert_eq!(http.qname("proxy"), "netHttpProxy");
//! ```

/// How a namespace picks its module name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModuleOption {
	/// Capitalize the first character of the namespace path.
	#[default]
	Derived,
	/// Use the given module name.
	Named(String),
	/// No module; the namespace adds nothing to qualified module names.
	Cleared,
}

/// Options accepted by [`Namespace::with_options`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceOptions {
	pub module: ModuleOption,
}

impl NamespaceOptions {
	/// Options overriding the module name.
	pub fn module(name: impl Into<String>) -> Self {
		Self {
			module: ModuleOption::Named(name.into()),
		}
	}

	/// Options clearing the module name.
	pub fn no_module() -> Self {
		Self {
			module: ModuleOption::Cleared,
		}
	}
}

/// A node in the namespace tree.
///
/// A namespace borrows its parent, so the parent always outlives it.
/// [`Namespace::default`] is the root: empty path, empty module, no parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Namespace<'p> {
	path: String,
	module: String,
	parent: Option<&'p Namespace<'p>>,
}

impl<'p> Namespace<'p> {
	/// The root namespace.
	pub fn root() -> Self {
		Self::default()
	}

	/// A top-level namespace with a derived module name.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::namespace::Namespace;
	///
	/// let ns = Namespace::new("foo");
	/// assert_eq!(ns.path(), "foo");
	/// assert_eq!(ns.module(), "Foo");
	/// assert!(ns.parent().is_none());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_options(name, NamespaceOptions::default(), None)
	}

	/// A namespace with explicit options and an optional parent.
	///
	/// Surrounding slashes are trimmed from `name`.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::namespace::{Namespace, NamespaceOptions};
	///
	/// let named = Namespace::with_options("foo", NamespaceOptions::module("Bar"), None);
	/// assert_eq!(named.qmodule("PhotosController"), "Bar::PhotosController");
	///
	/// let cleared = Namespace::with_options("foo", NamespaceOptions::no_module(), None);
	/// assert_eq!(cleared.module(), "");
	/// assert_eq!(cleared.qpath("photos"), "/foo/photos");
	/// ```
	pub fn with_options(
		name: impl Into<String>,
		options: NamespaceOptions,
		parent: Option<&'p Namespace<'p>>,
	) -> Self {
		let name = name.into();
		let path = name.trim_matches('/').to_string();
		let module = match options.module {
			ModuleOption::Derived => capitalize(&path),
			ModuleOption::Named(module) => module,
			ModuleOption::Cleared => String::new(),
		};

		Self {
			path,
			module,
			parent,
		}
	}

	/// A child of this namespace with a derived module name.
	pub fn child<'c>(&'c self, name: impl Into<String>) -> Namespace<'c> {
		Namespace::with_options(name, NamespaceOptions::default(), Some(self))
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn module(&self) -> &str {
		&self.module
	}

	pub fn parent(&self) -> Option<&'p Namespace<'p>> {
		self.parent
	}

	pub fn is_root(&self) -> bool {
		self.parent.is_none()
	}

	/// Number of ancestors above this namespace.
	pub fn depth(&self) -> usize {
		self.ancestors().count() - 1
	}

	/// This namespace followed by each ancestor, leaf to root.
	pub fn ancestors(&self) -> Ancestors<'_> {
		Ancestors { next: Some(self) }
	}

	/// Every namespace from the root down to this one.
	pub fn lineage(&self) -> Vec<&Namespace<'_>> {
		let mut chain: Vec<_> = self.ancestors().collect();
		chain.reverse();
		chain
	}

	/// Qualify a path segment with the paths of every enclosing namespace.
	///
	/// The result always starts with `/`. A leading `/` on `segment` is
	/// ignored, so `qpath("photos")` and `qpath("/photos")` agree.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::namespace::Namespace;
	///
	/// let root = Namespace::root();
	/// assert_eq!(root.qpath("photos"), "/photos");
	/// assert_eq!(root.qpath(""), "/");
	///
	/// let foo = Namespace::new("foo");
	/// assert_eq!(foo.qpath("/photos"), "/foo/photos");
	/// assert_eq!(foo.qpath(""), "/foo");
	/// ```
	pub fn qpath(&self, segment: &str) -> String {
		let segment = segment.strip_prefix('/').unwrap_or(segment);
		let mut parts: Vec<&str> = self
			.lineage()
			.into_iter()
			.map(Namespace::path)
			.filter(|path| !path.is_empty())
			.collect();
		if !segment.is_empty() {
			parts.push(segment);
		}
		format!("/{}", parts.join("/"))
	}

	/// Qualify a module name with the modules of every enclosing namespace.
	///
	/// Namespaces without a module are skipped.
	pub fn qmodule(&self, name: &str) -> String {
		let mut parts: Vec<&str> = self
			.lineage()
			.into_iter()
			.map(Namespace::module)
			.filter(|module| !module.is_empty())
			.collect();
		parts.push(name);
		parts.join("::")
	}

	/// Qualify a route name for helper naming.
	///
	/// Paths of enclosing namespaces are prefixed in camel case: the
	/// outermost keeps its case, every later part has its first character
	/// capitalized.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::namespace::Namespace;
	///
	/// assert_eq!(Namespace::root().qname("photo"), "photo");
	/// assert_eq!(Namespace::new("admin").qname("photo"), "adminPhoto");
	/// ```
	pub fn qname(&self, name: &str) -> String {
		let lineage = self.lineage();
		let parts = lineage
			.iter()
			.map(|ns| ns.path())
			.chain(std::iter::once(name))
			.filter(|part| !part.is_empty());

		let mut qualified = String::new();
		for part in parts {
			if qualified.is_empty() {
				qualified.push_str(part);
			} else {
				qualified.push_str(&capitalize(part));
			}
		}
		qualified
	}
}

/// Iterator returned by [`Namespace::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
	next: Option<&'a Namespace<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
	type Item = &'a Namespace<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.parent;
		Some(current)
	}
}

fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
