//! Namespace integration tests
//!
//! Qualification of paths, controller modules and helper names across
//! nested namespaces, and routes registered inside them.

use rstest::rstest;
use trackwork_http::Request;
use trackwork_urls::{HelperRegistry, Namespace, NamespaceOptions, route_args};

/// Test: Every namespace shape treats a leading slash the same
#[rstest]
#[case(Namespace::root())]
#[case(Namespace::new("foo"))]
#[case(Namespace::with_options("foo", NamespaceOptions::module("Bar"), None))]
#[case(Namespace::with_options("foo", NamespaceOptions::no_module(), None))]
fn test_qpath_leading_slash_insensitive(#[case] ns: Namespace<'static>) {
	assert_eq!(ns.qpath("photos"), ns.qpath("/photos"));
}

/// Test: Root-to-leaf qualification three levels deep
#[rstest]
fn test_three_levels() {
	let api = Namespace::new("api");
	let v2 = api.child("v2");
	let users = Namespace::with_options("users", NamespaceOptions::module("Accounts"), Some(&v2));

	assert_eq!(users.qpath("/list"), "/api/v2/users/list");
	assert_eq!(users.qmodule("ListController"), "Api::V2::Accounts::ListController");
	assert_eq!(users.qname("user"), "apiV2UsersUser");
	assert_eq!(users.lineage().len(), 3);
}

/// Test: Routes registered in a namespace get qualified names and paths
#[rstest]
fn test_namespaced_routes() {
	let net = Namespace::new("net");
	let http = net.child("http");

	let mut registry = HelperRegistry::new();
	registry.register_namespaced_route(&http, "proxy", "/proxies/:id").unwrap();
	registry.register_namespaced_route(&net, "proxies", "proxies").unwrap();

	let request = Request::builder().host("www.example.com").build().unwrap();
	let cx = registry.context(&request);

	assert_eq!(
		cx.call("netHttpProxyPath", &route_args![3]).unwrap(),
		"/net/http/proxies/3"
	);
	assert_eq!(
		cx.call("netHttpProxyUrl", &route_args![0]).unwrap(),
		"http://www.example.com/net/http/proxies/0"
	);
	assert_eq!(cx.call("netProxiesPath", &[]).unwrap(), "/net/proxies");
}

/// Test: A route at the namespace root maps to the namespace prefix
#[rstest]
fn test_namespace_index_route() {
	let admin = Namespace::new("admin");
	let mut registry = HelperRegistry::new();
	registry.register_namespaced_route(&admin, "dashboard", "").unwrap();

	let request = Request::builder().build().unwrap();
	assert_eq!(
		registry.context(&request).call("adminDashboardPath", &[]).unwrap(),
		"/admin"
	);
}
