//! Facade integration tests
//!
//! Routes declared through the top-level crate, rendered the way views use
//! them.

use rstest::rstest;
use trackwork::prelude::*;

#[derive(Debug)]
struct Album {
	id: Option<u32>,
}

impl RouteKey for Album {
	fn route_key(&self) -> Option<String> {
		self.id.map(|id| id.to_string())
	}
}

fn app_registry() -> HelperRegistry {
	let net = Namespace::new("net");
	let http = net.child("http");

	let mut registry = HelperRegistry::new();
	registry.register_route("songs", "/songs").unwrap();
	registry.register_route("song", "/songs/:id.:format?").unwrap();
	registry.register_route("bandAlbum", "/bands/:band_id/albums/:id").unwrap();
	registry.register_namespaced_route(&http, "proxy", "proxies/:id").unwrap();
	registry
}

/// Test: Every route registers a path and a url helper
#[rstest]
fn test_helper_names() {
	let registry = app_registry();
	assert_eq!(
		registry.names(),
		vec![
			"bandAlbumPath",
			"bandAlbumUrl",
			"netHttpProxyPath",
			"netHttpProxyUrl",
			"songPath",
			"songUrl",
			"songsPath",
			"songsUrl",
		]
	);
}

/// Test: Model records substitute their ids, zero included
#[rstest]
fn test_records() {
	let registry = app_registry();
	let request = Request::builder().host("www.example.com").build().unwrap();
	let cx = registry.context(&request);

	let band = RouteArg::record(&Album { id: Some(0) });
	let album = RouteArg::record(&Album { id: Some(202) });
	assert_eq!(
		cx.call("bandAlbumUrl", &[band, album]).unwrap(),
		"http://www.example.com/bands/0/albums/202"
	);
}

/// Test: Unsaved records cannot be routed to
#[rstest]
fn test_unsaved_record() {
	let registry = app_registry();
	let request = Request::builder().build().unwrap();
	let err = registry
		.context(&request)
		.call("songPath", &[RouteArg::record(&Album { id: None })])
		.unwrap_err();
	assert!(matches!(err, Error::MissingIdentifier { position: 0, .. }));
}

/// Test: Arguments decoded from JSON
#[rstest]
fn test_json_arguments() {
	let registry = app_registry();
	let request = Request::builder().host("www.example.com").build().unwrap();
	let args = [
		RouteArg::from_json(&serde_json::json!({"id": 4})).unwrap(),
		RouteArg::from_json(&serde_json::json!("xml")).unwrap(),
	];
	assert_eq!(
		registry.context(&request).call("songPath", &args).unwrap(),
		"/songs/4.xml"
	);
}

/// Test: Namespaced url helper over TLS
#[rstest]
fn test_namespaced_url_over_tls() {
	let registry = app_registry();
	let request = Request::builder()
		.host("proxy.example.com")
		.secure(true)
		.build()
		.unwrap();
	assert_eq!(
		registry
			.context(&request)
			.call("netHttpProxyUrl", &route_args![9])
			.unwrap(),
		"https://proxy.example.com/net/http/proxies/9"
	);
}

/// Test: Wrong argument counts report the pattern
#[rstest]
#[case("songsPath", route_args![1], "/songs")]
#[case("songUrl", route_args![], "/songs/:id.:format?")]
#[case("songPath", route_args![1, "json", 3], "/songs/:id.:format?")]
fn test_argument_count(#[case] name: &str, #[case] args: Vec<RouteArg>, #[case] pattern: &str) {
	let registry = app_registry();
	let request = Request::builder().build().unwrap();
	let err = registry.context(&request).call(name, &args).unwrap_err();
	assert_eq!(
		err.to_string(),
		format!("Incorrect number of arguments passed to route helper for {}", pattern)
	);
}
