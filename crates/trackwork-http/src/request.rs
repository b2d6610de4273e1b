//! HTTP request type and its builder.

mod methods;

use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri};
use trackwork_core::exception::{Error, Result};

/// An incoming HTTP request, as seen by route helpers.
///
/// Requests are read-only once built; helpers only ever borrow them.
#[derive(Debug, Clone)]
pub struct Request {
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	is_secure: bool,
}

impl Request {
	/// Start building a request.
	///
	/// The builder defaults to `GET /` over plain HTTP with no headers.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::POST)
	///     .uri("/bands/7/albums")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.method(), &Method::POST);
	/// assert_eq!(request.path(), "/bands/7/albums");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// The request method.
	pub fn method(&self) -> &Method {
		&self.method
	}

	/// The request URI.
	pub fn uri(&self) -> &Uri {
		&self.uri
	}

	/// The request headers.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}
}

/// Builder for [`Request`].
///
/// Invalid input is remembered and reported by [`RequestBuilder::build`], so
/// calls can be chained without intermediate error handling.
#[derive(Debug)]
pub struct RequestBuilder {
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	is_secure: bool,
	error: Option<Error>,
}

impl RequestBuilder {
	fn new() -> Self {
		Self {
			method: Method::GET,
			uri: Uri::from_static("/"),
			headers: HeaderMap::new(),
			is_secure: false,
			error: None,
		}
	}

	/// Set the request method.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Set the request URI.
	pub fn uri(mut self, uri: &str) -> Self {
		match uri.parse::<Uri>() {
			Ok(uri) => self.uri = uri,
			Err(e) => self.fail(format!("invalid uri '{}': {}", uri, e)),
		}
		self
	}

	/// Append a header.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_http::Request;
	///
	/// let request = Request::builder()
	///     .header("x-request-id", "abc")
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.headers().get("x-request-id").unwrap(), "abc");
	///
	/// let result = Request::builder().header("bad header", "x").build();
	/// assert!(result.is_err());
	/// ```
	pub fn header(mut self, name: &str, value: &str) -> Self {
		let name = match HeaderName::from_bytes(name.as_bytes()) {
			Ok(name) => name,
			Err(e) => {
				self.fail(format!("invalid header name '{}': {}", name, e));
				return self;
			}
		};
		match HeaderValue::from_str(value) {
			Ok(value) => {
				self.headers.append(name, value);
			}
			Err(e) => self.fail(format!("invalid value for header '{}': {}", name, e)),
		}
		self
	}

	/// Set the `Host` header, replacing any previous value.
	pub fn host(mut self, host: &str) -> Self {
		self.headers.remove(hyper::header::HOST);
		self.header(hyper::header::HOST.as_str(), host)
	}

	/// Mark the request as received over TLS.
	pub fn secure(mut self, is_secure: bool) -> Self {
		self.is_secure = is_secure;
		self
	}

	/// Finish the request.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidRequest`] for the first invalid URI, header
	/// name or header value given to the builder.
	pub fn build(self) -> Result<Request> {
		if let Some(err) = self.error {
			return Err(err);
		}
		Ok(Request {
			method: self.method,
			uri: self.uri,
			headers: self.headers,
			is_secure: self.is_secure,
		})
	}

	fn fail(&mut self, message: String) {
		tracing::debug!(%message, "rejecting request builder input");
		if self.error.is_none() {
			self.error = Some(Error::InvalidRequest(message));
		}
	}
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_builder_defaults() {
		let request = Request::builder().build().unwrap();
		assert_eq!(request.method(), &Method::GET);
		assert_eq!(request.uri().path(), "/");
		assert!(request.headers().is_empty());
		assert!(!request.is_secure());
	}

	#[rstest]
	fn test_invalid_uri_is_reported_on_build() {
		let result = Request::builder().uri("http://[::1").build();
		assert!(matches!(result, Err(Error::InvalidRequest(_))));
	}

	#[rstest]
	fn test_first_error_wins() {
		let err = Request::builder()
			.header("bad name", "x")
			.uri("http://[::1")
			.build()
			.unwrap_err();
		assert!(err.to_string().contains("header name"));
	}

	#[rstest]
	fn test_host_replaces_previous_value() {
		let request = Request::builder()
			.host("a.example.com")
			.host("b.example.com")
			.build()
			.unwrap();
		assert_eq!(request.headers().get_all(hyper::header::HOST).iter().count(), 1);
		assert_eq!(request.host(), Some("b.example.com"));
	}
}
