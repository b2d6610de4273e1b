use super::Request;

impl Request {
	/// Get the request path
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_http::Request;
	///
	/// let request = Request::builder().uri("/songs?page=2").build().unwrap();
	/// assert_eq!(request.path(), "/songs");
	/// ```
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Returns true if the request was made over HTTPS
	pub fn is_secure(&self) -> bool {
		self.is_secure
	}

	/// Returns the scheme of the request (http or https)
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_http::Request;
	///
	/// let request = Request::builder().secure(true).build().unwrap();
	/// assert_eq!(request.scheme(), "https");
	///
	/// let request = Request::builder().build().unwrap();
	/// assert_eq!(request.scheme(), "http");
	/// ```
	pub fn scheme(&self) -> &str {
		if self.is_secure { "https" } else { "http" }
	}

	/// Get the host from the request headers
	///
	/// A missing `Host` header, or one that is not valid visible ASCII, reads
	/// as `None`.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_http::Request;
	///
	/// let request = Request::builder().host("www.example.com").build().unwrap();
	/// assert_eq!(request.host(), Some("www.example.com"));
	///
	/// let request = Request::builder().build().unwrap();
	/// assert_eq!(request.host(), None);
	/// ```
	pub fn host(&self) -> Option<&str> {
		self.headers
			.get(hyper::header::HOST)
			.and_then(|h| h.to_str().ok())
	}

	/// Build an absolute URI for the request
	///
	/// Falls back to `localhost` when the request has no host.
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_http::Request;
	///
	/// let request = Request::builder()
	///     .uri("/api/users")
	///     .host("example.com")
	///     .secure(true)
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.build_absolute_uri(None), "https://example.com/api/users");
	/// assert_eq!(
	///     request.build_absolute_uri(Some("/other/path")),
	///     "https://example.com/other/path"
	/// );
	/// ```
	pub fn build_absolute_uri(&self, path: Option<&str>) -> String {
		let host = self.host().unwrap_or("localhost");
		let path = path.unwrap_or_else(|| self.path());

		format!("{}://{}{}", self.scheme(), host, path)
	}
}
