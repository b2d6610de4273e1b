//! # Trackwork HTTP
//!
//! The request surface that route helpers read from at call time.
//!
//! Only what URL generation needs is modelled: the method, the URI, the
//! headers (the `Host` header in particular) and whether the connection
//! arrived over TLS.
//!
//! ```
//! use trackwork_http::Request;
//!
//! let request = Request::builder()
//!     .uri("/songs/7")
//!     .host("www.example.com")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.host(), Some("www.example.com"));
//! assert_eq!(request.scheme(), "http");
//! ```

pub mod request;

pub use request::{Request, RequestBuilder};
