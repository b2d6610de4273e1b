//! Positional arguments for route helpers.
//!
//! A helper argument is either a primitive (a number or a string), which is
//! substituted through its string form, or a record exposing an id, whose id
//! is substituted. A zero id is a real id: it renders as `"0"`.

use std::fmt;
use trackwork_core::exception::{Error, Result};

/// A value passed positionally to a route helper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteArg {
	/// A primitive, already in its string form.
	Value(String),
	/// A record; `None` when the record has no id.
	Record(Option<String>),
}

/// Types that can stand in for a route segment by their id.
///
/// Implement this for models so they can be passed to helpers directly.
///
/// # Examples
///
/// ```
/// use trackwork_urls::args::{RouteArg, RouteKey};
///
/// struct Album {
///     id: Option<i64>,
/// }
///
/// impl RouteKey for Album {
///     fn route_key(&self) -> Option<String> {
///         self.id.map(|id| id.to_string())
///     }
/// }
///
/// let arg = RouteArg::record(&Album { id: Some(202) });
/// assert_eq!(arg.segment(), Some("202"));
///
/// let unsaved = RouteArg::record(&Album { id: None });
/// assert_eq!(unsaved.segment(), None);
/// ```
pub trait RouteKey {
	/// The id to substitute, or `None` if the record has none.
	fn route_key(&self) -> Option<String>;
}

impl RouteArg {
	/// A record argument taken from a [`RouteKey`] implementor.
	pub fn record<K: RouteKey + ?Sized>(record: &K) -> Self {
		Self::Record(record.route_key())
	}

	/// A record argument with a known id.
	pub fn id(id: impl fmt::Display) -> Self {
		Self::Record(Some(id.to_string()))
	}

	/// The text substituted for this argument, if any.
	pub fn segment(&self) -> Option<&str> {
		match self {
			Self::Value(value) => Some(value.as_str()),
			Self::Record(id) => id.as_deref(),
		}
	}

	/// Convert a JSON value into an argument.
	///
	/// Numbers and strings are primitives. Objects are records keyed by their
	/// `"id"` member; an `"id"` that is missing, null or not a number or string
	/// leaves the record without an id.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] for arrays, booleans and null.
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use trackwork_urls::args::RouteArg;
	///
	/// assert_eq!(RouteArg::from_json(&json!(7)).unwrap(), RouteArg::from(7));
	/// assert_eq!(RouteArg::from_json(&json!({"id": 0})).unwrap(), RouteArg::id(0));
	/// assert_eq!(RouteArg::from_json(&json!({})).unwrap(), RouteArg::Record(None));
	/// assert!(RouteArg::from_json(&json!([1, 2])).is_err());
	/// ```
	pub fn from_json(value: &serde_json::Value) -> Result<Self> {
		use serde_json::Value;

		match value {
			Value::Number(n) => Ok(Self::Value(n.to_string())),
			Value::String(s) => Ok(Self::Value(s.clone())),
			Value::Object(map) => Ok(Self::Record(match map.get("id") {
				Some(Value::Number(n)) => Some(n.to_string()),
				Some(Value::String(s)) => Some(s.clone()),
				_ => None,
			})),
			other => Err(Error::InvalidArgument(format!(
				"expected a number, string or object with an id, got {}",
				other
			))),
		}
	}
}

macro_rules! impl_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for RouteArg {
				fn from(value: $ty) -> Self {
					Self::Value(value.to_string())
				}
			}
		)*
	};
}

impl_from_display!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, &str, &String,
);

impl From<String> for RouteArg {
	fn from(value: String) -> Self {
		Self::Value(value)
	}
}

impl fmt::Display for RouteArg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(value) => f.write_str(value),
			Self::Record(Some(id)) => write!(f, "{{id: {}}}", id),
			Self::Record(None) => f.write_str("{id: <none>}"),
		}
	}
}

/// Build a `Vec<RouteArg>` from values convertible into [`RouteArg`].
///
/// # Examples
///
/// ```
/// use trackwork_urls::args::RouteArg;
/// use trackwork_urls::route_args;
///
/// let args = route_args![7, "mr-jones", RouteArg::id(0)];
/// assert_eq!(args.len(), 3);
/// assert_eq!(args[2].segment(), Some("0"));
/// ```
#[macro_export]
macro_rules! route_args {
	() => {
		::std::vec::Vec::<$crate::args::RouteArg>::new()
	};
	($($arg:expr),+ $(,)?) => {
		::std::vec![$($crate::args::RouteArg::from($arg)),+]
	};
}
