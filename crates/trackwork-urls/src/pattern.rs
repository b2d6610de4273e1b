//! Route pattern parsing and interpolation.
//!
//! A route pattern such as `/bands/:band_id/albums/:id` or
//! `/songs/:id.:format?` is literal text interspersed with placeholders.
//! `:name` is required, `:name?` is optional.
//!
//! Parsing and substitution are separate stages: [`tokenize`] turns the
//! pattern into a flat list of [`Token`]s, and [`RoutePattern::render`] walks
//! that list against positional [`RouteArg`]s.
//!
//! # Examples
//!
//! ```
//! use trackwork_urls::pattern::RoutePattern;
//! use trackwork_urls::route_args;
//!
//! let pattern = RoutePattern::parse("/songs/:id.:format?").unwrap();
//! assert_eq!(pattern.required_count(), 1);
//! assert_eq!(pattern.total_count(), 2);
//!
//! assert_eq!(pattern.render(&route_args![7]).unwrap(), "/songs/7");
//! assert_eq!(pattern.render(&route_args![7, "json"]).unwrap(), "/songs/7.json");
//! ```

use crate::args::RouteArg;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use trackwork_core::exception::{Error, Result};

/// Characters an optional placeholder may take ownership of when they
/// immediately precede it.
const OPTIONAL_SEPARATORS: [char; 2] = ['/', '.'];

/// A named substitution point in a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
	/// Placeholder name, without the leading `:` or trailing `?`.
	pub name: String,
	/// Whether the placeholder may be omitted.
	pub optional: bool,
	/// Literal separator emitted only together with this placeholder.
	///
	/// Only optional placeholders own a separator.
	pub separator: Option<char>,
}

/// One piece of a tokenized route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// Literal text copied to the output as is.
	Literal(String),
	/// A substitution point.
	Placeholder(Placeholder),
}

fn is_name_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}

fn invalid(pattern: &str, reason: impl Into<String>) -> Error {
	Error::InvalidPattern {
		pattern: pattern.to_string(),
		reason: reason.into(),
	}
}

/// Split a route pattern into literal and placeholder tokens.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] when the pattern is empty, does not start
/// with `/`, contains a `:` without a name, or repeats a placeholder name.
///
/// # Examples
///
/// ```
/// use trackwork_urls::pattern::{tokenize, Placeholder, Token};
///
/// let tokens = tokenize("/songs/:id.:format?").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Literal("/songs/".to_string()),
///         Token::Placeholder(Placeholder {
///             name: "id".to_string(),
///             optional: false,
///             separator: None,
///         }),
///         Token::Placeholder(Placeholder {
///             name: "format".to_string(),
///             optional: true,
///             separator: Some('.'),
///         }),
///     ]
/// );
/// ```
pub fn tokenize(pattern: &str) -> Result<Vec<Token>> {
	if pattern.is_empty() {
		return Err(invalid(pattern, "pattern is empty"));
	}
	if !pattern.starts_with('/') {
		return Err(invalid(pattern, "pattern must start with '/'"));
	}

	let mut tokens = Vec::new();
	let mut literal = String::new();
	let mut seen = HashSet::new();
	let mut chars = pattern.char_indices().peekable();

	while let Some((offset, ch)) = chars.next() {
		if ch != ':' {
			literal.push(ch);
			continue;
		}

		let mut name = String::new();
		while let Some(&(_, next)) = chars.peek() {
			if !is_name_char(next) {
				break;
			}
			name.push(next);
			chars.next();
		}
		if name.is_empty() {
			return Err(invalid(
				pattern,
				format!("placeholder at byte {} has no name", offset),
			));
		}
		if !seen.insert(name.clone()) {
			return Err(invalid(
				pattern,
				format!("placeholder ':{}' appears more than once", name),
			));
		}

		let optional = chars.next_if(|&(_, c)| c == '?').is_some();
		let separator = if optional {
			match literal.chars().last() {
				Some(c) if OPTIONAL_SEPARATORS.contains(&c) => literal.pop(),
				_ => None,
			}
		} else {
			None
		};

		if !literal.is_empty() {
			tokens.push(Token::Literal(std::mem::take(&mut literal)));
		}
		tokens.push(Token::Placeholder(Placeholder {
			name,
			optional,
			separator,
		}));
	}

	if !literal.is_empty() {
		tokens.push(Token::Literal(literal));
	}

	Ok(tokens)
}

/// A compiled route pattern.
///
/// Immutable once parsed; cloning is cheap enough to hand one to every
/// helper compiled from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
	source: String,
	tokens: Vec<Token>,
	required: usize,
	total: usize,
}

impl RoutePattern {
	/// Parse a route pattern.
	///
	/// # Errors
	///
	/// See [`tokenize`].
	pub fn parse(pattern: &str) -> Result<Self> {
		let tokens = tokenize(pattern)?;
		let (required, total) = tokens.iter().fold((0, 0), |(req, all), token| match token {
			Token::Placeholder(p) if p.optional => (req, all + 1),
			Token::Placeholder(_) => (req + 1, all + 1),
			Token::Literal(_) => (req, all),
		});

		tracing::debug!(pattern, required, total, "compiled route pattern");

		Ok(Self {
			source: pattern.to_string(),
			tokens,
			required,
			total,
		})
	}

	/// The original pattern string, unmodified.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// The parsed tokens, in pattern order.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// The placeholders, in pattern order.
	pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
		self.tokens.iter().filter_map(|token| match token {
			Token::Placeholder(p) => Some(p),
			Token::Literal(_) => None,
		})
	}

	/// Number of required placeholders.
	pub fn required_count(&self) -> usize {
		self.required
	}

	/// Number of placeholders, required and optional.
	pub fn total_count(&self) -> usize {
		self.total
	}

	/// Whether a helper for this pattern accepts `count` arguments.
	pub fn accepts(&self, count: usize) -> bool {
		(self.required..=self.total).contains(&count)
	}

	/// Fail with [`Error::ArgumentCount`] unless `count` is accepted.
	pub fn check_arity(&self, count: usize) -> Result<()> {
		if self.accepts(count) {
			return Ok(());
		}
		Err(Error::ArgumentCount {
			pattern: self.source.clone(),
			min: self.required,
			max: self.total,
			actual: count,
		})
	}

	/// Interpolate positional arguments into the pattern.
	///
	/// Every required placeholder consumes one argument. Arguments beyond the
	/// required count fill optional placeholders from left to right; optional
	/// placeholders left without an argument are dropped together with their
	/// separator.
	///
	/// # Errors
	///
	/// - [`Error::ArgumentCount`] when `args.len()` is outside
	///   `[required_count, total_count]`
	/// - [`Error::MissingIdentifier`] when a record argument has no id
	///
	/// # Examples
	///
	/// ```
	/// use trackwork_urls::pattern::RoutePattern;
	/// use trackwork_urls::args::RouteArg;
	/// use trackwork_urls::route_args;
	///
	/// let pattern = RoutePattern::parse("/bands/:band_id/albums/:id").unwrap();
	/// assert_eq!(pattern.render(&route_args![7, 8]).unwrap(), "/bands/7/albums/8");
	/// assert_eq!(
	///     pattern.render(&[RouteArg::id(0), RouteArg::id(202)]).unwrap(),
	///     "/bands/0/albums/202"
	/// );
	/// assert!(pattern.render(&route_args![7]).is_err());
	/// ```
	pub fn render(&self, args: &[RouteArg]) -> Result<String> {
		self.check_arity(args.len())?;

		let mut surplus = args.len() - self.required;
		let mut remaining = args.iter().enumerate();
		let mut out = String::with_capacity(self.source.len());

		for token in &self.tokens {
			let placeholder = match token {
				Token::Literal(text) => {
					out.push_str(text);
					continue;
				}
				Token::Placeholder(p) => p,
			};

			if placeholder.optional {
				if surplus == 0 {
					continue;
				}
				surplus -= 1;
			}

			// Arity was checked above, so every consumed placeholder has an argument.
			let Some((position, arg)) = remaining.next() else {
				break;
			};
			let segment = arg.segment().ok_or_else(|| Error::MissingIdentifier {
				pattern: self.source.clone(),
				position,
			})?;

			if let Some(sep) = placeholder.separator {
				out.push(sep);
			}
			out.push_str(segment);
		}

		// A leading optional owns the pattern's first `/`; keep the path absolute.
		if !out.starts_with('/') {
			out.insert(0, '/');
		}

		Ok(out)
	}
}

impl FromStr for RoutePattern {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::route_args;
	use rstest::rstest;

	fn placeholder(name: &str, optional: bool, separator: Option<char>) -> Token {
		Token::Placeholder(Placeholder {
			name: name.to_string(),
			optional,
			separator,
		})
	}

	#[rstest]
	fn test_tokenize_without_placeholder() {
		let tokens = tokenize("/songs").unwrap();
		assert_eq!(tokens, vec![Token::Literal("/songs".to_string())]);
	}

	#[rstest]
	fn test_tokenize_two_placeholders() {
		let tokens = tokenize("/bands/:band_id/albums/:id").unwrap();
		assert_eq!(
			tokens,
			vec![
				Token::Literal("/bands/".to_string()),
				placeholder("band_id", false, None),
				Token::Literal("/albums/".to_string()),
				placeholder("id", false, None),
			]
		);
	}

	#[rstest]
	fn test_tokenize_optional_owns_slash() {
		let tokens = tokenize("/posts/:id?").unwrap();
		assert_eq!(
			tokens,
			vec![
				Token::Literal("/posts".to_string()),
				placeholder("id", true, Some('/')),
			]
		);
	}

	#[rstest]
	fn test_tokenize_required_keeps_separator_literal() {
		let tokens = tokenize("/songs/:id.:format").unwrap();
		assert_eq!(
			tokens,
			vec![
				Token::Literal("/songs/".to_string()),
				placeholder("id", false, None),
				Token::Literal(".".to_string()),
				placeholder("format", false, None),
			]
		);
	}

	#[rstest]
	fn test_tokenize_optional_without_separator() {
		let tokens = tokenize("/files/v:rev?").unwrap();
		assert_eq!(
			tokens,
			vec![
				Token::Literal("/files/v".to_string()),
				placeholder("rev", true, None),
			]
		);
	}

	#[rstest]
	#[case("", "pattern is empty")]
	#[case("songs/:id", "must start with '/'")]
	#[case("/songs/:", "has no name")]
	#[case("/songs/:/x", "has no name")]
	#[case("/a/:id/b/:id", "more than once")]
	#[case("/a/:id/b/:id?", "more than once")]
	fn test_tokenize_rejects_malformed(#[case] pattern: &str, #[case] reason: &str) {
		match tokenize(pattern) {
			Err(Error::InvalidPattern { pattern: p, reason: r }) => {
				assert_eq!(p, pattern);
				assert!(r.contains(reason), "reason {:?} lacks {:?}", r, reason);
			}
			other => panic!("expected InvalidPattern, got {:?}", other),
		}
	}

	#[rstest]
	fn test_counts() {
		let pattern = RoutePattern::parse("/a/:x/b/:y?.:z?").unwrap();
		assert_eq!(pattern.required_count(), 1);
		assert_eq!(pattern.total_count(), 3);
		assert!(!pattern.accepts(0));
		assert!(pattern.accepts(1));
		assert!(pattern.accepts(3));
		assert!(!pattern.accepts(4));
	}

	#[rstest]
	fn test_placeholders_in_order() {
		let pattern = RoutePattern::parse("/bands/:band_id/albums/:id").unwrap();
		let names: Vec<&str> = pattern.placeholders().map(|p| p.name.as_str()).collect();
		assert_eq!(names, vec!["band_id", "id"]);
	}

	#[rstest]
	fn test_render_optional_omitted_with_separator() {
		let pattern = RoutePattern::parse("/songs/:id.:format?").unwrap();
		assert_eq!(pattern.render(&route_args!["mr-jones"]).unwrap(), "/songs/mr-jones");
		assert_eq!(
			pattern.render(&route_args!["mr-jones", "xml"]).unwrap(),
			"/songs/mr-jones.xml"
		);
	}

	#[rstest]
	fn test_render_optional_before_required() {
		// The surplus goes to optionals left to right; required always filled.
		let pattern = RoutePattern::parse("/:lang?/posts/:id").unwrap();
		assert_eq!(pattern.render(&route_args![5]).unwrap(), "/posts/5");
		assert_eq!(pattern.render(&route_args!["en", 5]).unwrap(), "/en/posts/5");
	}

	#[rstest]
	fn test_render_multiple_optionals_fill_left_to_right() {
		let pattern = RoutePattern::parse("/archive/:year?/:month?").unwrap();
		assert_eq!(pattern.render(&[]).unwrap(), "/archive");
		assert_eq!(pattern.render(&route_args![2024]).unwrap(), "/archive/2024");
		assert_eq!(pattern.render(&route_args![2024, 5]).unwrap(), "/archive/2024/5");
	}

	#[rstest]
	#[case("/:format?", route_args![], "/")]
	#[case("/:format?", route_args!["json"], "/json")]
	#[case("/:lang?/", route_args![], "/")]
	#[case("/:lang?.json", route_args![], "/.json")]
	#[case("/:lang?.json", route_args!["en"], "/en.json")]
	fn test_render_leading_optional_stays_absolute(
		#[case] source: &str,
		#[case] args: Vec<RouteArg>,
		#[case] expected: &str,
	) {
		let pattern = RoutePattern::parse(source).unwrap();
		assert_eq!(pattern.render(&args).unwrap(), expected);
	}

	#[rstest]
	fn test_render_missing_identifier() {
		let pattern = RoutePattern::parse("/bands/:band_id/albums/:id").unwrap();
		let err = pattern
			.render(&[RouteArg::id(1), RouteArg::Record(None)])
			.unwrap_err();
		assert_eq!(
			err,
			Error::MissingIdentifier {
				pattern: "/bands/:band_id/albums/:id".to_string(),
				position: 1,
			}
		);
	}

	#[rstest]
	fn test_arity_error_fields() {
		let pattern = RoutePattern::parse("/songs/:id.:format?").unwrap();
		let err = pattern.render(&route_args![1, 2, 3]).unwrap_err();
		assert_eq!(
			err,
			Error::ArgumentCount {
				pattern: "/songs/:id.:format?".to_string(),
				min: 1,
				max: 2,
				actual: 3,
			}
		);
	}

	#[rstest]
	fn test_from_str_and_display() {
		let pattern: RoutePattern = "/songs/:id".parse().unwrap();
		assert_eq!(pattern.to_string(), "/songs/:id");
		assert_eq!(pattern.as_str(), "/songs/:id");
	}
}
