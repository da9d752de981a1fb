//! URL building

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use crate::error::{Error, Result};

/// The ExchangeRate-API v6 host.
pub const HOST: &str = "https://v6.exchangerate-api.com/v6";

/// Joins path segments with `/`.
///
/// Segments are not escaped; currency codes are expected to be alphanumeric.
#[inline] pub fn join(segments: &[&str]) -> String { segments.join("/") }

macro_rules! defendpoints {
	($($id:ident <- $name:literal, $key:literal, $arity:literal;)*) => {
		/// An API endpoint.
		#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
		pub enum Endpoint {
			$(
				#[doc = concat!("The `", $key, "` endpoint.")]
				$id,
			)*
		}

		impl Endpoint {
			/// All endpoints.
			pub const ALL: &'static [Endpoint] = &[$(Endpoint::$id),*];

			/// The identifier the endpoint parses from.
			pub const fn name(self) -> &'static str {
				match self { $(Self::$id => $name,)* }
			}

			/// The URL path segment of the endpoint.
			pub const fn key(self) -> &'static str {
				match self { $(Self::$id => $key,)* }
			}

			/// The number of positional arguments the endpoint takes.
			pub const fn arity(self) -> usize {
				match self { $(Self::$id => $arity,)* }
			}
		}

		impl FromStr for Endpoint {
			type Err = Error;

			fn from_str(s: &str) -> Result<Self> {
				match s {
					$($name => Ok(Self::$id),)*
					other => Err(Error::UnsupportedEndpoint(other.to_owned())),
				}
			}
		}
	};
}

defendpoints! {
	Codes <- "codes", "codes", 0;
	Pair  <- "pair",  "pair",  2;
	Index <- "index", "latest", 1;
}

impl Endpoint {
	/// Whether responses from this endpoint carry update timestamps.
	#[inline] pub const fn has_dates(self) -> bool { !matches!(self, Self::Codes) }

	/// Builds the query URL under `base_path`.
	///
	/// Fails with [`Error::InvalidArgs`] unless exactly [`arity`](Endpoint::arity) arguments are given.
	pub fn route<S: AsRef<str>>(self, base_path: &str, args: &[S]) -> Result<String> {
		if args.len() != self.arity() {
			return Err(Error::InvalidArgs { endpoint: self, expected: self.arity(), got: args.len() });
		}
		let mut segments = vec![base_path, self.key()];
		segments.extend(args.iter().map(|arg| arg.as_ref()));
		Ok(join(&segments))
	}
}

impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}
