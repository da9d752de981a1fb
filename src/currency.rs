//! [Currency](Currency) descriptors.

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter},
};

use serde::Serialize;

/// Supported currencies, keyed by [code](Currency::code).
pub type Codes = HashMap<String, Currency>;

/// A supported currency.
#[derive(Debug, Hash, Default, Clone, PartialEq, PartialOrd, Eq, Ord, Serialize)]
pub struct Currency {
	/// The [ISO 4217](https://en.wikipedia.org/wiki/ISO_4217) code, e.g. `USD`.
	pub code: String,
	/// The display name, e.g. `United States Dollar`.
	pub name: String,
}

impl Currency {
	/// Creates a new [`Currency`].
	pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
		Self { code: code.into(), name: name.into() }
	}
}

impl From<(String, String)> for Currency {
	#[inline] fn from((code, name): (String, String)) -> Self { Self { code, name } }
}

impl Display for Currency {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{} -> {}", self.code, self.name)
	}
}

/// Builds [`Codes`] from `[code, name]` entries.
///
/// A repeated code keeps the last entry.
pub fn codes(entries: impl IntoIterator<Item = (String, String)>) -> Codes {
	entries
		.into_iter()
		.map(|entry| {
			let currency = Currency::from(entry);
			(currency.code.clone(), currency)
		})
		.collect()
}
