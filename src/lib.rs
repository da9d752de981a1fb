//! [ExchangeRate-API](https://www.exchangerate-api.com/) v6 client library.
//!
//! ```no_run
//! use exchrate::{Client, Fetcher};
//!
//! let client = Client::new("your-api-key");
//! let codes = client.fetch_codes()?;
//! let index = client.fetch_index("USD")?;
//! println!("{} currencies, 1 USD = {:?} EUR", codes.len(), index.get("EUR"));
//! # Ok::<(), exchrate::Error>(())
//! ```

#![deny(missing_docs)]

use std::fmt::{self, Debug, Display, Formatter};

pub mod client;
pub mod config;
pub mod currency;
pub mod envelope;
pub mod error;
pub mod rates;
pub mod transport;
pub mod url;

pub use client::{Client, Fetcher};
pub use config::Config;
pub use currency::{Codes, Currency};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use rates::{Index, Pair};
pub use transport::{HttpTransport, Transport};
pub use url::Endpoint;

#[repr(transparent)]
#[derive(Hash, Default, Clone, PartialEq, PartialOrd, Eq, Ord)]
/// [API key](https://www.exchangerate-api.com/docs/authentication).
///
/// It is sent as a URL path segment. Its [`Debug`] output is redacted.
pub struct ApiKey {
	key: String,
}

impl ApiKey {
	/// The key string.
	#[inline] pub fn as_str(&self) -> &str { &self.key }
}

impl From<String> for ApiKey {
	#[inline] fn from(key: String) -> Self { Self { key } }
}

impl<'a> From<&'a str> for ApiKey {
	#[inline] fn from(key: &'a str) -> Self { Self { key: key.to_owned() } }
}

impl AsRef<str> for ApiKey {
	fn as_ref(&self) -> &str {
		&self.key
	}
}

impl Display for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(&self.key)
	}
}

impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("ApiKey(***)")
	}
}
