//! [`Config`] type.

use std::fmt::{self, Debug, Formatter};

use crate::{url, ApiKey};

/// Client configuration: the host and the optional API key.
///
/// The base path every request is built under is derived from both and
/// recomputed whenever the key changes.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
	host: String,
	api_key: Option<ApiKey>,
	base_path: String,
}

impl Default for Config {
	#[inline] fn default() -> Self { Self::with_host(url::HOST, None) }
}

impl Config {
	/// Creates a [`Config`] for the public API host.
	pub fn new(api_key: impl Into<ApiKey>) -> Self {
		Self::with_host(url::HOST, Some(api_key.into()))
	}

	/// Creates a [`Config`] for a custom host, e.g. a local test server.
	pub fn with_host(host: impl Into<String>, api_key: Option<ApiKey>) -> Self {
		let mut config = Self { host: host.into(), api_key: None, base_path: String::new() };
		config.set_api_key(api_key);
		config
	}

	/// Replaces the API key and re-derives the [base path](Config::base_path).
	///
	/// An empty key is the same as no key.
	pub fn set_api_key(&mut self, api_key: Option<ApiKey>) {
		self.api_key = api_key.filter(|key| !key.as_str().is_empty());
		self.base_path = match &self.api_key {
			Some(key) => url::join(&[self.host.as_str(), key.as_str()]),
			None => self.host.clone(),
		};
	}

	/// The host requests go to.
	#[inline] pub fn host(&self) -> &str { &self.host }
	/// The API key, if any.
	#[inline] pub fn api_key(&self) -> Option<&ApiKey> { self.api_key.as_ref() }
	/// The path endpoint URLs are built under.
	#[inline] pub fn base_path(&self) -> &str { &self.base_path }
}

impl Debug for Config {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		// base_path embeds the key
		f.debug_struct("Config")
			.field("host", &self.host)
			.field("api_key", &self.api_key)
			.finish_non_exhaustive()
	}
}
