//! HTTP [`Transport`].

use tracing::debug;

use crate::error::{Error, Result};

/// A single blocking HTTP GET.
pub trait Transport {
	/// Fetches `url` and returns the response body.
	///
	/// Fails on an empty URL, a request that cannot be built, a network failure,
	/// or a 4xx status. Other statuses are returned as-is.
	fn get(&self, url: &str) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
	#[inline] fn get(&self, url: &str) -> Result<Vec<u8>> { (**self).get(url) }
}

/// [`Transport`] over a blocking [`reqwest`] client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: reqwest::blocking::Client,
}

impl HttpTransport {
	/// Creates a transport with reqwest's default settings.
	#[inline] pub fn new() -> Self { Self::default() }

	/// Creates a transport over a pre-configured client, e.g. one with a timeout.
	#[inline] pub fn with_client(client: reqwest::blocking::Client) -> Self { Self { client } }
}

impl From<reqwest::blocking::Client> for HttpTransport {
	#[inline] fn from(client: reqwest::blocking::Client) -> Self { Self::with_client(client) }
}

impl Transport for HttpTransport {
	fn get(&self, url: &str) -> Result<Vec<u8>> {
		if url.is_empty() {
			return Err(Error::EmptyQuery);
		}

		let request = self.client.get(url).build().map_err(Error::Request)?;
		// the path carries the API key
		debug!(host = request.url().host_str().unwrap_or_default(), "sending request");
		let response = self.client.execute(request).map_err(Error::Network)?;

		let status = response.status();
		if status.is_client_error() {
			return Err(Error::ClientStatus(status));
		}

		let body = response.bytes().map_err(Error::Network)?;
		debug!(%status, len = body.len(), "received response");
		Ok(body.to_vec())
	}
}
