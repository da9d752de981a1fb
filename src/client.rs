//! [`Client`] and the [`Fetcher`] accessors.

use tracing::debug;

use crate::{
	currency::{self, Codes},
	envelope::Envelope,
	error::{Error, Result, Stage},
	rates::{Index, Pair},
	transport::{HttpTransport, Transport},
	url::Endpoint,
	ApiKey, Config,
};

/// The environment variable [`Client::from_env`] reads the API key from.
pub const API_KEY_ENV: &str = "EXCHANGERATE_API_KEY";

/// Exchange rate queries.
///
/// Implementors provide the generic [`fetch`](Fetcher::fetch); the typed accessors are built on it.
pub trait Fetcher {
	/// Queries `endpoint` with its positional arguments and decodes the response.
	fn fetch(&self, endpoint: Endpoint, args: &[&str]) -> Result<Envelope>;

	/// Fetches the supported currencies.
	///
	/// An empty list from the API is an empty map, not an error.
	fn fetch_codes(&self) -> Result<Codes> {
		let envelope = self.fetch(Endpoint::Codes, &[]).map_err(|e| e.at(Stage::Codes))?;
		Ok(currency::codes(envelope.supported_codes))
	}

	/// Fetches the rate from `base` to `target`.
	///
	/// The codes are returned as the API echoes them, without checking them against the request.
	fn fetch_pair(&self, base: &str, target: &str) -> Result<Pair> {
		let envelope = self.fetch(Endpoint::Pair, &[base, target]).map_err(|e| e.at(Stage::Pair))?;
		Ok(Pair {
			base_code: envelope.base_code,
			target_code: envelope.target_code,
			rate: envelope.conversion_rate,
		})
	}

	/// Fetches the latest rates from `base` to every supported currency.
	fn fetch_index(&self, base: &str) -> Result<Index> {
		let envelope = self.fetch(Endpoint::Index, &[base]).map_err(|e| e.at(Stage::Index))?;
		Ok(Index {
			base_code: envelope.base_code,
			rates: envelope.conversion_rates,
		})
	}
}

/// ExchangeRate-API client.
///
/// # Examples
/// ```no_run
/// # use exchrate::{Client, Fetcher};
/// let client = Client::new("your-api-key");
/// let pair = client.fetch_pair("USD", "EUR")?;
/// println!("{pair}");
/// # Ok::<(), exchrate::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
	config: Config,
	transport: T,
}

impl Default for Client {
	#[inline] fn default() -> Self { Self::with_transport(Config::default(), HttpTransport::new()) }
}

impl Client {
	/// Creates a client with an API key.
	pub fn new(api_key: impl Into<ApiKey>) -> Self {
		Self::with_transport(Config::new(api_key), HttpTransport::new())
	}

	/// Creates a client with the API key in [`API_KEY_ENV`].
	pub fn from_env() -> Result<Self> {
		match std::env::var(API_KEY_ENV) {
			Ok(key) if !key.is_empty() => Ok(Self::new(key)),
			_ => Err(Error::MissingApiKey(API_KEY_ENV)),
		}
	}
}

impl<T: Transport> Client<T> {
	/// Creates a client over the given transport.
	#[inline] pub fn with_transport(config: Config, transport: T) -> Self { Self { config, transport } }

	/// Replaces the API key used by subsequent requests.
	pub fn set_api_key(&mut self, api_key: impl Into<ApiKey>) {
		self.config.set_api_key(Some(api_key.into()));
	}

	/// The client configuration.
	#[inline] pub fn config(&self) -> &Config { &self.config }

	/// The underlying transport.
	#[inline] pub fn transport(&self) -> &T { &self.transport }
}

impl<T: Transport> Fetcher for Client<T> {
	fn fetch(&self, endpoint: Endpoint, args: &[&str]) -> Result<Envelope> {
		let query = endpoint.route(self.config.base_path(), args)?;
		debug!(%endpoint, "fetching");
		let body = self.transport.get(&query)?;
		let envelope = Envelope::decode(&body, endpoint)?;
		if envelope.is_error() {
			return Err(Error::Api {
				error_type: envelope.error_type.unwrap_or_else(|| "unknown".to_owned()),
			});
		}
		Ok(envelope)
	}
}

#[cfg(test)]
mod tests {
	use std::{cell::RefCell, collections::HashMap};

	use httpmock::{Method::GET, MockServer};

	use super::*;

	/// Serves canned bodies and records requested URLs.
	#[derive(Default)]
	struct Stub {
		bodies: HashMap<String, Vec<u8>>,
		requests: RefCell<Vec<String>>,
	}

	impl Stub {
		fn with(mut self, url: &str, body: &str) -> Self {
			self.bodies.insert(url.to_owned(), body.as_bytes().to_vec());
			self
		}
	}

	impl Transport for Stub {
		fn get(&self, url: &str) -> Result<Vec<u8>> {
			self.requests.borrow_mut().push(url.to_owned());
			self.bodies.get(url).cloned().ok_or(Error::ClientStatus(reqwest::StatusCode::NOT_FOUND))
		}
	}

	fn stub_client(stub: Stub) -> Client<Stub> {
		Client::with_transport(Config::with_host("http://stub", Some("KEY".into())), stub)
	}

	#[test]
	fn test_fetch_pair_invalid_date() {
		let stub = Stub::default().with(
			"http://stub/KEY/pair/USD/EUR",
			r#"{"base_code":"USD","conversion_rate":1.23,"target_code":"EUR","time_last_update_utc":"not-a-date"}"#,
		);
		let pair = stub_client(stub).fetch_pair("USD", "EUR").unwrap();
		assert_eq!(pair, Pair { base_code: "USD".to_owned(), target_code: "EUR".to_owned(), rate: 1.23 });
	}

	#[test]
	fn test_fetch_pair_passes_mismatch_through() {
		let stub = Stub::default().with(
			"http://stub/KEY/pair/USD/EUR",
			r#"{"result":"success","base_code":"GBP","target_code":"JPY","conversion_rate":190.5}"#,
		);
		let pair = stub_client(stub).fetch_pair("USD", "EUR").unwrap();
		assert_eq!(pair.base_code, "GBP");
		assert_eq!(pair.target_code, "JPY");
	}

	#[test]
	fn test_fetch_codes_empty() {
		let stub = Stub::default().with("http://stub/KEY/codes", r#"{"result":"success","supported_codes":[]}"#);
		assert!(stub_client(stub).fetch_codes().unwrap().is_empty());
	}

	#[test]
	fn test_fetch_wraps_stage() {
		let client = stub_client(Stub::default());

		let error = client.fetch_codes().unwrap_err();
		assert!(matches!(error, Error::Fetch { stage: Stage::Codes, .. }));
		assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));

		let error = client.fetch_pair("USD", "EUR").unwrap_err();
		assert!(error.to_string().starts_with("failed to fetch pair: "));

		let error = client.fetch_index("USD").unwrap_err();
		assert!(matches!(error, Error::Fetch { stage: Stage::Index, .. }));
	}

	#[test]
	fn test_fetch_generic() {
		let client = stub_client(Stub::default());
		assert!(matches!(client.fetch(Endpoint::Pair, &["USD"]), Err(Error::InvalidArgs { got: 1, .. })));
		assert!(matches!(client.fetch(Endpoint::Index, &[]), Err(Error::InvalidArgs { got: 0, .. })));
		assert!(client.transport().requests.borrow().is_empty());
	}

	#[test]
	fn test_api_error() {
		let stub = Stub::default().with("http://stub/KEY/latest/XYZ", r#"{"result":"error","error-type":"unsupported-code"}"#);
		let error = stub_client(stub).fetch_index("XYZ").unwrap_err();
		assert!(matches!(error.root(), Error::Api { error_type } if error_type == "unsupported-code"));
	}

	#[test]
	fn test_set_api_key() {
		let stub = Stub::default()
			.with("http://stub/KEY/codes", r#"{"supported_codes":[]}"#)
			.with("http://stub/NEW/codes", r#"{"supported_codes":[]}"#);
		let mut client = stub_client(stub);
		client.fetch_codes().unwrap();
		client.set_api_key("NEW");
		client.fetch_codes().unwrap();
		assert_eq!(*client.transport().requests.borrow(), ["http://stub/KEY/codes", "http://stub/NEW/codes"]);
	}

	#[test]
	fn test_borrowed_transport() {
		let stub = Stub::default().with("http://stub/KEY/latest/USD", r#"{"base_code":"USD","conversion_rates":{"EUR":0.9}}"#);
		let client = Client::with_transport(Config::with_host("http://stub", Some("KEY".into())), &stub);
		assert_eq!(client.fetch_index("USD").unwrap().get("EUR"), Some(0.9));
		assert_eq!(*stub.requests.borrow(), ["http://stub/KEY/latest/USD"]);
	}

	#[test]
	fn test_from_env() {
		std::env::remove_var(API_KEY_ENV);
		assert!(matches!(Client::from_env(), Err(Error::MissingApiKey(API_KEY_ENV))));

		std::env::set_var(API_KEY_ENV, "");
		assert!(matches!(Client::from_env(), Err(Error::MissingApiKey(_))));

		std::env::set_var(API_KEY_ENV, "abc");
		let client = Client::from_env().unwrap();
		assert_eq!(client.config().base_path(), "https://v6.exchangerate-api.com/v6/abc");
		std::env::remove_var(API_KEY_ENV);
	}

	#[test]
	fn test_default_client_has_no_key() {
		let client = Client::default();
		assert_eq!(client.config().api_key(), None);
		assert_eq!(client.config().base_path(), crate::url::HOST);
	}

	fn http_client(server: &MockServer) -> Client {
		Client::with_transport(Config::with_host(server.base_url(), Some("KEY".into())), HttpTransport::new())
	}

	#[test]
	fn test_http_fetch_codes() {
		let server = MockServer::start();
		let mock = server.mock(|when, then| {
			when.method(GET).path("/KEY/codes");
			then.status(200).json_body(serde_json::json!({
				"result": "success",
				"supported_codes": [["AED", "UAE Dirham"], ["AFN", "Afghan Afghani"], ["ALL", "Albanian Lek"]],
			}));
		});

		let codes = http_client(&server).fetch_codes().unwrap();
		mock.assert();
		assert_eq!(codes.len(), 3);
		for code in ["AED", "AFN", "ALL"] {
			assert_eq!(codes[code].code, code);
		}
		assert_eq!(codes["ALL"].name, "Albanian Lek");
	}

	#[test]
	fn test_http_fetch_pair() {
		let server = MockServer::start();
		server.mock(|when, then| {
			when.method(GET).path("/KEY/pair/USD/KZT");
			then.status(200).json_body(serde_json::json!({
				"result": "success",
				"time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000",
				"time_next_update_utc": "Sat, 28 Mar 2020 00:00:01 +0000",
				"base_code": "USD",
				"target_code": "KZT",
				"conversion_rate": 448.72,
			}));
		});

		let pair = http_client(&server).fetch_pair("USD", "KZT").unwrap();
		assert!(pair.rate > 0.0);
		assert_eq!(pair.base_code, "USD");
		assert_eq!(pair.target_code, "KZT");
	}

	#[test]
	fn test_http_fetch_index() {
		let server = MockServer::start();
		server.mock(|when, then| {
			when.method(GET).path("/KEY/latest/USD");
			then.status(200).json_body(serde_json::json!({
				"result": "success",
				"base_code": "USD",
				"conversion_rates": {"USD": 1, "AUD": 1.4817, "BGN": 1.7741, "CAD": 1.3168},
			}));
		});

		let index = http_client(&server).fetch_index("USD").unwrap();
		assert_eq!(index.base_code, "USD");
		assert_eq!(index.rates.len(), 4);
		assert!(index.rates.values().all(|rate| rate.is_finite()));
	}

	#[test]
	fn test_http_not_found() {
		let server = MockServer::start();
		server.mock(|when, then| {
			when.method(GET).path("/KEY/latest/USD");
			then.status(404);
		});

		let error = http_client(&server).fetch_index("USD").unwrap_err();
		assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));
	}

	#[test]
	fn test_http_server_error_fails_decode() {
		let server = MockServer::start();
		server.mock(|when, then| {
			when.method(GET).path("/KEY/codes");
			then.status(502).body("<html>bad gateway</html>");
		});

		let error = http_client(&server).fetch_codes().unwrap_err();
		assert!(matches!(error.root(), Error::Decode(_)));
	}
}
