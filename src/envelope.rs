//! Response [`Envelope`] decoding.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::{
	error::{Error, Result},
	url::Endpoint,
};

/// The `result` value of a failed request.
pub const RESULT_ERROR: &str = "error";

/// The response of any endpoint.
///
/// Fields are filled in depending on the endpoint queried; the rest are left empty.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Envelope {
	/// `success` or `error`.
	#[serde(deserialize_with = "null_default")]
	pub result: String,
	/// The error kind when [`result`](Envelope::result) is `error`, e.g. `invalid-key`.
	#[serde(rename = "error-type")]
	pub error_type: Option<String>,
	/// Last update time as sent, e.g. `Fri, 27 Mar 2020 00:00:01 +0000`.
	#[serde(rename = "time_last_update_utc", deserialize_with = "null_default")]
	pub last_update: String,
	/// [`last_update`](Envelope::last_update) parsed.
	#[serde(skip)]
	pub last_update_time: Option<DateTime<FixedOffset>>,
	/// Next update time as sent.
	#[serde(rename = "time_next_update_utc", deserialize_with = "null_default")]
	pub next_update: String,
	/// [`next_update`](Envelope::next_update) parsed.
	#[serde(skip)]
	pub next_update_time: Option<DateTime<FixedOffset>>,
	/// The base currency code.
	#[serde(deserialize_with = "null_default")]
	pub base_code: String,
	/// Rates from the base currency, e.g. `{"USD": 1, "AUD": 1.4817}`.
	#[serde(deserialize_with = "null_default")]
	pub conversion_rates: HashMap<String, f64>,
	/// The target currency code of a pair.
	#[serde(deserialize_with = "null_default")]
	pub target_code: String,
	/// The rate from the base to the target currency of a pair.
	#[serde(deserialize_with = "null_default")]
	pub conversion_rate: f64,
	/// Supported currencies as `[code, name]`, e.g. `[["AED", "UAE Dirham"], …]`.
	#[serde(deserialize_with = "null_default")]
	pub supported_codes: Vec<(String, String)>,
}

impl Envelope {
	/// Decodes a response body from `endpoint`.
	///
	/// Update times are parsed for endpoints that [have them](Endpoint::has_dates).
	/// A time that fails to parse is logged and left as [`None`].
	pub fn decode(body: &[u8], endpoint: Endpoint) -> Result<Self> {
		if body.is_empty() {
			return Err(Error::EmptyResponse);
		}

		let mut envelope: Self = serde_json::from_slice(body)?;
		if endpoint.has_dates() {
			envelope.next_update_time = parse_time(&envelope.next_update);
			envelope.last_update_time = parse_time(&envelope.last_update);
		}
		Ok(envelope)
	}

	/// Whether the API reported a failure.
	#[inline] pub fn is_error(&self) -> bool { self.result == RESULT_ERROR }
}

/// Reads `null` as the field's default, like a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn parse_time(s: &str) -> Option<DateTime<FixedOffset>> {
	if s.is_empty() {
		return None;
	}
	match DateTime::parse_from_rfc2822(s) {
		Ok(time) => Some(time),
		Err(error) => {
			warn!(time = s, %error, "failed to parse into RFC1123");
			None
		}
	}
}
