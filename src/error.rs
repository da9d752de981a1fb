//! [`Error`] type.

use std::fmt::{self, Display, Formatter};

use crate::url::Endpoint;

/// Crate result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The accessor stage an error surfaced from.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	/// [`Fetcher::fetch_codes`](crate::Fetcher::fetch_codes).
	Codes,
	/// [`Fetcher::fetch_pair`](crate::Fetcher::fetch_pair).
	Pair,
	/// [`Fetcher::fetch_index`](crate::Fetcher::fetch_index).
	Index,
}

impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(match self {
			Self::Codes => "codes",
			Self::Pair => "pair",
			Self::Index => "index",
		})
	}
}

/// An error from the API, the HTTP client or the response decoder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request URL was empty.
	#[error("empty query")]
	EmptyQuery,
	/// No API key was found in the environment.
	#[error("missing API key: set {0}")]
	MissingApiKey(&'static str),
	/// Wrong number of arguments for an endpoint.
	#[error("invalid args len: {endpoint} endpoint requires {expected} args, got {got}")]
	InvalidArgs {
		/// The endpoint that was routed.
		endpoint: Endpoint,
		/// The endpoint's arity.
		expected: usize,
		/// The number of arguments given.
		got: usize,
	},
	/// Unknown endpoint identifier.
	#[error("unsupported endpoint: {0}")]
	UnsupportedEndpoint(String),
	/// The request could not be built, e.g. a malformed URL.
	#[error("failed to build request: {0}")]
	Request(#[source] reqwest::Error),
	/// Connection or transfer failure.
	#[error("failed to do request: {0}")]
	Network(#[source] reqwest::Error),
	/// The server answered with a 4xx status.
	#[error("client error: status code {}", .0.as_u16())]
	ClientStatus(reqwest::StatusCode),
	/// The response body was empty.
	#[error("failed to decode response: empty body")]
	EmptyResponse,
	/// The response body is not a valid envelope.
	#[error("failed to unmarshal data: {0}")]
	Decode(#[from] serde_json::Error),
	/// The API reported an error in the envelope.
	#[error("api error: {error_type}")]
	Api {
		/// The `error-type` the API returned, e.g. `invalid-key`.
		error_type: String,
	},
	/// An accessor failed; wraps the underlying cause.
	#[error("failed to fetch {stage}: {source}")]
	Fetch {
		/// The accessor that failed.
		stage: Stage,
		/// The underlying error.
		#[source]
		source: Box<Error>,
	},
}

impl Error {
	/// Wraps `self` with the accessor stage.
	pub(crate) fn at(self, stage: Stage) -> Self {
		Self::Fetch { stage, source: Box::new(self) }
	}

	/// Gets the underlying error, skipping [stage wrappers](Error::Fetch).
	pub fn root(&self) -> &Self {
		match self {
			Self::Fetch { source, .. } => source.root(),
			other => other,
		}
	}

	/// Gets the HTTP status of a [client error](Error::ClientStatus), if this is one.
	pub fn status(&self) -> Option<reqwest::StatusCode> {
		match self.root() {
			Self::ClientStatus(status) => Some(*status),
			_ => None,
		}
	}
}
