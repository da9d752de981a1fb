//! Currency rates.

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter},
};

use serde::Serialize;

/// The rate from one currency to another.
#[derive(Debug, Default, Clone, PartialEq, PartialOrd, Serialize)]
pub struct Pair {
	/// The base currency code.
	#[serde(rename = "base")]
	pub base_code: String,
	/// The target currency code.
	#[serde(rename = "target")]
	pub target_code: String,
	/// How much of the target currency one unit of the base currency buys.
	pub rate: f64,
}

impl Pair {
	/// Converts an amount of the base currency to the target currency.
	#[inline] pub fn convert(&self, amount: f64) -> f64 { amount * self.rate }
}

impl Display for Pair {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{} rate to {}: {:.4}", self.base_code, self.target_code, self.rate)
	}
}

/// The rates from a base currency to every supported currency.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Index {
	/// The base currency code.
	#[serde(rename = "base")]
	pub base_code: String,
	/// Rates keyed by currency code.
	#[serde(rename = "index_of_code")]
	pub rates: HashMap<String, f64>,
}

impl Index {
	/// Gets the rate to the given currency, if exists.
	#[inline] pub fn get(&self, code: &str) -> Option<f64> { self.rates.get(code).copied() }

	/// Converts an amount between two currencies of the index.
	///
	/// Returns [`None`] if either currency is missing.
	pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
		let from_rate = self.get(from)?;
		let to_rate = self.get(to)?;
		Some(amount * (to_rate / from_rate))
	}

	/// The pair from the base currency to `target`, if exists.
	pub fn pair(&self, target: &str) -> Option<Pair> {
		self.get(target).map(|rate| Pair {
			base_code: self.base_code.clone(),
			target_code: target.to_owned(),
			rate,
		})
	}
}

impl Display for Index {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		writeln!(f, "{} has rates of:", self.base_code)?;
		let mut rates: Vec<_> = self.rates.iter().collect();
		rates.sort_by(|a, b| a.0.cmp(b.0));
		for (code, rate) in rates {
			writeln!(f, "\t{code} : {rate:.4}")?;
		}
		Ok(())
	}
}
