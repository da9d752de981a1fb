use clap::{Parser, Subcommand};
use exchrate::{Client, Fetcher};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	/// API key; falls back to the EXCHANGERATE_API_KEY environment variable.
	#[clap(long)]
	key: Option<String>,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Codes,
	Pair {
		base: String,
		target: String,
		amount: Option<f64>,
	},
	Index {
		base: String,
	},
}

fn main() -> Result<(), exchrate::Error> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	let client = match cli.key {
		Some(key) => Client::new(key),
		None => Client::from_env()?,
	};

	match cli.command {
		CliCommand::Codes => {
			let mut codes: Vec<_> = client.fetch_codes()?.into_values().collect();
			codes.sort();
			println!("Fetched {} currencies", codes.len());
			for currency in codes { println!("{currency}"); }
		}
		CliCommand::Pair { base, target, amount } => {
			let pair = client.fetch_pair(&base, &target)?;
			match amount {
				Some(amount) => println!("{} {} = {:.4} {}", amount, pair.base_code, pair.convert(amount), pair.target_code),
				None => println!("{pair}"),
			}
		}
		CliCommand::Index { base } => print!("{}", client.fetch_index(&base)?),
	}
	Ok(())
}
