use std::{process::ExitCode, time::Duration};

use chrono::NaiveDate;
use clap::{error::ErrorKind, Parser};
use privat_rates::{fetch_report, Config, DayCount, HttpSource, OutputFormat, RateSource};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// EUR/USD sale and purchase rates for the past days.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
	/// How many days back to fetch, 1 to 10.
	#[arg(allow_negative_numbers = true)]
	number_of_days: i64,
	/// The API host.
	#[arg(long, default_value = privat_rates::url::DEFAULT_BASE_URL)]
	base_url: String,
	/// Per-request timeout in seconds.
	#[arg(long, default_value_t = privat_rates::config::DEFAULT_TIMEOUT.as_secs())]
	timeout: u64,
	/// Report format.
	#[arg(long, value_enum, default_value_t)]
	format: OutputFormat,
}

impl Cli {
	fn config(&self) -> Config {
		Config {
			base_url: self.base_url.clone(),
			timeout: Duration::from_secs(self.timeout),
			format: self.format,
		}
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
		Err(err) => {
			let _ = err.print();
			return ExitCode::FAILURE;
		}
	};

	let subscriber = FmtSubscriber::builder()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.finish();
	if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
		eprintln!("Error: cannot install logger: {err}");
	}

	let source = match HttpSource::new(&cli.config()) {
		Ok(source) => source,
		Err(err) => {
			eprintln!("Error: cannot create HTTP client: {err}");
			return ExitCode::FAILURE;
		}
	};

	run(&cli, &source, chrono::Local::now().date_naive()).await
}

/// Validates the day count, fetches and prints the report.
///
/// An invalid day count fails before `source` is touched.
async fn run(cli: &Cli, source: &impl RateSource, today: NaiveDate) -> ExitCode {
	let count = match DayCount::try_from(cli.number_of_days) {
		Ok(count) => count,
		Err(err) => {
			eprintln!("Error: {err}");
			return ExitCode::FAILURE;
		}
	};

	let report = fetch_report(source, today, count).await;
	match cli.format {
		OutputFormat::Text => print!("{report}"),
		OutputFormat::Json => match report.to_json() {
			Ok(json) => println!("{json}"),
			Err(err) => {
				eprintln!("Error: cannot serialize report: {err}");
				return ExitCode::FAILURE;
			}
		},
	}
	ExitCode::SUCCESS
}
