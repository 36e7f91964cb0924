//! Runtime configuration.

use std::time::Duration;

use crate::url::DEFAULT_BASE_URL;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How the report is written out.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// The nested textual report.
	#[default]
	Text,
	/// The same nesting as pretty-printed JSON.
	Json,
}

/// HTTP client and output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// The API host, without the endpoint path.
	pub base_url: String,
	/// Timeout of each individual request.
	pub timeout: Duration,
	/// The report format.
	pub format: OutputFormat,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_owned(),
			timeout: DEFAULT_TIMEOUT,
			format: OutputFormat::default(),
		}
	}
}
