//! [`DayError`] and [`InputError`] types.

/// A failure to produce the rates for a single day.
///
/// These never abort a batch; they end up in the [`Report`](crate::Report)
/// in place of the day's rates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DayError {
	/// The connection could not be established or the request timed out.
	#[error("Connection error: {url}, {detail}")]
	Connection {
		/// The requested URL.
		url: String,
		/// The HTTP client's description of the failure.
		detail: String,
	},
	/// The server answered with a status other than 200.
	#[error("Error status: {code} for {url}")]
	Status {
		/// The HTTP status code.
		code: u16,
		/// The requested URL.
		url: String,
	},
	/// The server answered 200 but the body is not JSON.
	#[error("Invalid response body: {url}, {detail}")]
	Body {
		/// The requested URL.
		url: String,
		/// The decoder's description of the failure.
		detail: String,
	},
	/// The response is well-formed but lacks the EUR or the USD record.
	#[error("No USD or EUR rates for this day")]
	NoRatePair,
	/// The response lacks an expected field.
	#[error("Invalid response structure: '{key}'")]
	InvalidStructure {
		/// The missing or malformed field.
		key: &'static str,
	},
}

impl DayError {
	/// Whether the response document itself was malformed.
	#[inline] pub const fn is_structural(&self) -> bool { matches!(self, Self::InvalidStructure { .. }) }

	/// Whether the response was well-formed but lacked a currency record.
	#[inline] pub const fn is_domain(&self) -> bool { matches!(self, Self::NoRatePair) }
}

/// Invalid command input, fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
	/// The day count is outside the supported range.
	#[error("Invalid number of days: {0}. Please enter a number between {min} and {max}.", min = crate::day::DayCount::MIN, max = crate::day::DayCount::MAX)]
	OutOfRange(i64),
}
