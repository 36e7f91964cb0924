//! URL building

use std::fmt::Write;

use chrono::NaiveDate;

use crate::day::DATE_FORMAT;

/// The production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.privatbank.ua";

/// Path of the archive endpoint, relative to the host.
pub const EXCHANGE_RATES_PATH: &str = "/p24api/exchange_rates";

/// Builds the archive endpoint URL for the given date.
///
/// # Examples
/// ```
/// # use privat_rates::url::exchange_rates_url;
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
/// assert_eq!(
/// 	exchange_rates_url("https://api.privatbank.ua/", date),
/// 	"https://api.privatbank.ua/p24api/exchange_rates?date=17.05.2024",
/// );
/// ```
pub fn exchange_rates_url(base_url: &str, date: NaiveDate) -> String {
	let base_url = base_url.trim_end_matches('/');
	let mut url = String::with_capacity(base_url.len() + EXCHANGE_RATES_PATH.len() + "?date=00.00.0000".len());
	url.push_str(base_url);
	url.push_str(EXCHANGE_RATES_PATH);
	url.push_str("?date=");
	// writing into a String cannot fail
	let _ = write!(url, "{}", date.format(DATE_FORMAT));
	url
}
