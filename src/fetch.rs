//! Concurrent fetching of daily rates.

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::{
	day::{format_date, DayCount, DayOffset},
	rates::extract_rates,
	report::{DayResult, Report},
	source::RateSource,
};

/// Fetches the rates for the day `offset` days before `today`.
///
/// Never fails: transport, status and extraction errors are logged and kept
/// in the returned [`DayResult`].
pub async fn fetch_day<S: RateSource + ?Sized>(source: &S, today: NaiveDate, offset: DayOffset) -> DayResult {
	let date = offset.date(today);
	let url = source.url(date);
	debug!(%offset, date = %format_date(date), %url, "fetching rates");

	let rates = source
		.get_json(&url)
		.await
		.and_then(|document| extract_rates(&document));
	if let Err(error) = &rates {
		warn!(date = %format_date(date), %url, %error, "no rates for day");
	}

	DayResult { offset, date, rates }
}

/// Fetches `count` days concurrently, starting with yesterday.
///
/// The report holds exactly one result per offset, ordered by offset
/// regardless of which request finishes first. A failed day never cancels
/// the others.
pub async fn fetch_report<S: RateSource + ?Sized>(source: &S, today: NaiveDate, count: DayCount) -> Report {
	info!(days = count.get(), today = %format_date(today), "fetching report");
	let days = join_all(count.offsets().map(|offset| fetch_day(source, today, offset))).await;
	let failed = days.iter().filter(|day| day.rates.is_err()).count();
	info!(days = days.len(), failed, "report complete");
	Report::new(days)
}

#[cfg(test)]
mod tests {
	use std::{collections::HashMap, sync::Mutex, time::Duration};

	use async_trait::async_trait;
	use serde_json::{json, Value};

	use super::*;
	use crate::{error::DayError, scientific::FromScientific, url::exchange_rates_url, Rate};

	/// Scripted [`RateSource`]: per-date responses with per-date latency.
	#[derive(Default)]
	struct ScriptedSource {
		responses: HashMap<String, (Duration, Result<Value, DayError>)>,
		requests: Mutex<Vec<String>>,
	}

	impl ScriptedSource {
		fn respond(mut self, date: &str, delay_ms: u64, response: Result<Value, DayError>) -> Self {
			self.responses.insert(date.to_owned(), (Duration::from_millis(delay_ms), response));
			self
		}

		fn requests(&self) -> Vec<String> {
			self.requests.lock().unwrap().clone()
		}
	}

	#[async_trait]
	impl RateSource for ScriptedSource {
		fn url(&self, date: NaiveDate) -> String { exchange_rates_url("http://scripted", date) }

		async fn get_json(&self, url: &str) -> Result<Value, DayError> {
			self.requests.lock().unwrap().push(url.to_owned());
			let date = url.rsplit('=').next().unwrap_or_default();
			let (delay, response) = self
				.responses
				.get(date)
				.cloned()
				.unwrap_or_else(|| (Duration::ZERO, Err(DayError::Status { code: 404, url: url.to_owned() })));
			tokio::time::sleep(delay).await;
			response
		}
	}

	fn valid_document(eur: f64, usd: f64) -> Value {
		json!({ "exchangeRate": [
			{ "currency": "EUR", "saleRate": eur, "purchaseRate": eur - 1.0 },
			{ "currency": "USD", "saleRate": usd, "purchaseRate": usd - 1.0 },
		] })
	}

	fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, 18).unwrap() }

	fn dates(report: &Report) -> Vec<String> { report.iter().map(DayResult::date_key).collect() }

	#[tokio::test(start_paused = true)]
	async fn test_order_survives_reversed_completion() {
		// later offsets answer first
		let source = ScriptedSource::default()
			.respond("17.05.2024", 300, Ok(valid_document(43.0, 39.0)))
			.respond("16.05.2024", 200, Ok(valid_document(44.0, 40.0)))
			.respond("15.05.2024", 100, Ok(valid_document(45.0, 41.0)));
		let report = fetch_report(&source, today(), DayCount::try_from(3).unwrap()).await;

		assert_eq!(dates(&report), ["17.05.2024", "16.05.2024", "15.05.2024"]);
		let offsets: Vec<u8> = report.iter().map(|day| day.offset.get()).collect();
		assert_eq!(offsets, [1, 2, 3]);
		assert_eq!(report.days()[0].rates.as_ref().unwrap().eur.sale, Rate::parse_scientific("43").ok());
	}

	#[tokio::test(start_paused = true)]
	async fn test_failures_are_contained() {
		let url = exchange_rates_url("http://scripted", NaiveDate::from_ymd_opt(2024, 5, 16).unwrap());
		let source = ScriptedSource::default()
			.respond("17.05.2024", 50, Ok(valid_document(43.0, 39.0)))
			.respond("16.05.2024", 0, Err(DayError::Status { code: 500, url: url.clone() }))
			.respond("15.05.2024", 10, Ok(json!({ "exchangeRate": [] })))
			.respond("14.05.2024", 10, Ok(json!({ "error": "rate limited" })));
		let report = fetch_report(&source, today(), DayCount::try_from(4).unwrap()).await;

		assert_eq!(report.len(), 4);
		assert!(report.days()[0].rates.is_ok());
		assert_eq!(report.days()[1].rates, Err(DayError::Status { code: 500, url }));
		assert_eq!(report.days()[2].rates, Err(DayError::NoRatePair));
		assert_eq!(report.days()[3].rates, Err(DayError::InvalidStructure { key: "exchangeRate" }));
	}

	#[tokio::test(start_paused = true)]
	async fn test_every_count_yields_every_day() {
		for days in DayCount::MIN..=DayCount::MAX {
			let source = ScriptedSource::default();
			let count = DayCount::try_from(i64::from(days)).unwrap();
			let report = fetch_report(&source, today(), count).await;
			assert_eq!(report.len(), usize::from(days));
			assert_eq!(source.requests().len(), usize::from(days));
			let offsets: Vec<u8> = report.iter().map(|day| day.offset.get()).collect();
			assert_eq!(offsets, (1..=days).collect::<Vec<_>>());
		}
	}

	#[tokio::test]
	async fn test_fetch_day() {
		let source = ScriptedSource::default().respond("16.05.2024", 0, Ok(valid_document(43.5, 39.5)));
		let offset = DayCount::try_from(2).unwrap().offsets().last().unwrap();
		let day = fetch_day(&source, today(), offset).await;
		assert_eq!(day.date_key(), "16.05.2024");
		assert_eq!(source.requests(), ["http://scripted/p24api/exchange_rates?date=16.05.2024"]);
		assert!(day.rates.is_ok());
	}
}
