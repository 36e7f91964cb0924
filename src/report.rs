//! [`Report`] and its renderings.

use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
	day::{format_date, DayOffset},
	error::DayError,
	rates::{DisplayRate, RatePair},
};

/// The outcome for one requested day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayResult {
	/// The requested offset.
	pub offset: DayOffset,
	/// The calendar date the offset resolved to.
	pub date: NaiveDate,
	/// The rates, or why they are missing.
	pub rates: Result<RatePair, DayError>,
}

impl DayResult {
	/// The date as it appears in the report, `DD.MM.YYYY`.
	pub fn date_key(&self) -> String { format_date(self.date) }
}

impl Serialize for DayResult {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		struct ErrorBody<'a>(&'a DayError);

		impl Serialize for ErrorBody<'_> {
			fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry("error", &self.0.to_string())?;
				map.end()
			}
		}

		let mut map = serializer.serialize_map(Some(1))?;
		match &self.rates {
			Ok(pair) => map.serialize_entry(&self.date_key(), pair)?,
			Err(error) => map.serialize_entry(&self.date_key(), &ErrorBody(error))?,
		}
		map.end()
	}
}

/// Per-day results, in requested offset order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
	days: Vec<DayResult>,
}

impl Report {
	/// Creates a [`Report`] from results already in offset order.
	pub fn new(days: Vec<DayResult>) -> Self { Self { days } }

	/// Gets the day count.
	#[inline] pub fn len(&self) -> usize { self.days.len() }
	/// Gets whether there are no days.
	#[inline] pub fn is_empty(&self) -> bool { self.days.is_empty() }
	/// Iterates the days in offset order.
	pub fn iter(&self) -> impl Iterator<Item = &DayResult> { self.days.iter() }
	/// Gets the days as a slice.
	pub fn days(&self) -> &[DayResult] { &self.days }

	/// Renders the report as pretty-printed JSON.
	pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string_pretty(self) }
}

/// The nested textual report.
///
/// ```text
/// [
///   {
///     '17.05.2024': {
///       'EUR': {
///         'sale': 43.25,
///         'purchase': 42.25
///       },
///       'USD': {
///         'sale': 39.85,
///         'purchase': 39.25
///       },
///     },
///   },
/// ]
/// ```
impl Display for Report {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		writeln!(f, "[")?;
		for day in &self.days {
			writeln!(f, "  {{")?;
			writeln!(f, "    '{}': {{", day.date_key())?;
			match &day.rates {
				Ok(pair) => {
					for (currency, quote) in pair.iter() {
						writeln!(f, "      '{currency}': {{")?;
						writeln!(f, "        'sale': {},", DisplayRate(&quote.sale))?;
						writeln!(f, "        'purchase': {}", DisplayRate(&quote.purchase))?;
						writeln!(f, "      }},")?;
					}
				}
				Err(error) => writeln!(f, "      'error': '{error}'")?,
			}
			writeln!(f, "    }},")?;
			writeln!(f, "  }},")?;
		}
		writeln!(f, "]")
	}
}

impl<'a> IntoIterator for &'a Report {
	type Item = &'a DayResult;
	type IntoIter = std::slice::Iter<'a, DayResult>;
	fn into_iter(self) -> Self::IntoIter { self.days.iter() }
}
