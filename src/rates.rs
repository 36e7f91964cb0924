//! EUR/USD rate extraction from the archive endpoint's response.

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{error::DayError, scientific::FromScientific, Rate};

/// The response field holding the list of currency records.
pub const EXCHANGE_RATE_KEY: &str = "exchangeRate";
const CURRENCY_KEY: &str = "currency";
const SALE_KEY: &str = "saleRate";
const PURCHASE_KEY: &str = "purchaseRate";

/// The currencies a report covers.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Currency {
	/// Euro.
	Eur,
	/// United States dollar.
	Usd,
}

impl Currency {
	/// Every reported currency, in report order.
	pub const ALL: [Self; 2] = [Self::Eur, Self::Usd];

	/// Gets the ISO 4217 code.
	pub const fn code(self) -> &'static str {
		match self {
			Self::Eur => "EUR",
			Self::Usd => "USD",
		}
	}
}

impl AsRef<str> for Currency {
	#[inline] fn as_ref(&self) -> &str { self.code() }
}

impl Display for Currency {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result { f.write_str(self.code()) }
}

/// A sale and purchase rate, either of which may be absent from the response.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Quote {
	/// The bank's sale rate.
	pub sale: Option<Rate>,
	/// The bank's purchase rate.
	pub purchase: Option<Rate>,
}

impl Quote {
	/// Placeholder for an absent rate.
	pub const MISSING: &'static str = "N/A";

	fn from_record(record: &Value) -> Self {
		let rate = |key: &str| record.get(key).and_then(Rate::from_json);
		Self { sale: rate(SALE_KEY), purchase: rate(PURCHASE_KEY) }
	}
}

/// Displays a rate or [`Quote::MISSING`].
pub(crate) struct DisplayRate<'a>(pub &'a Option<Rate>);

impl Display for DisplayRate<'_> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self.0 {
			#[cfg(not(feature = "rust_decimal"))]
			// keep the fraction of whole rates, `40.0` rather than `40`
			Some(rate) => fmt::Debug::fmt(rate, f),
			#[cfg(feature = "rust_decimal")]
			Some(rate) => rate.fmt(f),
			None => f.write_str(Quote::MISSING),
		}
	}
}

impl Serialize for Quote {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		use serde::ser::SerializeStruct;

		fn field<S: SerializeStruct>(s: &mut S, key: &'static str, rate: &Option<Rate>) -> Result<(), S::Error> {
			match rate {
				Some(rate) => s.serialize_field(key, rate),
				None => s.serialize_field(key, Quote::MISSING),
			}
		}

		let mut s = serializer.serialize_struct("Quote", 2)?;
		field(&mut s, "sale", &self.sale)?;
		field(&mut s, "purchase", &self.purchase)?;
		s.end()
	}
}

/// The EUR and USD quotes for one date.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RatePair {
	/// The EUR quote.
	pub eur: Quote,
	/// The USD quote.
	pub usd: Quote,
}

impl RatePair {
	/// Gets the quote for the given currency.
	pub const fn get(&self, currency: Currency) -> &Quote {
		match currency {
			Currency::Eur => &self.eur,
			Currency::Usd => &self.usd,
		}
	}

	/// Iterates the quotes in report order.
	pub fn iter(&self) -> impl Iterator<Item = (Currency, &Quote)> {
		Currency::ALL.into_iter().map(move |currency| (currency, self.get(currency)))
	}
}

impl Serialize for RatePair {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter().map(|(currency, quote)| (currency.code(), quote)))
	}
}

/// Extracts the EUR and USD quotes from an archive response.
///
/// The first record of each currency wins. Missing rate fields read as
/// [`Quote::MISSING`] rather than failing.
///
/// # Errors
/// - [`DayError::InvalidStructure`] if the record list, or a record's currency, is missing.
///   Records with a non-string currency are skipped.
/// - [`DayError::NoRatePair`] if the list lacks EUR or USD.
pub fn extract_rates(document: &Value) -> Result<RatePair, DayError> {
	let records = document
		.get(EXCHANGE_RATE_KEY)
		.and_then(Value::as_array)
		.ok_or(DayError::InvalidStructure { key: EXCHANGE_RATE_KEY })?;

	let mut eur = None;
	let mut usd = None;
	for record in records {
		if eur.is_some() && usd.is_some() { break }
		let currency = record
			.get(CURRENCY_KEY)
			.ok_or(DayError::InvalidStructure { key: CURRENCY_KEY })?;
		let slot = match currency.as_str() {
			Some("EUR") => &mut eur,
			Some("USD") => &mut usd,
			_ => continue,
		};
		if slot.is_none() {
			*slot = Some(Quote::from_record(record));
		}
	}

	match (eur, usd) {
		(Some(eur), Some(usd)) => Ok(RatePair { eur, usd }),
		_ => Err(DayError::NoRatePair),
	}
}
