//! Day offsets and the calendar dates they resolve to.

use std::fmt::{self, Display, Formatter};

use chrono::{Days, NaiveDate};

use crate::error::InputError;

/// The date format the API expects and the report shows.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// How many days before today a rate is requested for.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct DayOffset(u8);

impl DayOffset {
	/// Gets the offset in days.
	#[inline] pub const fn get(self) -> u8 { self.0 }

	/// Resolves the offset against `today`.
	///
	/// Saturates at the earliest representable date.
	pub fn date(self, today: NaiveDate) -> NaiveDate {
		today.checked_sub_days(Days::new(self.0.into())).unwrap_or(NaiveDate::MIN)
	}
}

impl Display for DayOffset {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result { self.0.fmt(f) }
}

/// Formats a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
	date.format(DATE_FORMAT).to_string()
}

/// A validated number of days to fetch.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct DayCount(u8);

impl DayCount {
	/// The smallest accepted count.
	pub const MIN: u8 = 1;
	/// The largest accepted count.
	pub const MAX: u8 = 10;

	/// Gets the count.
	#[inline] pub const fn get(self) -> u8 { self.0 }

	/// Iterates the offsets `1..=count` in order.
	pub fn offsets(self) -> impl Iterator<Item = DayOffset> {
		(1..=self.0).map(DayOffset)
	}
}

impl TryFrom<i64> for DayCount {
	type Error = InputError;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		u8::try_from(value)
			.ok()
			.filter(|days| (Self::MIN..=Self::MAX).contains(days))
			.map(Self)
			.ok_or(InputError::OutOfRange(value))
	}
}
