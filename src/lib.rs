//! [PrivatBank](https://api.privatbank.ua/) exchange rate history.
//!
//! Fetches the EUR and USD sale/purchase rates for a run of past days
//! concurrently and renders them as a [`Report`].
//!
//! # Examples
//! ```no_run
//! # async fn run() {
//! use privat_rates::{fetch_report, Config, DayCount, HttpSource};
//!
//! let config = Config::default();
//! let source = HttpSource::new(&config).unwrap();
//! let today = chrono::Local::now().date_naive();
//! let report = fetch_report(&source, today, DayCount::try_from(3).unwrap()).await;
//! print!("{report}");
//! # }
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod day;
pub mod error;
pub mod fetch;
pub mod rates;
pub mod report;
pub mod scientific;
pub mod source;
pub mod url;

pub use config::{Config, OutputFormat};
pub use day::{DayCount, DayOffset};
pub use error::{DayError, InputError};
pub use fetch::{fetch_day, fetch_report};
pub use rates::{extract_rates, Currency, Quote, RatePair};
pub use report::{DayResult, Report};
pub use source::{HttpSource, RateSource};

/// The numeric type of an exchange rate.
#[cfg(feature = "rust_decimal")]
pub type Rate = rust_decimal::Decimal;
/// The numeric type of an exchange rate.
#[cfg(not(feature = "rust_decimal"))]
pub type Rate = f64;
