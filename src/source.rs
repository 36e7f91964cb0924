//! [`RateSource`] and its HTTP implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::{config::Config, error::DayError, url::exchange_rates_url};

/// Where daily rate documents come from.
///
/// Implementations must be safe to call concurrently; each call owns its own
/// request.
#[async_trait]
pub trait RateSource: Send + Sync {
	/// The URL the document for `date` is requested from.
	fn url(&self, date: NaiveDate) -> String;

	/// Fetches and decodes the document at `url`.
	///
	/// # Errors
	/// [`DayError::Connection`], [`DayError::Status`] or [`DayError::Body`].
	async fn get_json(&self, url: &str) -> Result<Value, DayError>;
}

/// [`RateSource`] backed by the archive endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
	client: reqwest::Client,
	base_url: String,
}

impl HttpSource {
	/// Creates a new [`HttpSource`] with a pooled client.
	pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
		let client = reqwest::Client::builder().timeout(config.timeout).build()?;
		Ok(Self::with_client(client, &config.base_url))
	}

	/// Creates a new [`HttpSource`] over an existing client.
	pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
		Self { client, base_url: base_url.to_owned() }
	}
}

#[async_trait]
impl RateSource for HttpSource {
	fn url(&self, date: NaiveDate) -> String { exchange_rates_url(&self.base_url, date) }

	async fn get_json(&self, url: &str) -> Result<Value, DayError> {
		let connection_error = |err: reqwest::Error| DayError::Connection { url: url.to_owned(), detail: err.to_string() };

		let response = self.client.get(url).send().await.map_err(connection_error)?;
		let status = response.status();
		if status != reqwest::StatusCode::OK {
			return Err(DayError::Status { code: status.as_u16(), url: url.to_owned() });
		}

		response.json::<Value>().await.map_err(|err| {
			if err.is_decode() {
				DayError::Body { url: url.to_owned(), detail: err.to_string() }
			} else {
				connection_error(err)
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use tokio::{
		io::{AsyncReadExt, AsyncWriteExt},
		net::TcpListener,
	};

	use super::*;

	/// Serves one canned HTTP response on a local port, returns the base URL.
	async fn serve_once(status_line: &'static str, body: &'static str) -> String {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await.unwrap();
			let mut request = [0u8; 4096];
			let _ = socket.read(&mut request).await;
			let response = format!(
				"HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
				body.len(),
			);
			socket.write_all(response.as_bytes()).await.unwrap();
			socket.shutdown().await.unwrap();
		});
		format!("http://{addr}")
	}

	fn date() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 5, 16).unwrap() }

	#[tokio::test]
	async fn test_non_200_is_status_error() {
		let source = HttpSource::with_client(reqwest::Client::new(), &serve_once("500 Internal Server Error", "").await);
		let url = source.url(date());
		assert_eq!(source.get_json(&url).await, Err(DayError::Status { code: 500, url }));
	}

	#[tokio::test]
	async fn test_non_json_body_is_body_error() {
		let source = HttpSource::with_client(reqwest::Client::new(), &serve_once("200 OK", "hello").await);
		let url = source.url(date());
		match source.get_json(&url).await {
			Err(DayError::Body { url: failed, .. }) => assert_eq!(failed, url),
			other => panic!("expected a body error, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_json_body() {
		let source = HttpSource::with_client(
			reqwest::Client::new(),
			&serve_once("200 OK", r#"{"date":"16.05.2024","exchangeRate":[]}"#).await,
		);
		let document = source.get_json(&source.url(date())).await.unwrap();
		assert_eq!(document["date"], "16.05.2024");
	}

	#[test]
	fn test_url() {
		let source = HttpSource::with_client(reqwest::Client::new(), "http://localhost:9000/");
		let date = NaiveDate::from_ymd_opt(2024, 5, 16).unwrap();
		assert_eq!(source.url(date), "http://localhost:9000/p24api/exchange_rates?date=16.05.2024");
	}

	#[tokio::test]
	async fn test_connection_refused() {
		// nothing listens on the discard port
		let source = HttpSource::with_client(reqwest::Client::new(), "http://127.0.0.1:9");
		let url = source.url(NaiveDate::from_ymd_opt(2024, 5, 16).unwrap());
		match source.get_json(&url).await {
			Err(DayError::Connection { url: failed, .. }) => assert_eq!(failed, url),
			other => panic!("expected a connection error, got {other:?}"),
		}
	}
}
