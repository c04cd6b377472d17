//! Synchronous client for the **mini-kep** time-series API.
//!
//! Two endpoints are used:
//! - `GET {base}/names/{freq}` lists the series available at a frequency;
//! - `GET {base}/datapoints?freq=..&name=..&format=json` lists the observations of one series.
//!
//! ### Notes
//! - The `datapoints` endpoint reports an invalid filter through the body (a JSON object
//!   instead of a list). Such bodies are normalised to an empty series, not an error.
//! - No timeout is configured by default: a hung request blocks the caller. Use
//!   [`Client::with_timeout`] to bound it.
//! - No caching and no retry; every call is a fresh round trip.
//!
//! Typical usage:
//! ```no_run
//! # use kep_dash::{Client, SeriesSource};
//! let client = Client::new(kep_dash::DEFAULT_BASE_URL)?;
//! let names = client.list_series_names("q")?;
//! let points = client.list_data_points("q", "GDP_yoy")?;
//! # Ok::<(), kep_dash::Error>(())
//! ```
use crate::error::{Error, Result};
use crate::models::{DataPoint, TimeSeries};
use log::{debug, warn};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://minikep-db.herokuapp.com/api";

/// Where the dashboard gets its data from.
///
/// [`Client`] is the network implementation; tests and alternative front ends can
/// provide their own.
pub trait SeriesSource {
    /// Series names available for the one-letter frequency `freq`.
    fn list_series_names(&self, freq: &str) -> Result<Vec<String>>;

    /// Observations of series `name` at frequency `freq`.
    /// A malformed response yields an empty vector.
    fn list_data_points(&self, freq: &str, name: &str) -> Result<Vec<DataPoint>>;

    /// One series as parallel date/value vectors.
    fn time_series(&self, freq: &str, name: &str) -> Result<TimeSeries> {
        Ok(self.list_data_points(freq, name)?.into())
    }
}

impl<S: SeriesSource + ?Sized> SeriesSource for &S {
    fn list_series_names(&self, freq: &str) -> Result<Vec<String>> {
        (**self).list_series_names(freq)
    }

    fn list_data_points(&self, freq: &str, name: &str) -> Result<Vec<DataPoint>> {
        (**self).list_data_points(freq, name)
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    /// Client without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = HttpClient::builder()
            .timeout(timeout)
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("kep-dash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| Error::Fetch {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { base_url, http })
    }

    /// GET `url` with `query`; returns the final URL (for messages) and the response.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<(String, Response)> {
        let fetch_err = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };
        let request = self.http.get(url).query(query).build().map_err(fetch_err)?;
        let full_url = request.url().to_string();
        debug!("GET {}", full_url);

        let response = self.http.execute(request).map_err(|source| Error::Fetch {
            url: full_url.clone(),
            source,
        })?;
        Ok((full_url, response))
    }
}

fn decode_json<T: DeserializeOwned>(url: String, response: Response) -> Result<T> {
    response.json().map_err(|e| Error::Decode {
        url,
        source: Box::new(e),
    })
}

impl SeriesSource for Client {
    fn list_series_names(&self, freq: &str) -> Result<Vec<String>> {
        let (url, response) = self.get(&format!("{}/names/{}", self.base_url, freq), &[])?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }
        decode_json(url, response)
    }

    fn list_data_points(&self, freq: &str, name: &str) -> Result<Vec<DataPoint>> {
        let url = format!("{}/datapoints", self.base_url);
        // Bad filters come back as a non-list body whatever the status.
        let (url, response) =
            self.get(&url, &[("freq", freq), ("name", name), ("format", "json")])?;
        Ok(data_points_from_json(decode_json(url, response)?))
    }
}

/// Decode a `datapoints` response body.
///
/// Anything that is not a list of well-formed data-point records (an error object,
/// a bare string, a list containing a broken record) becomes an empty vector.
pub fn data_points_from_json(body: Value) -> Vec<DataPoint> {
    if !body.is_array() {
        warn!("datapoints response is not a list, treating as no data: {}", body);
        return Vec::new();
    }
    match serde_json::from_value::<Vec<DataPoint>>(body) {
        Ok(points) => points,
        Err(e) => {
            warn!("datapoints response has malformed records, treating as no data: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_body_is_no_data() {
        let body = json!({"error": "invalid frequency"});
        assert!(data_points_from_json(body).is_empty());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let c = Client::new("http://localhost:5000/api/").unwrap();
        assert_eq!(c.base_url, "http://localhost:5000/api");
    }
}
