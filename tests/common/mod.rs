//! Shared test helpers: an in-memory `SeriesSource` that records every call.
#![allow(dead_code)]

use kep_dash::{DataPoint, Error, Result, SeriesSource};
use std::cell::RefCell;
use std::collections::HashMap;

pub fn dp(date: &str, freq: &str, name: &str, value: f64) -> DataPoint {
    DataPoint {
        date: date.parse().unwrap(),
        freq: freq.into(),
        name: name.into(),
        value,
    }
}

#[derive(Default)]
pub struct StubSource {
    pub names: HashMap<String, Vec<String>>,
    pub points: HashMap<(String, String), Vec<DataPoint>>,
    /// Series names whose data-point request fails like a dropped connection.
    pub failing: Vec<String>,
    pub calls: RefCell<Vec<String>>,
}

impl StubSource {
    pub fn with_names(mut self, freq: &str, names: &[&str]) -> Self {
        self.names
            .insert(freq.into(), names.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        for p in points {
            self.points
                .entry((p.freq.clone(), p.name.clone()))
                .or_default()
                .push(p);
        }
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl SeriesSource for StubSource {
    fn list_series_names(&self, freq: &str) -> Result<Vec<String>> {
        self.calls.borrow_mut().push(format!("names/{}", freq));
        Ok(self.names.get(freq).cloned().unwrap_or_default())
    }

    fn list_data_points(&self, freq: &str, name: &str) -> Result<Vec<DataPoint>> {
        self.calls
            .borrow_mut()
            .push(format!("datapoints/{}/{}", freq, name));
        if self.failing.iter().any(|n| n == name) {
            return Err(Error::Decode {
                url: format!("stub/datapoints?freq={}&name={}", freq, name),
                source: "connection reset".into(),
            });
        }
        Ok(self
            .points
            .get(&(freq.to_string(), name.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
