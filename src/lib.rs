//! kep_dash
//!
//! A small Rust library for browsing macroeconomic time series served by the
//! **mini-kep** REST API. Pairs with the `kep` CLI and the `kep-gui` dashboard.
//!
//! ### Features
//! - Frequency catalog (`Annual`, `Quarterly`, `Monthly`, `Daily` ↔ `a`/`q`/`m`/`d`)
//! - List series names per frequency and fetch their data points
//! - Pivot two series into a date-indexed, two-column table
//! - A UI-free dashboard controller driven by selection events
//! - Save tables as CSV or JSON, render them as SVG/PNG line charts
//!
//! ### Example
//! ```no_run
//! use kep_dash::{Client, Dashboard, Event, SelectionState};
//!
//! let client = Client::new(kep_dash::DEFAULT_BASE_URL)?;
//! let mut dash = Dashboard::open(client, SelectionState::default())?;
//! dash.handle(Event::FrequencyChanged(0))?; // Annual
//! kep_dash::storage::save_csv(dash.table(), "gdp_cpi.csv")?;
//! kep_dash::viz::plot_table(dash.table(), "gdp_cpi.svg", 600, 400)?;
//! # Ok::<(), kep_dash::Error>(())
//! ```

pub mod api;
pub mod dashboard;
pub mod error;
pub mod frequency;
pub mod models;
pub mod storage;
pub mod table;
pub mod viz;

pub use api::{Client, DEFAULT_BASE_URL, SeriesSource};
pub use dashboard::{Dashboard, Event, SelectionState, Update, update};
pub use error::{Error, Result};
pub use frequency::{Frequency, descriptions, frequency_code_of, index_of};
pub use models::{DataPoint, TimeSeries};
pub use table::{Row, SeriesTable, build_table};
