//! Dashboard controller, free of any UI toolkit.
//!
//! The reactive update is the pure function [`update`]: `(state, event) -> (state', table, names?)`.
//! [`Dashboard`] owns the session (selection, selector options, plot data) and commits
//! the result of each update. A GUI front end only forwards widget changes as [`Event`]s
//! and redraws from the accessors.

use crate::api::SeriesSource;
use crate::error::Result;
use crate::frequency::Frequency;
use crate::table::{SeriesTable, build_table};
use log::info;
use serde::{Deserialize, Serialize};

/// Current user selection: frequency and the two series names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub freq: Frequency,
    pub name1: String,
    pub name2: String,
}

impl SelectionState {
    pub fn new(freq: Frequency, name1: impl Into<String>, name2: impl Into<String>) -> Self {
        Self {
            freq,
            name1: name1.into(),
            name2: name2.into(),
        }
    }
}

impl Default for SelectionState {
    /// Start-up selection: quarterly `GDP_yoy` and `CPI_rog`.
    fn default() -> Self {
        Self::new(Frequency::Quarterly, "GDP_yoy", "CPI_rog")
    }
}

/// A widget change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Radio control moved to this index (0 = Annual .. 3 = Daily).
    FrequencyChanged(usize),
    Name1Changed(String),
    Name2Changed(String),
}

/// Result of one update.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub state: SelectionState,
    pub table: SeriesTable,
    /// New option list for both name selectors; `None` when the frequency did not change.
    pub names: Option<Vec<String>>,
}

/// Apply `event` to `state`.
///
/// A frequency change fetches the name list once (it feeds both selectors) and then
/// refreshes the data; a name change refreshes the data only. Names are kept across a
/// frequency change even if the new frequency does not offer them, in which case
/// the corresponding column comes back empty.
pub fn update<S>(source: &S, state: &SelectionState, event: Event) -> Result<Update>
where
    S: SeriesSource + ?Sized,
{
    let mut next = state.clone();
    let names = match event {
        Event::FrequencyChanged(index) => {
            next.freq = Frequency::from_index(index)?;
            info!("frequency changed to {}", next.freq.label());
            Some(source.list_series_names(next.freq.code())?)
        }
        Event::Name1Changed(name) => {
            info!("first series changed to {}", name);
            next.name1 = name;
            None
        }
        Event::Name2Changed(name) => {
            info!("second series changed to {}", name);
            next.name2 = name;
            None
        }
    };

    let table = build_table(source, next.freq.code(), &next.name1, &next.name2)?;
    Ok(Update {
        state: next,
        table,
        names,
    })
}

/// Session owner: selection, selector options and the plot's backing table.
pub struct Dashboard<S> {
    source: S,
    state: SelectionState,
    options: Vec<String>,
    table: SeriesTable,
}

impl<S: SeriesSource> Dashboard<S> {
    /// Fetch the name list and the table for `initial`.
    pub fn open(source: S, initial: SelectionState) -> Result<Self> {
        let options = source.list_series_names(initial.freq.code())?;
        let table = build_table(&source, initial.freq.code(), &initial.name1, &initial.name2)?;
        Ok(Self {
            source,
            state: initial,
            options,
            table,
        })
    }

    /// Run one update. On error nothing is committed: selection, options and table
    /// keep their previous values.
    pub fn handle(&mut self, event: Event) -> Result<()> {
        let Update {
            state,
            table,
            names,
        } = update(&self.source, &self.state, event)?;
        if let Some(names) = names {
            self.options = names;
        }
        self.state = state;
        self.table = table;
        Ok(())
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Options shared by both name selectors.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn table(&self) -> &SeriesTable {
        &self.table
    }

    pub fn title(&self) -> String {
        self.table.title()
    }
}
