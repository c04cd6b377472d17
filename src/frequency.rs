//! Frequency catalog: the four fixed frequencies offered by the API, in display order.
//!
//! Each frequency has a human label (for the radio control), a single-letter code
//! (for the API) and an index (position in the radio control).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Annual,
    Quarterly,
    Monthly,
    Daily,
}

impl Frequency {
    /// All frequencies in radio-button order.
    pub const ALL: [Frequency; 4] = [
        Frequency::Annual,
        Frequency::Quarterly,
        Frequency::Monthly,
        Frequency::Daily,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Annual => "Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Daily => "Daily",
        }
    }

    /// One-letter code used by the API (`a`, `q`, `m`, `d`).
    pub fn code(self) -> &'static str {
        match self {
            Frequency::Annual => "a",
            Frequency::Quarterly => "q",
            Frequency::Monthly => "m",
            Frequency::Daily => "d",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::invalid_choice(index))
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or_else(|| Error::invalid_choice(code))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Accepts either the code (`q`) or the label (`Quarterly`, case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::from_code(s).or_else(|_| {
            Self::ALL
                .into_iter()
                .find(|f| f.label().eq_ignore_ascii_case(s))
                .ok_or_else(|| Error::invalid_choice(s))
        })
    }
}

/// One-letter code for the radio index `choice` (0..4).
pub fn frequency_code_of(choice: usize) -> Result<&'static str> {
    Frequency::from_index(choice).map(Frequency::code)
}

/// Radio index for a one-letter `code`.
pub fn index_of(code: &str) -> Result<usize> {
    Frequency::from_code(code).map(Frequency::index)
}

/// Labels in radio-button order: `["Annual", "Quarterly", "Monthly", "Daily"]`.
pub fn descriptions() -> [&'static str; 4] {
    Frequency::ALL.map(Frequency::label)
}
