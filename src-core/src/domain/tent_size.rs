//! Tent Size
//!
//! The closed set of frame tent sizes the crews carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entity::DomainError;

/// Frame tent footprint, width x length in feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TentSize {
    S30x30,
    S30x45,
    S30x60,
    S30x75,
    S40x40,
    S40x60,
    S40x80,
    S40x100,
}

impl TentSize {
    /// Every size in catalog order
    pub const ALL: [TentSize; 8] = [
        TentSize::S30x30,
        TentSize::S30x45,
        TentSize::S30x60,
        TentSize::S30x75,
        TentSize::S40x40,
        TentSize::S40x60,
        TentSize::S40x80,
        TentSize::S40x100,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TentSize::S30x30 => "30x30",
            TentSize::S30x45 => "30x45",
            TentSize::S30x60 => "30x60",
            TentSize::S30x75 => "30x75",
            TentSize::S40x40 => "40x40",
            TentSize::S40x60 => "40x60",
            TentSize::S40x80 => "40x80",
            TentSize::S40x100 => "40x100",
        }
    }

    /// Frame width in feet
    pub fn width(&self) -> u32 {
        match self {
            TentSize::S30x30 | TentSize::S30x45 | TentSize::S30x60 | TentSize::S30x75 => 30,
            TentSize::S40x40 | TentSize::S40x60 | TentSize::S40x80 | TentSize::S40x100 => 40,
        }
    }

    /// Frame length in feet
    pub fn length(&self) -> u32 {
        match self {
            TentSize::S30x30 => 30,
            TentSize::S30x45 => 45,
            TentSize::S30x60 | TentSize::S40x60 => 60,
            TentSize::S30x75 => 75,
            TentSize::S40x40 => 40,
            TentSize::S40x80 => 80,
            TentSize::S40x100 => 100,
        }
    }
}

impl fmt::Display for TentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TentSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TentSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSize(s.to_string()))
    }
}

impl TryFrom<String> for TentSize {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TentSize> for String {
    fn from(size: TentSize) -> Self {
        size.as_str().to_string()
    }
}
