//! User Selections
//!
//! Ballast type and the optional walls/lighting add-ons, each of which
//! may still be unset on a first visit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entity::DomainError;

/// How the frame is held down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallastType {
    Stakes,
    Concrete,
}

impl BallastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallastType::Stakes => "stakes",
            BallastType::Concrete => "concrete",
        }
    }

    /// Id of the catalog section that belongs to this ballast
    pub fn section_id(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for BallastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BallastType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stakes" => Ok(BallastType::Stakes),
            "concrete" => Ok(BallastType::Concrete),
            other => Err(DomainError::InvalidSelection(format!(
                "ballast type must be stakes or concrete, got {:?}",
                other
            ))),
        }
    }
}

/// Yes/no answer for an optional add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::Yes => "yes",
            Toggle::No => "no",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Toggle::Yes)
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Toggle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Toggle::Yes),
            "no" => Ok(Toggle::No),
            other => Err(DomainError::InvalidSelection(format!(
                "expected yes or no, got {:?}",
                other
            ))),
        }
    }
}

/// Per-size configuration chosen by the crew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    pub ballast_type: Option<BallastType>,
    pub walls_option: Option<Toggle>,
    pub lighting_option: Option<Toggle>,
}

impl Selections {
    pub fn new(
        ballast_type: Option<BallastType>,
        walls_option: Option<Toggle>,
        lighting_option: Option<Toggle>,
    ) -> Self {
        Self {
            ballast_type,
            walls_option,
            lighting_option,
        }
    }

    pub fn with_ballast(ballast_type: BallastType) -> Self {
        Self {
            ballast_type: Some(ballast_type),
            ..Default::default()
        }
    }

    pub fn wants_walls(&self) -> bool {
        self.walls_option.is_some_and(|t| t.is_yes())
    }

    pub fn wants_lighting(&self) -> bool {
        self.lighting_option.is_some_and(|t| t.is_yes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ballast_parse() {
        assert_eq!("stakes".parse::<BallastType>().unwrap(), BallastType::Stakes);
        assert_eq!("concrete".parse::<BallastType>().unwrap(), BallastType::Concrete);
        assert!(matches!(
            "Stakes".parse::<BallastType>(),
            Err(DomainError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_toggle_parse() {
        assert_eq!("yes".parse::<Toggle>().unwrap(), Toggle::Yes);
        assert_eq!("no".parse::<Toggle>().unwrap(), Toggle::No);
        assert!("maybe".parse::<Toggle>().is_err());
    }

    #[test]
    fn test_unset_options_are_not_wanted() {
        let selections = Selections::default();
        assert!(!selections.wants_walls());
        assert!(!selections.wants_lighting());

        let selections = Selections::new(None, Some(Toggle::No), Some(Toggle::Yes));
        assert!(!selections.wants_walls());
        assert!(selections.wants_lighting());
    }
}
