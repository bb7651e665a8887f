pub mod basketball_api;
pub mod client;
pub mod endpoint;
pub mod football_api;
pub mod pacing;

pub use basketball_api::NcaaBasketballClient;
pub use client::FeedClient;
pub use endpoint::Endpoints;
pub use football_api::NcaaFootballClient;
pub use pacing::RequestPacing;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Privilege level of the API key, which selects the host path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessLevel {
    #[default]
    Trial,
    Production,
}

impl AccessLevel {
    pub fn marker(&self) -> &'static str {
        match self {
            AccessLevel::Trial => "t",
            AccessLevel::Production => "p",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "t" | "trial" => Ok(AccessLevel::Trial),
            "p" | "production" => Ok(AccessLevel::Production),
            other => Err(Error::config_error(format!("unknown access level: {}", other))),
        }
    }
}

/// Football divisions with a published hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionType {
    Fbs,
    Fcs,
    D2,
    D3,
    Naia,
    Uscaa,
}

impl DivisionType {
    pub const ALL: [DivisionType; 6] = [
        DivisionType::Fbs,
        DivisionType::Fcs,
        DivisionType::D2,
        DivisionType::D3,
        DivisionType::Naia,
        DivisionType::Uscaa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DivisionType::Fbs => "FBS",
            DivisionType::Fcs => "FCS",
            DivisionType::D2 => "D2",
            DivisionType::D3 => "D3",
            DivisionType::Naia => "NAIA",
            DivisionType::Uscaa => "USCAA",
        }
    }
}

impl fmt::Display for DivisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DivisionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DivisionType::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::config_error(format!("unknown division: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_level() {
        assert_eq!("trial".parse::<AccessLevel>().unwrap(), AccessLevel::Trial);
        assert_eq!("P".parse::<AccessLevel>().unwrap(), AccessLevel::Production);
        assert!("gold".parse::<AccessLevel>().is_err());
        assert_eq!(AccessLevel::default().marker(), "t");
    }

    #[test]
    fn test_division_type() {
        assert_eq!("fbs".parse::<DivisionType>().unwrap(), DivisionType::Fbs);
        assert_eq!("USCAA".parse::<DivisionType>().unwrap(), DivisionType::Uscaa);
        assert!("D4".parse::<DivisionType>().is_err());
        assert_eq!(DivisionType::Naia.to_string(), "NAIA");
    }
}
