//! Error types for the sportsdata client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("Failed to decode XML response: {0}")]
    Decode(#[from] quick_xml::DeError),

    #[error("Score not found for team {team_id}")]
    ScoreNotFound { team_id: String },

    #[error("Bad timestamp {value:?}: {source}")]
    BadTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid URL {url:?}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Conditions a caller is expected to handle as normal outcomes, such as
    /// a game that has not been played yet.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ScoreNotFound { .. } | Error::BadTimestamp { .. })
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let err = Error::ScoreNotFound {
            team_id: "KST".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Score not found for team KST");

        let err = Error::UnexpectedStatus {
            status: 403,
            endpoint: "https://api.sportsdatallc.org/ncaafb-t1/teams/FBS/hierarchy.xml"
                .to_string(),
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("403"));

        assert!(!Error::config_error("missing key").is_recoverable());
    }
}
