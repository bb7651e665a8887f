pub mod basketball;
pub mod football;
pub mod hierarchy;

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub use hierarchy::{Conference, Division, LeagueHierarchy, Subdivision, Team};

/// Timestamp format used by every feed, e.g. `2014-08-23T19:30:00+00:00`
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Parse a raw feed timestamp
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, TIME_FORMAT).map_err(|source| Error::BadTimestamp {
        value: raw.to_string(),
        source,
    })
}

/// Decode a feed document body into its record type
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(quick_xml::de::from_reader(body)?)
}

/// Optional numeric attribute. The feed writes `""` for values that are not
/// known yet, which reads as `None`; other non-numeric text is still an error.
pub(crate) fn empty_as_none<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Render a time the way the feed writes it
pub fn format_timestamp(time: &DateTime<FixedOffset>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// The leagues covered by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum League {
    CollegeFootball,
    MensBasketball,
    WomensBasketball,
}

impl League {
    /// Path segment the provider uses for the league
    pub fn path_segment(&self) -> &'static str {
        match self {
            League::CollegeFootball => "ncaafb",
            League::MensBasketball => "ncaamb",
            League::WomensBasketball => "ncaawb",
        }
    }

    pub fn api_version(&self) -> u8 {
        match self {
            League::CollegeFootball => 1,
            League::MensBasketball | League::WomensBasketball => 3,
        }
    }

    /// Schedule types published for the league, in fetch order
    pub fn schedule_types(&self) -> &'static [ScheduleType] {
        match self {
            League::CollegeFootball => &[ScheduleType::Regular, ScheduleType::PostSeason],
            League::MensBasketball | League::WomensBasketball => &[
                ScheduleType::Regular,
                ScheduleType::ConferenceTournament,
                ScheduleType::PostSeason,
            ],
        }
    }
}

/// Which slice of a season's games to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleType {
    #[serde(rename = "reg")]
    Regular,
    #[serde(rename = "ct")]
    ConferenceTournament,
    #[serde(rename = "pst")]
    PostSeason,
}

impl ScheduleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleType::Regular => "reg",
            ScheduleType::ConferenceTournament => "ct",
            ScheduleType::PostSeason => "pst",
        }
    }
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reg" | "regular" => Ok(ScheduleType::Regular),
            "ct" | "conference-tournament" => Ok(ScheduleType::ConferenceTournament),
            "pst" | "postseason" => Ok(ScheduleType::PostSeason),
            other => Err(Error::config_error(format!("unknown schedule type: {}", other))),
        }
    }
}

/// Game status as published by the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    Created,
    InProgress,
    Halftime,
    Complete,
    Closed,
    Cancelled,
    Postponed,
    Delayed,
    Unnecessary,
    Other(String),
}

impl GameStatus {
    /// Final scores are published and will not change
    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Complete | GameStatus::Closed)
    }
}

impl From<&str> for GameStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "scheduled" => GameStatus::Scheduled,
            "created" => GameStatus::Created,
            "inprogress" => GameStatus::InProgress,
            "halftime" => GameStatus::Halftime,
            "complete" => GameStatus::Complete,
            "closed" => GameStatus::Closed,
            "cancelled" => GameStatus::Cancelled,
            "postponed" => GameStatus::Postponed,
            "delayed" => GameStatus::Delayed,
            "unnecessary" => GameStatus::Unnecessary,
            other => GameStatus::Other(other.to_string()),
        }
    }
}

/// A stadium or arena
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Venue {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@address", default)]
    pub address: String,
    #[serde(rename = "@city", default)]
    pub city: String,
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@zip", default)]
    pub zip: String,
    #[serde(rename = "@country", default)]
    pub country: String,
    #[serde(rename = "@capacity", default, deserialize_with = "empty_as_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "@surface", default)]
    pub surface: String,
    #[serde(rename = "@type", default)]
    pub venue_type: String,
}

/// Pointer to a related feed document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    #[serde(rename = "@rel", default)]
    pub rel: String,
    #[serde(rename = "@href", default)]
    pub href: String,
    #[serde(rename = "@type", default)]
    pub link_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Links {
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
}

impl Links {
    pub fn find(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }
}

/// Records that carry a feed id (games, boxscores)
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// A decoded schedule document, whatever its per-league shape
pub trait ScheduleFeed {
    type Game: Identified;

    /// All games in feed order
    fn games(&self) -> Vec<&Self::Game>;

    /// Every embedded venue in feed order, duplicates included
    fn venues(&self) -> Vec<&Venue>;
}

/// A fetched schedule paired with the parameters used to fetch it, since the
/// feed does not echo them back.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule<F> {
    pub season: String,
    pub schedule_type: ScheduleType,
    pub feed: F,
}

impl<F: ScheduleFeed> Schedule<F> {
    pub fn new(season: impl Into<String>, schedule_type: ScheduleType, feed: F) -> Self {
        Self {
            season: season.into(),
            schedule_type,
            feed,
        }
    }

    pub fn games(&self) -> Vec<&F::Game> {
        self.feed.games()
    }

    pub fn venues(&self) -> Vec<&Venue> {
        self.feed.venues()
    }

    pub fn contains_game(&self, game_id: &str) -> bool {
        self.feed.games().iter().any(|g| g.id() == game_id)
    }

    /// Candidates whose id matches a game in this schedule, in candidate order
    pub fn filter_games<'a, G: Identified>(&self, candidates: &'a [G]) -> Vec<&'a G> {
        let games = self.feed.games();
        candidates
            .iter()
            .filter(|c| games.iter().any(|g| g.id() == c.id()))
            .collect()
    }

    /// Boxscores belonging to a game in this schedule, in candidate order
    pub fn filter_boxscores<'a, B: Identified>(&self, candidates: &'a [B]) -> Vec<&'a B> {
        self.filter_games(candidates)
    }
}

/// Score lookups shared by every boxscore shape
pub trait Scoreboard {
    fn home_team_id(&self) -> &str;
    fn away_team_id(&self) -> &str;

    /// Points recorded for a team, if the team is listed and has scoring
    fn team_points(&self, team_id: &str) -> Option<u32>;

    fn team_score(&self, team_id: &str) -> Result<u32> {
        self.team_points(team_id).ok_or_else(|| Error::ScoreNotFound {
            team_id: team_id.to_string(),
        })
    }

    fn home_team_score(&self) -> Result<u32> {
        self.team_score(self.home_team_id())
    }

    fn away_team_score(&self) -> Result<u32> {
        self.team_score(self.away_team_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, PartialEq)]
    struct Candidate(&'static str);

    impl Identified for Candidate {
        fn id(&self) -> &str {
            self.0
        }
    }

    struct FlatFeed(Vec<Candidate>);

    impl ScheduleFeed for FlatFeed {
        type Game = Candidate;

        fn games(&self) -> Vec<&Candidate> {
            self.0.iter().collect()
        }

        fn venues(&self) -> Vec<&Venue> {
            Vec::new()
        }
    }

    #[test]
    fn test_parse_timestamp() {
        let time = parse_timestamp("2014-08-23T19:30:00+00:00").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2014, 8, 23, 19, 30, 0).unwrap());

        let time = parse_timestamp("2014-11-09T14:22:00-05:00").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2014, 11, 9, 19, 22, 0).unwrap());
        assert_eq!(format_timestamp(&time), "2014-11-09T14:22:00-05:00");
    }

    #[test]
    fn test_decode_rejects_malformed_xml() {
        let venue: Venue = decode(br#"<venue id="v1" name="Alamodome" capacity="65000"/>"#).unwrap();
        assert_eq!(venue.capacity, Some(65000));

        assert!(matches!(
            decode::<Venue>(b"<venue id=\"v1\" name=\"Alamodome\""),
            Err(Error::Decode(_))
        ));
        assert!(matches!(
            decode::<Venue>(br#"<venue id="v1" capacity="lots"/>"#),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_empty_numeric_attribute_is_absent() {
        let venue: Venue = decode(br#"<venue id="v1" name="TBD" capacity=""/>"#).unwrap();
        assert_eq!(venue.capacity, None);

        let venue: Venue = decode(br#"<venue id="v1" name="TBD" capacity=" 8600 "/>"#).unwrap();
        assert_eq!(venue.capacity, Some(8600));

        let venue: Venue = decode(br#"<venue id="v1" name="TBD"/>"#).unwrap();
        assert_eq!(venue.capacity, None);
    }

    #[test]
    fn test_bad_timestamp() {
        let err = parse_timestamp("2014-08-23 19:30").unwrap_err();
        assert!(matches!(err, Error::BadTimestamp { ref value, .. } if value == "2014-08-23 19:30"));
        assert!(err.is_recoverable());

        assert!(parse_timestamp("2014-08-23T19:30:00Z").is_err());
    }

    #[test]
    fn test_filter_games_keeps_candidate_order_and_duplicates() {
        let schedule = Schedule::new(
            "2014",
            ScheduleType::Regular,
            FlatFeed(vec![Candidate("a"), Candidate("b"), Candidate("c")]),
        );
        let candidates = vec![
            Candidate("c"),
            Candidate("x"),
            Candidate("a"),
            Candidate("c"),
        ];

        let filtered = schedule.filter_games(&candidates);
        assert_eq!(
            filtered,
            vec![&Candidate("c"), &Candidate("a"), &Candidate("c")]
        );
        assert_eq!(schedule.filter_boxscores(&candidates).len(), 3);
        assert!(schedule.contains_game("b"));
        assert!(!schedule.contains_game("x"));
    }

    #[test]
    fn test_schedule_type_parsing() {
        assert_eq!("REG".parse::<ScheduleType>().unwrap(), ScheduleType::Regular);
        assert_eq!("ct".parse::<ScheduleType>().unwrap(), ScheduleType::ConferenceTournament);
        assert_eq!("postseason".parse::<ScheduleType>().unwrap(), ScheduleType::PostSeason);
        assert!("playoffs".parse::<ScheduleType>().is_err());
        assert_eq!(ScheduleType::PostSeason.to_string(), "pst");
    }

    #[test]
    fn test_game_status() {
        assert_eq!(GameStatus::from("closed"), GameStatus::Closed);
        assert!(GameStatus::from("complete").is_final());
        assert!(!GameStatus::from("inprogress").is_final());
        assert_eq!(
            GameStatus::from("time-tbd"),
            GameStatus::Other("time-tbd".to_string())
        );
    }

    #[test]
    fn test_league_schedule_types() {
        assert_eq!(League::CollegeFootball.schedule_types().len(), 2);
        assert_eq!(
            League::WomensBasketball.schedule_types(),
            &[
                ScheduleType::Regular,
                ScheduleType::ConferenceTournament,
                ScheduleType::PostSeason
            ]
        );
        assert_eq!(League::MensBasketball.path_segment(), "ncaamb");
    }
}
