use super::{
    parse_timestamp, GameStatus, Identified, Links, Link, ScheduleFeed, ScheduleType, Scoreboard,
    Venue,
};
use crate::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Broadcast {
    #[serde(rename = "@network", default)]
    pub network: String,
    #[serde(rename = "@satellite", default)]
    pub satellite: String,
    #[serde(rename = "@internet", default)]
    pub internet: String,
    #[serde(rename = "@cable", default)]
    pub cable: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wind {
    #[serde(rename = "@speed", default)]
    pub speed: String,
    #[serde(rename = "@direction", default)]
    pub direction: String,
}

/// Game-time weather. Readings are kept as published.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weather {
    #[serde(rename = "@temperature", default)]
    pub temperature: String,
    #[serde(rename = "@condition", default)]
    pub condition: String,
    #[serde(rename = "@humidity", default)]
    pub humidity: String,
    #[serde(default)]
    pub wind: Wind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Game {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@scheduled", default)]
    pub scheduled: String,
    #[serde(rename = "@coverage", default)]
    pub coverage: String,
    #[serde(rename = "@home_rotation", default)]
    pub home_rotation: String,
    #[serde(rename = "@away_rotation", default)]
    pub away_rotation: String,
    #[serde(rename = "@home")]
    pub home_team_id: String,
    #[serde(rename = "@away")]
    pub away_team_id: String,
    #[serde(rename = "@status", default)]
    pub status: String,
    pub venue: Option<Venue>,
    pub weather: Option<Weather>,
    pub broadcast: Option<Broadcast>,
    #[serde(default)]
    pub links: Links,
}

impl Game {
    pub fn scheduled_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.scheduled)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.status.as_str())
    }

    /// Related document by relation, e.g. "boxscore" or "pbp"
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.find(rel)
    }
}

impl Identified for Game {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Week {
    #[serde(rename = "@week")]
    pub week: String,
    #[serde(rename = "game", default)]
    pub games: Vec<Game>,
}

/// Root of a football schedule document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Season {
    #[serde(rename = "@season", default)]
    pub season: String,
    #[serde(rename = "@type", default)]
    pub season_type: String,
    #[serde(rename = "week", default)]
    pub weeks: Vec<Week>,
}

impl Season {
    /// Games with the week they were listed under
    pub fn games_by_week(&self) -> impl Iterator<Item = (&Week, &Game)> {
        self.weeks
            .iter()
            .flat_map(|w| w.games.iter().map(move |g| (w, g)))
    }
}

impl ScheduleFeed for Season {
    type Game = Game;

    fn games(&self) -> Vec<&Game> {
        self.weeks.iter().flat_map(|w| w.games.iter()).collect()
    }

    fn venues(&self) -> Vec<&Venue> {
        self.weeks
            .iter()
            .flat_map(|w| w.games.iter())
            .filter_map(|g| g.venue.as_ref())
            .collect()
    }
}

/// Parameters that identify a football boxscore request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxscoreKey {
    pub year: String,
    pub schedule_type: ScheduleType,
    pub week: String,
    pub away_team_id: String,
    pub home_team_id: String,
}

impl BoxscoreKey {
    pub fn new(
        year: impl Into<String>,
        schedule_type: ScheduleType,
        week: impl Into<String>,
        away_team_id: impl Into<String>,
        home_team_id: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            schedule_type,
            week: week.into(),
            away_team_id: away_team_id.into(),
            home_team_id: home_team_id.into(),
        }
    }

    /// Keys for every game in a schedule, in feed order
    pub fn for_schedule(schedule: &super::Schedule<Season>) -> Vec<BoxscoreKey> {
        schedule
            .feed
            .games_by_week()
            .map(|(week, game)| {
                BoxscoreKey::new(
                    schedule.season.as_str(),
                    schedule.schedule_type,
                    week.week.as_str(),
                    game.away_team_id.as_str(),
                    game.home_team_id.as_str(),
                )
            })
            .collect()
    }
}

/// Root of a football boxscore document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Boxscore {
    /// Request parameters, attached after fetching
    #[serde(skip)]
    pub key: Option<BoxscoreKey>,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@scheduled", default)]
    pub scheduled: String,
    #[serde(rename = "@home")]
    pub home_team_id: String,
    #[serde(rename = "@away")]
    pub away_team_id: String,
    #[serde(rename = "@status", default)]
    pub status: String,
    #[serde(rename = "@quarter", default, deserialize_with = "super::empty_as_none")]
    pub quarter: Option<u32>,
    #[serde(rename = "@clock", default)]
    pub clock: String,
    #[serde(rename = "@completed")]
    pub completed: Option<String>,
    #[serde(rename = "team", default)]
    pub teams: Vec<BoxscoreTeam>,
    pub scoring_drives: Option<ScoringDrives>,
}

impl Boxscore {
    pub fn scheduled_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.scheduled)
    }

    /// Completion time; `None` until the game has finished
    pub fn completed_at(&self) -> Option<Result<DateTime<FixedOffset>>> {
        self.completed.as_deref().map(parse_timestamp)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.status.as_str())
    }

    pub fn home_team(&self) -> Option<&BoxscoreTeam> {
        self.teams.iter().find(|t| t.id == self.home_team_id)
    }

    pub fn away_team(&self) -> Option<&BoxscoreTeam> {
        self.teams.iter().find(|t| t.id == self.away_team_id)
    }

    /// Scoring plays across every drive, in feed order
    pub fn scoring_plays(&self) -> Vec<&ScoringPlay> {
        self.scoring_drives
            .iter()
            .flat_map(|d| d.drives.iter())
            .flat_map(|d| d.scores.iter())
            .collect()
    }
}

impl Identified for Boxscore {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Scoreboard for Boxscore {
    fn home_team_id(&self) -> &str {
        &self.home_team_id
    }

    fn away_team_id(&self) -> &str {
        &self.away_team_id
    }

    fn team_points(&self, team_id: &str) -> Option<u32> {
        self.teams
            .iter()
            .filter(|t| t.id == team_id)
            .find_map(|t| t.scoring.as_ref())
            .map(|s| s.points)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoxscoreTeam {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@market", default)]
    pub market: String,
    #[serde(rename = "@remaining_challenges", default, deserialize_with = "super::empty_as_none")]
    pub remaining_challenges: Option<u32>,
    #[serde(rename = "@remaining_timeouts", default, deserialize_with = "super::empty_as_none")]
    pub remaining_timeouts: Option<u32>,
    pub scoring: Option<TeamScoring>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamScoring {
    #[serde(rename = "@points")]
    pub points: u32,
    #[serde(rename = "quarter", default)]
    pub quarters: Vec<QuarterScore>,
}

impl TeamScoring {
    pub fn quarter(&self, number: u32) -> Option<u32> {
        self.quarters
            .iter()
            .find(|q| q.number == number)
            .map(|q| q.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct QuarterScore {
    #[serde(rename = "@number")]
    pub number: u32,
    #[serde(rename = "@points")]
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScoringDrives {
    #[serde(rename = "drive", default)]
    pub drives: Vec<ScoringDrive>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoringDrive {
    #[serde(rename = "@sequence")]
    pub sequence: u32,
    #[serde(rename = "@clock", default)]
    pub clock: String,
    #[serde(rename = "@quarter")]
    pub quarter: u32,
    #[serde(rename = "@team", default)]
    pub team: String,
    #[serde(rename = "score", default)]
    pub scores: Vec<ScoringPlay>,
}

impl ScoringDrive {
    pub fn points(&self) -> u32 {
        self.scores.iter().map(|s| s.points).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoringPlay {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type", default)]
    pub score_type: String,
    #[serde(rename = "@clock", default)]
    pub clock: String,
    #[serde(rename = "@quarter")]
    pub quarter: u32,
    #[serde(rename = "@points")]
    pub points: u32,
    #[serde(rename = "@team", default)]
    pub team: String,
    #[serde(rename = "game-score")]
    pub game_score: Option<GameScore>,
    pub summary: Option<String>,
    pub links: Option<Links>,
}

impl ScoringPlay {
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().map(str::trim)
    }
}

/// Running score right after a scoring play
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameScore {
    #[serde(rename = "team", default)]
    pub teams: Vec<GameScoreTeam>,
}

impl GameScore {
    pub fn points_for(&self, team_id: &str) -> Option<u32> {
        self.teams.iter().find(|t| t.id == team_id).map(|t| t.points)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameScoreTeam {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@points")]
    pub points: u32,
}
