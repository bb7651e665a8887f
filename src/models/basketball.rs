//! Men's and women's college basketball documents. Both leagues publish the
//! same schema, so one set of records serves both.

use super::hierarchy::{Division, Team};
use super::{parse_timestamp, GameStatus, Identified, ScheduleFeed, Scoreboard, Venue};
use crate::error::Result;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Home or away side as listed on a scheduled game
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameTeam {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@alias", default)]
    pub alias: String,
}

impl GameTeam {
    pub fn to_team(&self) -> Team {
        Team {
            id: self.id.clone(),
            name: self.name.clone(),
            market: String::new(),
            alias: self.alias.clone(),
            coverage: None,
            venue: None,
            conference_id: None,
            subdivision_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Game {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@status", default)]
    pub status: String,
    #[serde(rename = "@coverage", default)]
    pub coverage: String,
    #[serde(rename = "@home_team")]
    pub home_team_id: String,
    #[serde(rename = "@away_team")]
    pub away_team_id: String,
    #[serde(rename = "@scheduled", default)]
    pub scheduled: String,
    pub home: Option<GameTeam>,
    pub away: Option<GameTeam>,
    pub venue: Option<Venue>,
}

impl Game {
    pub fn scheduled_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.scheduled)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.status.as_str())
    }
}

impl Identified for Game {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Games {
    #[serde(rename = "game", default)]
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonSchedule {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@year", default)]
    pub year: String,
    #[serde(rename = "@type", default)]
    pub season_type: String,
    #[serde(default)]
    pub games: Games,
}

/// Root of a basketball schedule document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeagueSchedule {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@alias", default)]
    pub alias: String,
    #[serde(rename = "division", default)]
    pub divisions: Vec<Division>,
    #[serde(rename = "season-schedule")]
    pub season_schedule: Option<SeasonSchedule>,
}

impl ScheduleFeed for LeagueSchedule {
    type Game = Game;

    fn games(&self) -> Vec<&Game> {
        self.season_schedule
            .iter()
            .flat_map(|s| s.games.games.iter())
            .collect()
    }

    /// Team venues from any listed divisions, then game venues. The order is
    /// fixed regardless of where the divisions sit in the document.
    fn venues(&self) -> Vec<&Venue> {
        let mut venues: Vec<&Venue> = self.divisions.iter().flat_map(|d| d.venues()).collect();
        venues.extend(self.games().into_iter().filter_map(|g| g.venue.as_ref()));
        venues
    }
}

/// Root of a basketball boxscore document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Boxscore {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@status", default)]
    pub status: String,
    #[serde(rename = "@coverage", default)]
    pub coverage: String,
    #[serde(rename = "@home_team")]
    pub home_team_id: String,
    #[serde(rename = "@away_team")]
    pub away_team_id: String,
    #[serde(rename = "@scheduled", default)]
    pub scheduled: String,
    #[serde(rename = "@attendance", default, deserialize_with = "super::empty_as_none")]
    pub attendance: Option<u32>,
    #[serde(rename = "@lead_changes", default, deserialize_with = "super::empty_as_none")]
    pub lead_changes: Option<u32>,
    #[serde(rename = "@times_tied", default, deserialize_with = "super::empty_as_none")]
    pub times_tied: Option<u32>,
    /// Current half of a game in progress
    #[serde(rename = "@half", default, deserialize_with = "super::empty_as_none")]
    pub half: Option<u32>,
    #[serde(rename = "team", default)]
    pub teams: Vec<BoxscoreTeam>,
}

impl Boxscore {
    pub fn scheduled_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.scheduled)
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
            .find_map(|t| t.points)
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
    #[serde(rename = "@points", default, deserialize_with = "super::empty_as_none")]
    pub points: Option<u32>,
    #[serde(rename = "@rank", default, deserialize_with = "super::empty_as_none")]
    pub rank: Option<u32>,
    pub scoring: Option<TeamScoring>,
    pub leaders: Option<Leaders>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamScoring {
    #[serde(rename = "half", default)]
    pub halves: Vec<HalfScore>,
}

impl TeamScoring {
    pub fn half(&self, number: u32) -> Option<u32> {
        self.halves
            .iter()
            .find(|h| h.number == number)
            .map(|h| h.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HalfScore {
    #[serde(rename = "@number")]
    pub number: u32,
    #[serde(rename = "@sequence", default, deserialize_with = "super::empty_as_none")]
    pub sequence: Option<u32>,
    #[serde(rename = "@points")]
    pub points: u32,
}

/// Team leaders by category; ties list more than one player
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Leaders {
    pub points: Option<LeaderCategory>,
    pub rebounds: Option<LeaderCategory>,
    pub assists: Option<LeaderCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderCategory {
    #[serde(rename = "player", default)]
    pub players: Vec<LeaderPlayer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaderPlayer {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@full_name", default)]
    pub full_name: String,
    #[serde(rename = "@position", default)]
    pub position: String,
    #[serde(rename = "@jersey_number", default)]
    pub jersey_number: String,
    pub statistics: Option<PlayerStatistics>,
}

/// Box line for a player. Counts are integers, percentages and ratios are
/// floats, minutes stay as published ("35:12").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerStatistics {
    #[serde(rename = "@minutes", default)]
    pub minutes: String,
    #[serde(rename = "@field_goals_made", default, deserialize_with = "super::empty_as_none")]
    pub field_goals_made: Option<u32>,
    #[serde(rename = "@field_goals_att", default, deserialize_with = "super::empty_as_none")]
    pub field_goals_att: Option<u32>,
    #[serde(rename = "@field_goals_pct", default, deserialize_with = "super::empty_as_none")]
    pub field_goals_pct: Option<f64>,
    #[serde(rename = "@three_points_made", default, deserialize_with = "super::empty_as_none")]
    pub three_points_made: Option<u32>,
    #[serde(rename = "@three_points_att", default, deserialize_with = "super::empty_as_none")]
    pub three_points_att: Option<u32>,
    #[serde(rename = "@three_points_pct", default, deserialize_with = "super::empty_as_none")]
    pub three_points_pct: Option<f64>,
    #[serde(rename = "@two_points_made", default, deserialize_with = "super::empty_as_none")]
    pub two_points_made: Option<u32>,
    #[serde(rename = "@two_points_att", default, deserialize_with = "super::empty_as_none")]
    pub two_points_att: Option<u32>,
    #[serde(rename = "@two_points_pct", default, deserialize_with = "super::empty_as_none")]
    pub two_points_pct: Option<f64>,
    #[serde(rename = "@free_throws_made", default, deserialize_with = "super::empty_as_none")]
    pub free_throws_made: Option<u32>,
    #[serde(rename = "@free_throws_att", default, deserialize_with = "super::empty_as_none")]
    pub free_throws_att: Option<u32>,
    #[serde(rename = "@free_throws_pct", default, deserialize_with = "super::empty_as_none")]
    pub free_throws_pct: Option<f64>,
    #[serde(rename = "@offensive_rebounds", default, deserialize_with = "super::empty_as_none")]
    pub offensive_rebounds: Option<u32>,
    #[serde(rename = "@defensive_rebounds", default, deserialize_with = "super::empty_as_none")]
    pub defensive_rebounds: Option<u32>,
    #[serde(rename = "@rebounds", default, deserialize_with = "super::empty_as_none")]
    pub rebounds: Option<u32>,
    #[serde(rename = "@assists", default, deserialize_with = "super::empty_as_none")]
    pub assists: Option<u32>,
    #[serde(rename = "@turnovers", default, deserialize_with = "super::empty_as_none")]
    pub turnovers: Option<u32>,
    #[serde(rename = "@steals", default, deserialize_with = "super::empty_as_none")]
    pub steals: Option<u32>,
    #[serde(rename = "@blocks", default, deserialize_with = "super::empty_as_none")]
    pub blocks: Option<u32>,
    #[serde(rename = "@assists_turnover_ratio", default, deserialize_with = "super::empty_as_none")]
    pub assists_turnover_ratio: Option<f64>,
    #[serde(rename = "@personal_fouls", default, deserialize_with = "super::empty_as_none")]
    pub personal_fouls: Option<u32>,
    #[serde(rename = "@tech_fouls", default, deserialize_with = "super::empty_as_none")]
    pub tech_fouls: Option<u32>,
    #[serde(rename = "@points", default, deserialize_with = "super::empty_as_none")]
    pub points: Option<u32>,
}
