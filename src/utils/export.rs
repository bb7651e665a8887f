use crate::models::basketball::LeagueSchedule;
use crate::models::football::Season;
use crate::models::{Schedule, ScheduleType};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;

/// One scheduled game, flattened for export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRow {
    pub season: String,
    pub schedule_type: ScheduleType,
    /// Football only
    pub week: Option<String>,
    pub game_id: String,
    pub status: String,
    pub scheduled: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub venue: Option<String>,
}

pub fn football_rows(schedule: &Schedule<Season>) -> Vec<GameRow> {
    schedule
        .feed
        .games_by_week()
        .map(|(week, game)| GameRow {
            season: schedule.season.clone(),
            schedule_type: schedule.schedule_type,
            week: Some(week.week.clone()),
            game_id: game.id.clone(),
            status: game.status.clone(),
            scheduled: game.scheduled.clone(),
            home_team_id: game.home_team_id.clone(),
            away_team_id: game.away_team_id.clone(),
            venue: game.venue.as_ref().map(|v| v.name.clone()),
        })
        .collect()
}

pub fn basketball_rows(schedule: &Schedule<LeagueSchedule>) -> Vec<GameRow> {
    schedule
        .games()
        .into_iter()
        .map(|game| GameRow {
            season: schedule.season.clone(),
            schedule_type: schedule.schedule_type,
            week: None,
            game_id: game.id.clone(),
            status: game.status.clone(),
            scheduled: game.scheduled.clone(),
            home_team_id: game.home_team_id.clone(),
            away_team_id: game.away_team_id.clone(),
            venue: game.venue.as_ref().map(|v| v.name.clone()),
        })
        .collect()
}

/// Write rows as CSV with a header line
pub fn write_rows_csv<W: Write>(rows: &[GameRow], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row).context("Failed to write CSV row")?;
    }
    csv.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Save rows to a CSV file
pub fn save_rows_to_csv(rows: &[GameRow], filename: &str) -> Result<()> {
    let file = File::create(filename).context("Failed to create CSV file")?;
    write_rows_csv(rows, file)
}

pub fn rows_to_json(rows: &[GameRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("Failed to serialize game rows")
}
