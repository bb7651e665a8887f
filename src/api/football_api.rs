use super::{AccessLevel, DivisionType, FeedClient};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::football::{Boxscore, BoxscoreKey, Season};
use crate::models::{Division, League, Schedule, ScheduleType};

/// College football (ncaafb) feed client
pub struct NcaaFootballClient {
    feed: FeedClient,
}

impl NcaaFootballClient {
    pub fn new(api_key: impl Into<String>, access_level: AccessLevel) -> Self {
        Self::with_config(&ClientConfig::new(api_key, access_level))
    }

    pub fn with_config(config: &ClientConfig) -> Self {
        Self {
            feed: FeedClient::new(config, League::CollegeFootball),
        }
    }

    /// Fetch the conference/subdivision/team hierarchy of one division
    pub async fn division(&self, division: DivisionType) -> Result<Division> {
        let url = self.feed.endpoints().football_hierarchy(division)?;
        self.feed.fetch(url).await
    }

    /// Fetch every division's hierarchy, pacing between requests
    pub async fn all_divisions(&self) -> Result<Vec<Division>> {
        let mut divisions = Vec::new();
        for (i, division) in DivisionType::ALL.into_iter().enumerate() {
            self.feed.pacing().before_request(i).await;
            divisions.push(self.division(division).await?);
        }
        Ok(divisions)
    }

    /// Fetch one season's schedule of the given type
    pub async fn schedule(&self, year: &str, schedule_type: ScheduleType) -> Result<Schedule<Season>> {
        let url = self.feed.endpoints().football_schedule(year, schedule_type)?;
        let season: Season = self.feed.fetch(url).await?;
        Ok(Schedule::new(year, schedule_type, season))
    }

    /// Fetch regular and postseason schedules for each year, in that order
    pub async fn all_schedules<S: AsRef<str>>(&self, years: &[S]) -> Result<Vec<Schedule<Season>>> {
        let requests = years.iter().flat_map(|year| {
            League::CollegeFootball
                .schedule_types()
                .iter()
                .map(move |schedule_type| (year.as_ref(), *schedule_type))
        });

        let mut schedules = Vec::new();
        for (i, (year, schedule_type)) in requests.enumerate() {
            self.feed.pacing().before_request(i).await;
            schedules.push(self.schedule(year, schedule_type).await?);
        }
        Ok(schedules)
    }

    /// Fetch one game's boxscore; the key is attached to the result
    pub async fn boxscore(&self, key: &BoxscoreKey) -> Result<Boxscore> {
        let url = self.feed.endpoints().football_boxscore(key)?;
        let mut boxscore: Boxscore = self.feed.fetch(url).await?;
        boxscore.key = Some(key.clone());
        Ok(boxscore)
    }

    pub async fn boxscores(&self, keys: &[BoxscoreKey]) -> Result<Vec<Boxscore>> {
        let mut boxscores = Vec::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            self.feed.pacing().before_request(i).await;
            boxscores.push(self.boxscore(key).await?);
        }
        Ok(boxscores)
    }

    /// Fetch the boxscore of every game in a schedule
    pub async fn boxscores_for_schedule(&self, schedule: &Schedule<Season>) -> Result<Vec<Boxscore>> {
        self.boxscores(&BoxscoreKey::for_schedule(schedule)).await
    }
}
