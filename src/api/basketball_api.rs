use super::{AccessLevel, FeedClient};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::basketball::{Boxscore, LeagueSchedule};
use crate::models::{Identified, League, LeagueHierarchy, Schedule, ScheduleType};

/// Men's (ncaamb) or women's (ncaawb) college basketball feed client
pub struct NcaaBasketballClient {
    feed: FeedClient,
}

impl NcaaBasketballClient {
    pub fn mens(api_key: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            feed: FeedClient::new(
                &ClientConfig::new(api_key, access_level),
                League::MensBasketball,
            ),
        }
    }

    pub fn womens(api_key: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            feed: FeedClient::new(
                &ClientConfig::new(api_key, access_level),
                League::WomensBasketball,
            ),
        }
    }

    pub fn with_config(config: &ClientConfig, league: League) -> Result<Self> {
        if league == League::CollegeFootball {
            return Err(Error::config_error(
                "college football is served by NcaaFootballClient",
            ));
        }
        Ok(Self {
            feed: FeedClient::new(config, league),
        })
    }

    pub fn league(&self) -> League {
        self.feed.endpoints().league()
    }

    /// Fetch the division/conference/team hierarchy
    pub async fn hierarchy(&self) -> Result<LeagueHierarchy> {
        let url = self.feed.endpoints().basketball_hierarchy()?;
        self.feed.fetch(url).await
    }

    /// Fetch one season's schedule of the given type
    pub async fn schedule(
        &self,
        season: &str,
        schedule_type: ScheduleType,
    ) -> Result<Schedule<LeagueSchedule>> {
        let url = self
            .feed
            .endpoints()
            .basketball_schedule(season, schedule_type)?;
        let league: LeagueSchedule = self.feed.fetch(url).await?;
        Ok(Schedule::new(season, schedule_type, league))
    }

    /// Fetch regular, conference tournament and postseason schedules for each
    /// season, in that order
    pub async fn all_schedules<S: AsRef<str>>(
        &self,
        seasons: &[S],
    ) -> Result<Vec<Schedule<LeagueSchedule>>> {
        let league = self.league();
        let requests = seasons.iter().flat_map(|season| {
            league
                .schedule_types()
                .iter()
                .map(move |schedule_type| (season.as_ref(), *schedule_type))
        });

        let mut schedules = Vec::new();
        for (i, (season, schedule_type)) in requests.enumerate() {
            self.feed.pacing().before_request(i).await;
            schedules.push(self.schedule(season, schedule_type).await?);
        }
        Ok(schedules)
    }

    pub async fn boxscore(&self, game_id: &str) -> Result<Boxscore> {
        let url = self.feed.endpoints().basketball_boxscore(game_id)?;
        self.feed.fetch(url).await
    }

    pub async fn boxscores<S: AsRef<str>>(&self, game_ids: &[S]) -> Result<Vec<Boxscore>> {
        let mut boxscores = Vec::with_capacity(game_ids.len());
        for (i, game_id) in game_ids.iter().enumerate() {
            self.feed.pacing().before_request(i).await;
            boxscores.push(self.boxscore(game_id.as_ref()).await?);
        }
        Ok(boxscores)
    }

    /// Fetch the boxscore of every game in a schedule
    pub async fn boxscores_for_schedule(
        &self,
        schedule: &Schedule<LeagueSchedule>,
    ) -> Result<Vec<Boxscore>> {
        let ids: Vec<&str> = schedule.games().into_iter().map(|g| g.id()).collect();
        self.boxscores(&ids).await
    }
}
