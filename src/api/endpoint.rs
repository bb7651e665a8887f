use super::{AccessLevel, DivisionType};
use crate::error::{Error, Result};
use crate::models::football::BoxscoreKey;
use crate::models::{League, ScheduleType};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.sportsdatallc.org";

/// Builds request URLs for one league at one access level
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    league: League,
    access_level: AccessLevel,
    api_key: String,
}

impl Endpoints {
    pub fn new(
        base_url: impl Into<String>,
        league: League,
        access_level: AccessLevel,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            league,
            access_level,
            api_key: api_key.into(),
        }
    }

    pub fn league(&self) -> League {
        self.league
    }

    /// e.g. `https://api.sportsdatallc.org/ncaafb-t1`
    pub fn root(&self) -> String {
        format!(
            "{}/{}-{}{}",
            self.base_url.trim_end_matches('/'),
            self.league.path_segment(),
            self.access_level.marker(),
            self.league.api_version()
        )
    }

    /// Root plus path segments, with the api key attached as a query parameter
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let root = self.root();
        let mut url = Url::parse(&root).map_err(|e| Error::InvalidUrl {
            url: root.clone(),
            message: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl {
                url: root.clone(),
                message: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    pub fn football_hierarchy(&self, division: DivisionType) -> Result<Url> {
        self.url(&["teams", division.as_str(), "hierarchy.xml"])
    }

    pub fn football_schedule(&self, year: &str, schedule_type: ScheduleType) -> Result<Url> {
        self.url(&[year, schedule_type.as_str(), "schedule.xml"])
    }

    pub fn football_boxscore(&self, key: &BoxscoreKey) -> Result<Url> {
        self.url(&[
            &key.year,
            key.schedule_type.as_str(),
            &key.week,
            &key.away_team_id,
            &key.home_team_id,
            "boxscore.xml",
        ])
    }

    pub fn basketball_hierarchy(&self) -> Result<Url> {
        self.url(&["league", "hierarchy.xml"])
    }

    pub fn basketball_schedule(&self, season: &str, schedule_type: ScheduleType) -> Result<Url> {
        self.url(&["games", season, schedule_type.as_str(), "schedule.xml"])
    }

    pub fn basketball_boxscore(&self, game_id: &str) -> Result<Url> {
        self.url(&["games", game_id, "boxscore.xml"])
    }
}

/// The URL without its query, so the api key never reaches logs or errors
pub fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn football(access_level: AccessLevel) -> Endpoints {
        Endpoints::new(DEFAULT_BASE_URL, League::CollegeFootball, access_level, "secret")
    }

    #[test]
    fn test_root_per_league_and_access_level() {
        assert_eq!(
            football(AccessLevel::Trial).root(),
            "https://api.sportsdatallc.org/ncaafb-t1"
        );
        assert_eq!(
            football(AccessLevel::Production).root(),
            "https://api.sportsdatallc.org/ncaafb-p1"
        );
        let womens = Endpoints::new(
            "http://127.0.0.1:8080/",
            League::WomensBasketball,
            AccessLevel::Production,
            "secret",
        );
        assert_eq!(womens.root(), "http://127.0.0.1:8080/ncaawb-p3");
    }

    #[test]
    fn test_football_urls() {
        let endpoints = football(AccessLevel::Trial);
        assert_eq!(
            endpoints.football_hierarchy(DivisionType::Fbs).unwrap().as_str(),
            "https://api.sportsdatallc.org/ncaafb-t1/teams/FBS/hierarchy.xml?api_key=secret"
        );
        assert_eq!(
            endpoints
                .football_schedule("2014", ScheduleType::Regular)
                .unwrap()
                .as_str(),
            "https://api.sportsdatallc.org/ncaafb-t1/2014/reg/schedule.xml?api_key=secret"
        );
        let key = BoxscoreKey::new("2014", ScheduleType::Regular, "4", "AUB", "KST");
        assert_eq!(
            endpoints.football_boxscore(&key).unwrap().as_str(),
            "https://api.sportsdatallc.org/ncaafb-t1/2014/reg/4/AUB/KST/boxscore.xml?api_key=secret"
        );
    }

    #[test]
    fn test_basketball_urls() {
        let endpoints = Endpoints::new(
            DEFAULT_BASE_URL,
            League::MensBasketball,
            AccessLevel::Trial,
            "secret",
        );
        assert_eq!(
            endpoints.basketball_hierarchy().unwrap().as_str(),
            "https://api.sportsdatallc.org/ncaamb-t3/league/hierarchy.xml?api_key=secret"
        );
        assert_eq!(
            endpoints
                .basketball_schedule("2012", ScheduleType::ConferenceTournament)
                .unwrap()
                .as_str(),
            "https://api.sportsdatallc.org/ncaamb-t3/games/2012/ct/schedule.xml?api_key=secret"
        );
        assert_eq!(
            endpoints.basketball_boxscore("abc-123").unwrap().as_str(),
            "https://api.sportsdatallc.org/ncaamb-t3/games/abc-123/boxscore.xml?api_key=secret"
        );
    }

    #[test]
    fn test_api_key_is_query_encoded_and_redacted() {
        let endpoints = Endpoints::new(
            DEFAULT_BASE_URL,
            League::CollegeFootball,
            AccessLevel::Trial,
            "a b&c",
        );
        let url = endpoints.football_hierarchy(DivisionType::D2).unwrap();
        assert_eq!(url.query(), Some("api_key=a+b%26c"));
        assert_eq!(
            redact(&url),
            "https://api.sportsdatallc.org/ncaafb-t1/teams/D2/hierarchy.xml"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let endpoints = Endpoints::new("not a url", League::CollegeFootball, AccessLevel::Trial, "k");
        assert!(matches!(
            endpoints.football_hierarchy(DivisionType::Fbs),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
