use super::Venue;
use serde::Deserialize;

/// A team as listed in a hierarchy document.
///
/// `conference_id` and `subdivision_id` are not part of the feed; they are
/// filled in on the copies returned by [`Division::teams`] and
/// [`LeagueHierarchy::teams`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@market", default)]
    pub market: String,
    #[serde(rename = "@alias", default)]
    pub alias: String,
    #[serde(rename = "@coverage")]
    pub coverage: Option<String>,
    pub venue: Option<Venue>,
    #[serde(skip)]
    pub conference_id: Option<String>,
    #[serde(skip)]
    pub subdivision_id: Option<String>,
}

impl Team {
    /// Display name, e.g. "Kansas State Wildcats"
    pub fn full_name(&self) -> String {
        match (self.market.is_empty(), self.name.is_empty()) {
            (false, false) => format!("{} {}", self.market, self.name),
            (true, _) => self.name.clone(),
            (false, true) => self.market.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subdivision {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "team", default)]
    pub teams: Vec<Team>,
}

/// A conference holds teams directly or through subdivisions (football only)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conference {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@alias", default)]
    pub alias: String,
    #[serde(rename = "subdivision", default)]
    pub subdivisions: Vec<Subdivision>,
    #[serde(rename = "team", default)]
    pub teams: Vec<Team>,
}

impl Conference {
    /// Stamped copies of every team in the conference: subdivision teams
    /// first, then direct teams, even when the two are interleaved in the feed
    pub fn teams(&self) -> Vec<Team> {
        let mut teams = Vec::new();
        for subdivision in &self.subdivisions {
            for team in &subdivision.teams {
                teams.push(Team {
                    conference_id: Some(self.id.clone()),
                    subdivision_id: Some(subdivision.id.clone()),
                    ..team.clone()
                });
            }
        }
        for team in &self.teams {
            teams.push(Team {
                conference_id: Some(self.id.clone()),
                subdivision_id: None,
                ..team.clone()
            });
        }
        teams
    }

    fn venues(&self) -> impl Iterator<Item = &Venue> {
        self.subdivisions
            .iter()
            .flat_map(|s| s.teams.iter())
            .chain(self.teams.iter())
            .filter_map(|t| t.venue.as_ref())
    }
}

/// Root of a football hierarchy document, and a level of the basketball one
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Division {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@alias", default)]
    pub alias: String,
    #[serde(rename = "conference", default)]
    pub conferences: Vec<Conference>,
}

impl Division {
    /// Flatten the division into a team list, depth first in feed order,
    /// each team stamped with its owning conference and subdivision.
    pub fn teams(&self) -> Vec<Team> {
        self.conferences.iter().flat_map(|c| c.teams()).collect()
    }

    pub fn venues(&self) -> Vec<&Venue> {
        self.conferences.iter().flat_map(|c| c.venues()).collect()
    }
}

/// Root of a basketball hierarchy document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeagueHierarchy {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@alias", default)]
    pub alias: String,
    #[serde(rename = "division", default)]
    pub divisions: Vec<Division>,
}

impl LeagueHierarchy {
    pub fn teams(&self) -> Vec<Team> {
        self.divisions.iter().flat_map(|d| d.teams()).collect()
    }

    pub fn venues(&self) -> Vec<&Venue> {
        self.divisions.iter().flat_map(|d| d.venues()).collect()
    }

    pub fn conference(&self, conference_id: &str) -> Option<&Conference> {
        self.divisions
            .iter()
            .flat_map(|d| d.conferences.iter())
            .find(|c| c.id == conference_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::de::from_str;

    const FOOTBALL_DIVISION: &str = r#"
<division xmlns="http://feed.elasticstats.com/schema/ncaafb/hierarchy-v1.0.xsd" id="FBS" name="I-A">
	<conference id="ACC" name="ACC">
		<subdivision id="ACC-ATLANTIC" name="ATLANTIC">
			<team id="BC" name="Eagles" market="Boston College" coverage="full"/>
			<team id="CLE" name="Tigers" market="Clemson" coverage="full"/>
		</subdivision>
		<subdivision id="ACC-COASTAL" name="COASTAL">
			<team id="DUK" name="Blue Devils" market="Duke" coverage="full"/>
			<team id="GT" name="Yellow Jackets" market="Georgia Tech" coverage="full"/>
		</subdivision>
	</conference>
	<conference id="AAC" name="American Athletic">
		<team id="CIN" name="Bearcats" market="Cincinnati" coverage="full"/>
		<team id="UCONN" name="Huskies" market="Connecticut" coverage="full"/>
	</conference>
</division>
"#;

    const BASKETBALL_LEAGUE: &str = r#"
<league xmlns="http://feed.elasticstats.com/schema/basketball/ncaam/hierarchy-v2.0.xsd" id="cd4268ee-07aa-4c4d-a435-ec44ad2c76cb" name="NCAA MEN" alias="NCAAM">
	<division id="18b713d6-561d-4aab-8986-175c4da04aa8" name="ACCA" alias="ACCA">
		<conference id="d69f2770-9310-45f7-9465-a6c1fe2567cc" name="Independents (ACCA)" alias="ACCA-IND">
			<team id="cd34248e-6f7d-4e0a-b694-567699bd7917" name="Tigers" market="Champion Baptist" alias="CBAP">
				<venue id="c06cdbce-91ba-4306-b31c-97df5cbf2515" name="Jon M. Huntsman Center" capacity="15000" address="1825 East South Campus Dr" city="Salt Lake City" state="UT" zip="84112" country="USA"/>
			</team>
		</conference>
	</division>
	<division id="556da150-35b7-433c-ae6d-dd702c543cf3" name="NAIA" alias="NAIA">
		<conference id="02cdb06e-b644-48e8-a5c9-dd235b888f7a" name="Kansas Collegiate Athletic Conference" alias="KCAC">
			<team id="ea22a80e-0194-4bda-99d1-a32f3545fffc" name="Bluejays" market="Tabor College" alias="TAB"></team>
		</conference>
		<conference id="3e37a5b4-29da-488f-8176-3b33121c036d" name="Midwest Collegiate Conference" alias="MCC">
			<team id="fac4a71e-40a9-47a6-b8d9-61a50d3c6edc" name="Hawks" market="Viterbo" alias="VIT"></team>
		</conference>
	</division>
</league>
"#;

    #[test]
    fn test_football_division() {
        let division: Division = from_str(FOOTBALL_DIVISION).unwrap();
        assert_eq!(division.id, "FBS");
        assert_eq!(division.conferences.len(), 2);

        let subdivisions = &division.conferences[0].subdivisions;
        assert_eq!(subdivisions.len(), 2);
        assert_eq!(subdivisions[0].teams.len(), 2);
        assert_eq!(subdivisions[0].teams[0].id, "BC");
        assert_eq!(subdivisions[0].teams[0].coverage.as_deref(), Some("full"));

        // decoded tree carries no back-references
        assert!(subdivisions[0].teams[0].conference_id.is_none());
    }

    #[test]
    fn test_division_teams_are_stamped_in_feed_order() {
        let division: Division = from_str(FOOTBALL_DIVISION).unwrap();
        let teams = division.teams();

        let ids: Vec<&str> = teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["BC", "CLE", "DUK", "GT", "CIN", "UCONN"]);

        assert_eq!(teams[0].conference_id.as_deref(), Some("ACC"));
        assert_eq!(teams[0].subdivision_id.as_deref(), Some("ACC-ATLANTIC"));
        assert_eq!(teams[3].subdivision_id.as_deref(), Some("ACC-COASTAL"));
        assert_eq!(teams[4].conference_id.as_deref(), Some("AAC"));
        assert_eq!(teams[4].subdivision_id, None);
        assert_eq!(teams[4].full_name(), "Cincinnati Bearcats");

        // flattening leaves the decoded tree untouched
        assert!(division.conferences[1].teams[0].conference_id.is_none());
    }

    #[test]
    fn test_basketball_league() {
        let league: LeagueHierarchy = from_str(BASKETBALL_LEAGUE).unwrap();
        assert_eq!(league.id, "cd4268ee-07aa-4c4d-a435-ec44ad2c76cb");
        assert_eq!(league.divisions.len(), 2);

        let conferences = &league.divisions[1].conferences;
        assert_eq!(conferences.len(), 2);
        assert_eq!(conferences[0].teams.len(), 1);
        assert_eq!(conferences[0].teams[0].id, "ea22a80e-0194-4bda-99d1-a32f3545fffc");
        assert_eq!(conferences[0].teams[0].alias, "TAB");

        let teams = league.teams();
        assert_eq!(teams.len(), 3);
        assert_eq!(
            teams[2].conference_id.as_deref(),
            Some("3e37a5b4-29da-488f-8176-3b33121c036d")
        );
        assert!(teams.iter().all(|t| t.subdivision_id.is_none()));

        assert_eq!(
            league.conference("02cdb06e-b644-48e8-a5c9-dd235b888f7a").map(|c| c.alias.as_str()),
            Some("KCAC")
        );
    }

    #[test]
    fn test_team_venues() {
        let league: LeagueHierarchy = from_str(BASKETBALL_LEAGUE).unwrap();
        let venues = league.venues();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].name, "Jon M. Huntsman Center");
        assert_eq!(venues[0].capacity, Some(15000));
        assert_eq!(venues[0].surface, "");
    }

    #[test]
    fn test_non_numeric_capacity_is_rejected() {
        let xml = r#"
<league id="L1" name="NCAA MEN" alias="NCAAM">
	<division id="D1" name="D1" alias="D1">
		<conference id="C1" name="C1" alias="C1">
			<team id="T1" name="Tigers" market="Somewhere" alias="SOM">
				<venue id="V1" name="Arena" capacity="fifteen thousand"/>
			</team>
		</conference>
	</division>
</league>
"#;
        let result: Result<LeagueHierarchy, _> = from_str(xml);
        assert!(result.is_err());
    }

    #[test]
    fn test_team_listed_twice_is_not_deduplicated() {
        let xml = r#"
<division id="FCS" name="I-AA">
	<conference id="A" name="A"><team id="DUP" name="One" market="M"/></conference>
	<conference id="B" name="B"><team id="DUP" name="One" market="M"/></conference>
</division>
"#;
        let division: Division = from_str(xml).unwrap();
        let teams = division.teams();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].conference_id.as_deref(), Some("A"));
        assert_eq!(teams[1].conference_id.as_deref(), Some("B"));
    }

    #[test]
    fn test_teams_interleaved_with_subdivisions() {
        let xml = r#"
<division id="FCS" name="I-AA">
	<conference id="IND" name="Independents">
		<team id="A" name="Alpha" market="M"/>
		<subdivision id="IND-EAST" name="EAST">
			<team id="B" name="Beta" market="M"/>
		</subdivision>
		<team id="C" name="Gamma" market="M"/>
	</conference>
</division>
"#;
        let division: Division = from_str(xml).unwrap();
        let conference = &division.conferences[0];
        assert_eq!(conference.teams.len(), 2);
        assert_eq!(conference.subdivisions.len(), 1);

        let ids: Vec<(String, Option<String>)> = division
            .teams()
            .into_iter()
            .map(|t| (t.id, t.subdivision_id))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("B".to_string(), Some("IND-EAST".to_string())),
                ("A".to_string(), None),
                ("C".to_string(), None),
            ]
        );
    }
}
