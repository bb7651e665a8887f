use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sportsdata::models::football::BoxscoreKey;
use sportsdata::utils::export::{
    basketball_rows, football_rows, rows_to_json, save_rows_to_csv, GameRow,
};
use sportsdata::{
    ClientConfig, Division, DivisionType, League, NcaaBasketballClient, NcaaFootballClient,
    ScheduleType, Scoreboard, Team, Venue,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LeagueArg {
    Football,
    MensBasketball,
    WomensBasketball,
}

impl From<LeagueArg> for League {
    fn from(arg: LeagueArg) -> Self {
        match arg {
            LeagueArg::Football => League::CollegeFootball,
            LeagueArg::MensBasketball => League::MensBasketball,
            LeagueArg::WomensBasketball => League::WomensBasketball,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "cli", about = "College sports feed client")]
struct Cli {
    /// League to query
    #[clap(long, value_enum, default_value = "football")]
    league: LeagueArg,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the conference hierarchy
    Hierarchy {
        /// Football division (FBS, FCS, D2, D3, NAIA, USCAA). All divisions when omitted.
        #[clap(long)]
        division: Option<DivisionType>,
    },

    /// List every team with its conference
    Teams {
        #[clap(long)]
        division: Option<DivisionType>,
    },

    /// List the games of one schedule
    Schedule {
        #[clap(long)]
        season: String,

        /// reg, ct (basketball only) or pst
        #[clap(long)]
        schedule_type: ScheduleType,

        /// Save the games to a CSV file
        #[clap(long)]
        csv: Option<String>,

        /// Print the games as JSON
        #[clap(long)]
        json: bool,
    },

    /// List the venues referenced by one schedule
    Venues {
        #[clap(long)]
        season: String,

        #[clap(long)]
        schedule_type: ScheduleType,
    },

    /// Fetch a single boxscore
    Boxscore {
        /// Basketball game id
        #[clap(long)]
        game_id: Option<String>,

        /// Football: season year
        #[clap(long)]
        season: Option<String>,

        #[clap(long)]
        schedule_type: Option<ScheduleType>,

        /// Football: week number
        #[clap(long)]
        week: Option<String>,

        /// Football: away team id
        #[clap(long)]
        away: Option<String>,

        /// Football: home team id
        #[clap(long)]
        home: Option<String>,
    },

    /// Fetch the boxscore of every game in a schedule
    Boxscores {
        #[clap(long)]
        season: String,

        #[clap(long)]
        schedule_type: ScheduleType,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    let league = League::from(cli.league);
    info!(?league, "using league");

    match league {
        League::CollegeFootball => {
            run_football(&NcaaFootballClient::with_config(&config), cli.command).await
        }
        League::MensBasketball | League::WomensBasketball => {
            let client = NcaaBasketballClient::with_config(&config, league)?;
            run_basketball(&client, cli.command).await
        }
    }
}

async fn run_football(client: &NcaaFootballClient, command: Command) -> Result<()> {
    match command {
        Command::Hierarchy { division } => {
            for division in football_divisions(client, division).await? {
                print_division(&division);
            }
        }
        Command::Teams { division } => {
            let teams: Vec<Team> = football_divisions(client, division)
                .await?
                .iter()
                .flat_map(|d| d.teams())
                .collect();
            print_teams(&teams);
        }
        Command::Schedule {
            season,
            schedule_type,
            csv,
            json,
        } => {
            let schedule = client
                .schedule(&season, schedule_type)
                .await
                .context("Failed to fetch football schedule")?;
            output_rows(&football_rows(&schedule), csv.as_deref(), json)?;
        }
        Command::Venues {
            season,
            schedule_type,
        } => {
            let schedule = client
                .schedule(&season, schedule_type)
                .await
                .context("Failed to fetch football schedule")?;
            print_venues(&schedule.venues());
        }
        Command::Boxscore {
            season,
            schedule_type,
            week,
            away,
            home,
            ..
        } => {
            let (Some(season), Some(schedule_type), Some(week), Some(away), Some(home)) =
                (season, schedule_type, week, away, home)
            else {
                bail!("football boxscores need --season, --schedule-type, --week, --away and --home");
            };
            let key = BoxscoreKey::new(season, schedule_type, week, away, home);
            let boxscore = client
                .boxscore(&key)
                .await
                .context("Failed to fetch football boxscore")?;
            print_score(&boxscore.id, &boxscore);
            for play in boxscore.scoring_plays() {
                println!(
                    "  Q{} {:>5}  {:<4} {}",
                    play.quarter,
                    play.clock,
                    play.team,
                    play.summary_text().unwrap_or("")
                );
            }
        }
        Command::Boxscores {
            season,
            schedule_type,
        } => {
            let schedule = client
                .schedule(&season, schedule_type)
                .await
                .context("Failed to fetch football schedule")?;
            let boxscores = client
                .boxscores_for_schedule(&schedule)
                .await
                .context("Failed to fetch football boxscores")?;
            for boxscore in &boxscores {
                print_score(&boxscore.id, boxscore);
            }
        }
    }
    Ok(())
}

async fn run_basketball(client: &NcaaBasketballClient, command: Command) -> Result<()> {
    match command {
        Command::Hierarchy { division } | Command::Teams { division } if division.is_some() => {
            bail!("--division only applies to football");
        }
        Command::Hierarchy { .. } => {
            let hierarchy = client
                .hierarchy()
                .await
                .context("Failed to fetch basketball hierarchy")?;
            println!("{} ({})", hierarchy.name, hierarchy.alias);
            for division in &hierarchy.divisions {
                print_division(division);
            }
        }
        Command::Teams { .. } => {
            let hierarchy = client
                .hierarchy()
                .await
                .context("Failed to fetch basketball hierarchy")?;
            print_teams(&hierarchy.teams());
        }
        Command::Schedule {
            season,
            schedule_type,
            csv,
            json,
        } => {
            let schedule = client
                .schedule(&season, schedule_type)
                .await
                .context("Failed to fetch basketball schedule")?;
            output_rows(&basketball_rows(&schedule), csv.as_deref(), json)?;
        }
        Command::Venues {
            season,
            schedule_type,
        } => {
            let schedule = client
                .schedule(&season, schedule_type)
                .await
                .context("Failed to fetch basketball schedule")?;
            print_venues(&schedule.venues());
        }
        Command::Boxscore { game_id, .. } => {
            let Some(game_id) = game_id else {
                bail!("basketball boxscores need --game-id");
            };
            let boxscore = client
                .boxscore(&game_id)
                .await
                .context("Failed to fetch basketball boxscore")?;
            print_score(&boxscore.id, &boxscore);
            for team in &boxscore.teams {
                let halves: Vec<String> = team
                    .scoring
                    .iter()
                    .flat_map(|s| s.halves.iter())
                    .map(|h| h.points.to_string())
                    .collect();
                println!("  {:<30} {}", team.name, halves.join(" "));
            }
        }
        Command::Boxscores {
            season,
            schedule_type,
        } => {
            let schedule = client
                .schedule(&season, schedule_type)
                .await
                .context("Failed to fetch basketball schedule")?;
            let boxscores = client
                .boxscores_for_schedule(&schedule)
                .await
                .context("Failed to fetch basketball boxscores")?;
            for boxscore in &boxscores {
                print_score(&boxscore.id, boxscore);
            }
        }
    }
    Ok(())
}

async fn football_divisions(
    client: &NcaaFootballClient,
    division: Option<DivisionType>,
) -> Result<Vec<Division>> {
    let divisions = match division {
        Some(division) => vec![client.division(division).await?],
        None => client.all_divisions().await?,
    };
    Ok(divisions)
}

fn print_division(division: &Division) {
    println!("{} ({})", division.name, division.alias);
    for conference in &division.conferences {
        println!("  {} - {} teams", conference.name, conference.teams().len());
        for subdivision in &conference.subdivisions {
            println!("    {} - {} teams", subdivision.name, subdivision.teams.len());
        }
    }
}

fn print_teams(teams: &[Team]) {
    for team in teams {
        println!(
            "{:<38} {:<6} {:<40} {}",
            team.id,
            team.alias,
            team.full_name(),
            team.conference_id.as_deref().unwrap_or("-")
        );
    }
    println!("\n{} teams", teams.len());
}

fn print_venues(venues: &[&Venue]) {
    for venue in venues {
        let capacity = venue
            .capacity
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<40} {}, {} ({})", venue.name, venue.city, venue.state, capacity);
    }
}

fn print_score(id: &str, boxscore: &impl Scoreboard) {
    // Unplayed games have no score yet
    let score = |result: sportsdata::Result<u32>| match result {
        Ok(points) => points.to_string(),
        Err(_) => "-".to_string(),
    };
    println!(
        "{}: {} {} @ {} {}",
        id,
        boxscore.away_team_id(),
        score(boxscore.away_team_score()),
        boxscore.home_team_id(),
        score(boxscore.home_team_score())
    );
}

fn output_rows(rows: &[GameRow], csv: Option<&str>, json: bool) -> Result<()> {
    if let Some(filename) = csv {
        save_rows_to_csv(rows, filename)?;
        println!("Saved {} games to {}", rows.len(), filename);
    } else if json {
        println!("{}", rows_to_json(rows)?);
    } else {
        for row in rows {
            println!(
                "{:<38} {:>4} {:<11} {} @ {}",
                row.game_id,
                row.week.as_deref().unwrap_or(""),
                row.status,
                row.away_team_id,
                row.home_team_id
            );
        }
    }
    Ok(())
}
