use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use leaderboard_scorer::{
    config::Settings,
    feed,
    models::{Filter, GroupReport, PlacedEntry, TimeEntry},
    scoring::{self, ScoringOptions},
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "leaderboard-scorer")]
#[clap(about = "Rank daily time-trial results and build power-rating leaderboards", long_about = None)]
struct Cli {
    /// Entries JSON file (`-` for stdin)
    #[clap(short, long, global = true, default_value = "-")]
    input: PathBuf,

    /// Settings file layered over the defaults
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Drop the weekly special puzzle day
    #[clap(long, global = true)]
    exclude_midis: bool,

    /// Only keep the last N days (0 keeps everything)
    #[clap(short, long, global = true)]
    duration: Option<u32>,

    /// Print JSON instead of text
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Power rating leaderboard
    Table,

    /// Per-date averages, medians and winners
    Graph {
        /// Focal user whose time and place are attached to each date
        #[clap(short, long)]
        user: Option<String>,
    },

    /// Longest run of consecutive best-time days
    Streak,

    /// Best time, best average place, top power index and average time
    Summary,

    /// Everything above in one document
    Report {
        /// Focal user whose time and place are attached to each date
        #[clap(short, long)]
        user: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, load_error) = match &cli.config {
        Some(path) => (
            Settings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None,
        ),
        None => match Settings::new() {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
    };

    // Logs go to stderr so stdout stays machine-readable
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = load_error {
        warn!("Using default settings: {}", e);
    }

    settings.validate().map_err(|e| anyhow::anyhow!("invalid settings: {}", e))?;
    let options = settings.scoring_options();

    let mut filter = settings.default_filter();
    if cli.exclude_midis {
        filter.exclude_midis = true;
    }
    if cli.duration.is_some() {
        filter.duration = cli.duration;
    }
    debug!(?filter, "Using filter");

    let entries = feed::load_entries(&cli.input)
        .with_context(|| format!("failed to read entries from {}", cli.input.display()))?;
    info!(count = entries.len(), "Loaded entries");

    let today = Local::now().date_naive();
    let focal_user = |user: Option<String>| user.or_else(|| settings.report.current_username.clone());

    match cli.command {
        Commands::Table => {
            let placed = placed_and_filtered(&entries, &filter, today, &options)?;
            let table = scoring::make_table_with(&placed, &options);
            if cli.json {
                print_json(&table)?;
            } else {
                println!(
                    "{:>5}  {:<20} {:>9} {:>9} {:>9} {:>7} {:>9} {:>6}",
                    "Index", "User", "Rating", "Best", "Average", "Wins", "Avg Place", "Games"
                );
                for stat in &table {
                    println!(
                        "{:>5}  {:<20} {:>9.2} {:>9} {:>9.2} {:>7} {:>9.2} {:>6}",
                        stat.power.index,
                        stat.username,
                        stat.power.rating,
                        stat.best_time,
                        stat.average_time,
                        stat.first_place_finishes,
                        stat.average_place,
                        stat.games_played
                    );
                }
            }
        }

        Commands::Graph { user } => {
            let placed = placed_and_filtered(&entries, &filter, today, &options)?;
            let user = focal_user(user).unwrap_or_default();
            let graph = scoring::make_graph_with(&placed, &user, options.decimal_places)?;
            if cli.json {
                print_json(&graph)?;
            } else {
                for point in &graph {
                    let mine = match (point.current_username_time, point.current_username_place) {
                        (Some(time), Some(place)) => format!("  {}: {} (#{})", user, time, place),
                        _ => String::new(),
                    };
                    println!(
                        "{}  avg {:.2}  median {}  best {} by {}{}",
                        point.date,
                        point.average_time,
                        point.median_time,
                        point.best_time,
                        point.best_time_usernames.join(", "),
                        mine
                    );
                }
            }
        }

        Commands::Streak => {
            let placed = placed_and_filtered(&entries, &filter, today, &options)?;
            let graph = scoring::make_graph_with(&placed, "", options.decimal_places)?;
            let streak = scoring::get_longest_streak(&scoring::best_time_usernames_by_date(&graph));
            if cli.json {
                print_json(&streak)?;
            } else if streak.duration == 0 {
                println!("No best-time streaks yet");
            } else {
                println!(
                    "Longest streak: {} day(s) by {}",
                    streak.duration,
                    streak.usernames.join(", ")
                );
            }
        }

        Commands::Summary => {
            let report = scoring::build_report(&entries, &filter, None, today, &options)?;
            if cli.json {
                print_json(&Summary::from(&report))?;
            } else {
                print_summary(&report);
            }
        }

        Commands::Report { user } => {
            let user = focal_user(user);
            let report = scoring::build_report(&entries, &filter, user.as_deref(), today, &options)?;
            if cli.json {
                print_json(&report)?;
            } else {
                print_summary(&report);
                println!("\nLeaderboard:");
                for stat in &report.table {
                    println!(
                        "  #{} {} ({:.2})",
                        stat.power.index, stat.username, stat.power.rating
                    );
                }
            }
        }
    }

    Ok(())
}

fn placed_and_filtered(
    entries: &[TimeEntry],
    filter: &Filter,
    today: NaiveDate,
    options: &ScoringOptions,
) -> Result<Vec<PlacedEntry>> {
    let placed = scoring::place_all(entries)?;
    Ok(scoring::make_filtered_entries_with(
        filter,
        &placed,
        today,
        options.excluded_weekday,
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    day_count: usize,
    best_time: Option<&'a PlacedEntry>,
    best_average_place: Option<&'a str>,
    highest_power_index: Option<&'a str>,
    average_time: Option<f64>,
    longest_streak: &'a leaderboard_scorer::StreakRecord,
}

impl<'a> From<&'a GroupReport> for Summary<'a> {
    fn from(report: &'a GroupReport) -> Self {
        Self {
            day_count: report.day_count,
            best_time: report.best_time.as_ref(),
            best_average_place: report.best_average_place.as_ref().map(|s| s.username.as_str()),
            highest_power_index: report.highest_power_index.as_ref().map(|s| s.username.as_str()),
            average_time: report.average_time,
            longest_streak: &report.longest_streak,
        }
    }
}

fn print_summary(report: &GroupReport) {
    println!("=== Group Summary ===");
    println!("Days: {}  Entries: {}", report.day_count, report.entry_count);

    match &report.best_time {
        Some(best) => println!("Best time: {} by {} on {}", best.time, best.username, best.date),
        None => println!("Best time: -"),
    }
    match &report.best_average_place {
        Some(stat) => println!("Best average place: {:.2} by {}", stat.average_place, stat.username),
        None => println!("Best average place: -"),
    }
    match &report.highest_power_index {
        Some(stat) => println!("Top power rating: {:.2} by {}", stat.power.rating, stat.username),
        None => println!("Top power rating: -"),
    }
    match report.average_time {
        Some(average) => println!("Average time: {:.2}", average),
        None => println!("Average time: -"),
    }
    if report.longest_streak.duration > 0 {
        println!(
            "Longest streak: {} day(s) by {}",
            report.longest_streak.duration,
            report.longest_streak.usernames.join(", ")
        );
    } else {
        println!("Longest streak: -");
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
