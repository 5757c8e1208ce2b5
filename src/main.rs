use clap::{Parser, Subcommand};
use mentor_match::config::{LoggingSettings, Settings};
use mentor_match::models::{FindMentorsRequest, FindMentorsResponse};
use mentor_match::{MatchResult, Matcher, UserDirectory};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank peer mentors for a user by compatibility
#[derive(Debug, Parser)]
#[command(name = "mentor-match", version, about)]
struct Cli {
    /// Configuration file (defaults to config/default.toml plus environment)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank mentors from a users export (`{"users": [...]}` or a JSON array)
    Directory {
        /// Path to the users export
        users: PathBuf,
        /// Seeker id (defaults to the first user)
        #[arg(long)]
        seeker: Option<String>,
        /// Maximum matches to return
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Rank mentors from a request file holding a seeker and its candidates
    Request {
        /// Path to the request JSON
        request: PathBuf,
    },
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    match run(cli.command, &settings) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, settings: &Settings) -> Result<FindMentorsResponse, Box<dyn std::error::Error>> {
    let weights = settings.weights()?;
    let matcher = Matcher::new(weights);
    info!("Matcher initialized with weights: {:?}", weights);

    match command {
        Command::Directory { users, seeker, limit } => {
            let directory = UserDirectory::from_path(&users)?;
            let seeker = directory.seeker(seeker.as_deref())?;
            let limit = limit.or(settings.matching.default_limit);

            info!("Finding mentors for {}", seeker.id);
            let result = matcher.find_matches(seeker, directory.users(), limit);
            Ok(into_response(&seeker.id, result))
        }
        Command::Request { request } => {
            let file = File::open(&request)?;
            let request: FindMentorsRequest = serde_json::from_reader(BufReader::new(file))?;

            if let Err(invalid) = request.validate_records() {
                let record = match invalid.index {
                    Some(index) => format!("candidate at index {}", index),
                    None => "seeker".to_string(),
                };
                return Err(format!("Invalid {}: {}", record, invalid.errors).into());
            }

            let limit = request.limit.or(settings.matching.default_limit);
            info!("Finding mentors for {}", request.seeker.id);
            let result = matcher.find_matches(&request.seeker, &request.candidates, limit);
            Ok(into_response(&request.seeker.id, result))
        }
    }
}

fn into_response(seeker_id: &str, result: MatchResult) -> FindMentorsResponse {
    FindMentorsResponse {
        seeker_id: seeker_id.to_string(),
        matches: result.matches,
        total_candidates: result.total_candidates,
        eligible_candidates: result.eligible_candidates,
    }
}
