//! Command-line access to the WaniKani API.
//!
//! Every subcommand maps onto one client operation and prints the returned
//! envelope as pretty JSON.

mod commands;

use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wanikani::{ApiVersion, SubjectType, WaniKaniClient};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Query and update your WaniKani account.
#[derive(Parser, Debug)]
#[command(name = "wk")]
#[command(version, about, long_about = None)]
struct Args {
    /// WaniKani personal access token
    #[arg(long, env = "WANIKANI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API host
    #[arg(long, env = "WANIKANI_BASE_URL", default_value = "https://api.wanikani.com")]
    base_url: String,

    /// Address the legacy dated API instead of v2
    #[arg(long)]
    legacy: bool,

    /// Dated revision to address (implies --legacy)
    #[arg(
        long,
        value_name = "REVISION",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    revision: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assignment operations
    #[command(subcommand)]
    Assignments(AssignmentsCommand),
    /// Level progression operations
    #[command(subcommand)]
    LevelProgressions(LevelProgressionsCommand),
    /// Review operations
    #[command(subcommand)]
    Reviews(ReviewsCommand),
    /// Subject operations
    #[command(subcommand)]
    Subjects(SubjectsCommand),
}

#[derive(ClapArgs, Debug, Default)]
struct PageArgs {
    /// Return items after this id
    #[arg(long)]
    page_after_id: Option<u64>,
    /// Return items before this id
    #[arg(long)]
    page_before_id: Option<u64>,
    /// Page size
    #[arg(long)]
    per_page: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum AssignmentsCommand {
    /// List assignments
    List {
        /// Subject levels, comma separated
        #[arg(long, value_delimiter = ',')]
        levels: Option<Vec<u8>>,
        /// Subject ids, comma separated
        #[arg(long, value_delimiter = ',')]
        subject_ids: Option<Vec<u64>>,
        /// Subject types, comma separated
        #[arg(long, value_delimiter = ',')]
        subject_types: Option<Vec<SubjectType>>,
        /// SRS stages, comma separated
        #[arg(long, value_delimiter = ',')]
        srs_stages: Option<Vec<u8>>,
        /// Only assignments available after this RFC 3339 time
        #[arg(long)]
        available_after: Option<DateTime<Utc>>,
        /// Only assignments available before this RFC 3339 time
        #[arg(long)]
        available_before: Option<DateTime<Utc>>,
        /// Filter on burned state
        #[arg(long)]
        burned: Option<bool>,
        /// Filter on hidden state
        #[arg(long)]
        hidden: Option<bool>,
        /// Filter on started state
        #[arg(long)]
        started: Option<bool>,
        /// Filter on unlocked state
        #[arg(long)]
        unlocked: Option<bool>,
        /// Filter on presence in the review queue
        #[arg(long)]
        in_review: Option<bool>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get one assignment
    Get {
        /// Assignment id
        id: u64,
    },
    /// Update one assignment
    Update {
        /// Assignment id
        id: u64,
        /// Lesson completion time (RFC 3339)
        #[arg(long)]
        started_at: Option<DateTime<Utc>>,
        /// Hide or unhide the assignment
        #[arg(long)]
        hidden: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
enum LevelProgressionsCommand {
    /// List level progressions
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get one level progression
    Get {
        /// Level progression id
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
enum ReviewsCommand {
    /// List reviews
    List {
        /// Assignment ids, comma separated
        #[arg(long, value_delimiter = ',')]
        assignment_ids: Option<Vec<u64>>,
        /// Subject ids, comma separated
        #[arg(long, value_delimiter = ',')]
        subject_ids: Option<Vec<u64>>,
        /// Only reviews updated after this RFC 3339 time
        #[arg(long)]
        updated_after: Option<DateTime<Utc>>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get one review
    Get {
        /// Review id
        id: u64,
    },
    /// Record a review
    Create {
        /// Assignment being reviewed
        #[arg(long)]
        assignment_id: u64,
        /// Number of wrong meaning answers
        #[arg(long, default_value_t = 0)]
        incorrect_meaning: u32,
        /// Number of wrong reading answers
        #[arg(long, default_value_t = 0)]
        incorrect_reading: u32,
        /// Backdate the review (RFC 3339)
        #[arg(long)]
        created_at: Option<DateTime<Utc>>,
    },
}

#[derive(Subcommand, Debug)]
enum SubjectsCommand {
    /// List subjects
    List {
        /// Levels, comma separated
        #[arg(long, value_delimiter = ',')]
        levels: Option<Vec<u8>>,
        /// Slugs, comma separated
        #[arg(long, value_delimiter = ',')]
        slugs: Option<Vec<String>>,
        /// Subject types, comma separated
        #[arg(long, value_delimiter = ',')]
        types: Option<Vec<SubjectType>>,
        /// Filter on hidden state
        #[arg(long)]
        hidden: Option<bool>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get one subject
    Get {
        /// Subject id
        id: u64,
    },
}

impl Args {
    fn client(&self) -> WaniKaniClient {
        let version = match (&self.revision, self.legacy) {
            (Some(revision), _) => ApiVersion::Revision(revision.clone()),
            (None, true) => ApiVersion::legacy(),
            (None, false) => ApiVersion::V2,
        };

        WaniKaniClient::builder()
            .url(&self.base_url)
            .api_key(&self.api_key)
            .version(version)
            .timeout(Duration::from_secs(self.timeout))
            .build()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing; RUST_LOG takes precedence over -v
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = args.client();
    info!(
        base_url = %args.base_url,
        version = client.version().path_segment(),
        "Starting wk"
    );
    debug!(command = ?args.command, "Dispatching");

    let output = commands::run(&client, args.command).await?;
    println!("{}", output);

    Ok(())
}
