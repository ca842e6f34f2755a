//! Command-line interface.
//!
//! - `fixtureboard generate` - print a draw as JSON, no database involved
//! - `fixtureboard publish` - generate and store the draw of a tournament
//! - `fixtureboard show` - print the reconstructed fixture of a tournament as JSON
//! - `fixtureboard reset` - delete a tournament's draw

use clap::{Args, Parser, Subcommand};

use crate::{
    config::Config,
    error::AppError,
    model::format::TournamentFormat,
    scheduler::{self, ScheduleRequest},
    service::{
        fixture::FixtureService,
        publish::{PublishOptions, PublishService},
    },
    startup,
};

/// Tournament fixture generation and reconstruction.
#[derive(Debug, Parser)]
#[command(name = "fixtureboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a draw skeleton without touching a database.
    Generate(GenerateArgs),
    /// Generate and store the draw of a tournament from its teams.
    Publish(PublishArgs),
    /// Print the reconstructed fixture of a tournament.
    Show(TournamentArgs),
    /// Delete the draw of a tournament so it can be published again.
    Reset(TournamentArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of participants.
    #[arg(long)]
    pub participants: usize,
    /// One of round_robin, knockout, group_playoff.
    #[arg(long)]
    pub format: TournamentFormat,
    /// Number of groups; required for group_playoff.
    #[arg(long)]
    pub groups: Option<usize>,
    /// Round-robin repetitions.
    #[arg(long, allow_negative_numbers = true)]
    pub rounds: Option<i32>,
    /// Finishers advancing out of each group.
    #[arg(long)]
    pub proceeders: Option<usize>,
}

#[derive(Debug, Args)]
pub struct PublishArgs {
    #[arg(long)]
    pub tournament: i32,
    #[arg(long)]
    pub groups: Option<usize>,
    #[arg(long, allow_negative_numbers = true)]
    pub rounds: Option<i32>,
    #[arg(long)]
    pub proceeders: Option<usize>,
}

#[derive(Debug, Args)]
pub struct TournamentArgs {
    #[arg(long)]
    pub tournament: i32,
}

impl Cli {
    /// Runs the selected command, printing its result to stdout.
    pub async fn run(self) -> Result<(), AppError> {
        match self.command {
            Commands::Generate(args) => {
                let draw = scheduler::generate(ScheduleRequest {
                    participant_count: args.participants,
                    group_count: args.groups,
                    rounds: args.rounds,
                    format: args.format,
                    proceeders: args.proceeders,
                    default_proceeders: None,
                })?;
                println!("{}", serde_json::to_string_pretty(&draw)?);
            }
            Commands::Publish(args) => {
                let config = Config::from_env()?;
                let db = startup::connect_to_database(&config).await?;

                let published = PublishService::new(&db)
                    .publish(
                        args.tournament,
                        PublishOptions {
                            group_count: args.groups,
                            rounds: args.rounds.or(Some(config.default_rounds)),
                            proceeders: args.proceeders,
                            default_proceeders: Some(config.default_proceeders),
                        },
                    )
                    .await?;
                println!("{}", serde_json::to_string_pretty(&published.draw)?);
            }
            Commands::Show(args) => {
                let config = Config::from_env()?;
                let db = startup::connect_to_database(&config).await?;

                let view = FixtureService::new(&db).reconstruct(args.tournament).await?;
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            Commands::Reset(args) => {
                let config = Config::from_env()?;
                let db = startup::connect_to_database(&config).await?;

                let deleted = PublishService::new(&db).reset(args.tournament).await?;
                println!("Deleted {} groups", deleted);
            }
        }

        Ok(())
    }
}
