use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use isodur::OutputFormat;
use isodur::commands;
use isodur::commands::convert::ElapsedParts;
use isodur::commands::pim::RequestArgs;
use isodur::config;
use isodur::duration::Representation;

#[derive(Parser)]
#[command(name = "isodur")]
#[command(about = "ISO 8601 duration conversion and PIM activation requests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a duration between representations
    Convert {
        #[arg(help = "ISO 8601 duration (e.g. P1DT2H30M) or a JSON field map")]
        value: Option<String>,
        #[arg(long, help = "Elapsed days")]
        days: Option<u64>,
        #[arg(long, help = "Elapsed hours")]
        hours: Option<u64>,
        #[arg(long, help = "Elapsed minutes")]
        minutes: Option<u64>,
        #[arg(long, help = "Elapsed seconds")]
        seconds: Option<u64>,
        #[arg(long, value_enum, help = "Output representation")]
        to: Option<Representation>,
        #[arg(long, help = "Reference instant for years/months (RFC 3339, default now)")]
        at: Option<String>,
        #[arg(long, value_enum, help = "Output format")]
        format: Option<OutputFormat>,
    },

    /// Privileged Identity Management helpers
    Pim(PimArgs),

    /// Show configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct PimArgs {
    #[command(subcommand)]
    action: PimAction,
}

#[derive(Subcommand)]
enum PimAction {
    /// Print a role self-activation request body
    Request {
        #[arg(long, help = "Role definition id")]
        role_id: String,
        #[arg(long, help = "Principal (user object) id")]
        principal_id: Option<String>,
        #[arg(long, help = "Activation length as ISO 8601 (e.g. PT2H)")]
        duration: Option<String>,
        #[arg(long, help = "Activation length in minutes")]
        minutes: Option<u64>,
        #[arg(long, help = "Reason for the activation")]
        justification: Option<String>,
        #[arg(long, help = "Start time (RFC 3339), default immediately")]
        start: Option<String>,
        #[arg(long, help = "Directory scope id")]
        scope: Option<String>,
    },
}

#[derive(Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = config::load()?;

    match cli.command {
        Commands::Convert {
            value,
            days,
            hours,
            minutes,
            seconds,
            to,
            at,
            format,
        } => {
            let parts = ElapsedParts {
                days,
                hours,
                minutes,
                seconds,
            };
            commands::convert::convert(
                &config,
                value.as_deref(),
                parts,
                to,
                at.as_deref(),
                format,
            )?;
        }
        Commands::Pim(pim_args) => match pim_args.action {
            PimAction::Request {
                role_id,
                principal_id,
                duration,
                minutes,
                justification,
                start,
                scope,
            } => {
                commands::pim::request(
                    &config,
                    RequestArgs {
                        principal_id,
                        role_id,
                        duration,
                        minutes,
                        justification,
                        start,
                        scope,
                    },
                )?;
            }
        },
        Commands::Config(args) => match args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(&key, &config)?,
        },
    }

    Ok(())
}
