use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use frame_calc::formatter::report_lines;
use frame_calc::frontend::{ConsoleSession, FormResponse, FormSubmission};
use frame_calc::{Calculator, FrameConfig, logger};

#[derive(Debug, Parser)]
#[command(name = "frame-calc")]
#[command(about = "Exact fractional-inch calculator for picture frame opening and outside sizes")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "TOML file with calculation settings")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prompt for measurements until the user is done (default)
    Interactive,
    /// Calculate a single frame from command-line values
    Calc(CalcArgs),
}

#[derive(Debug, Args)]
struct CalcArgs {
    #[arg(long, allow_hyphen_values = true)]
    art_width: String,

    #[arg(long, allow_hyphen_values = true)]
    art_length: String,

    #[arg(long, allow_hyphen_values = true)]
    rabbet_depth: String,

    #[arg(long, allow_hyphen_values = true)]
    frame_width: String,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed command line");

    let config = FrameConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let calculator = Calculator::new(config.calculation);
    tracing::debug!(settings = ?calculator.settings(), "calculator ready");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let mut session = ConsoleSession::new(stdin.lock(), io::stdout(), calculator);
            session.run().context("interactive session failed")?;
        }
        Command::Calc(args) => {
            let submission = FormSubmission::new(
                args.art_width,
                args.art_length,
                args.rabbet_depth,
                args.frame_width,
            );
            let response = submission.submit(&calculator);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }

            match response {
                FormResponse::Success { dimensions } => {
                    if !args.json {
                        for line in report_lines(&dimensions) {
                            println!("{line}");
                        }
                    }
                }
                FormResponse::Error { message } => {
                    if !args.json {
                        eprintln!("Error: {message}");
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
