use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod create;
mod validate;

#[derive(Parser)]
#[command(
    name = "skill-builder",
    version,
    about = "Create compliant skills for the skills registry",
    disable_version_flag = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Log debug details to stderr
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new skill interactively
    Create,
    /// Validate the skill in the current directory
    Validate,
}

/// Parse arguments, exiting 0 for help/version and 1 for usage errors.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

pub fn run(cli: Cli) {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Create) => create::run(),
        Some(Commands::Validate) => validate::run(),
        None => {
            let _ = Cli::command().print_help();
            println!();
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("skill_builder={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// The directory both subcommands operate in.
fn working_dir(command: &str) -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("skill-builder {command}: cannot read current directory: {e}");
        std::process::exit(1);
    })
}
