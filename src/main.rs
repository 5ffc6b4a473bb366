//! embedgen: bake files into generated source as string, byte array or size literals.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod diagnostic;
mod generate;
mod load;
mod model;
mod scan;
mod stale;
mod ui;
mod write;

mod cmd;

use config::Config;
use diagnostic::{Diagnostic, DiagnosticLevel};
use write::WriteOp;

#[derive(Parser)]
#[command(name = "embedgen")]
#[command(about = "Bake files into generated source as string, byte array or size literals")]
#[command(version)]
struct Cli {
    /// Path to embedgen config (TOML)
    #[arg(short = 'C', long, global = true)]
    config: Option<PathBuf>,

    /// Explain why the output is (or is not) regenerated
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the output if the header or an embedded file changed
    #[command(visible_alias = "gen")]
    Run {
        /// Regenerate even if nothing changed
        #[arg(short = 'f', long)]
        force: bool,
        /// Dry run: print the generated file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Fail if the output is out of date, without writing anything
    Check,

    /// List the embedding declarations found in the header
    #[command(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Write a default embed.toml
    Init {
        /// Overwrite existing config
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Table,
    Plain,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ui::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(diags) => {
            for diag in &diags {
                ui::diagnostic(diag);
            }
            if diags.iter().any(|d| d.level == DiagnosticLevel::Error) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Vec<Diagnostic>> {
    let load = || Config::load(cli.config.as_deref());

    match &cli.command {
        None => cmd::run::handle_embedding(&load()?, false, WriteOp::Execute),
        Some(Commands::Run { force, dry_run }) => {
            cmd::run::handle_embedding(&load()?, *force, WriteOp::from_dry_run(*dry_run))
        }
        Some(Commands::Check) => cmd::check::check_output(&load()?),
        Some(Commands::List { output }) => cmd::list::list(&load()?, *output),
        // These work without a usable config
        Some(Commands::Init { force }) => cmd::init::init_project(cli.config.as_deref(), *force),
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(*shell, &mut command, "embedgen", &mut std::io::stdout());
            Ok(vec![])
        }
    }
}
