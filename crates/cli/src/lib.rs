pub mod commands;

use catalog_core::config::{ConfigOverrides, LoadOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::query::QueryArgs;

#[derive(Debug, Parser)]
#[command(
    name = "catalog",
    about = "Catalog operator CLI",
    long_about = "Query the product catalog, inspect effective configuration, and run readiness checks.",
    after_help = "Examples:\n  catalog query --search insulation\n  catalog query --search basket --min-price 15 --max-price 20\n  catalog doctor --json\n  catalog --config ops/catalog.toml query --search hose"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file to load; it must exist when given")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Catalog seed file, overriding config and environment")]
    seed_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides { catalog_seed_path: self.seed_path.clone() },
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Validate a catalog query and print the matching entries as JSON")]
    Query(QueryArgs),
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and catalog readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.load_options();

    let result = match cli.command {
        Command::Query(args) => commands::query::run(args, options),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run(options) }
        }
        Command::Doctor { json } => commands::doctor::run(json, options),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
