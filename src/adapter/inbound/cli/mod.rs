//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod export;
pub mod output;
pub mod paths;
pub mod scan;
pub mod watch;

use command::{Cli, Commands, ConfigCommand};
use output::OutputConfig;

use crate::error::Result;
use crate::infrastructure::config::logging::LoggingConfig;

/// Configure output and run the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match cli.command {
        Commands::Scan(args) => scan::execute(&args).await,
        Commands::Watch(args) => watch::execute(&args).await,
        Commands::Config(command) => {
            LoggingConfig::default().init_with_verbosity(cli.verbose);
            match command {
                ConfigCommand::Init(args) => config::execute_init(&args.path, args.force),
                ConfigCommand::Show(args) => config::execute_show(&args.config),
                ConfigCommand::Validate(args) => config::execute_validate(&args.config),
            }
        }
    }
}
