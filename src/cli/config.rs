//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, LOG_LEVELS};
use crate::parser::LoadPolicy;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Set the default board file
    SetBoard(ConfigSetBoardArgs),
    /// Set other configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the default board file
#[derive(Args, Debug, Clone)]
pub struct ConfigSetBoardArgs {
    /// Board file used when commands get no --board argument
    #[arg(value_name = "FILE")]
    path: PathBuf,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Load policy for read-only commands (tolerant or strict)
    #[arg(long, value_name = "POLICY")]
    load_policy: Option<String>,

    /// Default log level (trace, debug, info, warn, or error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    board: BoardOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct BoardOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    load_policy: LoadPolicy,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::SetBoard(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&ConfigOutput {
                board: BoardOutput {
                    path: config
                        .board
                        .path
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string()),
                    load_policy: config.board.load_policy,
                },
                logging: LoggingOutput {
                    level: config.logging.level.clone(),
                },
            })?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetBoardArgs {
    /// Execute set-board command
    pub fn execute(&self) -> CliResult<()> {
        if self.path.is_dir() {
            return Err(CliError::validation(format!(
                "Board path is a directory: {}",
                self.path.display()
            )));
        }

        let mut config = load_config()?;
        config.board.path = Some(self.path.clone());
        save_config(&config)?;

        println!("Default board set to {}.", self.path.display());
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.load_policy.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --load-policy or --log-level",
            ));
        }

        let mut config = load_config()?;

        if let Some(policy) = &self.load_policy {
            config.board.load_policy = parse_load_policy(policy)?;
        }

        if let Some(level) = &self.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level. Must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = level;
        }

        save_config(&config)?;
        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn parse_load_policy(value: &str) -> CliResult<LoadPolicy> {
    match value.to_lowercase().as_str() {
        "tolerant" => Ok(LoadPolicy::Tolerant),
        "strict" => Ok(LoadPolicy::Strict),
        _ => Err(CliError::validation(
            "Invalid load policy. Must be 'tolerant' or 'strict'",
        )),
    }
}

fn save_config(config: &Config) -> CliResult<()> {
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("AAC Board Configuration");
    println!("=======================");
    println!();

    println!("Board:");
    if let Some(path) = &config.board.path {
        println!("  File: {}", path.display());
    } else {
        println!("  File: (not configured)");
    }
    println!(
        "  Load Policy: {}",
        format!("{:?}", config.board.load_policy).to_lowercase()
    );
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!();
}
