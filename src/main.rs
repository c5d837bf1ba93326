//! AAC Board - command-line front end for two-level AAC boards
//!
//! Board files list categories (an image and a name) followed by their items
//! (an image and the text it speaks). This binary edits those files and walks
//! them the way a user taps through the board.

use aacboard::cli::{
    CategoryArgs, CliError, CliResult, ConfigArgs, ItemArgs, SelectArgs, ValidateArgs,
};
use aacboard::config::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AAC Board - edit and walk two-level AAC boards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the categories of a board
    #[command(alias = "categories")]
    Category(CategoryArgs),
    /// Manage the items of a category
    #[command(alias = "items")]
    Item(ItemArgs),
    /// Select images in order and print what is spoken
    Select(SelectArgs),
    /// Validate a board file
    Validate(ValidateArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Category(args) => args.execute(),
            Self::Item(args) => args.execute(),
            Self::Select(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

/// Initializes tracing on stderr so stdout stays scriptable.
///
/// `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        Config::load()
            .map(|config| config.logging.level)
            .unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(CliError { exit_code, message }) = cli.command.execute() {
        eprintln!("Error: {message}");
        std::process::exit(exit_code.code());
    }
}
