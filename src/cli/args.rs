use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::constants::{verbosity, DEFAULT_RECIPE_DIR};

/// Larder - an interactive recipe collection manager.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory recipes are stored in.
    #[arg(short, long, global = true, default_value = DEFAULT_RECIPE_DIR, value_name = "DIR")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new recipe interactively.
    New,

    /// Review and edit a stored recipe.
    Edit(EditArgs),

    /// Print a stored recipe.
    Show(ShowArgs),

    /// List the recipes in the store.
    #[command(visible_alias = "ls")]
    List,
}

/// Arguments for the edit command.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Name of the recipe to edit.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the show command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Name of the recipe to print.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
