//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Write a default `.i18nrc.json`
//! - `languages`: List the built-in languages
//! - `resolve`: Print caller resources merged over the built-in defaults
//! - `translate`: Resolve a single key

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::MergeStrategy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Languages) | None => false,
        }
    }
}

/// Common arguments shared by resource-reading commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only print this locale
    #[arg(long)]
    pub locale: Option<String>,

    /// Merge strategy (overrides config file)
    #[arg(long, value_enum)]
    pub strategy: Option<MergeStrategy>,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key to translate, optionally prefixed with a namespace (`auth:login.title`)
    pub key: String,

    /// Language to switch to before translating
    #[arg(long)]
    pub lang: Option<String>,

    /// Count used for plural selection and `{{count}}`
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Interpolation variable, can be repeated: --var min=8 --var max=64
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

fn parse_var(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got \"{}\"", raw))?;
    if name.is_empty() {
        return Err(anyhow!("variable name must not be empty"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18nrc.json configuration file
    Init,
    /// List the languages that ship with built-in translations
    Languages,
    /// Print resources merged over the built-in defaults as JSON
    Resolve(ResolveCommand),
    /// Translate a single key
    Translate(TranslateCommand),
}
