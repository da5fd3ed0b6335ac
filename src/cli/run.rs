//! Dispatch to the command handlers.

use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{init::init, languages::languages, resolve::resolve, translate::translate},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    let dir = env::current_dir().context("Failed to read the current directory")?;

    match command {
        Some(Command::Init) => init(&dir),
        Some(Command::Languages) => languages(),
        Some(Command::Resolve(cmd)) => resolve(&dir, cmd),
        Some(Command::Translate(cmd)) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(translate(&dir, cmd))
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
