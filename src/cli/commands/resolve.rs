use std::path::Path;

use anyhow::{Context, Result};

use super::super::args::ResolveCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_missing_locale;
use super::shared::load_project;
use crate::core::resolve_resources;

pub fn resolve(dir: &Path, cmd: ResolveCommand) -> Result<ExitStatus> {
    let project = load_project(dir, &cmd.common)?;
    let strategy = cmd.strategy.unwrap_or(project.config.merge_strategy);
    let merged = resolve_resources(&project.resources, strategy);

    let value = match &cmd.locale {
        Some(locale) => match merged.locale(locale) {
            Some(namespaces) => serde_json::to_value(namespaces),
            None => {
                print_missing_locale(locale, merged.locales());
                return Ok(ExitStatus::Failure);
            }
        },
        None => serde_json::to_value(&merged),
    }
    .context("Failed to serialize resources")?;

    let rendered = serde_json::to_string_pretty(&value).context("Failed to render resources")?;
    println!("{}", rendered);
    Ok(ExitStatus::Success)
}
