use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::TranslateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_missing_key;
use super::shared::load_project;
use crate::engine::{FsBackend, TOptions};
use crate::init::init_i18n_with_backend;

pub async fn translate(dir: &Path, cmd: TranslateCommand) -> Result<ExitStatus> {
    let project = load_project(dir, &cmd.common)?;
    let mut options = project.config.to_options(project.resources);
    options.debug = options.debug || cmd.common.verbose;

    let mut i18n = init_i18n_with_backend(options, FsBackend::new(&project.messages_root));

    if let Some(lang) = &cmd.lang {
        i18n.change_language(lang)
            .await
            .with_context(|| format!("Failed to switch to language \"{}\"", lang))?;
    }

    let mut t_options = TOptions::new();
    t_options.count = cmd.count;
    for (name, value) in cmd.vars {
        t_options = t_options.value(name, value);
    }

    if !i18n.exists(&cmd.key, &t_options) {
        print_missing_key(&cmd.key, i18n.current_language());
        return Ok(ExitStatus::Failure);
    }

    debug!(key = %cmd.key, language = i18n.current_language(), "translating");
    println!("{}", i18n.t_with(&cmd.key, &t_options));
    Ok(ExitStatus::Success)
}
