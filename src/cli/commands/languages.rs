use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::super::report::print_languages;
use crate::core::supported_languages;

pub fn languages() -> Result<ExitStatus> {
    print_languages(&supported_languages());
    Ok(ExitStatus::Success)
}
