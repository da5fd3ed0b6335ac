use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::super::args::CommonArgs;
use super::super::report::print_scan_warnings;
use crate::config::{Config, load_config};
use crate::core::{ResourceTable, scan_resources};

/// Config plus caller resources, ready to hand to the initializer.
pub struct LoadedProject {
    pub config: Config,
    pub messages_root: PathBuf,
    pub resources: ResourceTable,
}

/// Load `.i18nrc.json` (or defaults) and every resource file under the
/// messages root.
///
/// When neither a config file nor `--messages-root` names the root, a missing
/// `./locales` yields no caller resources so the built-in defaults still work
/// in an empty directory. An explicitly configured root must exist.
pub fn load_project(dir: &Path, common: &CommonArgs) -> Result<LoadedProject> {
    let loaded = load_config(dir)?;
    let explicit_root = loaded.from_file || common.messages_root.is_some();
    let messages_root = match &common.messages_root {
        Some(root) => dir.join(root),
        None => loaded.messages_root(),
    };
    debug!(
        from_file = loaded.from_file,
        messages_root = %messages_root.display(),
        "configuration loaded"
    );

    let resources = if explicit_root || messages_root.exists() {
        let scan = scan_resources(&messages_root)?;
        print_scan_warnings(&scan.warnings, common.verbose);
        debug!(files = scan.files_loaded, "resource files loaded");
        scan.resources
    } else {
        ResourceTable::new()
    };

    Ok(LoadedProject {
        config: loaded.config,
        messages_root,
        resources,
    })
}
