use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save(path)?;
    success(format!("Config file: {}", path.display()));
    println!("Edit 'message_prefix' (e.g. https://wa.me/60123456789) to enable the teacher link.");
    Ok(())
}
