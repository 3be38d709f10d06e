use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::roster::Roster;
use crate::ui::messages::{header, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { roster } = cmd {
        let path = roster
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.roster_path());

        let list = Roster::load(&path, cfg.roster_skip_lines)?;
        if list.is_empty() {
            warning(format!("No students found in {}", path.display()));
            return Ok(());
        }

        header(format!("{} ({} murid)", cfg.class_label, list.len()));
        for (i, name) in list.names().iter().enumerate() {
            println!("{:>3}. {}", i + 1, name);
        }
    }
    Ok(())
}
