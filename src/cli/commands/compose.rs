use crate::cli::commands::form::build_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::message::{compose, message_link};
use crate::ui::messages::info;

/// Print the message the teacher would receive, without any validation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compose { form } = cmd {
        let report = build_report(form)?;
        let text = compose(&report, &cfg.class_label);
        println!("{text}");

        if let Some(prefix) = cfg.message_prefix() {
            println!();
            info(message_link(&prefix, &text));
        }
    }
    Ok(())
}
