use crate::attachment::{Attachment, PreviewSlot};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Preview { file } = cmd {
        let attachment = Attachment::from_path(&expand_tilde(file))?;
        let mut slot = PreviewSlot::new();
        println!("{}", slot.show(Some(&attachment)).markup());
    }
    Ok(())
}
