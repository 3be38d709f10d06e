use crate::cli::parser::Commands;
use crate::core::duration::{self, end_date_validity};
use crate::errors::{AppError, AppResult};
use crate::models::field::Field;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Duration { start, end } = cmd {
        let s = parse_date(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
        let e = parse_date(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;

        let result = duration::compute(Some(s), Some(e));
        println!("{result}");

        if let Some(msg) = end_date_validity(result) {
            return Err(AppError::Validation {
                field: Field::EndDate,
                message: msg.to_string(),
            });
        }
    }
    Ok(())
}
