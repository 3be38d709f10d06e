use crate::cli::commands::form::{build_report, load_roster};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{MSG_SEND_FAILED, MSG_SENT, SubmitOptions, SubmitOutcome, Submitter};
use crate::errors::{AppError, AppResult};
use crate::models::report::AbsenceReport;
use crate::roster::Roster;
use crate::transport::{DryRunTransport, HttpTransport, Transport};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::today;

fn run<T: Transport>(
    transport: T,
    opts: SubmitOptions,
    roster: Roster,
    report: &mut AbsenceReport,
) -> AppResult<SubmitOutcome> {
    Submitter::new(transport, opts, Some(roster)).submit(report)
}

/// Validate, send, then offer the teacher link.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        form,
        dry_run,
        open,
        backdate,
    } = cmd
    {
        //
        // 1. Fill the form
        //
        let mut report = build_report(form)?;
        let roster = load_roster(form.roster.as_ref(), cfg);

        let min_date = if *backdate || cfg.allow_past_dates {
            None
        } else {
            Some(today())
        };

        let opts = SubmitOptions {
            endpoint_url: cfg.endpoint_url.clone(),
            class_label: cfg.class_label.clone(),
            message_prefix: cfg.message_prefix(),
            min_date,
        };

        //
        // 2. Run the pipeline
        //
        let outcome = if *dry_run {
            run(DryRunTransport, opts, roster, &mut report)?
        } else {
            run(HttpTransport::new()?, opts, roster, &mut report)?
        };

        //
        // 3. Report
        //
        match outcome {
            SubmitOutcome::Sent {
                message,
                message_link,
                ..
            } => {
                if *dry_run {
                    info("Dry run: nothing was sent.");
                } else {
                    success(MSG_SENT);
                }
                println!("\n{message}\n");

                if let Some(link) = message_link {
                    info(format!("Hantar kepada guru kelas: {link}"));
                    if *open && let Err(e) = webbrowser::open(&link) {
                        warning(format!("Cannot open browser: {e}"));
                    }
                }
            }
            SubmitOutcome::Invalid(e) => return Err(e.into()),
            SubmitOutcome::Failed(reason) => {
                return Err(AppError::Transport(format!("{MSG_SEND_FAILED} ({reason})")));
            }
        }
    }

    Ok(())
}
