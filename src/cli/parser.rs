use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for kehadiran
/// CLI application to report a student's absence to the class teacher
#[derive(Parser)]
#[command(
    name = "kehadiran",
    version = env!("CARGO_PKG_VERSION"),
    about = "Report a student's absence: log it to the class spreadsheet and notify the teacher",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or several classes)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Answers of the absence form.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Student name, as listed in the roster
    #[arg(long)]
    pub student: Option<String>,

    /// Reason: Sakit, Kecemasan, "Urusan Keluarga", "Aktiviti Luar", Lain-Lain
    /// (English: illness, emergency, family, activity, other)
    #[arg(long)]
    pub reason: Option<String>,

    /// Illness type when the reason is Sakit: Demam, Flu, Batuk, "Sakit Perut",
    /// Cirit-birit, Lain-lain
    #[arg(long)]
    pub illness: Option<String>,

    /// Free-text reason (required with Lain-Lain)
    #[arg(long = "other-reason")]
    pub other_reason: Option<String>,

    /// Free-text illness (required with illness Lain-lain)
    #[arg(long = "other-illness")]
    pub other_illness: Option<String>,

    /// First day of absence (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of absence (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Supporting document: medical certificate when sick, otherwise a parent's letter
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,

    /// Roster file (overrides `roster_file` from the configuration)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the configuration in use")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List the students of the roster
    Roster {
        /// Roster file (overrides `roster_file` from the configuration)
        #[arg(long, value_name = "FILE")]
        roster: Option<String>,
    },

    /// Count the days of absence between two dates, both included
    Duration {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD)
        end: String,
    },

    /// Show the preview of a supporting document
    Preview {
        /// File to preview
        file: String,
    },

    /// Print the notification message for the given answers
    Compose {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Validate and send the absence report
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Print the JSON body instead of sending it
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Open the prefilled message link in the browser after sending
        #[arg(long)]
        open: bool,

        /// Allow dates before today
        #[arg(long)]
        backdate: bool,
    },
}
