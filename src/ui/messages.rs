//! Notices printed to the user (the CLI's equivalent of the form's alerts).

use std::fmt;
use std::io::IsTerminal;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Colors only on a terminal, and never with NO_COLOR set.
fn styled(color: &'static str, to_stderr: bool) -> (&'static str, &'static str, &'static str) {
    let tty = if to_stderr {
        std::io::stderr().is_terminal()
    } else {
        std::io::stdout().is_terminal()
    };
    if tty && std::env::var_os("NO_COLOR").is_none() {
        (color, BOLD, RESET)
    } else {
        ("", "", "")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let (c, b, r) = styled(FG_BLUE, false);
    println!("{c}{b}{ICON_INFO} {r}{msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    let (c, b, r) = styled(FG_GREEN, false);
    println!("{c}{b}{ICON_OK} {r}{msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    let (c, b, r) = styled(FG_YELLOW, true);
    eprintln!("{c}{b}{ICON_WARN} {r}{msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    let (c, b, r) = styled(FG_RED, true);
    eprintln!("{c}{b}{ICON_ERR} {r}{msg}");
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let (c, b, r) = styled(FG_BLUE, false);
    println!("{c}{b}====================== {msg}{r}");
}
