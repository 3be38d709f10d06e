#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ROSTER: &str = "Bil,Nama,Jantina\n1,Aisyah,P\n2,Muhammad Hakim,L\n3,Tan Mei Ling,P\n";

pub fn kh() -> Command {
    cargo_bin_cmd!("kehadiran")
}

/// Path inside the system temp dir, with any leftover file removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("kehadiran_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the sample roster and return its path
pub fn setup_roster(name: &str) -> String {
    let path = temp_path(&format!("{name}_roster"), "csv");
    fs::write(&path, ROSTER).expect("write roster");
    path
}

/// Write a config pointing at `roster`, with an unreachable endpoint so a
/// test can never post to a real sheet
pub fn setup_config(name: &str, roster: &str, message_prefix: &str) -> String {
    let path = temp_path(&format!("{name}_config"), "conf");
    let yaml = format!(
        "endpoint_url: http://127.0.0.1:9/exec\n\
         roster_file: {roster}\n\
         roster_skip_lines: 1\n\
         class_label: 4 Satria\n\
         message_prefix: '{message_prefix}'\n\
         allow_past_dates: false\n"
    );
    fs::write(&path, yaml).expect("write config");
    path
}

pub fn write_file(name: &str, ext: &str, bytes: &[u8]) -> String {
    let path = temp_path(name, ext);
    fs::write(&path, bytes).expect("write file");
    path
}
