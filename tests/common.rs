#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn trc() -> Command {
    cargo_bin_cmd!("trcheck")
}

/// Write a JSON payload into a unique temp file and return its path
pub fn temp_payload(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trcheck.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write payload file");
    p
}

/// Create a unique temp config path and remove any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trcheck.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
