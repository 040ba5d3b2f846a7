//! Shared helpers: season CSV fixtures written into temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const HEADER: &str = "Name,Position,Age,Matchs,Buts,Passes décisives,Minutes jouées,Cartons Jaunes,CartonS rouges,market_value,Saison,PPM";

/// Write a season file with the standard header and the given data lines.
pub fn write_season(dir: &Path, file: &str, lines: &[&str]) {
    let mut body = String::from(HEADER);
    body.push('\n');
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    fs::write(dir.join(file), body).expect("fixture file should be writable");
}

/// One data line in header order.
pub fn row(name: &str, position: &str, matches: &str, goals: &str, season: &str) -> String {
    format!("{name},{position},25,{matches},{goals},1,900,2,0,100000,{season},1.5")
}
