//! Log fixtures for the CLI tests.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// An instrument frame whose nitrate reading is `nitrate`.
pub fn frame(marker: &str, nitrate: &str) -> String {
    let mut fields: Vec<String> = vec![
        format!("{marker}0345"),
        "2014221".to_string(),
        "12.500000".to_string(),
        nitrate.to_string(),
    ];
    fields.extend(
        ["0.2413", "0.3512", "0.0834", "0.00", "12", "575", "1"].map(String::from),
    );
    fields.extend((0..256).map(|ch| (500 + ch).to_string()));
    fields.extend(
        [
            "15.43", "14.11", "18.20", "41234", "8.1", "12.05", "11.71", "5.01", "0.32", "0.91",
            "0.84", "-0.002", "0.0011", "0.000731", "", "", "", "", "171",
        ]
        .map(String::from),
    );
    fields.join(",")
}

pub fn logger_line(nitrate: &str) -> String {
    format!("2014/08/10 00:00:01.505 {}", frame("SATSLF", nitrate))
}

pub fn write_log(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp log");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    file
}
