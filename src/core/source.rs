//! Purpose: Load candidate input files for validation.
//! Exports: `read_concatenated`, `is_valid_json_file`.
//! Role: I/O collaborator; the core pipeline only ever sees one string.
//! Invariants: Line terminators never reach the tokenizer.
//! Invariants: `is_valid_json_file` collapses every failure to `false`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::error::{Error, ErrorKind};
use crate::core::validate::validate;

/// Read a file line by line and concatenate the lines into one string,
/// discarding the terminators.
pub fn read_concatenated(path: &Path) -> Result<String, Error> {
    let file = File::open(path).map_err(|err| {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Permission,
            _ => ErrorKind::Io,
        };
        Error::new(kind)
            .with_message("failed to open input file")
            .with_path(path)
            .with_source(err)
    })?;

    let mut content = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read input file")
                .with_path(path)
                .with_source(err)
        })?;
        content.push_str(&line);
    }
    Ok(content)
}

/// File-level verdict: unreadable input is simply not valid JSON.
pub fn is_valid_json_file(path: &Path) -> bool {
    match read_concatenated(path) {
        Ok(content) => validate(&content),
        Err(_) => false,
    }
}
