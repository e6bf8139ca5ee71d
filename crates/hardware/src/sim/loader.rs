//! Program Loader.
//!
//! This module reads textual LS-8 program files into memory images. It performs:
//! 1. **Comment stripping:** Anything after a `#` on a line is dropped.
//! 2. **Token parsing:** Each remaining token is an 8-bit binary literal,
//!    one instruction cell per line.
//! 3. **Fault reporting:** An unreadable path or a malformed token fails the
//!    whole load with a [`Fault::ProgramLoad`]; there is no partial image.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::Fault;

/// Reads and parses a program file into a memory image.
///
/// # Arguments
///
/// * `path` - Path to the `.ls8` source file.
///
/// # Errors
///
/// Returns [`Fault::ProgramLoad`] if the file cannot be read or any line
/// fails to parse.
pub fn read_program(path: &Path) -> Result<Vec<u8>, Fault> {
    let text = fs::read_to_string(path).map_err(|e| {
        Fault::ProgramLoad(format!("cannot read '{}': {e}", path.display()))
    })?;
    let image = parse_program(&text)?;
    info!(path = %path.display(), cells = image.len(), "program parsed");
    Ok(image)
}

/// Parses program text into a memory image.
///
/// One cell per line: comments (`#` to end of line) are stripped, lines that
/// are empty after stripping are skipped, and the rest must be an unsigned
/// 8-bit binary literal.
///
/// # Errors
///
/// Returns [`Fault::ProgramLoad`] naming the line number and token of the
/// first malformed cell.
pub fn parse_program(text: &str) -> Result<Vec<u8>, Fault> {
    let mut image = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let token = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = u8::from_str_radix(token, 2).map_err(|_| {
            Fault::ProgramLoad(format!(
                "line {}: '{token}' is not an 8-bit binary literal",
                idx + 1
            ))
        })?;
        image.push(value);
    }
    Ok(image)
}
