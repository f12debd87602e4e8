//! Program Loader.
//!
//! This module turns a text program listing into memory contents. It performs:
//! 1. **Parsing:** Strips `#` comments, drops blank lines, and parses each remaining
//!    line as one base-2 byte.
//! 2. **Placement:** Copies the bytes into memory from address 0 after checking that
//!    the whole program fits.
//! 3. **File input:** Reads a listing from disk.
//!
//! Loading happens once, before the first fetch; any error leaves memory untouched.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::{COMMENT_MARKER, MEMORY_SIZE, PROGRAM_BASE};
use crate::common::LoadError;
use crate::core::Cpu;

/// Parses a single listing line.
///
/// Returns `Ok(None)` for blank and comment-only lines.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, used in error reports.
/// * `line` - The raw line.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if what remains after comment stripping is not
/// a base-2 literal that fits in a byte.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<u8>, LoadError> {
    let code = line
        .split_once(COMMENT_MARKER)
        .map_or(line, |(code, _)| code)
        .trim();
    if code.is_empty() {
        return Ok(None);
    }

    let is_binary = code.bytes().all(|b| b == b'0' || b == b'1');
    match u8::from_str_radix(code, 2) {
        Ok(byte) if is_binary => Ok(Some(byte)),
        _ => Err(LoadError::Parse {
            line: line_no,
            text: code.to_string(),
        }),
    }
}

/// Parses a whole listing into program bytes, in order.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for the first malformed line.
pub fn parse_program<I, S>(lines: I) -> Result<Vec<u8>, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut program = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(byte) = parse_line(idx + 1, line.as_ref())? {
            program.push(byte);
        }
    }
    Ok(program)
}

/// Copies program bytes into memory starting at address 0.
///
/// # Returns
///
/// The number of bytes loaded.
///
/// # Errors
///
/// Returns [`LoadError::Overflow`] if the program is larger than memory; memory
/// is not modified in that case.
pub fn load_bytes(cpu: &mut Cpu, program: &[u8]) -> Result<usize, LoadError> {
    let overflow = LoadError::Overflow {
        len: program.len(),
        capacity: MEMORY_SIZE - PROGRAM_BASE,
    };
    if program.len() > MEMORY_SIZE - PROGRAM_BASE {
        return Err(overflow);
    }
    for (offset, &byte) in program.iter().enumerate() {
        if cpu.ram_write(PROGRAM_BASE + offset, byte).is_err() {
            return Err(overflow);
        }
    }
    debug!(bytes = program.len(), "program loaded");
    Ok(program.len())
}

/// Parses a listing and loads it into memory.
///
/// # Returns
///
/// The number of bytes loaded.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] or [`LoadError::Overflow`]; nothing is written
/// to memory unless the whole listing is valid and fits.
pub fn load<I, S>(cpu: &mut Cpu, lines: I) -> Result<usize, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let program = parse_program(lines)?;
    load_bytes(cpu, &program)
}

/// Reads a listing from disk and loads it into memory.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as [`load`].
pub fn load_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading program listing");
    load(cpu, text.lines())
}
