//! Binary file detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes examined at the start of a file when guessing binary vs. text.
const CHUNK_SIZE: usize = 1024;

/// Guess whether `path` points at a binary file.
///
/// Reads at most the first kilobyte in raw mode and looks for a NUL byte,
/// the same heuristic GNU grep uses. It is deliberately imprecise: UTF-16
/// text files contain NUL bytes and are classified as binary. A file that
/// cannot be opened or read is reported and treated as binary, so it is
/// skipped rather than scanned.
pub fn is_binary(path: &Path) -> bool {
    let mut chunk = [0u8; CHUNK_SIZE];

    match File::open(path).and_then(|mut f| f.read(&mut chunk)) {
        Ok(n) => chunk[..n].contains(&0),
        Err(err) => {
            log::warn!("reading from file failed: {}, {err}", path.display());
            // Fail safe: an unreadable file is never scanned.
            true
        }
    }
}
