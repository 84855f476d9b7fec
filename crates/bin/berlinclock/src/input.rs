//! Line-oriented reading of time inputs.

use std::io::{self, BufRead};

/// Split `reader` into lines, dropping a trailing `\r` and skipping blank
/// lines.
///
/// Lines that are not valid UTF-8 are decoded lossily so they still reach
/// the formatter and get rejected like any other malformed time. Only a
/// failing read yields an `Err`.
pub fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(decode))
        .filter(|line| !matches!(line, Ok(text) if text.trim().is_empty()))
}

fn decode(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
