//! Line and byte-matrix readers.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::InputError;

/// Reads `input` to the end and splits it into lines.
///
/// Lines end at `\n`; a trailing `\r` is dropped with it. A final newline does
/// not produce an empty last line. Line numbers in errors are 1-based.
pub fn read_lines(input: impl Read) -> Result<Vec<String>, InputError> {
    let mut reader = BufReader::new(input);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(InputError::Read)?;
        if read == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8(std::mem::take(&mut buf)).map_err(|_| {
            InputError::InvalidUtf8 {
                line: lines.len() + 1,
            }
        })?;
        lines.push(line);
    }

    Ok(lines)
}

/// Reads `input` into one byte row per line.
///
/// Rows follow the same splitting rules as [`read_lines`].
pub fn read_byte_matrix(input: impl Read) -> Result<Vec<Vec<u8>>, InputError> {
    let lines = read_lines(input)?;
    Ok(lines.into_iter().map(String::into_bytes).collect())
}

/// Opens `path` and reads it with [`read_lines`].
pub fn read_file_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_lines(file)
}
