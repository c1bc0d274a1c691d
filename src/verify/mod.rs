//! Module reading a written fixture back from disk to confirm what actually landed there.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, read_back_error};


/// Reopens `path` and checks that it holds exactly `expected` lines, header included.
///
/// Returns the counted lines on success.
pub(crate) fn verify_line_count(path: &Path, expected: usize) -> Result<usize, Error> {
    let actual = count_file_lines(path)?;
    debug!(line_count = actual, expected, "fixture read back");
    if actual != expected {
        return Err(Error::LineCountMismatch {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(actual)
}

/// Reopens `path` and counts its lines, header included.
pub(crate) fn count_file_lines(path: &Path) -> Result<usize, Error> {
    let file = File::open(path).map_err(|e| read_back_error(path, e))?;
    count_lines(file).map_err(|e| read_back_error(path, e))
}

fn count_lines(reader: impl Read) -> std::io::Result<usize> {
    let mut count = 0;
    for line in BufReader::new(reader).lines() {
        line?;
        count += 1;
    }
    Ok(count)
}
