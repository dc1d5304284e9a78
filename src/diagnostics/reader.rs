//! Line reader for checker output.

use std::borrow::Cow;
use std::io::{self, BufRead};

/// Feed every line of `reader` to `on_line`, without its terminator.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read, so one mangled line never hides the lines after it.
/// Only I/O failures are returned as errors.
///
/// # Returns
///
/// The number of lines delivered.
pub fn read_lines_lossy<R, F>(mut reader: R, mut on_line: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    let mut lines = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }

        let decoded: Cow<'_, str> = String::from_utf8_lossy(&buf);
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        let line = line.strip_suffix('\r').unwrap_or(line);
        on_line(line);
        lines += 1;
    }
}
