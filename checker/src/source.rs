//! Reading statements one line at a time.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str;

use tracing::{debug, warn};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based, counting every line read, blank ones included.
    pub number: usize,
    /// The line without its terminator.
    pub text: String,
    /// Whether text past the length limit was dropped.
    pub truncated: bool,
}

/// Yields the lines of a reader. `\n`, `\r\n` and a lone `\r` all end a line,
/// so no carriage return ever reaches the tokenizer.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the run.
/// With a `max_line_len`, at most that many bytes of a line are buffered; the
/// rest of the line is read past and dropped without being stored.
pub struct SourceLines<R> {
    reader: R,
    max_line_len: Option<usize>,
    line_number: usize,
    buf: Vec<u8>,
    /// The previous line ended in `\r`, so a leading `\n` belongs to it.
    skip_lf: bool,
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R, max_line_len: Option<usize>) -> Self {
        SourceLines {
            reader,
            max_line_len,
            line_number: 0,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    /// Reads one line into `buf`. `None` at end of input, otherwise whether
    /// the line was cut at the length limit.
    fn read_line(&mut self) -> io::Result<Option<bool>> {
        self.buf.clear();
        let mut read_any = false;
        let mut truncated = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(if read_any { Some(truncated) } else { None });
            }
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            read_any = true;

            let (len, terminator) = match available.iter().position(|b| *b == b'\n' || *b == b'\r') {
                Some(i) => (i, Some(available[i])),
                None => (available.len(), None),
            };
            let kept = match self.max_line_len {
                Some(max) => max.saturating_sub(self.buf.len()).min(len),
                None => len,
            };
            self.buf.extend_from_slice(&available[..kept]);
            truncated |= kept < len;

            match terminator {
                Some(byte) => {
                    self.reader.consume(len + 1);
                    self.skip_lf = byte == b'\r';
                    return Ok(Some(truncated));
                }
                None => self.reader.consume(len),
            }
        }
    }
}

impl SourceLines<BufReader<File>> {
    pub fn open(path: &Path, max_line_len: Option<usize>) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::InputUnavailable {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "opened input");
        Ok(SourceLines::new(BufReader::new(file), max_line_len))
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let number = self.line_number + 1;
        let truncated = match self.read_line() {
            Ok(None) => return None,
            Ok(Some(truncated)) => truncated,
            Err(source) => return Some(Err(Error::Read { line: number, source })),
        };
        self.line_number = number;

        if truncated {
            // Don't leave half of a multi-byte character behind the cut.
            if let Err(e) = str::from_utf8(&self.buf) {
                if e.error_len().is_none() {
                    self.buf.truncate(e.valid_up_to());
                }
            }
            warn!(line = number, max = ?self.max_line_len, "line exceeds length limit, remainder ignored");
        }

        let text = String::from_utf8_lossy(&self.buf).into_owned();
        Some(Ok(SourceLine { number, text, truncated }))
    }
}
