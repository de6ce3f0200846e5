//! One-element-per-line JSON array files.
//!
//! Input and output files follow a textual convention rather than generic
//! JSON: an opening `[` line, one JSON object per line (trailing comma
//! optional) and a closing `]` line.
//!
//! ```text
//! [
//! {"a":1},
//! {"a":2}
//! ]
//! ```
//!
//! [`ArrayElements`] scans such a file line by line and [`ArrayWriter`]
//! produces one, holding at most `flush_size` encoded elements in memory.

use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// Errors raised while scanning a line-oriented array file.
#[derive(Error, Debug)]
pub enum ArrayFormatError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: element found before opening '['")]
    ElementBeforeOpen { line: u64 },

    #[error("line {line}: duplicate opening '['")]
    DuplicateOpen { line: u64 },

    #[error("line {line}: unexpected content after closing ']'")]
    ContentAfterClose { line: u64 },

    #[error("input contains no opening '['")]
    MissingOpen,

    #[error("input ended without closing ']'")]
    MissingClose,
}

/// Open `path` for writing, removing any existing file first.
pub fn create_output(path: &Path) -> io::Result<File> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    File::create(path)
}

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLine<'a> {
    Open,
    Close,
    Blank,
    /// Element text with surrounding whitespace and trailing commas removed.
    Element(&'a str),
}

/// Classify a line after stripping whitespace and any trailing commas.
pub fn classify_line(line: &str) -> ArrayLine<'_> {
    let trimmed = line.trim().trim_end_matches(',').trim_end();
    match trimmed {
        "" => ArrayLine::Blank,
        "[" => ArrayLine::Open,
        "]" => ArrayLine::Close,
        element => ArrayLine::Element(element),
    }
}

/// A raw element line and its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayElement {
    pub line: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeOpen,
    InArray,
    Closed,
    Done,
}

/// Iterator over the element lines of an array file.
///
/// Yields an error (and then stops) if the bracket structure is broken,
/// including a missing closing bracket at end of input.
pub struct ArrayElements<R> {
    reader: R,
    state: ScanState,
    line: u64,
    buf: String,
}

impl<R: BufRead> ArrayElements<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: ScanState::BeforeOpen,
            line: 0,
            buf: String::new(),
        }
    }

    fn fail(&mut self, err: ArrayFormatError) -> Option<Result<ArrayElement, ArrayFormatError>> {
        self.state = ScanState::Done;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for ArrayElements<R> {
    type Item = Result<ArrayElement, ArrayFormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state == ScanState::Done {
                return None;
            }

            self.buf.clear();
            let read = match self.reader.read_line(&mut self.buf) {
                Ok(read) => read,
                Err(e) => return self.fail(e.into()),
            };

            if read == 0 {
                return match self.state {
                    ScanState::BeforeOpen => self.fail(ArrayFormatError::MissingOpen),
                    ScanState::InArray => self.fail(ArrayFormatError::MissingClose),
                    ScanState::Closed | ScanState::Done => {
                        self.state = ScanState::Done;
                        None
                    }
                };
            }
            self.line += 1;
            let line = self.line;

            let outcome = match (self.state, classify_line(&self.buf)) {
                (_, ArrayLine::Blank) => continue,
                (ScanState::BeforeOpen, ArrayLine::Open) => {
                    self.state = ScanState::InArray;
                    continue;
                }
                (ScanState::BeforeOpen, _) => Err(ArrayFormatError::ElementBeforeOpen { line }),
                (ScanState::InArray, ArrayLine::Open) => {
                    Err(ArrayFormatError::DuplicateOpen { line })
                }
                (ScanState::InArray, ArrayLine::Close) => {
                    self.state = ScanState::Closed;
                    continue;
                }
                (ScanState::InArray, ArrayLine::Element(text)) => Ok(ArrayElement {
                    line,
                    text: text.to_string(),
                }),
                (ScanState::Closed, _) => Err(ArrayFormatError::ContentAfterClose { line }),
                (ScanState::Done, _) => return None,
            };

            return match outcome {
                Ok(element) => Some(Ok(element)),
                Err(e) => self.fail(e),
            };
        }
    }
}

/// Writes a line-oriented JSON array with a bounded element buffer.
///
/// Separators are written before an element only when an earlier element was
/// already emitted, so the output never carries a trailing comma regardless
/// of how the element count relates to `flush_size`.
pub struct ArrayWriter<W: Write> {
    inner: W,
    buffer: Vec<String>,
    flush_size: usize,
    emitted: u64,
    flushes: u64,
    bytes_written: u64,
    closed: bool,
}

impl<W: Write> ArrayWriter<W> {
    /// Create a writer and emit the opening bracket.
    ///
    /// A `flush_size` of zero is treated as one.
    pub fn new(mut inner: W, flush_size: usize) -> io::Result<Self> {
        inner.write_all(b"[\n")?;
        Ok(Self {
            inner,
            buffer: Vec::with_capacity(flush_size.max(1)),
            flush_size: flush_size.max(1),
            emitted: 0,
            flushes: 0,
            bytes_written: 2,
            closed: false,
        })
    }

    /// Buffer one encoded element, flushing when the buffer is full.
    pub fn push(&mut self, element: String) -> io::Result<()> {
        self.buffer.push(element);
        if self.buffer.len() >= self.flush_size {
            self.flush_buffer()?;
        }
        Ok(())
    }

    /// Write all buffered elements.
    pub fn flush_buffer(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        for element in self.buffer.drain(..) {
            if self.emitted > 0 {
                self.inner.write_all(b",\n")?;
                self.bytes_written += 2;
            }
            self.inner.write_all(element.as_bytes())?;
            self.bytes_written += element.len() as u64;
            self.emitted += 1;
        }
        self.flushes += 1;
        tracing::debug!(
            "Flushed buffer to disk: {} elements written so far",
            self.emitted
        );
        Ok(())
    }

    /// Elements buffered but not yet written.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Elements already written.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush remaining elements and write the closing bracket.
    ///
    /// Counters stay readable afterwards. Closing twice is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.flush_buffer()?;
        self.inner.write_all(b"\n]")?;
        self.bytes_written += 2;
        self.inner.flush()?;
        self.closed = true;
        Ok(())
    }

    /// Close the array and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.close()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn elements(input: &str) -> Vec<Result<ArrayElement, ArrayFormatError>> {
        ArrayElements::new(Cursor::new(input.as_bytes())).collect()
    }

    fn write_all(items: &[&str], flush_size: usize) -> String {
        let mut writer = ArrayWriter::new(Vec::new(), flush_size).unwrap();
        for item in items {
            writer.push(item.to_string()).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("[\n"), ArrayLine::Open);
        assert_eq!(classify_line("]"), ArrayLine::Close);
        assert_eq!(classify_line("  \r\n"), ArrayLine::Blank);
        assert_eq!(classify_line("{\"a\":1},\r\n"), ArrayLine::Element("{\"a\":1}"));
        assert_eq!(classify_line("  {\"a\":1},,"), ArrayLine::Element("{\"a\":1}"));
    }

    #[test]
    fn test_scan_elements() {
        let items = elements("[\n{\"a\":1},\n\n{\"a\":2}\n]\n");
        let items: Vec<ArrayElement> = items.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            items,
            vec![
                ArrayElement {
                    line: 2,
                    text: "{\"a\":1}".to_string()
                },
                ArrayElement {
                    line: 4,
                    text: "{\"a\":2}".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_scan_empty_array() {
        assert!(elements("[\n]").is_empty());
    }

    #[test]
    fn test_scan_structure_errors() {
        let missing_close = elements("[\n{\"a\":1}\n");
        assert!(matches!(
            missing_close.last(),
            Some(Err(ArrayFormatError::MissingClose))
        ));

        assert!(matches!(
            elements("").as_slice(),
            [Err(ArrayFormatError::MissingOpen)]
        ));
        assert!(matches!(
            elements("{\"a\":1}\n").as_slice(),
            [Err(ArrayFormatError::ElementBeforeOpen { line: 1 })]
        ));
        assert!(matches!(
            elements("[\n[\n").as_slice(),
            [Err(ArrayFormatError::DuplicateOpen { line: 2 })]
        ));
        assert!(matches!(
            elements("[\n]\n{\"a\":1}\n").as_slice(),
            [Err(ArrayFormatError::ContentAfterClose { line: 3 })]
        ));
    }

    #[test]
    fn test_writer_tiny_array_never_reaching_threshold() {
        let out = write_all(&["{\"a\":1}", "{\"a\":2}"], 10);
        assert_eq!(out, "[\n{\"a\":1},\n{\"a\":2}\n]");
    }

    #[test]
    fn test_writer_exact_multiple_of_threshold() {
        // the closing bracket arrives with nothing buffered
        let mut writer = ArrayWriter::new(Vec::new(), 2).unwrap();
        for i in 0..4 {
            writer.push(format!("{{\"i\":{i}}}")).unwrap();
        }
        assert_eq!(writer.pending(), 0);
        assert_eq!(writer.flushes(), 2);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(!out.contains(",\n]"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_writer_empty_array_is_valid_json() {
        let out = write_all(&[], 3);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[test]
    fn test_writer_output_rescans_to_same_elements() {
        let items: Vec<String> = (0..7).map(|i| format!("{{\"n\":{i}}}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();

        for flush_size in 2..9 {
            let out = write_all(&refs, flush_size);
            let rescanned: Vec<String> = ArrayElements::new(Cursor::new(out.as_bytes()))
                .map(|e| e.unwrap().text)
                .collect();
            assert_eq!(rescanned, items, "flush_size={flush_size}");
        }
    }

    #[test]
    fn test_writer_counts_bytes() {
        let mut writer = ArrayWriter::new(Vec::new(), 2).unwrap();
        for _ in 0..3 {
            writer.push("{}".to_string()).unwrap();
        }
        writer.close().unwrap();
        writer.close().unwrap();
        assert_eq!(writer.emitted(), 3);
        assert_eq!(writer.flushes(), 2);

        let bytes = writer.bytes_written();
        let out = writer.finish().unwrap();
        assert_eq!(bytes, out.len() as u64);
    }
}
