//! Lazy line iteration over byte sources with charset decoding.

use std::io::{self, BufRead, BufReader, Read};
use std::iter::FusedIterator;

use encoding_rs::{Encoding, UTF_8};
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use mln_core::Result;

/// Lazy, forward-only, single-pass iterator over decoded text lines.
///
/// Lines end at `\n`; a preceding `\r` is stripped (the same rules as
/// `BufRead::lines`). I/O and decoding failures surface from `next()` at the
/// point of consumption, never at construction. After the first `None` or
/// fatal error the iterator is fused and the underlying source has been
/// dropped; abandoning the iterator early releases the source through `Drop`
/// instead. Either way the source is released exactly once. `Read` sources
/// in Rust have no fallible close, so release itself cannot report errors.
pub struct Lines<R: Read> {
    reader: Option<BufReader<DecodeReaderBytes<R, Vec<u8>>>>,
}

/// Iterate over the UTF-8 lines of `input`.
///
/// Equivalent to `lines_with_encoding(input, encoding_rs::UTF_8)`. Invalid
/// UTF-8 surfaces as an I/O error (`InvalidData`) from the `next()` call that
/// reaches it.
pub fn lines<R: Read>(input: R) -> Lines<R> {
    lines_with_encoding(input, UTF_8)
}

/// Iterate over the lines of `input`, decoding bytes with `encoding`.
///
/// For UTF-8 input, malformed sequences are reported as errors during
/// consumption. For every other encoding, malformed sequences decode to
/// U+FFFD as specified by the WHATWG Encoding Standard.
pub fn lines_with_encoding<R: Read>(input: R, encoding: &'static Encoding) -> Lines<R> {
    let decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding))
        // Pass UTF-8 through undecoded so malformed sequences are caught
        // below instead of being replaced.
        .utf8_passthru(encoding == UTF_8)
        .build(input);
    Lines { reader: Some(BufReader::new(decoder)) }
}

impl<R: Read> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                match String::from_utf8(buf) {
                    Ok(line) => Some(Ok(line)),
                    Err(e) => {
                        self.reader = None;
                        Some(Err(io::Error::new(io::ErrorKind::InvalidData, e).into()))
                    }
                }
            }
            Err(e) => {
                self.reader = None;
                Some(Err(e.into()))
            }
        }
    }
}

impl<R: Read> FusedIterator for Lines<R> {}
