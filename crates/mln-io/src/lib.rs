//! # mln-io
//!
//! Filesystem and stream helpers for MLN tooling: uniquely named temp files
//! that are removed (best effort) when the process exits, and lazy line
//! iteration over byte sources with charset decoding.
//!
//! ## Example
//!
//! ```no_run
//! use std::fs::File;
//!
//! let path = mln_io::create_temp_file("evidence", None).unwrap();
//! std::fs::write(&path, "a\nb\n").unwrap();
//! for line in mln_io::lines(File::open(&path).unwrap()) {
//!     println!("{}", line.unwrap());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lines;
pub mod temp;

pub use lines::{Lines, lines, lines_with_encoding};
pub use temp::create_temp_file;
