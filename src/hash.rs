//! Content hashing over a named set of files using BLAKE3.
//!
//! The digest is a function of the set of (relative path, content) pairs and
//! nothing else: callers may feed files in any order, from any filesystem,
//! on any platform, and get the same result.

use crate::error::DriverError;
use blake3::Hasher;
use std::io::{self, Read};

/// A revision digest: lowercase hex, fixed length.
pub type Digest = String;

/// Hash a named set of files.
///
/// `paths` are relative, forward-slash separated names; `open` yields the
/// byte stream for one of them. Paths are sorted byte-wise before hashing,
/// which makes the digest independent of enumeration order. For each file an
/// inner digest is computed over its raw bytes, and the line
/// `"<hex inner>  <path>\n"` is fed to an outer hasher; the outer digest is
/// the result.
///
/// A path containing a newline collides with the line framing and fails with
/// a format error. Any I/O failure aborts the whole computation; there is no
/// partial result. Exactly one file is open at a time.
pub fn hash_files<R, F>(paths: &[String], mut open: F) -> Result<Digest, DriverError>
where
    R: Read,
    F: FnMut(&str) -> io::Result<R>,
{
    let mut sorted: Vec<&str> = paths.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut outer = Hasher::new();
    for path in sorted {
        if path.contains('\n') {
            return Err(DriverError::Format(format!(
                "filenames with newlines are not supported: {path:?}"
            )));
        }
        let mut inner = Hasher::new();
        {
            let mut reader = open(path)?;
            io::copy(&mut reader, &mut inner)?;
        }
        let line = format!("{}  {}\n", hex::encode(inner.finalize().as_bytes()), path);
        outer.update(line.as_bytes());
    }
    Ok(hex::encode(outer.finalize().as_bytes()))
}
