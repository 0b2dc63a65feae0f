use std::io::{self, Read};

use crate::error::{Error, Result};

/// Numeric tokens are truncated at this many characters; longer runs lose
/// their tail before parsing. A behavior-affecting limit of the file format.
const MAX_TOKEN_LEN: usize = 32;

/// Pulls numeric tokens out of a byte stream.
///
/// A token is a maximal run of `-`, `.` and ASCII digits; every other byte is
/// a separator and is skipped, so the format tolerates missing delimiters and
/// arbitrary punctuation between numbers. Wrap files in a `BufReader`; the
/// scanner reads one byte at a time.
pub struct Scanner<R> {
    inner: R,
}

impl<R: Read> Scanner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Next integer token. Exhausted input or a malformed token is a parse
    /// failure; a hard failure for whatever load is in progress.
    pub fn next_int(&mut self) -> Result<i32> {
        let token = self.next_token()?;
        token.parse().map_err(|_| Error::Parse("integer"))
    }

    /// Next floating-point token.
    pub fn next_float(&mut self) -> Result<f64> {
        let token = self.next_token()?;
        token.parse().map_err(|_| Error::Parse("number"))
    }

    fn next_token(&mut self) -> Result<String> {
        let mut current = loop {
            match self.next_byte()? {
                None => return Err(Error::Parse("number")),
                Some(b) if is_numeric_byte(b) => break b,
                Some(_) => continue,
            }
        };

        let mut token = String::new();
        loop {
            token.push(current as char);
            if token.len() >= MAX_TOKEN_LEN {
                // Cap hit: the byte after the cap is consumed and discarded
                self.next_byte()?;
                break;
            }
            match self.next_byte()? {
                Some(b) if is_numeric_byte(b) => current = b,
                // Separator or end of input terminates the token
                _ => break,
            }
        }

        Ok(token)
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }
}

fn is_numeric_byte(b: u8) -> bool {
    b == b'-' || b == b'.' || b.is_ascii_digit()
}
