//! Whitespace-delimited token reader over a line-oriented input.

use crate::error::{Result, ScanError};
use std::any;
use std::io::BufRead;
use std::str::FromStr;

/// Pulls tokens out of `input` one line at a time.
///
/// `line` holds the current line and `pos` is the byte offset of its
/// unconsumed rest. A fresh line is read only once the rest has no tokens.
pub struct TokenReader<R> {
    input: R,
    line: String,
    pos: usize,
}

fn is_delimiter(b: u8) -> bool {
    // Same set as a classic string tokenizer: space, \t, \n, \r and form feed.
    b.is_ascii_whitespace()
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    /// Byte range of the next token in the current line, if any.
    fn next_span(&self) -> Option<(usize, usize)> {
        let bytes = self.line.as_bytes();
        let start = self.pos + bytes[self.pos..].iter().position(|&b| !is_delimiter(b))?;
        let len = bytes[start..]
            .iter()
            .position(|&b| is_delimiter(b))
            .unwrap_or(bytes.len() - start);
        Some((start, start + len))
    }

    fn refill(&mut self) -> Result<()> {
        self.line.clear();
        self.pos = 0;

        let n = self.input.read_line(&mut self.line)?;
        if n == 0 {
            return Err(ScanError::EndOfInput);
        }

        trace!("read line of {} bytes", n);
        Ok(())
    }

    /// Returns the next token, skipping blank lines.
    /// Fails with `EndOfInput` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<&str> {
        loop {
            if let Some((start, end)) = self.next_span() {
                self.pos = end;
                return Ok(&self.line[start..end]);
            }
            self.refill()?;
        }
    }

    fn next_as<T: FromStr>(&mut self, kind: &'static str) -> Result<T> {
        let token = self.next_token()?;
        token.parse::<T>().map_err(|_| ScanError::Parse {
            token: token.to_owned(),
            kind,
        })
    }

    /// Reads the next token and parses it as `T`.
    /// `kind` in a parse error is the type name, for diagnostics only.
    pub fn next<T: FromStr>(&mut self) -> Result<T> {
        self.next_as(any::type_name::<T>())
    }

    pub fn next_int(&mut self) -> Result<i32> {
        self.next_as("int")
    }

    pub fn next_long(&mut self) -> Result<i64> {
        self.next_as("long")
    }

    pub fn next_double(&mut self) -> Result<f64> {
        self.next_as("double")
    }
}
