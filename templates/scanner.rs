use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

#[derive(Debug)]
enum ScanError {
    EndOfInput,
    Parse(String),
    Io(io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanError::EndOfInput => write!(f, "unexpected end of input"),
            ScanError::Parse(token) => write!(f, "cannot parse {:?}", token),
            ScanError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::Io(err)
    }
}

struct Scanner<R> {
    input: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(input: R) -> Self {
        Scanner {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    fn token(&mut self) -> Result<&str, ScanError> {
        loop {
            let bytes = self.line.as_bytes();
            if let Some(k) = bytes[self.pos..].iter().position(|b| !b.is_ascii_whitespace()) {
                let start = self.pos + k;
                let len = bytes[start..]
                    .iter()
                    .position(|b| b.is_ascii_whitespace())
                    .unwrap_or(bytes.len() - start);
                self.pos = start + len;
                return Ok(&self.line[start..start + len]);
            }
            self.line.clear();
            self.pos = 0;
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(ScanError::EndOfInput);
            }
        }
    }

    fn next<T: FromStr>(&mut self) -> Result<T, ScanError> {
        let token = self.token()?;
        token.parse().map_err(|_| ScanError::Parse(token.to_owned()))
    }

    #[allow(dead_code)]
    fn int(&mut self) -> Result<i32, ScanError> {
        self.next()
    }

    #[allow(dead_code)]
    fn long(&mut self) -> Result<i64, ScanError> {
        self.next()
    }

    #[allow(dead_code)]
    fn double(&mut self) -> Result<f64, ScanError> {
        self.next()
    }
}
