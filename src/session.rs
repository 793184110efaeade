//! A reader and a sink opened together for one solution run.

use crate::reader::TokenReader;
use crate::sink::OutputSink;
use crate::source::IoConfig;
use std::io::{self, BufRead, Write};

/// Owns the token reader and the output sink. Pass it by reference to the
/// routines that need I/O; call `finish` once at the end.
pub struct Session<R: BufRead, W: Write> {
    pub input: TokenReader<R>,
    pub output: OutputSink<W>,
}

impl Session<Box<dyn BufRead>, Box<dyn Write>> {
    pub fn open(config: &IoConfig) -> io::Result<Self> {
        let input = config.input.open()?;
        let output = config.output.open()?;
        Ok(Session::new(input, output))
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input: TokenReader::new(input),
            output: OutputSink::new(output),
        }
    }

    /// Flushes the output, then closes both ends.
    pub fn finish(self) -> io::Result<W> {
        let Session { input, output } = self;
        let inner = output.close()?;
        drop(input);
        Ok(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::fs;
    use tempfile::tempdir;

    fn sum_pairs<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
        let n = session.input.next_int()?;
        for _ in 0..n {
            let a = session.input.next_long()?;
            let b = session.input.next_long()?;
            writeln!(session.output, "{}", a + b)?;
        }
        Ok(())
    }

    #[test]
    fn test_in_memory_session() {
        let mut session = Session::new("2\n1 2\n\n3000000000 4\n".as_bytes(), Vec::new());
        sum_pairs(&mut session).unwrap();
        let out = session.finish().unwrap();
        assert_eq!("3\n3000000004\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn test_file_session() {
        let dir = tempdir().unwrap();
        let infile = dir.path().join("sum.in");
        let outfile = dir.path().join("sum.out");
        fs::write(&infile, "1\n-5 5\n").unwrap();

        let mut session = Session::open(&IoConfig::files(infile.clone(), outfile.clone())).unwrap();
        sum_pairs(&mut session).unwrap();
        session.finish().unwrap();

        assert_eq!("0\n", fs::read_to_string(&outfile).unwrap());
    }
}
