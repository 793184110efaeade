//! Buffered output sink.

use crate::source::OutputTarget;
use std::io::{self, BufWriter, Write};

/// Buffered writer that must be closed explicitly.
///
/// `close` flushes every buffered byte and reports failures, unlike
/// dropping a `BufWriter`, which swallows them.
pub struct OutputSink<W: Write> {
    writer: BufWriter<W>,
}

impl OutputSink<Box<dyn Write>> {
    pub fn open(target: &OutputTarget) -> io::Result<Self> {
        Ok(OutputSink::new(target.open()?))
    }
}

impl<W: Write> OutputSink<W> {
    pub fn new(inner: W) -> Self {
        OutputSink {
            writer: BufWriter::new(inner),
        }
    }

    /// Flushes and gives back the underlying writer.
    /// Dropping the returned value closes it.
    pub fn close(self) -> io::Result<W> {
        let mut inner = self.writer.into_inner().map_err(|err| err.into_error())?;
        inner.flush()?;
        Ok(inner)
    }
}

impl<W: Write> Write for OutputSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
