//! Input and output endpoints: standard streams or named files.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                debug!("open input {}", path.display());
                Ok(Box::new(BufReader::new(File::open(path)?)))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Opens the raw destination. Files are created or truncated.
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout())),
            OutputTarget::File(path) => {
                debug!("create output {}", path.display());
                Ok(Box::new(File::create(path)?))
            }
        }
    }
}

/// Where a solution reads from and writes to.
#[derive(Clone, Debug, PartialEq)]
pub struct IoConfig {
    pub input: InputSource,
    pub output: OutputTarget,
}

impl IoConfig {
    pub fn stdio() -> Self {
        IoConfig {
            input: InputSource::Stdin,
            output: OutputTarget::Stdout,
        }
    }

    pub fn files<P: Into<PathBuf>, Q: Into<PathBuf>>(infile: P, outfile: Q) -> Self {
        IoConfig {
            input: InputSource::File(infile.into()),
            output: OutputTarget::File(outfile.into()),
        }
    }
}
