//! Fast token input for competitive programming solutions,
//! plus the template substitution used to scaffold them.

#[macro_use]
extern crate log;
extern crate serde;
extern crate thiserror;

pub mod error;
pub mod reader;
pub mod session;
pub mod sink;
pub mod source;
pub mod template;

pub use error::{Result, ScanError};
pub use reader::TokenReader;
pub use session::Session;
pub use sink::OutputSink;
pub use source::{InputSource, IoConfig, OutputTarget};
