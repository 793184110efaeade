#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate glob;
#[macro_use]
extern crate log;
extern crate scanfold;
extern crate serde;
extern crate serde_json;
extern crate syn;
extern crate thiserror;

#[cfg(test)]
extern crate tempfile;

mod commands;
mod config;
mod project;
mod settings;

use std::error::Error;
use std::process;

fn run() -> Result<(), project::ProjectError> {
    let matches = config::app().get_matches();
    let config = config::Config::from_matches(&matches).map_err(project::ProjectError::Usage)?;
    trace!("{:?}", config);

    commands::dispatch(&config)
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        debug!("{:?}", err);
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
