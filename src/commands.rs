//! Runs the subcommand chosen on the command line.

use crate::config::{Command, Config, NewArgs, TokenKind, TokensArgs};
use crate::project::{self, ProjectError};
use crate::settings::Settings;
use scanfold::template::{self, Mode, ProblemParams};
use scanfold::{InputSource, IoConfig, OutputTarget, ScanError, Session};
use std::env;
use std::io::{self, BufRead, Write};

/// Settings are read only by the commands that use them.
pub fn dispatch(config: &Config) -> Result<(), ProjectError> {
    let load_settings = || {
        let settings = Settings::load(config.settings_path.as_deref())?;
        trace!("{:?}", settings);
        Ok::<_, ProjectError>(settings)
    };

    match &config.command {
        Command::New(args) => new(args, &load_settings()?),
        Command::Templates => templates(&load_settings()?),
        Command::Tokens(args) => tokens(args),
    }
}

fn problem_params(args: &NewArgs, settings: &Settings) -> Result<ProblemParams, ProjectError> {
    if !template::is_valid_problem_name(&args.prob) {
        return Err(ProjectError::InvalidProblemName(args.prob.clone()));
    }

    Ok(ProblemParams {
        user: args.user.clone().unwrap_or_else(|| settings.user()),
        prob: args.prob.clone(),
        ext: args.ext.clone().unwrap_or_else(|| settings.ext()),
        mode: args.mode.unwrap_or(settings.mode),
        input_file: settings.input_file(),
        output_file: settings.output_file(),
    })
}

fn new(args: &NewArgs, settings: &Settings) -> Result<(), ProjectError> {
    let params = problem_params(args, settings)?;
    let templates_dir = settings.templates_dir();
    let template = project::load_template(templates_dir.as_deref(), &params.template_name())?;
    let source = params.render(&template);

    if params.ext == "rs" {
        project::check_rust_source(&source);
    }

    if args.print {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(source.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let path = match &args.out_path {
        Some(path) => path.clone(),
        None => project::default_destination(&env::current_dir()?, &params),
    };
    project::write_source(&path, &source, args.force)?;

    eprintln!(
        "Created {} problem {} with source file {}",
        params.mode,
        params.prob,
        path.display()
    );
    if params.mode == Mode::File {
        let mapping = params.mapping();
        eprintln!("Reads {} and writes {}", mapping["INFILE"], mapping["OUTFILE"]);
    }
    Ok(())
}

fn templates(settings: &Settings) -> Result<(), ProjectError> {
    let templates_dir = settings.templates_dir();
    for entry in project::list_templates(templates_dir.as_deref())? {
        println!("{}", entry);
    }
    Ok(())
}

fn tokens(args: &TokensArgs) -> Result<(), ProjectError> {
    let config = IoConfig {
        input: args
            .input
            .clone()
            .map_or(InputSource::Stdin, InputSource::File),
        output: args
            .output
            .clone()
            .map_or(OutputTarget::Stdout, OutputTarget::File),
    };

    let mut session = Session::open(&config)?;
    let count = echo_tokens(&mut session, args.kind)?;
    session.finish()?;

    debug!("echoed {} tokens", count);
    Ok(())
}

fn echo_token<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    kind: TokenKind,
) -> Result<(), ScanError> {
    let Session { input, output } = session;
    match kind {
        TokenKind::Str => writeln!(output, "{}", input.next_token()?)?,
        TokenKind::Int => writeln!(output, "{}", input.next_int()?)?,
        TokenKind::Long => writeln!(output, "{}", input.next_long()?)?,
        TokenKind::Double => writeln!(output, "{}", input.next_double()?)?,
    }
    Ok(())
}

/// Echoes every token until the input runs out.
fn echo_tokens<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    kind: TokenKind,
) -> Result<usize, ScanError> {
    let mut count = 0;
    loop {
        match echo_token(session, kind) {
            Ok(()) => count += 1,
            Err(ScanError::EndOfInput) => return Ok(count),
            Err(err) => return Err(err),
        }
    }
}
