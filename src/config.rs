//! Defines data structures of command line arguments.

use scanfold::template::Mode;
use std::path::PathBuf;

/// How `tokens` interprets each token before echoing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Str,
    Int,
    Long,
    Double,
}

#[derive(Debug)]
pub struct NewArgs {
    pub prob: String,
    pub mode: Option<Mode>,
    pub ext: Option<String>,
    pub user: Option<String>,
    pub out_path: Option<PathBuf>,
    pub force: bool,
    pub print: bool,
}

#[derive(Debug)]
pub struct TokensArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub kind: TokenKind,
}

#[derive(Debug)]
pub enum Command {
    New(NewArgs),
    Templates,
    Tokens(TokensArgs),
}

#[derive(Debug)]
pub struct Config {
    pub settings_path: Option<PathBuf>,
    pub command: Command,
}

/// Builds CLI app metadata, especially command line arguments format.
pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    let settings = {
        use clap::AppSettings::*;
        [GlobalVersion, SubcommandRequiredElseHelp]
    };
    clap::App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .settings(&settings)
        .arg(
            clap::Arg::with_name("settings")
                .long("settings")
                .takes_value(true)
                .number_of_values(1)
                .global(true)
                .help("Path to settings file (defaults to ~/.scanfold/settings.json)"),
        )
        .subcommand(
            clap::SubCommand::with_name("new")
                .about("Creates a solution file from a template")
                .arg(
                    clap::Arg::with_name("problem")
                        .required(true)
                        .help("Problem name, substituted for $PROB"),
                )
                .arg(
                    clap::Arg::with_name("mode")
                        .long("mode")
                        .short("m")
                        .takes_value(true)
                        .possible_values(&["stdio", "file"])
                        .help("Read/write standard streams or $INFILE/$OUTFILE"),
                )
                .arg(
                    clap::Arg::with_name("ext")
                        .long("ext")
                        .takes_value(true)
                        .help("Source file extension (defaults to rs)"),
                )
                .arg(
                    clap::Arg::with_name("user")
                        .long("user")
                        .takes_value(true)
                        .help("Author name, substituted for $USER"),
                )
                .arg(
                    clap::Arg::with_name("out")
                        .long("out")
                        .short("o")
                        .takes_value(true)
                        .help("Destination path (defaults to src/bin/ of the enclosing Cargo project)"),
                )
                .arg(
                    clap::Arg::with_name("force")
                        .long("force")
                        .short("f")
                        .help("Overwrite an existing file"),
                )
                .arg(
                    clap::Arg::with_name("print")
                        .long("print")
                        .conflicts_with_all(&["out", "force"])
                        .help("Print the rendered source instead of writing it"),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("templates").about("Lists available templates"),
        )
        .subcommand(
            clap::SubCommand::with_name("tokens")
                .about("Echoes input tokens one per line")
                .arg(
                    clap::Arg::with_name("input")
                        .long("input")
                        .short("i")
                        .takes_value(true)
                        .help("Input file (defaults to standard input)"),
                )
                .arg(
                    clap::Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .takes_value(true)
                        .help("Output file (defaults to standard output)"),
                )
                .arg(
                    clap::Arg::with_name("as")
                        .long("as")
                        .takes_value(true)
                        .possible_values(&["str", "int", "long", "double"])
                        .default_value("str")
                        .help("Parse each token as this type"),
                ),
        )
}

fn token_kind(name: &str) -> Result<TokenKind, String> {
    match name {
        "str" => Ok(TokenKind::Str),
        "int" => Ok(TokenKind::Int),
        "long" => Ok(TokenKind::Long),
        "double" => Ok(TokenKind::Double),
        _ => Err(format!("unknown token type {:?}", name)),
    }
}

impl Config {
    pub fn from_matches(gm: &clap::ArgMatches) -> Result<Self, String> {
        let mut settings_path = gm.value_of("settings").map(PathBuf::from);

        let command = match gm.subcommand() {
            ("new", Some(sm)) => {
                let prob = sm.value_of("problem").unwrap_or_default().to_owned();
                let mode = match sm.value_of("mode") {
                    Some(mode) => Some(mode.parse::<Mode>()?),
                    None => None,
                };
                trace!("new {:?} mode={:?}", prob, mode);

                settings_path = settings_path.or_else(|| sm.value_of("settings").map(PathBuf::from));
                Command::New(NewArgs {
                    prob,
                    mode,
                    ext: sm.value_of("ext").map(|s| s.to_owned()),
                    user: sm.value_of("user").map(|s| s.to_owned()),
                    out_path: sm.value_of("out").map(PathBuf::from),
                    force: sm.is_present("force"),
                    print: sm.is_present("print"),
                })
            }
            ("templates", sm) => {
                if let Some(sm) = sm {
                    settings_path =
                        settings_path.or_else(|| sm.value_of("settings").map(PathBuf::from));
                }
                Command::Templates
            }
            ("tokens", Some(sm)) => {
                let kind = token_kind(sm.value_of("as").unwrap_or("str"))?;
                Command::Tokens(TokensArgs {
                    input: sm.value_of("input").map(PathBuf::from),
                    output: sm.value_of("output").map(PathBuf::from),
                    kind,
                })
            }
            (name, _) => {
                error!("unknown subcommand {:?}", name);
                return Err(format!("unknown subcommand {:?}", name));
            }
        };

        Ok(Config {
            settings_path,
            command,
        })
    }
}
