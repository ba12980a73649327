//! Command-line interface for tinymarkup
//!
//! Usage:
//!   tinymarkup format `<path>`                  - Reprint a file as canonical markup
//!   tinymarkup convert `<path>` --to `<format>` - Print a file as markup, treeviz or json
//!   tinymarkup get `<path>` `<leaf>`            - Print the value of the first leaf named `<leaf>`
//!   tinymarkup demo                           - Build, serialize and reparse a sample tree
//!
//! Logging goes to stderr; `-v` raises the level, and `RUST_LOG` overrides it.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::process::ExitCode;
use thiserror::Error;
use tinymarkup::markup::ast::{ConstructionError, Element};
use tinymarkup::markup::config::{Loader, TinyMarkupConfig};
use tinymarkup::markup::formats::{FormatError, FormatRegistry};
use tinymarkup::markup::parsing::{parse_with, ParseError};
use tinymarkup::markup::samples;

/// Config file picked up from the working directory when `--config` is absent
const LOCAL_CONFIG: &str = "tinymarkup.toml";

#[derive(Debug, Error)]
enum CliError {
    #[error("error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("building sample tree: {0}")]
    Construction(#[from] ConstructionError),
    #[error("{0}: no element could be parsed")]
    Empty(String),
    #[error("no leaf named `{0}`")]
    LeafNotFound(String),
    #[error("serialize -> parse -> serialize changed the output")]
    RoundTrip,
}

fn cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the markup file")
            .required(true)
            .index(1)
    };

    Command::new("tinymarkup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and reformatting TinyMarkup files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Fail on malformed input instead of recovering"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Spaces per nesting level in markup output"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase logging verbosity"),
        )
        .subcommand(
            Command::new("format")
                .about("Reprint a file as canonical markup")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("convert")
                .about("Print a file in another format")
                .arg(path_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format (markup, treeviz, json)"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the value of the first leaf with the given name")
                .arg(path_arg())
                .arg(
                    Arg::new("name")
                        .help("Leaf name")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("demo").about("Round-trip the reference document"))
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(matches: &ArgMatches) -> Result<String, CliError> {
    let config = load_config(matches)?;
    let registry = FormatRegistry::with_config(&config.serializer);

    match matches.subcommand() {
        Some(("format", sub)) => {
            let root = parse_file(path_of(sub), &config)?;
            Ok(registry.serialize(&root, "markup")? + "\n")
        }
        Some(("convert", sub)) => {
            let root = parse_file(path_of(sub), &config)?;
            let format = sub
                .get_one::<String>("to")
                .unwrap_or(&config.serializer.format);
            Ok(registry.serialize(&root, format)? + "\n")
        }
        Some(("get", sub)) => {
            let root = parse_file(path_of(sub), &config)?;
            let name = sub.get_one::<String>("name").map_or("", String::as_str);
            let leaf = root
                .find_leaf(name)
                .ok_or_else(|| CliError::LeafNotFound(name.to_string()))?;
            Ok(format!("{}\n", leaf.value()))
        }
        Some(("demo", _)) => run_demo(&config, &registry),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<TinyMarkupConfig, CliError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    if matches.get_flag("strict") {
        loader = loader.set_override("parser.strict", true)?;
    }
    if let Some(indent) = matches.get_one::<usize>("indent") {
        loader = loader.set_override("serializer.indent_width", *indent as i64)?;
    }
    let config = loader.build()?;
    log::debug!("loaded configuration: {config:?}");
    Ok(config)
}

fn path_of(matches: &ArgMatches) -> &str {
    matches.get_one::<String>("path").map_or("", String::as_str)
}

fn parse_file(path: &str, config: &TinyMarkupConfig) -> Result<Element, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    log::info!("parsing {path} ({} bytes)", source.len());
    parse_with(&source, &config.parser)?.ok_or_else(|| CliError::Empty(path.to_string()))
}

/// Serialize the reference document, parse it back, serialize again, and compare
fn run_demo(config: &TinyMarkupConfig, registry: &FormatRegistry) -> Result<String, CliError> {
    let root: Element = samples::reference_document()?.into();
    let first = registry.serialize(&root, "markup")?;

    let reparsed = parse_with(&first, &config.parser)?
        .ok_or_else(|| CliError::Empty("demo output".to_string()))?;
    let second = registry.serialize(&reparsed, "markup")?;

    if first != second || reparsed != root {
        return Err(CliError::RoundTrip);
    }

    let leaf = reparsed
        .find_leaf("Leaf3")
        .ok_or_else(|| CliError::LeafNotFound("Leaf3".to_string()))?;

    Ok(format!(
        "{first}\n\nround trip: identical\nLeaf3 = {}\n",
        leaf.value()
    ))
}
