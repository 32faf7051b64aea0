// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use pico_args::Arguments;

const HELP: &str = "\
iconset prints app icons described by a JSON catalog.

USAGE:
  iconset [OPTIONS] icon <KEY>              # merged icon SVG
  iconset [OPTIONS] foreground <NAME>       # foreground SVG
  iconset [OPTIONS] background <NAME>       # background SVG
  iconset [OPTIONS] list                    # catalog keys

OPTIONS:
  -h, --help                        Prints help information
  -V, --version                     Prints version information

  --catalog FILE                    Sets the catalog file
                                    [default: icons.json]
  --icons-dir DIR                   Sets a directory with 'foreground'
                                    and 'background' subdirectories
                                    [default: icons]
  --quiet                           Disables warnings
";

#[derive(Debug)]
enum Command {
    Icon(String),
    Foreground(String),
    Background(String),
    List,
}

#[derive(Debug)]
struct Args {
    catalog: PathBuf,
    icons_dir: PathBuf,
    quiet: bool,
    command: Command,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let catalog = input
        .opt_value_from_str("--catalog")?
        .unwrap_or_else(|| PathBuf::from("icons.json"));
    let icons_dir = input
        .opt_value_from_str("--icons-dir")?
        .unwrap_or_else(|| PathBuf::from("icons"));
    let quiet = input.contains("--quiet");

    let command = match input.subcommand()?.as_deref() {
        Some("icon") => Command::Icon(input.free_from_str()?),
        Some("foreground") => Command::Foreground(input.free_from_str()?),
        Some("background") => Command::Background(input.free_from_str()?),
        Some("list") => Command::List,
        Some(cmd) => {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown command '{}'", cmd),
            })
        }
        None => return Err(pico_args::Error::MissingArgument),
    };

    Ok(Args {
        catalog,
        icons_dir,
        quiet,
        command,
    })
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn process(args: Args) -> Result<(), iconset::Error> {
    let opt = iconset::Options {
        icons_dir: args.icons_dir,
        ..iconset::Options::default()
    };

    let catalog = iconset::Catalog::load(&args.catalog, &opt)?;

    let output = match args.command {
        Command::Icon(ref key) => catalog.icon_svg(key)?,
        Command::Foreground(ref name) => catalog.foreground(name)?.svg.clone(),
        Command::Background(ref name) => catalog.background(name)?.svg.clone(),
        Command::List => {
            let mut list = String::new();
            for icon in catalog.icons() {
                list.push_str(&icon.key);
                list.push_str(": ");
                list.push_str(&icon.title);
                if let Some(ref subtitle) = icon.subtitle {
                    list.push_str(" (");
                    list.push_str(subtitle);
                    list.push(')');
                }
                list.push('\n');
            }
            list
        }
    };

    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
