// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use pico_args::Arguments;

const HELP: &str = "\
vd2svg converts Android VectorDrawable files into SVG and composes app icons.

USAGE:
  vd2svg [OPTIONS] convert <in-xml> <out-svg>       # from file to file
  vd2svg [OPTIONS] convert <in-xml> -c              # from file to stdout
  vd2svg [OPTIONS] convert - <out-svg>              # from stdin to file
  vd2svg [OPTIONS] merge <fg> <bg> <out-svg>
  vd2svg [OPTIONS] solid <COLOR> <out-svg>

COMMANDS:
  convert                           Converts a VectorDrawable into an SVG
  merge                             Draws a foreground over a background
                                    VectorDrawable layers are converted with
                                    'fg-' and 'bg-' ID prefixes. SVG layers are
                                    used as is, so their IDs must not collide
  solid                             Creates a solid color background SVG
                                    The color is written as is, like #112233

OPTIONS:
  -h, --help                        Prints help information
  -V, --version                     Prints version information
  -c                                Prints the output SVG to the stdout

  --default-size LENGTH             Sets the canvas size used when a VectorDrawable
                                    has no viewport and no width/height
                                    [values: 1..4294967295 (inclusive)] [default: 438]
  --id-prefix                       Adds a prefix to each ID attribute
  --indent INDENT                   Sets the XML nodes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: none]
  --attrs-indent INDENT             Sets the XML attributes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: none]
  --coordinates-precision NUM       Set the coordinates numeric precision
                                    [values: 2..8 (inclusive)] [default: 8]
  --transforms-precision NUM        Set the transform values numeric precision
                                    [values: 2..8 (inclusive)] [default: 8]
  --quiet                           Disables warnings

ARGS:
  <in-xml>                          Input VectorDrawable file
  <fg>                              Foreground SVG or VectorDrawable (.xml) file
  <bg>                              Background SVG or VectorDrawable (.xml) file
  <out-svg>                         Output file
";

#[derive(Debug)]
enum Command {
    Convert { input: String, output: String },
    Merge { fg: String, bg: String, output: String },
    Solid { color: String, output: String },
}

#[derive(Debug)]
struct Args {
    default_size: u32,

    id_prefix: Option<String>,
    indent: xmlwriter::Indent,
    attrs_indent: xmlwriter::Indent,
    coordinates_precision: Option<u8>,
    transforms_precision: Option<u8>,

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

    let mut args = Args {
        default_size: input
            .opt_value_from_fn("--default-size", parse_length)?
            .unwrap_or(438),

        id_prefix: input.opt_value_from_str("--id-prefix")?,
        indent: input
            .opt_value_from_fn("--indent", parse_indent)?
            .unwrap_or(xmlwriter::Indent::None),
        attrs_indent: input
            .opt_value_from_fn("--attrs-indent", parse_indent)?
            .unwrap_or(xmlwriter::Indent::None),
        coordinates_precision: input
            .opt_value_from_fn("--coordinates-precision", parse_precision)?,
        transforms_precision: input.opt_value_from_fn("--transforms-precision", parse_precision)?,

        quiet: input.contains("--quiet"),

        // Replaced below, after all the options are consumed.
        command: Command::Solid {
            color: String::new(),
            output: String::new(),
        },
    };

    args.command = match input.subcommand()?.as_deref() {
        Some("convert") => Command::Convert {
            input: input.free_from_str()?,
            output: input.free_from_str()?,
        },
        Some("merge") => Command::Merge {
            fg: input.free_from_str()?,
            bg: input.free_from_str()?,
            output: input.free_from_str()?,
        },
        Some("solid") => Command::Solid {
            color: input.free_from_str()?,
            output: input.free_from_str()?,
        },
        Some(cmd) => {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown command '{}'", cmd),
            })
        }
        None => return Err(pico_args::Error::MissingArgument),
    };

    Ok(args)
}

fn parse_indent(s: &str) -> Result<xmlwriter::Indent, String> {
    let indent = match s {
        "none" => xmlwriter::Indent::None,
        "0" => xmlwriter::Indent::Spaces(0),
        "1" => xmlwriter::Indent::Spaces(1),
        "2" => xmlwriter::Indent::Spaces(2),
        "3" => xmlwriter::Indent::Spaces(3),
        "4" => xmlwriter::Indent::Spaces(4),
        "tabs" => xmlwriter::Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
}

fn parse_length(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid length")?;

    if n > 0 {
        Ok(n)
    } else {
        Err("LENGTH cannot be zero".to_string())
    }
}

fn parse_precision(s: &str) -> Result<u8, String> {
    let n: u8 = s.parse().map_err(|_| "invalid precision NUM value")?;

    if (2..=8).contains(&n) {
        Ok(n)
    } else {
        Err("precision NUM cannot be smaller than 2 or larger than 8".to_string())
    }
}

#[derive(Clone, PartialEq, Debug)]
enum InputFrom<'a> {
    Stdin,
    File(&'a str),
}

#[derive(Clone, PartialEq, Debug)]
enum OutputTo<'a> {
    Stdout,
    File(&'a str),
}

impl<'a> OutputTo<'a> {
    fn new(s: &'a str) -> Self {
        if s == "-c" {
            OutputTo::Stdout
        } else {
            OutputTo::File(s)
        }
    }
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
            log::set_max_level(log::LevelFilter::Info);
        }
    }

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn process(args: Args) -> Result<(), String> {
    let opt = vd2svg::Options {
        default_size: args.default_size as f32,
    };

    let xml_opt = vd2svg::WriteOptions {
        id_prefix: args.id_prefix,
        coordinates_precision: args.coordinates_precision.unwrap_or(8),
        transforms_precision: args.transforms_precision.unwrap_or(8),
        use_single_quote: false,
        indent: args.indent,
        attributes_indent: args.attrs_indent,
    };

    match args.command {
        Command::Convert {
            ref input,
            ref output,
        } => {
            let svg_from = if input == "-" {
                InputFrom::Stdin
            } else if input == "-c" {
                return Err("-c should be set after input".to_string());
            } else {
                InputFrom::File(input)
            };

            match (svg_from, OutputTo::new(output)) {
                (InputFrom::File(path), OutputTo::File(out)) => {
                    vd2svg::transcode(Path::new(path), Some(Path::new(out)), &opt, &xml_opt)
                        .map_err(|e| e.to_string())?;
                }
                (svg_from, svg_to) => {
                    let data = match svg_from {
                        InputFrom::Stdin => load_stdin(),
                        InputFrom::File(path) => std::fs::read(path).map_err(|e| e.to_string()),
                    }?;

                    let drawable =
                        vd2svg::Drawable::from_data(&data, &opt).map_err(|e| e.to_string())?;
                    save(&drawable.to_string(&xml_opt), svg_to)?;
                }
            }
        }
        Command::Merge {
            ref fg,
            ref bg,
            ref output,
        } => {
            let fg = load_layer(fg, vd2svg::FOREGROUND_ID_PREFIX, &opt, &xml_opt)?;
            let bg = load_layer(bg, vd2svg::BACKGROUND_ID_PREFIX, &opt, &xml_opt)?;
            save(&vd2svg::merge(&fg, &bg), OutputTo::new(output))?;
        }
        Command::Solid {
            ref color,
            ref output,
        } => {
            save(&vd2svg::synthesize_solid(color), OutputTo::new(output))?;
        }
    }

    Ok(())
}

/// Loads an SVG layer as is, or converts a VectorDrawable one.
fn load_layer(
    path: &str,
    id_prefix: &str,
    opt: &vd2svg::Options,
    xml_opt: &vd2svg::WriteOptions,
) -> Result<String, String> {
    if !path.ends_with(".xml") {
        return std::fs::read_to_string(path).map_err(|e| e.to_string());
    }

    let xml_opt = vd2svg::WriteOptions {
        id_prefix: Some(format!(
            "{}{}",
            xml_opt.id_prefix.as_deref().unwrap_or_default(),
            id_prefix
        )),
        ..xml_opt.clone()
    };

    vd2svg::transcode(Path::new(path), None, opt, &xml_opt).map_err(|e| e.to_string())
}

fn save(svg: &str, to: OutputTo) -> Result<(), String> {
    match to {
        OutputTo::Stdout => {
            io::stdout()
                .write_all(svg.as_bytes())
                .map_err(|_| "failed to write to the stdout".to_string())?;
        }
        OutputTo::File(path) => {
            std::fs::write(path, svg).map_err(|_| "failed to write the output file".to_string())?;
            log::info!("Saved SVG to: {}", path);
        }
    }

    Ok(())
}

fn load_stdin() -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    let stdin = io::stdin();
    let mut handle = stdin.lock();

    handle
        .read_to_end(&mut buf)
        .map_err(|_| "failed to read from stdin".to_string())?;

    Ok(buf)
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Info
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
                log::Level::Info => eprintln!("Info: {}", args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
