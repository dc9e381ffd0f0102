//! Command-line interface for slrp
//! Runs the built-in arithmetic grammars over an expression and prints the result.
//!
//! Usage:
//!   slrp `<expression>` [--mode eval|tokens] [--format text|json|yaml] [--config `<file>`] [--partial]
//!
//! Configuration is read from the built-in defaults, then `./slrp.toml` if present, then
//! the `--config` file, then the flags above.

use clap::{Arg, ArgAction, ArgMatches, Command};
use slrp::grammars::arithmetic::{BINARY_OPERATION, EXPRESSION};
use slrp::{format_captures, parse, Captures};
use slrp_config::{Loader, Mode, OutputFormat, SlrpConfig};
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("slrp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and evaluate arithmetic expressions with slrp's combinator grammars")
        .arg_required_else_help(true)
        .arg(
            Arg::new("expression")
                .help("The expression to parse, e.g. '1 + 2 * 3'")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("Grammar to run: 'eval' (evaluate) or 'tokens' (operand/operator captures)")
                .value_parser(["eval", "tokens"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text', 'json' or 'yaml'")
                .value_parser(["text", "json", "yaml"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("partial")
                .long("partial")
                .help("Accept a match that leaves trailing input unconsumed")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(2);
    });
    log::debug!("loaded configuration: {:?}", config);

    let expression = matches
        .get_one::<String>("expression")
        .expect("expression is required");
    handle_parse_command(expression, &config);
}

/// Layer the defaults, the working directory file, `--config` and flag overrides.
fn load_config(matches: &ArgMatches) -> Result<SlrpConfig, slrp_config::Error> {
    let mut loader = Loader::new().with_optional_file("slrp.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(mode) = matches.get_one::<String>("mode") {
        loader = loader.set_override("parse.mode", mode.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("partial") {
        loader = loader.set_override("parse.exact", false)?;
    }
    loader.build()
}

/// Run the configured grammar and print its captures.
fn handle_parse_command(expression: &str, config: &SlrpConfig) {
    let grammar = match config.parse.mode {
        Mode::Eval => &*EXPRESSION,
        Mode::Tokens => &*BINARY_OPERATION,
    };

    let Some((captures, remainder)) = parse(grammar, expression, config.parse.exact) else {
        eprintln!("No match for '{}'", expression);
        process::exit(1);
    };

    let formatted = format_output(&captures, remainder, config).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        process::exit(1);
    });
    println!("{}", formatted);
}

fn format_output(
    captures: &Captures,
    remainder: &str,
    config: &SlrpConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    // Only mention the remainder when there can be one.
    let show_remainder = !config.parse.exact;
    let formatted = match (config.output.format, config.parse.mode) {
        (OutputFormat::Text, Mode::Eval) if captures.len() == 1 && !show_remainder => {
            captures[0].to_string()
        }
        (OutputFormat::Text, _) if show_remainder => {
            format!("{} {:?}", format_captures(captures), remainder)
        }
        (OutputFormat::Text, _) => format_captures(captures),
        (OutputFormat::Json, _) if show_remainder => serde_json::to_string_pretty(
            &serde_json::json!({ "captures": captures, "remainder": remainder }),
        )?,
        (OutputFormat::Json, _) => serde_json::to_string_pretty(captures)?,
        (OutputFormat::Yaml, _) if show_remainder => {
            let mut document = serde_yaml::Mapping::new();
            document.insert("captures".into(), serde_yaml::to_value(captures)?);
            document.insert("remainder".into(), remainder.into());
            serde_yaml::to_string(&document)?.trim_end().to_string()
        }
        (OutputFormat::Yaml, _) => serde_yaml::to_string(captures)?.trim_end().to_string(),
    };
    Ok(formatted)
}
