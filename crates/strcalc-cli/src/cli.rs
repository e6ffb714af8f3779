//! Command-line definition and input handling

use clap::{value_parser, Arg, ArgAction, Command};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use strcalc_core::Variant;

pub(crate) fn build() -> Command {
    Command::new("strcalc")
        .version(strcalc_core::VERSION)
        .about("Sum delimited strings of numbers")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with default_delimiter / declaration_marker"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter when RUST_LOG is unset"),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("add")
                .about("Sum one input with a chosen variant")
                .arg(
                    Arg::new("variant")
                        .long("variant")
                        .short('v')
                        .default_value("v5")
                        .value_parser(value_parser!(Variant))
                        .help("Parsing rule: v1, v2, v3, v4 or v5"),
                )
                .arg(
                    Arg::new("escapes")
                        .long("escapes")
                        .short('e')
                        .action(ArgAction::SetTrue)
                        .help("Interpret \\n, \\r, \\t and \\\\ in the input"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(
                    Arg::new("input")
                        .allow_hyphen_values(true)
                        .help("Numbers to sum; read from stdin when omitted"),
                ),
        )
        .subcommand(Command::new("demo").about("Run the sample inputs through every variant"))
}

/// Replace backslash escapes with the characters they name
///
/// Unknown escapes and a trailing lone backslash are kept as written.
pub(crate) fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Input text from stdin, minus one trailing line ending
///
/// A terminal or an empty stream yields no input.
pub(crate) fn read_stdin() -> std::io::Result<Option<String>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(strip_line_ending(text))
}

fn strip_line_ending(mut text: String) -> Option<String> {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    (!text.is_empty()).then_some(text)
}
