use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;

use crate::config::Config;

pub fn clap_setup() -> Command {
    Command::new("marketquantify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs the marketquantify application.")
        .after_help(
            "Long flags may be written with one or two dashes (-verbose, --verbose).
A flag value must be attached with '=', as in -verbose=false.
Arguments after the first non-flag argument, or after '--', are ignored.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Set)
                .num_args(0..=1)
                .require_equals(true)
                .default_value("false")
                .default_missing_value("true")
                .value_parser(parse_bool)
                .help("Enable verbose logging"),
        )
        .arg(
            Arg::new("args")
                .action(ArgAction::Append)
                .num_args(1..)
                .trailing_var_arg(true)
                .hide(true),
        )
}

/// Parses `args` (program name first), exiting the process on usage errors,
/// `--help` and `--version` the way clap does.
pub fn parse_args<I, T>(clap: Command, args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    try_parse_args(clap, args).unwrap_or_else(|e| e.exit())
}

pub fn try_parse_args<I, T>(clap: Command, args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = clap.try_get_matches_from(normalize_args(args))?;
    let verbose = matches.get_one::<bool>("verbose").copied().unwrap_or_default();

    Ok(Config::new(verbose))
}

/// Rewrites `-name` and `-name=value` to `--name...` up to the first
/// non-flag argument or `--`. Single-letter flags such as `-v` are untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut flags_done = false;

    for arg in args {
        if !flags_done {
            match arg.to_str() {
                Some("--") => flags_done = true,
                Some(s) if is_single_dash_long(s) => {
                    normalized.push(format!("-{s}").into());
                    continue;
                }
                Some(s) if s == "-" || !s.starts_with('-') => flags_done = true,
                _ => {}
            }
        }
        normalized.push(arg);
    }

    normalized
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or_default();
    name.chars().count() > 1
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value {value:?}")),
    }
}
