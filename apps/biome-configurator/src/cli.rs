//! CLI argument parsing via `clap`.
//!
//! Flags are accepted in both `-input` and `--input` form.

use crate::scan::{ESLINT_CONFIG_FILES, PRETTIER_CONFIG_FILES};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

pub const USAGE: &str = "Usage: biome-configurator -input <directory> [-dry-run]";

#[derive(Parser, Debug)]
#[command(
    name = "biome-configurator",
    version,
    about = "Biome Configurator - Migrate ESLint/Prettier configs to Biome",
    long_about = "Biome Configurator - Migrate ESLint/Prettier configs to Biome.\n\nWalks the input directory, runs `biome migrate` for every directory holding an ESLint or Prettier config, then enables formatWithErrors and unsafeParameterDecoratorsEnabled in the resulting biome.json.\n\nConfiguration precedence: CLI > biome-configurator.toml > defaults."
)]
/// Command-line options.
pub struct Cli {
    #[arg(
        long,
        value_name = "DIRECTORY",
        help = "Input directory to scan for ESLint/Prettier configs"
    )]
    pub input: Option<String>,
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new(),
        help = "Only show what would be done without actually doing it"
    )]
    pub dry_run: bool,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Enable debug logging (RUST_LOG still takes precedence)")]
    pub verbose: bool,
}

/// Footer listing every recognized config file name.
pub fn supported_files_help() -> String {
    format!(
        "Supported ESLint config files:\n  {}\n\nSupported Prettier config files:\n  {}",
        ESLINT_CONFIG_FILES.join(", "),
        PRETTIER_CONFIG_FILES.join(", ")
    )
}

/// Rewrite single-dash long flags (`-input`) to their `--input` form.
/// Short flags like `-v` and everything after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.len() > 2 && s.starts_with('-') && !s.starts_with("--") => {
                Some(OsString::from(format!("-{}", s)))
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

/// Parse from an argument list, exiting on `--help`, `--version`, or
/// malformed flags.
pub fn parse_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = Cli::command()
        .after_help(supported_files_help())
        .get_matches_from(normalize_args(args));
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

pub fn parse() -> Cli {
    parse_from(std::env::args_os())
}
