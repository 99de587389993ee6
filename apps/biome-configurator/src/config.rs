//! Configuration discovery and effective settings resolution.
//!
//! An optional `biome-configurator.toml|yaml|yml` in the input directory can
//! add pruned directory globs, swap the migration command, or turn on
//! dry-run. Defaults:
//! - `dry_run`: false
//! - `scan.exclude`: none (the built-in prune list always applies)
//! - `migrate.command`: `npx`, `migrate.args`: `["@biomejs/biome"]`
//!
//! Overrides precedence: CLI > config file > defaults. `--dry-run` can only
//! turn dry-run on.

use crate::errors::{Error, Result};
use crate::migrate::{CommandRunner, DEFAULT_PROGRAM, DEFAULT_PROGRAM_ARGS};
use glob::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: &[&str] = &[
    "biome-configurator.toml",
    "biome-configurator.yaml",
    "biome-configurator.yml",
];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `biome-configurator.toml|yaml`.
pub struct ConfiguratorConfig {
    pub dry_run: Option<bool>,
    #[serde(default)]
    pub scan: Option<ScanCfg>,
    #[serde(default)]
    pub migrate: Option<MigrateCfg>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScanCfg {
    /// Extra directory-name globs to prune, e.g. `vendor` or `tmp-*`
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct MigrateCfg {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings for one run.
pub struct Effective {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub dry_run: bool,
    pub exclude: Vec<Pattern>,
    pub command: String,
    pub command_args: Vec<String>,
}

impl Effective {
    pub fn runner(&self) -> CommandRunner {
        CommandRunner::new(self.command.clone(), self.command_args.clone())
    }
}

/// Resolve `input` to an absolute path without touching the filesystem.
pub fn resolve_input(input: &str) -> Result<PathBuf> {
    std::path::absolute(input).map_err(|source| Error::Resolve {
        input: input.to_string(),
        source,
    })
}

/// Load the config file from `root` if one is present.
///
/// A present but unreadable or invalid file is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, ConfiguratorConfig)>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let cfg = if name.ends_with(".toml") {
            toml::from_str::<ConfiguratorConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<ConfiguratorConfig>(&s).map_err(|e| e.to_string())
        };
        return match cfg {
            Ok(cfg) => Ok(Some((path, cfg))),
            Err(message) => Err(Error::Config { path, message }),
        };
    }
    Ok(None)
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli_input: &str, cli_dry_run: bool) -> Result<Effective> {
    let root = resolve_input(cli_input)?;
    let (config_path, cfg) = match load_config(&root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, ConfiguratorConfig::default()),
    };

    let dry_run = cli_dry_run || cfg.dry_run.unwrap_or(false);
    let exclude = compile_excludes(
        cfg.scan
            .as_ref()
            .map(|s| s.exclude.as_slice())
            .unwrap_or_default(),
    )?;
    let command = cfg
        .migrate
        .as_ref()
        .and_then(|m| m.command.clone())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
    let command_args = cfg
        .migrate
        .as_ref()
        .and_then(|m| m.args.clone())
        .unwrap_or_else(|| DEFAULT_PROGRAM_ARGS.iter().map(|a| a.to_string()).collect());

    Ok(Effective {
        root,
        config_path,
        dry_run,
        exclude,
        command,
        command_args,
    })
}
