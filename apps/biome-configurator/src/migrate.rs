//! Per-directory migration via the external `biome migrate` command.
//!
//! For every scanned location this ensures a `biome.json` exists, runs one
//! migration per detected family, and then patches the result. Failures stay
//! scoped to their directory; the loop always moves on to the next one.

use crate::errors::{Error, Result};
use crate::models::{ConfigLocation, Family, Locations};
use crate::{output, patch};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const OUTPUT_FILE: &str = "biome.json";

/// Migration command prefix used when no config overrides it.
pub const DEFAULT_PROGRAM: &str = "npx";
pub const DEFAULT_PROGRAM_ARGS: &[&str] = &["@biomejs/biome"];

/// Written before migrating when a directory has no `biome.json` yet, so
/// the migration has a document to merge into.
pub const MINIMAL_BIOME_CONFIG: &str = r#"{
  "linter": {
    "enabled": true,
    "rules": {
      "recommended": true
    }
  }
}
"#;

/// Runs the external migration for one family in one directory.
pub trait MigrationRunner {
    fn migrate(&self, family: Family, dir: &Path) -> Result<()>;
}

/// Spawns `<program> <args..> migrate <family> --write` in the target
/// directory with stdout/stderr inherited.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command(&self, family: Family, dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .args(["migrate", family.migrate_arg(), "--write"])
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_PROGRAM_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }
}

impl MigrationRunner for CommandRunner {
    fn migrate(&self, family: Family, dir: &Path) -> Result<()> {
        let mut cmd = self.command(family, dir);
        debug!("running {:?} in {}", cmd, dir.display());
        let status = cmd.status().map_err(|source| Error::Launch {
            family,
            program: self.program.clone(),
            source,
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::MigrationFailed { family, status })
        }
    }
}

/// Outcome of processing one location.
#[derive(Debug)]
pub struct MigrationReport {
    pub dir: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
    /// `biome.json` was written from the minimal skeleton by this run.
    pub created: bool,
    pub migrated: Vec<Family>,
    pub failed: Vec<Family>,
    /// Creating or patching `biome.json` failed.
    pub error: Option<Error>,
}

impl MigrationReport {
    fn new(dir: &Path, dry_run: bool) -> Self {
        Self {
            dir: dir.to_path_buf(),
            output: dir.join(OUTPUT_FILE),
            dry_run,
            created: false,
            migrated: Vec::new(),
            failed: Vec::new(),
            error: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failed.is_empty() && self.error.is_none()
    }
}

/// Write the minimal skeleton when `biome.json` is missing.
/// Returns whether the file was created.
pub fn ensure_output(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, MINIMAL_BIOME_CONFIG).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Migrate and patch a single location, printing progress as it goes.
pub fn migrate_location(loc: &ConfigLocation, runner: &dyn MigrationRunner) -> MigrationReport {
    let mut report = MigrationReport::new(&loc.dir, false);
    let families = loc.families();
    // Scan results always carry at least one family.
    if families.is_empty() {
        return report;
    }

    match ensure_output(&report.output) {
        Ok(created) => report.created = created,
        Err(e) => {
            output::print_location_error("creating biome.json", &e);
            report.error = Some(e);
            return report;
        }
    }

    for family in families {
        let result = runner.migrate(family, &loc.dir);
        output::print_family_result(family, &result);
        match result {
            Ok(()) => report.migrated.push(family),
            Err(_) => report.failed.push(family),
        }
    }

    if let Err(e) = patch::patch_file(&report.output) {
        output::print_location_error("patching biome.json", &e);
        report.error = Some(e);
    }
    // Reported whether or not the patch went through.
    output::print_created(&report.output);
    report
}

/// Process every scanned location in order. In dry-run mode nothing is
/// written and no command is launched.
pub fn run_migrations(
    locations: &Locations,
    runner: &dyn MigrationRunner,
    dry_run: bool,
) -> Vec<MigrationReport> {
    let mut reports = Vec::with_capacity(locations.len());
    for loc in locations.values() {
        if dry_run {
            output::print_dry_run(loc);
            reports.push(MigrationReport::new(&loc.dir, true));
            continue;
        }
        output::print_migrating(&loc.dir);
        reports.push(migrate_location(loc, runner));
    }
    reports
}
