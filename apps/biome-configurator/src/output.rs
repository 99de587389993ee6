//! Human-readable progress output.
//!
//! Progress lines go to stdout, interleaved with the migration command's own
//! output. Per-directory errors go to stderr with a colored prefix.

use crate::errors::{Error, Result};
use crate::migrate::{MigrationReport, OUTPUT_FILE};
use crate::models::{ConfigLocation, Family, Locations};
use crate::utils;
use owo_colors::OwoColorize;
use std::path::Path;

/// Flag list shown next to a location, e.g. `eslint, prettier`.
pub fn format_flags(loc: &ConfigLocation) -> String {
    loc.families()
        .iter()
        .map(|f| f.migrate_arg())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_location(loc: &ConfigLocation) -> String {
    format!("  - {} [{}]", loc.dir.display(), format_flags(loc))
}

pub fn print_no_configs() {
    println!("No ESLint or Prettier config files found");
}

pub fn print_locations(locations: &Locations) {
    println!("Found configs in {} location(s):", locations.len());
    for loc in locations.values() {
        println!("{}", format_location(loc));
    }
}

pub fn print_dry_run(loc: &ConfigLocation) {
    println!("\n[DRY RUN] Would migrate in: {}", loc.dir.display());
    for family in loc.families() {
        println!("[DRY RUN]   - {} migration", family.label());
    }
}

pub fn print_migrating(dir: &Path) {
    if utils::colors_enabled() {
        println!("\n{} {}", "Migrating:".bold(), dir.display());
    } else {
        println!("\nMigrating: {}", dir.display());
    }
}

pub fn print_family_result(family: Family, result: &Result<()>) {
    match result {
        Ok(()) => {
            if utils::colors_enabled() {
                println!("  {} {} migrated", "✓".green(), family.label());
            } else {
                println!("  ✓ {} migrated", family.label());
            }
        }
        Err(e) => eprintln!(
            "{} migrating {} config: {}",
            utils::error_prefix(),
            family.label(),
            e
        ),
    }
}

pub fn print_location_error(context: &str, err: &Error) {
    eprintln!("{} {}: {}", utils::error_prefix(), context, err);
}

pub fn print_created(path: &Path) {
    println!("Created: {}", path.display());
}

/// Summary line composed from per-directory reports.
pub fn format_summary(reports: &[MigrationReport]) -> String {
    let planned = reports.iter().filter(|r| r.dry_run).count();
    if planned == reports.len() {
        return format!("Summary: {} location(s) would be migrated", planned);
    }
    let ok = reports.iter().filter(|r| !r.dry_run && r.succeeded()).count();
    let failed = reports.len() - planned - ok;
    format!("Summary: {} migrated, {} with errors", ok, failed)
}

pub fn print_summary(reports: &[MigrationReport]) {
    let line = format_summary(reports);
    if utils::colors_enabled() {
        println!("\n{}", line.bold());
    } else {
        println!("\n{}", line);
    }
}

pub fn print_gitignore_reminder() {
    println!(
        "\nDone! Make sure '{}' is in your global gitignore:",
        OUTPUT_FILE
    );
    println!("  echo '{}' >> ~/.gitignore_global", OUTPUT_FILE);
    println!("  git config --global core.excludesfile ~/.gitignore_global");
}
