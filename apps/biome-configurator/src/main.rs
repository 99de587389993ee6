//! Biome configurator binary entry point.
//! Scans the input tree, migrates every location, and prints results.

use biome_configurator::{cli, config, migrate, output, scan, utils};
use log::{debug, LevelFilter};

fn main() {
    let cli = cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let Some(input) = cli.input.as_deref() else {
        println!("{}", cli::USAGE);
        std::process::exit(1);
    };

    let eff = match config::resolve_effective(input, cli.dry_run) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    };
    if let Some(path) = eff.config_path.as_ref() {
        eprintln!("{} using {}", utils::note_prefix(), path.display());
    }
    debug!("effective settings: {:?}", eff);

    let locations = match scan::find_configs(&eff.root, &eff.exclude) {
        Ok(locations) => locations,
        Err(e) => {
            eprintln!("{} scanning directory: {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    };

    if locations.is_empty() {
        output::print_no_configs();
        return;
    }
    output::print_locations(&locations);

    let runner = eff.runner();
    let reports = migrate::run_migrations(&locations, &runner, eff.dry_run);
    output::print_summary(&reports);

    if reports.iter().any(|r| !r.dry_run && !r.succeeded()) {
        eprintln!(
            "{} some directories had errors; see messages above",
            utils::warn_prefix()
        );
    }
    output::print_gitignore_reminder();
}
