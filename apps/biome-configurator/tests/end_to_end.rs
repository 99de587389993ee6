use biome_configurator::migrate::{self, MigrationRunner, MINIMAL_BIOME_CONFIG, OUTPUT_FILE};
use biome_configurator::models::Family;
use biome_configurator::{config, scan, Result};
use pretty_assertions::assert_eq;
use serde_json::{json, Value as Json};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Stands in for `biome migrate`: records calls and merges a section into
/// the existing biome.json the way the real tool would.
#[derive(Default)]
struct FakeBiome {
    calls: RefCell<Vec<(Family, PathBuf)>>,
    seen_before_migrate: RefCell<Vec<String>>,
}

impl MigrationRunner for FakeBiome {
    fn migrate(&self, family: Family, dir: &Path) -> Result<()> {
        self.calls.borrow_mut().push((family, dir.to_path_buf()));
        let path = dir.join(OUTPUT_FILE);
        let src = fs::read_to_string(&path).unwrap();
        self.seen_before_migrate.borrow_mut().push(src.clone());
        let mut doc: Json = serde_json::from_str(&src).unwrap();
        match family {
            Family::Eslint => doc["linter"]["rules"]["style"] = json!({"noVar": "error"}),
            Family::Prettier => doc["formatter"] = json!({"indentStyle": "space"}),
        }
        fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
        Ok(())
    }
}

fn touch(root: &Path, rel: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, b"{}").unwrap();
}

fn read_json(path: &Path) -> Json {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn scan_groups_by_directory_and_skips_node_modules() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(root, "a/.eslintrc.json");
    touch(root, "b/prettier.config.js");
    touch(root, "a/node_modules/.eslintrc.json");

    let locs = scan::find_configs(root, &[]).unwrap();
    assert_eq!(locs.len(), 2);
    let a = &locs[&root.join("a")];
    let b = &locs[&root.join("b")];
    assert!(a.has_eslint && !a.has_prettier);
    assert!(!b.has_eslint && b.has_prettier);
    assert!(!locs.contains_key(&root.join("a/node_modules")));
}

#[test]
fn fresh_directory_gets_skeleton_then_patched_config() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(root, "svc/.eslintrc.json");

    let locs = scan::find_configs(root, &[]).unwrap();
    let runner = FakeBiome::default();
    let reports = migrate::run_migrations(&locs, &runner, false);

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert!(report.created);
    assert!(report.succeeded());
    assert_eq!(report.migrated, vec![Family::Eslint]);
    assert_eq!(
        *runner.calls.borrow(),
        vec![(Family::Eslint, root.join("svc"))]
    );
    // skeleton existed before the migration ran
    assert_eq!(runner.seen_before_migrate.borrow()[0], MINIMAL_BIOME_CONFIG);

    let doc = read_json(&root.join("svc").join(OUTPUT_FILE));
    assert_eq!(doc["formatter"]["formatWithErrors"], true);
    assert_eq!(doc["javascript"]["parser"]["unsafeParameterDecoratorsEnabled"], true);
    assert_eq!(doc["linter"]["rules"]["recommended"], true);
    assert_eq!(doc["linter"]["rules"]["style"]["noVar"], "error");
}

#[test]
fn existing_config_is_merged_not_replaced() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(root, "web/.prettierrc");
    touch(root, "web/eslint.config.js");
    let out = root.join("web").join(OUTPUT_FILE);
    fs::write(&out, r#"{"files": {"ignoreUnknown": true}}"#).unwrap();

    let locs = scan::find_configs(root, &[]).unwrap();
    let runner = FakeBiome::default();
    let reports = migrate::run_migrations(&locs, &runner, false);

    assert!(!reports[0].created);
    assert_eq!(reports[0].migrated, vec![Family::Eslint, Family::Prettier]);
    let doc = read_json(&out);
    assert_eq!(doc["files"], json!({"ignoreUnknown": true}));
    assert_eq!(
        doc["formatter"],
        json!({"indentStyle": "space", "formatWithErrors": true})
    );
}

#[test]
fn dry_run_leaves_tree_untouched() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(root, "a/.eslintrc.cjs");
    touch(root, "b/.prettierrc.yaml");
    fs::write(
        root.join("biome-configurator.toml"),
        "dry_run = true\n",
    )
    .unwrap();

    let eff = config::resolve_effective(root.to_str().unwrap(), false).unwrap();
    assert!(eff.dry_run);
    let locs = scan::find_configs(&eff.root, &eff.exclude).unwrap();
    let runner = FakeBiome::default();
    let reports = migrate::run_migrations(&locs, &runner, eff.dry_run);

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.dry_run));
    assert!(runner.calls.borrow().is_empty());
    assert!(!root.join("a").join(OUTPUT_FILE).exists());
    assert!(!root.join("b").join(OUTPUT_FILE).exists());
}

#[test]
fn malformed_output_in_one_directory_does_not_stop_the_next() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(root, "bad/.eslintrc");
    touch(root, "good/.eslintrc");
    fs::write(root.join("bad").join(OUTPUT_FILE), "{ not json").unwrap();

    struct Noop;
    impl MigrationRunner for Noop {
        fn migrate(&self, _family: Family, _dir: &Path) -> Result<()> {
            Ok(())
        }
    }

    let locs = scan::find_configs(root, &[]).unwrap();
    let reports = migrate::run_migrations(&locs, &Noop, false);

    assert_eq!(reports.len(), 2);
    let bad = reports.iter().find(|r| r.dir == root.join("bad")).unwrap();
    let good = reports.iter().find(|r| r.dir == root.join("good")).unwrap();
    assert!(matches!(
        bad.error,
        Some(biome_configurator::Error::Json { .. })
    ));
    assert_eq!(
        fs::read_to_string(root.join("bad").join(OUTPUT_FILE)).unwrap(),
        "{ not json"
    );
    assert!(good.succeeded());
    assert_eq!(
        read_json(&root.join("good").join(OUTPUT_FILE))["formatter"]["formatWithErrors"],
        true
    );
}
