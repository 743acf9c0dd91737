use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use gp_log::{LogError, RunCatalog};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn lists_only_directories_sorted_by_name() {
    let root = unique_temp_dir("gp_log_catalog");
    fs::create_dir_all(root.join("run_b")).expect("failed to create run_b");
    fs::create_dir_all(root.join("run_a")).expect("failed to create run_a");
    fs::create_dir_all(root.join("run_c")).expect("failed to create run_c");
    fs::write(root.join("notes.txt"), "not a run").expect("failed to write file");

    let catalog = RunCatalog::scan(&root).expect("failed to scan runs");
    let names: Vec<&str> = catalog.runs().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["run_a", "run_b", "run_c"]);

    let third = catalog.get(2).expect("third run missing");
    assert_eq!(third.index, 2);
    assert_eq!(third.name, "run_c");
    assert_eq!(third.path, root.join("run_c"));
    assert!(catalog.get(3).is_none());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn empty_root_has_no_runs() {
    let root = unique_temp_dir("gp_log_catalog_empty");
    fs::create_dir_all(&root).expect("failed to create root");

    let catalog = RunCatalog::scan(&root).expect("failed to scan runs");
    assert!(catalog.is_empty());
    assert_eq!(catalog.root_dir(), root.as_path());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_root_is_reported() {
    let root = unique_temp_dir("gp_log_catalog_missing");
    let err = RunCatalog::scan(&root).unwrap_err();
    assert!(matches!(err, LogError::RootNotFound { .. }));
}
