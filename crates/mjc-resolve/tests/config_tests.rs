mod common;

use std::fs;

use common::*;
use expect_test::expect;
use mjc_resolve::{seed_type_table, ConfigError, ResolveConfig, Resolver};
use mjc_types::MethodKey;
use tempfile::TempDir;

#[test]
fn load_reads_a_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resolve.toml");
    fs::write(&path, "entry_method = \"run\"\nreport_ancestor_cycles = false\n").unwrap();

    let config = ResolveConfig::load(&path).unwrap();

    assert_eq!(config.entry_method, "run");
    assert!(!config.report_ancestor_cycles);
}

#[test]
fn load_reports_a_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ResolveConfig::load(&path).unwrap_err();

    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn load_reports_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "entry_method = ").unwrap();

    let err = ResolveConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn loaded_config_drives_the_resolver() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resolve.toml");
    fs::write(&path, "entry_method = \"boot\"\nreport_ancestor_cycles = false\n").unwrap();
    let config = ResolveConfig::load(&path).unwrap();

    let mut program = program(vec![
        class("Leaf").extends("A"),
        class("A").extends("B"),
        class("B").extends("A"),
    ]);
    let mut table = seed_type_table(&program);
    let output = Resolver::new(&mut table, config).resolve(&mut program);

    expect![[r#"
        E0003 CyclicBaseType(B, A)
        E0003 CyclicBaseType(A, B)
    "#]]
    .assert_eq(&output.render());
    assert_eq!(program.main.entry, Some(MethodKey::new("boot", vec![])));
}
