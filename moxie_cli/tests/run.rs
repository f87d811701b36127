use std::{fs, path::PathBuf};

use clap::Parser;
use moxie_cli::{run, source_files, Args, CliError};

const GREETER: &str = include_str!("../../tests/expanded/greeter.rs");

fn args(out_dir: &std::path::Path, files: &[PathBuf]) -> Args {
    let mut args = Args::try_parse_from(["moxie"]).unwrap();
    args.out_dir = out_dir.to_owned();
    args.files = files.to_vec();
    args
}

#[test]
fn discovers_rust_files_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("zeta.rs"), "").unwrap();
    fs::write(dir.path().join("alpha.rs"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();
    fs::create_dir(dir.path().join("nested.rs")).unwrap();

    let files = source_files(&[], dir.path()).unwrap();
    assert_eq!(
        files,
        vec![dir.path().join("alpha.rs"), dir.path().join("zeta.rs")]
    );
}

#[test]
fn rejects_files_that_are_not_rust() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![PathBuf::from("greeter.rs"), PathBuf::from("greeter.go")];

    let error = run(&args(dir.path(), &files), dir.path()).unwrap_err();
    assert!(matches!(error, CliError::NotRust(path) if path == PathBuf::from("greeter.go")));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    assert!(matches!(
        source_files(&[], &missing),
        Err(CliError::Discover { .. })
    ));
}

#[test]
fn generates_mocks_for_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("greeter.rs"), GREETER).unwrap();
    fs::write(
        dir.path().join("store.rs"),
        "pub trait Store { fn get(&self, key: String) -> Option<String>; }",
    )
    .unwrap();

    let summary = run(&args(dir.path(), &[]), dir.path()).unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(
        summary.generated,
        vec![
            dir.path().join("greeter_mock.rs"),
            dir.path().join("store_mock.rs")
        ]
    );

    let greeter = fs::read_to_string(dir.path().join("greeter_mock.rs")).unwrap();
    assert!(greeter.contains("impl Greeter for GreeterMock"));
}

#[test]
fn bad_files_and_traits_do_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.rs");
    let mixed = dir.path().join("mixed.rs");
    fs::write(&broken, "pub trait Broken {").unwrap();
    fs::write(
        &mixed,
        "pub trait Generic<T> { fn get(&self) -> T; fn new() -> Self; }\n\
         pub trait Fine { fn get(&self) -> u8; }",
    )
    .unwrap();
    let missing = dir.path().join("missing.rs");

    let summary = run(&args(out.path(), &[broken, missing, mixed]), dir.path()).unwrap();
    assert_eq!(summary.files, 3);
    assert_eq!(summary.skipped_files, 2);
    assert_eq!(summary.failed_interfaces, 1);
    assert_eq!(summary.generated, vec![out.path().join("fine_mock.rs")]);
}
