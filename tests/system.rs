use clap::Parser;
use folder_mirror::cli::Cli;
use folder_mirror::core::system::System;
use std::ffi::OsString;
use std::fs;

fn parse(args: Vec<OsString>) -> Cli {
    Cli::try_parse_from(std::iter::once(OsString::from("folder-mirror")).chain(args)).unwrap()
}

#[tokio::test]
async fn run_once_mirrors_and_appends_to_the_log_file() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("source");
    let replica = temp.path().join("nested/replica");
    let log_file = temp.path().join("logs/log_file.txt");
    fs::create_dir_all(source.join("sub")).unwrap();
    fs::write(source.join("sub/b.txt"), "y").unwrap();

    let cli = parse(vec![
        "-s".into(),
        source.clone().into(),
        "-r".into(),
        replica.clone().into(),
        "-l".into(),
        log_file.clone().into(),
        "--once".into(),
    ]);

    for _ in 0..2 {
        let system = System::initialize(&cli).unwrap();
        assert!(system.run().await);
        system.terminate();
    }

    assert_eq!(fs::read_to_string(replica.join("sub/b.txt")).unwrap(), "y");
    let log = fs::read_to_string(&log_file).unwrap();
    assert_eq!(
        log.lines().collect::<Vec<_>>(),
        vec![
            format!("Directory {} created", replica.join("sub").display()),
            format!("File {} copied", replica.join("sub/b.txt").display()),
        ]
    );
}

#[tokio::test]
async fn run_once_fails_without_a_source_root() {
    let temp = tempfile::tempdir().unwrap();
    let cli = parse(vec![
        "-s".into(),
        temp.path().join("absent").into(),
        "-r".into(),
        temp.path().join("replica").into(),
        "-l".into(),
        temp.path().join("log_file.txt").into(),
        "--once".into(),
    ]);

    let system = System::initialize(&cli).unwrap();
    assert!(!system.run().await);
    system.terminate();
}

#[test]
fn rejects_replica_inside_source() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("source");
    let cli = parse(vec![
        "-s".into(),
        source.clone().into(),
        "-r".into(),
        source.join("replica").into(),
        "--once".into(),
    ]);

    assert!(System::initialize(&cli).is_err());
}
