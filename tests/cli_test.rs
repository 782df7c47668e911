use clap::Parser;
use startoff::cli::Args;
use startoff::profile::ProjectType;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("startoff")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.destination, PathBuf::from("."));
    assert_eq!(parsed.project_type, None);
    assert_eq!(parsed.config, None);
    assert!(!parsed.skip_install);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--type",
        "h5",
        "--config",
        "startoff.yaml",
        "--skip-install",
        "--verbose",
        "./projects",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.destination, PathBuf::from("./projects"));
    assert_eq!(parsed.project_type, Some(ProjectType::H5));
    assert_eq!(parsed.config, Some(PathBuf::from("startoff.yaml")));
    assert!(parsed.skip_install);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-t", "pc", "-v"])).unwrap();

    assert_eq!(parsed.project_type, Some(ProjectType::Pc));
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_project_type() {
    assert!(Args::try_parse_from(make_args(&["--type", "desktop"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["./output", "extra"])).is_err());
}
