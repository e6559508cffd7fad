//! Rule set assembly against real directory trees

use camino::{Utf8Path, Utf8PathBuf};
use homebak_core::BackupConfig;
use homebak_rules::{LocalProbe, MemoryLog, Rule, RuleKind, RuleSet};
use std::fs;
use tempfile::TempDir;

/// Create a fake home directory with the given directories and files
fn create_home(dirs: &[&str], files: &[&str]) -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let home = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();

    for dir in dirs {
        fs::create_dir_all(home.join(dir)).unwrap();
    }
    for file in files {
        let path = home.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "data").unwrap();
    }

    (temp, home)
}

fn config(include: &[&str], exclude: &[&str]) -> BackupConfig {
    BackupConfig {
        include: include.iter().map(|s| s.to_string()).collect(),
        exclude: exclude.iter().map(|s| s.to_string()).collect(),
    }
}

fn assemble(config: &BackupConfig, home: &Utf8Path, log: &MemoryLog) -> RuleSet {
    let probe = LocalProbe::new(home);
    RuleSet::assemble(config, home, &probe, log).unwrap()
}

#[test]
fn test_top_level_directories() {
    let (_temp, home) = create_home(&["Documents", "Music"], &[]);
    let log = MemoryLog::new();

    let rules = assemble(&config(&["Documents/", "Music/"], &[]), &home, &log);

    assert_eq!(
        rules.rules(),
        &[
            Rule::include_tree("Documents"),
            Rule::include_tree("Music"),
            Rule::catch_all(),
        ]
    );
    assert!(rules.rules()[0].recursive);
    assert!(log.warnings().is_empty());
}

#[test]
fn test_missing_leaf_under_existing_directory() {
    let (_temp, home) = create_home(&[".config"], &[]);
    let log = MemoryLog::new();

    let rules = assemble(&config(&[".config/kde.org/"], &[]), &home, &log);

    assert_eq!(
        rules.to_args(),
        vec!["--include=.config/", "--exclude=*"]
    );
    assert!(!rules.rules()[0].recursive);
    assert_eq!(log.warnings().len(), 1);
}

#[test]
fn test_excludes_ignore_filesystem() {
    let (_temp, home) = create_home(&["Documents"], &[]);
    let log = MemoryLog::new();

    let rules = assemble(
        &config(&["Documents/"], &["id_rsa*", "known_hosts"]),
        &home,
        &log,
    );

    assert_eq!(
        &rules.rules()[..2],
        &[Rule::exclude("id_rsa*"), Rule::exclude("known_hosts")]
    );
    assert_eq!(rules.count(RuleKind::Exclude), 3);
}

#[test]
fn test_default_style_configuration() {
    let (_temp, home) = create_home(
        &[
            ".config/gtk-2.0",
            ".config/gtk-3.0",
            ".config/keepassxc",
            ".ssh",
            "Documents",
        ],
        &[".bashrc"],
    );
    let log = MemoryLog::new();
    let absolute = format!("{}/Documents/", home);

    let rules = assemble(
        &config(
            &[
                ".config/gtk-2.0/",
                "~/.config/gtk-3.0/",
                ".config/kde.org/",
                ".config/keepassxc/",
                ".bashrc",
                ".bash_profile",
                ".ssh/",
                absolute.as_str(),
                "/opt/elsewhere/",
            ],
            &["known_hosts"],
        ),
        &home,
        &log,
    );

    assert_eq!(
        rules.to_args(),
        vec![
            "--exclude=known_hosts",
            "--include=.config/",
            "--include=.config/gtk-2.0/***",
            "--include=.config/gtk-3.0/***",
            "--include=.config/keepassxc/***",
            "--include=.bashrc",
            "--include=.ssh/***",
            "--include=Documents/***",
            "--exclude=*",
        ]
    );
    // kde.org and .bash_profile are missing; /opt is outside home.
    assert_eq!(log.warnings().len(), 2);
}

#[test]
fn test_deep_chain_ordering() {
    let (_temp, home) = create_home(&["a/b/c", "a/d"], &[]);
    let log = MemoryLog::new();

    let rules = assemble(&config(&["a/b/c/", "a/d/"], &[]), &home, &log);
    let args = rules.to_args();
    let position = |rule: &str| args.iter().position(|a| a == rule).unwrap();

    assert!(position("--include=a/") < position("--include=a/b/"));
    assert!(position("--include=a/b/") < position("--include=a/b/c/***"));
    assert!(position("--include=a/") < position("--include=a/d/***"));
    assert_eq!(args.iter().filter(|a| *a == "--include=a/").count(), 1);
}

#[test]
fn test_catch_all_terminates_every_rule_set() {
    let (_temp, home) = create_home(&[], &[]);
    let log = MemoryLog::new();

    let rules = assemble(&config(&["Nothing/"], &["*"]), &home, &log);

    assert_eq!(rules.rules(), &[Rule::catch_all()]);
    assert!(rules.rules().last().unwrap().is_catch_all());
}
