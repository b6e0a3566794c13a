//! End-to-end tests running the `find-node-modules` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'z'; len]).unwrap();
}

/// Command isolated from the user's config file.
fn find_node_modules(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("find-node-modules").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_machine_output_relative_paths() {
    let tmp = TempDir::new().unwrap();
    create_file(&tmp.path().join("root/a/node_modules/pkg/file"), 1_000);
    create_file(&tmp.path().join("root/b/node_modules/x/node_modules/file2"), 3_145_728);

    let output = find_node_modules(tmp.path())
        .current_dir(tmp.path())
        .args(["--json-output", "root"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines: Vec<_> = stdout.lines().collect();
    lines.sort_unstable();

    let a = Path::new("root").join("a").join("node_modules");
    let b = Path::new("root").join("b").join("node_modules");
    assert_eq!(
        lines,
        vec![
            format!("{}|0.00", a.display()),
            format!("{}|3.00", b.display()),
        ]
    );
}

#[test]
fn test_plain_output() {
    let tmp = TempDir::new().unwrap();
    create_file(&tmp.path().join("proj/node_modules/lib/index.js"), 2_097_152);

    let expected = format!(
        "Found: {} (2.00 MB)",
        tmp.path().join("proj").join("node_modules").display()
    );

    find_node_modules(tmp.path())
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_no_matches_is_success_with_empty_output() {
    let tmp = TempDir::new().unwrap();
    create_file(&tmp.path().join("src/index.js"), 10);

    find_node_modules(tmp.path())
        .args(["--json-output"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_path_fails() {
    let tmp = TempDir::new().unwrap();

    find_node_modules(tmp.path())
        .arg(tmp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_too_many_arguments_fails() {
    let tmp = TempDir::new().unwrap();

    find_node_modules(tmp.path())
        .args(["one", "two"])
        .assert()
        .failure();
}

#[test]
fn test_help_mentions_options() {
    let tmp = TempDir::new().unwrap();

    find_node_modules(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json-output"))
        .stdout(predicate::str::contains("SEARCH_PATH"));
}

#[test]
fn test_default_path_is_current_directory() {
    let tmp = TempDir::new().unwrap();
    create_file(&tmp.path().join("work/app/node_modules/x.js"), 5);

    find_node_modules(tmp.path())
        .current_dir(tmp.path().join("work"))
        .arg("--json-output")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}|0.00",
            Path::new(".").join("app").join("node_modules").display()
        )));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_file_search_path() {
    let tmp = TempDir::new().unwrap();
    let projects = tmp.path().join("projects");
    create_file(&projects.join("site/node_modules/dep.js"), 7);

    let config_dir = tmp.path().join("find-node-modules");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "search_path = \"{}\"\n\n[output]\njson_output = true\n",
            projects.display()
        ),
    )
    .unwrap();

    find_node_modules(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}|0.00",
            projects.join("site").join("node_modules").display()
        )));
}

#[cfg(target_os = "linux")]
#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    create_file(&tmp.path().join("work/node_modules/a.js"), 1);

    let config_dir = tmp.path().join("find-node-modules");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "search_path = [").unwrap();

    find_node_modules(tmp.path())
        .current_dir(tmp.path().join("work"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: "))
        .stderr(predicate::str::contains("Failed to load config file"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_machine_output_keeps_non_utf8_paths() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    let cafe = tmp.path().join(OsStr::from_bytes(b"caf\xe9"));
    create_file(&cafe.join("node_modules/x"), 10);

    let output = find_node_modules(tmp.path())
        .arg("--json-output")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let line = output
        .stdout
        .split(|&b| b == b'\n')
        .find(|line| !line.is_empty())
        .unwrap();
    let sep = line.iter().rposition(|&b| b == b'|').unwrap();
    let reported = Path::new(OsStr::from_bytes(&line[..sep]));

    assert_eq!(reported, cafe.join("node_modules"));
    assert!(reported.is_dir());
    assert_eq!(&line[sep + 1..], b"0.00");
}

#[test]
fn test_clicolor_force_keeps_colors_when_piped() {
    let tmp = TempDir::new().unwrap();
    create_file(&tmp.path().join("proj/node_modules/a.js"), 1);

    find_node_modules(tmp.path())
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[33mFound: "))
        .stdout(predicate::str::contains(" MB)\x1b[0m"));
}

#[test]
fn test_piped_plain_output_has_no_colors() {
    let tmp = TempDir::new().unwrap();
    create_file(&tmp.path().join("proj/node_modules/a.js"), 1);

    find_node_modules(tmp.path())
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: "))
        .stdout(predicate::str::contains("\x1b[").not());
}
