//! Runs the `ruleset` binary end to end.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};

fn run_with_stdin(dir: &Path, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ruleset"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn converts_piped_rule_list() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_with_stdin(
        dir.path(),
        &["stdin", "-o", "piped", "-v", "2"],
        b"DOMAIN-SUFFIX,example.com\nDST-PORT,443\n",
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let site: Value =
        serde_json::from_slice(&fs::read(dir.path().join("piped-site-v2.json")).unwrap()).unwrap();
    assert_eq!(
        site,
        json!({
            "version": 2,
            "rules": [{ "domain": "example.com", "domain_suffix": ".example.com" }],
        })
    );
    assert!(dir.path().join("piped-site-v2.srs").exists());
    assert!(dir.path().join("piped-port-v2.json").exists());
    assert!(dir.path().join("piped-port-v2.srs").exists());
}

#[test]
fn stdin_source_defaults_to_stdin_stem() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_with_stdin(dir.path(), &["stdin", "-m"], b"payload:\n  - IP-CIDR,10.0.0.0/8\n");
    assert!(out.status.success());
    assert!(dir.path().join("stdin-v3.json").exists());
    assert!(dir.path().join("stdin-v3.srs").exists());
}

#[test]
fn empty_stdin_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_with_stdin(dir.path(), &["stdin"], b"");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn comment_only_stdin_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_with_stdin(dir.path(), &["stdin"], b"# nothing\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
