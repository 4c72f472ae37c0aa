//! Runs the `crumbtrail` binary against a site on disk.

use std::path::Path;
use std::process::{Command, Output};

const CONTENT: &str = r"
books:
  - name: /
    content_root: /
pages:
  - path: /
    title: Home
  - path: /a
    title: Section A
    parents:
      - path: /
  - path: /b
    title: Section B
    parents:
      - path: /
  - path: /shared
    title: Shared Page
    parents:
      - path: /a
        short_title: Shared
      - path: /b
";

fn write_site(dir: &Path) {
    std::fs::write(dir.join("content.yaml"), CONTENT).unwrap();
    std::fs::write(
        dir.join("crumbtrail.toml"),
        "[site]\nbase_url = \"https://docs.example.com\"\n",
    )
    .unwrap();
}

fn crumbtrail(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crumbtrail"))
        .args(args)
        .arg("--config")
        .arg(dir.join("crumbtrail.toml"))
        .env_remove("CRUMBTRAIL_CONFIG")
        .output()
        .unwrap()
}

#[test]
fn test_render_prints_json_array() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = crumbtrail(dir.path(), &["render", "/shared"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_render_single_prints_one_document() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = crumbtrail(dir.path(), &["render", "/shared", "--single"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["@type"], "BreadcrumbList");
    assert_eq!(
        value["itemListElement"][1]["item"]["@id"],
        "https://docs.example.com/shared"
    );
}

#[test]
fn test_paths_prints_one_line_per_path() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = crumbtrail(dir.path(), &["paths", "/shared"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "/a > /shared\n/b > /shared\n"
    );
}

#[test]
fn test_content_root_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = crumbtrail(dir.path(), &["render", "/"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_page_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = crumbtrail(dir.path(), &["render", "/missing"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Page not found: /missing")
    );
}

#[test]
fn test_invalid_base_url_override_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = crumbtrail(dir.path(), &["render", "/a", "--base-url", "docs.example.com"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("site.base_url"));
}

#[test]
fn test_multiple_overrides_earlier_single() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());

    let output = crumbtrail(dir.path(), &["render", "/shared", "--single", "--multiple"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[cfg(target_os = "linux")]
#[test]
fn test_stdout_write_failure_exits_with_error() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path());
    let full = OpenOptions::new().write(true).open("/dev/full").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_crumbtrail"))
        .args(["render", "/shared", "--config"])
        .arg(dir.path().join("crumbtrail.toml"))
        .env_remove("CRUMBTRAIL_CONFIG")
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}
