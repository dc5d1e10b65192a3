//! End-to-end tests for the `bizcard` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const NO_CONFIG: &str = "/nonexistent/bizcard/config.toml";
const URL: &str = "https://cards.example.com/jane";

fn bizcard() -> Command {
    let mut cmd = cargo_bin_cmd!("bizcard");
    cmd.args(["-c", NO_CONFIG]);
    cmd
}

fn write_profile(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("profile.json");
    fs::write(
        &path,
        r#"{
            "name": "Ada Lovelace",
            "designation": "Analyst",
            "mobile": "+44 20 7946 0000",
            "email": "ada@example.org",
            "address": "St James's Square, London",
            "services": ["Analysis", "Programming"],
            "socials": { "facebook": "https://facebook.com/ada" }
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn vcard_stdout_uses_page_url() {
    bizcard()
        .args(["--url", URL, "vcard", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BEGIN:VCARD\r\nVERSION:3.0"))
        .stdout(predicate::str::contains("FN:Jane Doe"))
        .stdout(predicate::str::contains(format!("URL;TYPE=Website:{URL}")))
        .stdout(predicate::str::contains("END:VCARD"));
}

#[test]
fn vcard_saves_named_file() {
    let dir = tempdir().unwrap();

    bizcard()
        .args(["vcard", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved contact to"));

    let contents = fs::read_to_string(dir.path().join("Jane_Doe_Contact.vcf")).unwrap();
    assert!(contents.starts_with("BEGIN:VCARD\r\n"));
    assert!(contents.ends_with("END:VCARD"));
}

#[test]
fn render_writes_static_site() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("public");

    bizcard()
        .args(["render", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered card to"));

    for name in ["index.html", "qr.html", "qr.svg", "Jane_Doe_Contact.vcf"] {
        assert!(out.join(name).is_file(), "missing {name}");
    }
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<h1>Jane Doe</h1>"));
    assert!(index.contains("Share Link"));
    assert!(!index.contains("Scan to Connect"));
    let qr_page = fs::read_to_string(out.join("qr.html")).unwrap();
    assert!(qr_page.contains("Scan to Connect"));
}

#[test]
fn render_stdout_with_qr_overlay() {
    bizcard()
        .args(["render", "--stdout", "--qr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan to Connect"))
        .stdout(predicate::str::contains("<svg"));
}

#[test]
fn custom_profile_is_rendered() {
    let dir = tempdir().unwrap();
    let profile = write_profile(dir.path());

    bizcard()
        .arg("-p")
        .arg(&profile)
        .args(["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Ada Lovelace</h1>"))
        .stdout(predicate::str::contains("Analyst"))
        .stdout(predicate::str::contains("social-facebook"))
        .stdout(predicate::str::contains("social-instagram").not());
}

#[test]
fn profile_json_round_trips_fields() {
    let dir = tempdir().unwrap();
    let profile = write_profile(dir.path());

    bizcard()
        .arg("-p")
        .arg(&profile)
        .args(["profile", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ada Lovelace\""))
        .stdout(predicate::str::contains("Programming"));
}

#[test]
fn missing_profile_fails() {
    bizcard()
        .args(["-p", "/nonexistent/profile.json", "profile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ProfileRead"));
}

#[test]
fn malformed_profile_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    bizcard()
        .arg("-p")
        .arg(&path)
        .args(["vcard", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ProfileParse"));
}

#[test]
fn qr_prints_address() {
    bizcard()
        .args(["--url", URL, "qr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan to Connect"))
        .stdout(predicate::str::contains(URL));
}

#[test]
fn qr_writes_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.svg");

    bizcard()
        .args(["qr", "--svg"])
        .arg(&path)
        .assert()
        .success();

    assert!(fs::read_to_string(&path).unwrap().contains("<svg"));
}

#[test]
fn config_show_json_reflects_overrides() {
    bizcard()
        .args(["--url", URL, "config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(URL))
        .stdout(predicate::str::contains("\"size\": 180"));
}

#[test]
fn config_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[qr]\nsize = 240\n").unwrap();

    cargo_bin_cmd!("bizcard")
        .arg("-c")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("240"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[qr]\nsize = 0\n").unwrap();

    cargo_bin_cmd!("bizcard")
        .arg("-c")
        .arg(&path)
        .arg("profile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("qr.size"));
}

#[test]
fn config_validate_reports_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[qr]\nsize = 0\n").unwrap();

    bizcard()
        .args(["config", "validate"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validating configuration"))
        .stderr(predicate::str::contains("qr.size"));
}

#[test]
fn config_validate_accepts_good_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[page]\nurl = \"https://cards.example.com/\"\n").unwrap();

    bizcard()
        .args(["config", "validate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid."));
}

#[test]
fn render_separator_in_name_stays_in_output_dir() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    fs::write(&profile, r#"{"name": "AC/DC Repairs"}"#).unwrap();
    let out = dir.path().join("site");

    bizcard()
        .arg("-p")
        .arg(&profile)
        .args(["render", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("AC_DC_Repairs_Contact.vcf").is_file());
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains(r#"href="AC_DC_Repairs_Contact.vcf""#));
}

#[cfg(unix)]
#[test]
fn share_runs_configured_command() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[share]\ncommand = [\"true\"]\n").unwrap();

    cargo_bin_cmd!("bizcard")
        .arg("-c")
        .arg(&path)
        .args(["--url", URL, "share", "--no-wait"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Shared {URL}")));
}

#[cfg(unix)]
#[test]
fn share_failure_is_dismissed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[share]\ncommand = [\"false\"]\n").unwrap();

    cargo_bin_cmd!("bizcard")
        .arg("-c")
        .arg(&path)
        .args(["share", "--no-wait"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Share dismissed"));
}
