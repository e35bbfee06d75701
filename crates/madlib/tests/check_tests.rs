//! Integration tests for `madlib check`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use madlib_testkit::fixtures::{DUPLICATE_ID_MADLIB, FOX_MADLIB, UNKNOWN_FILLABLE_MADLIB};
use madlib_testkit::{temp_dir_in_workspace, with_isolated_madlib_env, write_fixture};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn madlib(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.current_dir(root).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_check_valid_file() {
    with_isolated_madlib_env(|_home| {
        let temp = temp_dir_in_workspace();
        let story = write_fixture(temp.path(), "fox.toml", FOX_MADLIB);

        madlib(temp.path())
            .arg("check")
            .arg(&story)
            .assert()
            .success()
            .stdout(predicate::str::contains("is a valid madlib (1 fillers, 5 segments)"));
    });
}

#[test]
fn test_check_unknown_fillable() {
    with_isolated_madlib_env(|_home| {
        let temp = temp_dir_in_workspace();
        let story = write_fixture(temp.path(), "bad.toml", UNKNOWN_FILLABLE_MADLIB);

        madlib(temp.path())
            .arg("check")
            .arg(&story)
            .assert()
            .failure()
            .stderr(predicate::str::contains("MADLIB_UNKNOWN_FILLABLE"));
    });
}

#[test]
fn test_check_duplicate_id_json() {
    with_isolated_madlib_env(|_home| {
        let temp = temp_dir_in_workspace();
        let story = write_fixture(temp.path(), "dup.toml", DUPLICATE_ID_MADLIB);

        let output = madlib(temp.path())
            .arg("check")
            .arg(&story)
            .arg("--json")
            .output()
            .unwrap();
        assert!(!output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["valid"], false);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("MADLIB_DUPLICATE_FILLER_ID")
        );
    });
}

#[test]
fn test_check_warns_about_unused_filler() {
    with_isolated_madlib_env(|_home| {
        let temp = temp_dir_in_workspace();
        let content = format!(
            "{}\n[[fillers]]\nid = \"spare\"\ntype = \"word\"\nfriendly_text = \"Spare\"\nexample_text = \"x\"\n",
            FOX_MADLIB
        );
        let story = write_fixture(temp.path(), "spare.toml", &content);

        let output = madlib(temp.path())
            .arg("check")
            .arg(&story)
            .arg("--json")
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["unused_fillers"], serde_json::json!(["spare"]));
    });
}
