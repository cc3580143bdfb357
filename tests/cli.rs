use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dogwood(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dogwood").unwrap();
    cmd.env("DOGWOOD_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn components_list_shows_catalogue() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["components", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Button"))
        .stdout(predicate::str::contains("Gov Banner"));
}

#[test]
fn components_list_by_category() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["components", "list", "--category", "navigation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breadcrumb"))
        .stdout(predicate::str::contains("TextArea").not());
}

#[test]
fn component_show_prints_props() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["component", "show", "button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("variant"));
}

#[test]
fn component_show_unknown_slug_fails() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["components", "show", "nonexistent-slug"])
        .assert()
        .failure();
}

#[test]
fn patterns_and_templates_list() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["patterns", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Form Pattern"));

    dogwood(&temp)
        .args(["templates", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Government Essentials"))
        .stdout(predicate::str::contains("Benefit Application"));
}

#[test]
fn colors_show_family_scale() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["colors", "show", "cardinal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cardinal"))
        .stdout(predicate::str::contains("#c41e3a"));
}

#[test]
fn export_csv_to_stdout() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name,Slug,Category"));
}

#[test]
fn wizard_submission_is_logged() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .arg("wizard")
        .write_stdin("n\nn\nn\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Review Your Application"))
        .stdout(predicate::str::contains("VA-"));

    dogwood(&temp)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUBMIT"));
}

#[test]
fn log_without_activity() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No wizard activity recorded."));
}

#[test]
fn config_shows_data_dir() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(temp.path().to_string_lossy().as_ref()));
}

#[test]
fn import_validates_exported_catalogue() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("catalogue.yaml");

    dogwood(&temp)
        .args(["export", "--format", "yaml", "--output"])
        .arg(&file)
        .assert()
        .success();

    dogwood(&temp)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::is_match(r"Components:\s+18").unwrap());
}

#[test]
fn import_rejects_missing_file() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .arg("import")
        .arg(temp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn config_counts_audit_entries() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit entries: none"));

    dogwood(&temp)
        .arg("wizard")
        .write_stdin("n\nn\nn\ns\nq\n")
        .assert()
        .success();

    // start, three moves and the submission
    dogwood(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit entries: 5"));
}

#[test]
fn log_rejects_empty_session_id() {
    let temp = TempDir::new().unwrap();
    dogwood(&temp)
        .args(["log", "--session", ""])
        .assert()
        .failure();
}
