use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::tempdir;

fn phonebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir)
        .env("ENV_TYPE", "prod")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn create_list_and_save_on_exit() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // create, list, exit accepting the default save
    phonebook(dir.path())
        .write_stdin("4\n1\nAl\n142\n\n3\n0\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact created: 1\t|Al\t|142\t|"))
        .stdout(predicate::str::contains("|ID\t|NAME\t|PHONE\t|COMMENT"))
        .stdout(predicate::str::contains("Bye!"));

    let saved = fs::read_to_string(dir.path().join("phone_dict.json"))?;
    assert_eq!(
        saved,
        "{\n    \"contacts\": [\n        {\n            \"comment\": \"\",\n            \
        \"id\": \"1\",\n            \"name\": \"Al\",\n            \"phone\": \"142\"\n        }\n    ]\n}"
    );

    Ok(())
}

#[test]
fn search_update_delete() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    phonebook(dir.path())
        .write_stdin("4\n1\nAl\n555\nx\n4\n2\nCy\n142\n\n2\n\n0\n")
        .assert()
        .success();

    // Search by phone substring
    phonebook(dir.path())
        .write_stdin("5\n42\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("|2\t|Cy\t|142\t|"))
        .stdout(predicate::str::contains("Found 1 contact(s)"));

    // Update name only, other fields keep their values
    phonebook(dir.path())
        .write_stdin("6\n1\nBo\n\n\n3\n0\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("now: 1\t|Bo\t|555\t|x"));

    let saved = fs::read_to_string(dir.path().join("phone_dict.json"))?;
    // Updated contact moved to the end
    let cy = saved.find("\"Cy\"").unwrap();
    let bo = saved.find("\"Bo\"").unwrap();
    assert!(cy < bo);

    // Delete an unknown id, then a known one
    phonebook(dir.path())
        .write_stdin("7\nnope\n7\n2\n0\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'nope' Not found"))
        .stdout(predicate::str::contains("Contact deleted: 2\t|Cy\t|142\t|"));

    let saved = fs::read_to_string(dir.path().join("phone_dict.json"))?;
    assert!(!saved.contains("Cy"));
    assert!(saved.contains("Bo"));

    Ok(())
}

#[test]
fn create_without_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    phonebook(dir.path())
        .write_stdin("4\n\n3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Validation failed: ID field is required",
        ))
        // Nothing changed, so exit does not ask to save
        .stdout(predicate::str::contains("Data has changed").not());

    Ok(())
}

#[test]
fn declining_save_on_exit_discards_changes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    phonebook(dir.path())
        .write_stdin("4\n1\nAl\n\n\n0\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data has changed"));

    let saved = fs::read_to_string(dir.path().join("phone_dict.json"))?;
    assert_eq!(saved, "{\n    \"contacts\": []\n}");

    Ok(())
}

#[test]
fn field_answers_are_saved_as_typed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // padded comment on create, whitespace-only name on update
    phonebook(dir.path())
        .write_stdin("4\n1\nAl\n142\n  two words  \n6\n1\n   \n\n\n0\n\n")
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("phone_dict.json"))?;
    assert!(saved.contains("\"comment\": \"  two words  \""));
    assert!(saved.contains("\"name\": \"   \""));
    assert!(saved.contains("\"phone\": \"142\""));

    Ok(())
}
