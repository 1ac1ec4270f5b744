mod support;

use predicates::prelude::*;
use serde_json::Value;

use support::{add_task, studyplan_cmd, TestStore};

#[test]
fn rm_deletes_and_repeat_is_not_found() {
    let store = TestStore::new();
    let id = add_task(&store, "Algebra", "Math", "2025-01-10");

    let output = studyplan_cmd(&store)
        .args(["rm", &id, "--yes", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("rm json");
    assert_eq!(value["data"]["deleted"], true);
    assert_eq!(value["data"]["task"]["title"], "Algebra");

    assert_eq!(store.read_store().len(), 0);

    studyplan_cmd(&store)
        .args(["rm", &id, "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Task not found"));
}

#[test]
fn rm_prompt_declined_keeps_the_task() {
    let store = TestStore::new();
    let id = add_task(&store, "Algebra", "Math", "2025-01-10");

    studyplan_cmd(&store)
        .args(["rm", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("aborted"));

    assert_eq!(store.read_store().len(), 1);
}

#[test]
fn rm_prompt_accepted_deletes() {
    let store = TestStore::new();
    let id = add_task(&store, "Algebra", "Math", "2025-01-10");

    studyplan_cmd(&store)
        .args(["rm", &id])
        .write_stdin("y\n")
        .assert()
        .success();

    assert_eq!(store.read_store().len(), 0);
}

#[test]
fn id_prefixes_resolve_when_unique() {
    let store = TestStore::new();
    store
        .write_store(
            r#"[
                {"id": "aaa1-first", "title": "First", "subject": "Math", "date": "2099-01-01", "done": false},
                {"id": "aaa2-second", "title": "Second", "subject": "Math", "date": "2099-01-02", "done": false},
                {"id": "bbb1-third", "title": "Third", "subject": "Math", "date": "2099-01-03", "done": false}
            ]"#,
        )
        .unwrap();

    // Ambiguous prefix
    studyplan_cmd(&store)
        .args(["rm", "aaa", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Ambiguous task id prefix"));

    // Unique prefix
    studyplan_cmd(&store)
        .args(["rm", "bbb", "--yes"])
        .assert()
        .success();
    assert_eq!(store.read_store().len(), 2);
}

#[test]
fn done_twice_restores_the_original_state() {
    let store = TestStore::new();
    let id = add_task(&store, "Algebra", "Math", "2025-01-10");

    studyplan_cmd(&store).args(["done", &id]).assert().success();
    assert_eq!(store.read_store()[0]["done"], true);

    studyplan_cmd(&store).args(["done", &id]).assert().success();
    assert_eq!(store.read_store()[0]["done"], false);
}

#[test]
fn done_reports_the_new_state() {
    let store = TestStore::new();
    let id = add_task(&store, "Algebra", "Math", "2025-01-10");

    studyplan_cmd(&store)
        .args(["done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("is done"));

    studyplan_cmd(&store)
        .args(["done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("is reopened"));
}
