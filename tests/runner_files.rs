//! Tests for the Actions runner file plumbing: reading the event payload
//! file and appending step outputs.

use std::fs;

use pr_asana_link::error::LinkError;
use pr_asana_link::event::{TriggerContext, load_event_from};
use pr_asana_link::outputs::append_output;
use tempfile::tempdir;

#[test]
fn event_file_round_trips_into_a_context() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("event.json");
    fs::write(
        &path,
        r#"{
            "pull_request": {
                "head": { "ref": "feature/998877" },
                "html_url": "https://github.com/o/r/pull/3",
                "number": 3
            },
            "repository": { "full_name": "o/r" }
        }"#,
    )
    .unwrap();

    let event = load_event_from(&path).unwrap();
    let ctx = TriggerContext::from_event(&event).unwrap();
    assert_eq!(ctx.branch_ref, "feature/998877");
    assert_eq!(ctx.issue_number, 3);
}

#[test]
fn unreadable_event_file_is_an_event_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.json");
    assert!(matches!(
        load_event_from(&missing),
        Err(LinkError::Event(_))
    ));
}

#[test]
fn garbage_event_file_is_an_event_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("event.json");
    fs::write(&path, "not json at all").unwrap();
    assert!(matches!(load_event_from(&path), Err(LinkError::Event(_))));
}

#[test]
fn outputs_append_as_name_value_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("output");

    append_output(&path, "pr_url", "https://github.com/o/r/pull/7").unwrap();
    append_output(&path, "asana_task_url", "https://app.asana.com/0/42").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "pr_url=https://github.com/o/r/pull/7\nasana_task_url=https://app.asana.com/0/42\n"
    );
}
