//! Domain-focused tests for task identifiers, names, and records.

use crate::todo::domain::{Task, TaskDomainError, TaskId, TaskName};
use rstest::{fixture, rstest};
use uuid::Uuid;

#[fixture]
fn milk() -> Task {
    Task::new(TaskName::new("Buy milk").expect("valid task name"))
}

#[rstest]
fn task_name_trims_surrounding_whitespace() {
    let name = TaskName::new("  Walk the dog \n").expect("valid task name");
    assert_eq!(name.as_str(), "Walk the dog");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn task_name_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskName::new(raw), Err(TaskDomainError::EmptyTaskName));
}

#[rstest]
fn task_id_renders_with_todo_prefix() {
    let uuid = Uuid::new_v4();
    let id = TaskId::from_uuid(uuid);
    assert_eq!(id.to_string(), format!("todo-{uuid}"));
}

#[rstest]
fn task_id_parses_prefixed_and_bare_forms() {
    let uuid = Uuid::new_v4();
    let prefixed: TaskId = format!("todo-{uuid}").parse().expect("prefixed id parses");
    let bare: TaskId = uuid.to_string().parse().expect("bare id parses");

    assert_eq!(prefixed, TaskId::from_uuid(uuid));
    assert_eq!(bare, prefixed);
}

#[rstest]
fn task_id_rejects_garbage() {
    let result: Result<TaskId, _> = "todo-not-a-uuid".parse();
    assert_eq!(
        result,
        Err(TaskDomainError::InvalidTaskId("todo-not-a-uuid".to_owned()))
    );
}

#[rstest]
fn new_task_starts_incomplete_with_fresh_id(milk: Task) {
    let other = Task::new(TaskName::new("Buy milk").expect("valid task name"));

    assert!(!milk.is_completed());
    assert_eq!(milk.name().as_str(), "Buy milk");
    assert_ne!(milk.id(), other.id());
}

#[rstest]
fn toggling_copies_the_task_and_keeps_identity(milk: Task) {
    let toggled = milk.with_completed_toggled();

    assert!(toggled.is_completed());
    assert!(!milk.is_completed());
    assert_eq!(toggled.id(), milk.id());
    assert_eq!(toggled.name(), milk.name());
}

#[rstest]
fn renaming_preserves_completion(milk: Task) {
    let completed = milk.with_completed_toggled();
    let renamed = completed.renamed(TaskName::new("Buy oat milk").expect("valid task name"));

    assert_eq!(renamed.name().as_str(), "Buy oat milk");
    assert!(renamed.is_completed());
    assert_eq!(renamed.id(), milk.id());
}

#[rstest]
fn task_serializes_for_the_list_renderer(milk: Task) {
    let value = serde_json::to_value(&milk).expect("task serializes");

    assert_eq!(value["id"], serde_json::json!(milk.id().to_string()));
    assert_eq!(value["name"], serde_json::json!("Buy milk"));
    assert_eq!(value["completed"], serde_json::json!(false));
}

#[rstest]
fn task_deserialization_rejects_blank_name() {
    let raw = serde_json::json!({
        "id": TaskId::new().to_string(),
        "name": "  ",
        "completed": false,
    });
    let result: Result<Task, _> = serde_json::from_value(raw);
    assert!(result.is_err());
}

#[rstest]
#[case("todo-0")]
#[case("todo-1")]
#[case("milk")]
fn task_deserialization_rejects_non_uuid_ids(#[case] raw_id: &str) {
    let raw = serde_json::json!({ "id": raw_id, "name": "Eat", "completed": true });
    let result: Result<Task, _> = serde_json::from_value(raw);

    let err = result.expect_err("only uuid-backed ids are accepted");
    assert!(err.to_string().contains(raw_id));
    assert_eq!(
        raw_id.parse::<TaskId>(),
        Err(TaskDomainError::InvalidTaskId(raw_id.to_owned()))
    );
}

#[rstest]
fn task_deserialization_accepts_prefixed_uuid_seed_ids() {
    let uuid = Uuid::new_v4();
    let raw = serde_json::json!({ "id": format!("todo-{uuid}"), "name": "Eat", "completed": true });

    let task: Task = serde_json::from_value(raw).expect("uuid-backed seed id");

    assert_eq!(task.id(), TaskId::from_uuid(uuid));
    assert!(task.is_completed());
}
