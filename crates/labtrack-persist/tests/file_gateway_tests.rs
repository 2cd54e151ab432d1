//! File-backed gateway tests
//!
//! Exercises the on-disk layout and legacy payloads.

use labtrack_model::{Stage, StepCategory};
use labtrack_persist::{FileBackend, Gateway, LoadSource, PROJECTS_KEY};

#[test]
fn test_file_gateway_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = Gateway::new(FileBackend::new(dir.path()));
    let mut projects = first.load_projects();
    projects.pop();
    first.save_projects(&projects).unwrap();
    first.save_dark_mode(true).unwrap();

    let second = Gateway::new(FileBackend::new(dir.path()));
    let (loaded, source) = second.load_projects_with_source();
    assert_eq!(source, LoadSource::Stored);
    assert_eq!(loaded.len(), 1);
    assert!(second.load_dark_mode());
}

#[test]
fn test_legacy_payload_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let payload = r#"[
        {
            "id": 1718000000000,
            "name": "Old project",
            "stage": "Data Processing",
            "progress": 40,
            "priority": "High",
            "startDate": "",
            "dueDate": "",
            "description": "",
            "completedSteps": ["Sample Collection", "Alignment"],
            "nextSteps": []
        }
    ]"#;
    std::fs::write(dir.path().join(format!("{PROJECTS_KEY}.json")), payload).unwrap();

    let gateway = Gateway::new(FileBackend::new(dir.path()));
    let (projects, source) = gateway.load_projects_with_source();

    assert_eq!(source, LoadSource::Stored);
    let project = &projects[0];
    assert_eq!(project.id.as_str(), "1718000000000");
    assert_eq!(project.stage, Stage::DataProcessing);
    assert!(project.start_date.is_none());
    assert!(project
        .completed_steps
        .iter()
        .all(|s| s.category == StepCategory::Other));
}

#[test]
fn test_truncated_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{PROJECTS_KEY}.json")), "[{\"id\": 1,").unwrap();

    let gateway = Gateway::new(FileBackend::new(dir.path()));
    let (projects, source) = gateway.load_projects_with_source();

    assert_eq!(source, LoadSource::Malformed);
    assert_eq!(projects.len(), 2);
}
