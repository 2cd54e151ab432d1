use labtrack_cli::{build_cli, execute, resolve_config, RunContext};
use labtrack_persist::{FileBackend, Gateway};
use labtrack_store::ProjectStore;
use labtrack_test_utils::fixed_today;
use labtrack_views::ViewConfig;
use std::path::Path;

fn run_in(dir: &Path, argv: &[&str]) -> anyhow::Result<String> {
    let mut full = vec!["labtrack"];
    full.extend_from_slice(argv);
    let matches = build_cli().try_get_matches_from(full)?;
    let (name, args) = matches.subcommand().unwrap();

    let mut store = ProjectStore::hydrate(Gateway::new(FileBackend::new(dir)));
    let views = ViewConfig::default();
    let ctx = RunContext {
        views: &views,
        today: fixed_today(),
    };
    let mut out = Vec::new();
    execute(&mut store, ctx, name, args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn created_id(output: &str) -> String {
    output.trim().strip_prefix("Created ").unwrap().to_string()
}

#[test]
fn test_first_run_lists_seed_projects() {
    let dir = tempfile::tempdir().unwrap();
    let listing = run_in(dir.path(), &["list"]).unwrap();
    assert!(listing.contains("[1] RNA-seq Analysis - Cancer Study"));
    assert!(listing.contains("[2]"));
}

#[test]
fn test_filtered_list_keeps_store_positions() {
    let dir = tempfile::tempdir().unwrap();
    let listing = run_in(dir.path(), &["list", "--tag", "Plant"]).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("  1. [2] Genome Assembly - Plant Species"));
}

#[test]
fn test_add_update_move_remove() {
    let dir = tempfile::tempdir().unwrap();
    let id = created_id(
        &run_in(
            dir.path(),
            &["add", "Soil Metagenome", "--priority", "critical", "--tag", "Soil"],
        )
        .unwrap(),
    );

    let listing = run_in(dir.path(), &["list", "--tag", "Soil"]).unwrap();
    assert_eq!(listing.lines().count(), 1);
    assert!(listing.contains("Critical"));

    run_in(dir.path(), &["update", &id, "--progress", "250", "--stage", "analysis"]).unwrap();
    let shown = run_in(dir.path(), &["show", &id, "--json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(json["progress"], 100);
    assert_eq!(json["stage"], "Analysis");

    run_in(dir.path(), &["move", &id, "0"]).unwrap();
    let first = run_in(dir.path(), &["list"]).unwrap();
    assert!(first.lines().next().unwrap().contains(&id));

    run_in(dir.path(), &["remove", &id]).unwrap();
    let after = run_in(dir.path(), &["list", "--search", "soil"]).unwrap();
    assert_eq!(after.trim(), "No projects found");
}

#[test]
fn test_unknown_id_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_in(dir.path(), &["remove", "missing"]).unwrap_err();
    assert!(err.to_string().contains("no project with id missing"));
}

#[test]
fn test_template_fills_steps() {
    let dir = tempfile::tempdir().unwrap();
    let id = created_id(
        &run_in(dir.path(), &["add", "Assembly run", "--template", "genome assembly"]).unwrap(),
    );
    let shown = run_in(dir.path(), &["show", &id, "--json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&shown).unwrap();
    let completed = json["completedSteps"].as_array().unwrap().len();
    let next = json["nextSteps"].as_array().unwrap().len();
    assert_eq!(completed + next, 14);
    assert_eq!(completed, 14 / 3);
}

#[test]
fn test_dark_mode_persists() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(run_in(dir.path(), &["dark-mode"]).unwrap().trim(), "Dark mode: off");
    run_in(dir.path(), &["dark-mode", "on"]).unwrap();
    assert_eq!(run_in(dir.path(), &["dark-mode"]).unwrap().trim(), "Dark mode: on");
}

#[test]
fn test_export_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.txt");
    let target_str = target.to_str().unwrap();
    run_in(dir.path(), &["export", "--format", "txt", "--out", target_str]).unwrap();

    let report = std::fs::read_to_string(&target).unwrap();
    assert!(report.starts_with("Bioinformatics Project Report"));
    assert!(report.contains("Total Projects: 2"));
}

#[test]
fn test_insights_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let raw = run_in(dir.path(), &["insights", "--json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["totalProjects"], 2);
    assert!(json["timeMetrics"]["totalTimeTracked"].as_u64().unwrap() > 0);
}

#[test]
fn test_step_hints_exclude_exact_match() {
    let dir = tempfile::tempdir().unwrap();
    let hints = run_in(dir.path(), &["step-hints", "quality"]).unwrap();
    assert!(!hints.is_empty());
    assert!(hints.lines().count() <= 5);
}

#[test]
fn test_config_file_and_data_dir_override() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("labtrack.toml");
    std::fs::write(&config_path, "log_filter = \"debug\"\n").unwrap();

    let matches = build_cli()
        .try_get_matches_from([
            "labtrack",
            "tags",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            "/tmp/labtrack-data",
        ])
        .unwrap();
    let config = resolve_config(&matches).unwrap();
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.data_dir, Path::new("/tmp/labtrack-data"));
}
