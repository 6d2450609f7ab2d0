use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn teamboard_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_teamboard"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(dir: &Path, args: &[&str]) -> Output {
    teamboard_cmd().current_dir(dir).args(args).output().unwrap()
}

fn init_board() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["init"]);
    assert!(output.status.success());
    tmp
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_init_creates_board_directory() {
    let tmp = init_board();

    assert!(tmp.path().join(".teamboard").exists());
    assert!(tmp.path().join(".teamboard/config.yaml").exists());
    assert!(tmp.path().join(".teamboard/storage.db").exists());
}

#[test]
fn test_init_twice_fails() {
    let tmp = init_board();

    let output = run(tmp.path(), &["init"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Already initialized"));
}

#[test]
fn test_command_without_init_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["project", "list"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not in a teamboard project"));
}

#[test]
fn test_fresh_board_has_seed_data() {
    let tmp = init_board();

    let projects = stdout_json(&run(tmp.path(), &["project", "list", "--json"]));
    let names: Vec<&str> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["E-commerce Platform", "Mobile App"]);

    let settings = stdout_json(&run(tmp.path(), &["settings", "show", "--json"]));
    assert_eq!(settings["siteName"], "Mi Dashboard");
    assert_eq!(settings["itemsPerPage"], 5);
}

#[test]
fn test_project_workflow() {
    let tmp = init_board();

    let created = stdout_json(&run(
        tmp.path(),
        &[
            "project",
            "add",
            "Data Platform",
            "--category=data",
            "--member=u1",
            "--json",
        ],
    ));
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("p_"));
    assert_eq!(created["members"][0], "u1");

    let shown = stdout_json(&run(tmp.path(), &["project", "show", &id, "--json"]));
    assert_eq!(shown["project"]["name"], "Data Platform");
    assert_eq!(shown["members"][0]["userId"], "u1");
    assert_eq!(shown["tasks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_delete_project_unlinks_tasks_and_members() {
    let tmp = init_board();

    let output = run(tmp.path(), &["project", "delete", "p1", "--force"]);
    assert!(output.status.success());

    let projects = stdout_json(&run(tmp.path(), &["project", "list", "--json"]));
    assert!(projects
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["id"] != "p1"));

    let members = stdout_json(&run(tmp.path(), &["member", "list", "--json"]));
    let u1 = members
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["userId"] == "u1")
        .unwrap();
    assert!(u1.get("projectId").is_none());

    let tasks = stdout_json(&run(tmp.path(), &["task", "list", "--json"]));
    let t1 = tasks["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == "t1")
        .unwrap();
    assert!(t1.get("projectId").is_none());
}

#[test]
fn test_delete_without_force_non_interactive_fails() {
    let tmp = init_board();

    let output = run(tmp.path(), &["task", "delete", "t1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));
}

#[test]
fn test_duplicate_member_is_rejected() {
    let tmp = init_board();

    let output = run(
        tmp.path(),
        &["member", "add", "u1", "--name=Clone", "--email=clone@example.com"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Member already exists: u1"));

    let members = stdout_json(&run(tmp.path(), &["member", "list", "--json"]));
    assert_eq!(members.as_array().unwrap().len(), 3);
}

#[test]
fn test_member_add_update_delete() {
    let tmp = init_board();

    let added = stdout_json(&run(
        tmp.path(),
        &[
            "member",
            "add",
            "u4",
            "--name=Luis Torres",
            "--email=luis@example.com",
            "--project=p2",
            "--birthdate=1992-07-30",
            "--json",
        ],
    ));
    assert_eq!(added["isActive"], true);
    assert_eq!(added["projectId"], "p2");

    let updated = stdout_json(&run(
        tmp.path(),
        &["member", "update", "u4", "--clear-project", "--role=QA", "--json"],
    ));
    assert!(updated.get("projectId").is_none());
    assert_eq!(updated["role"], "QA");

    let output = run(tmp.path(), &["member", "delete", "u3", "--force"]);
    assert!(output.status.success());

    let tasks = stdout_json(&run(tmp.path(), &["task", "list", "--json"]));
    let t2 = tasks["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == "t2")
        .unwrap();
    assert!(t2.get("userId").is_none());
}

#[test]
fn test_member_add_rejects_bad_birthdate() {
    let tmp = init_board();

    let output = run(
        tmp.path(),
        &[
            "member",
            "add",
            "u5",
            "--name=Eva",
            "--email=eva@example.com",
            "--birthdate=12/05/1990",
        ],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("YYYY-MM-DD"));
}

#[test]
fn test_task_add_toggle_and_update() {
    let tmp = init_board();

    let created = stdout_json(&run(
        tmp.path(),
        &[
            "task",
            "add",
            "Escribir tests",
            "--project=p2",
            "--assignee=u3",
            "--due=2025-12-01",
            "--json",
        ],
    ));
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("t_"));
    assert_eq!(created["status"], "Pendiente");
    assert_eq!(created["priority"], "Media");
    assert_eq!(created["dateline"], "2025-12-01");

    let toggled = stdout_json(&run(tmp.path(), &["task", "toggle", &id, "--json"]));
    assert_eq!(toggled["status"], "Completado");

    let toggled = stdout_json(&run(tmp.path(), &["task", "toggle", &id, "--json"]));
    assert_eq!(toggled["status"], "Pendiente");

    let updated = stdout_json(&run(
        tmp.path(),
        &["task", "update", &id, "--priority=Urgente", "--unassign", "--json"],
    ));
    assert_eq!(updated["priority"], "Urgente");
    assert!(updated.get("userId").is_none());
}

#[test]
fn test_task_add_requires_description() {
    let tmp = init_board();

    let output = run(tmp.path(), &["task", "add", "  "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("description is required"));
}

#[test]
fn test_task_list_pages_by_settings() {
    let tmp = init_board();

    let output = run(tmp.path(), &["settings", "set", "--items-per-page=1"]);
    assert!(output.status.success());

    let first = stdout_json(&run(tmp.path(), &["task", "list", "--json"]));
    assert_eq!(first["totalPages"], 2);
    assert_eq!(first["tasks"][0]["id"], "t1");

    let second = stdout_json(&run(tmp.path(), &["task", "list", "--page=2", "--json"]));
    assert_eq!(second["tasks"][0]["id"], "t2");

    let clamped = stdout_json(&run(tmp.path(), &["task", "list", "--page=99", "--json"]));
    assert_eq!(clamped["page"], 2);
}

#[test]
fn test_settings_set_only_changes_given_fields() {
    let tmp = init_board();

    let settings = stdout_json(&run(
        tmp.path(),
        &["settings", "set", "--items-per-page=10", "--json"],
    ));
    assert_eq!(settings["itemsPerPage"], 10);
    assert_eq!(settings["siteName"], "Mi Dashboard");
    assert_eq!(settings["themeColor"], "primary");
    assert_eq!(settings["enableNotifications"], true);
    assert_eq!(settings["defaultTaskDuration"], 8);
}

#[test]
fn test_confirm_deletes_can_be_disabled() {
    let tmp = init_board();
    std::fs::write(
        tmp.path().join(".teamboard/config.yaml"),
        "confirm_deletes: false\n",
    )
    .unwrap();

    let output = run(tmp.path(), &["task", "delete", "t2"]);
    assert!(output.status.success());

    let tasks = stdout_json(&run(tmp.path(), &["task", "list", "--json"]));
    assert_eq!(tasks["tasks"].as_array().unwrap().len(), 1);
}
