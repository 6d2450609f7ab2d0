use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use super::commands::{
    MemberAddArgs, MemberUpdateArgs, SettingsSetArgs, TaskAddArgs, TaskUpdateArgs,
};
use crate::config::{BoardConfig, BOARD_DIR};
use crate::entity::{
    Member, MemberUpdate, Project, ProjectDraft, Settings, SettingsUpdate, Task, TaskDraft,
    TaskUpdate,
};
use crate::error::{BoardError, Result};
use crate::storage::SqliteKv;
use crate::store::{paginate, EntityStore};

/// An opened project: its configuration and live store
struct Board {
    config: BoardConfig,
    store: EntityStore<SqliteKv>,
}

/// Find the project root by looking for .teamboard/ or .git/
pub fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(BOARD_DIR).exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_board() -> Result<Board> {
    let board_dir = find_project_root().join(BOARD_DIR);
    if !board_dir.exists() {
        return Err(BoardError::NotInitialized);
    }

    let config = BoardConfig::load(&board_dir)?;
    let kv = SqliteKv::open(&config.storage_path(&board_dir))?;
    let store = EntityStore::open_with_prefix(kv, &config.key_prefix);

    Ok(Board { config, store })
}

/// Ask for confirmation unless forced or disabled in config
fn confirm_delete(config: &BoardConfig, force: bool, prompt: &str) -> Result<bool> {
    if force || !config.confirm_deletes {
        return Ok(true);
    }

    eprintln!("{} [y/N] ", prompt);

    if atty::is(atty::Stream::Stdin) {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    } else {
        Err(BoardError::InvalidInput(
            "Use --force to delete in non-interactive mode".to_string(),
        ))
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoardError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

fn validate_date(field: &str, value: &str) -> Result<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            BoardError::InvalidInput(format!("{} must be YYYY-MM-DD, got '{}'", field, value))
        })
}

fn validate_optional_date(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) => validate_date(field, v),
        None => Ok(()),
    }
}

/// Empty strings from the command line mean "not given"
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn print_project_line(project: &Project) {
    let category = project.category.as_deref().unwrap_or("-");
    let priority = project.priority.as_deref().unwrap_or("-");
    println!(
        "  {} [{}|{}] {} ({} members)",
        project.id,
        category,
        priority,
        project.name,
        project.members.len()
    );
}

fn print_member_line(member: &Member) {
    let role = member.role.as_deref().unwrap_or("-");
    let project = member.project_id.as_deref().unwrap_or("-");
    let inactive = if member.is_active == Some(false) {
        " (inactive)"
    } else {
        ""
    };
    println!(
        "  {} {} <{}> [{}] project:{}{}",
        member.user_id, member.name, member.email, role, project, inactive
    );
}

fn print_task_line(task: &Task) {
    let status = task.status.as_deref().unwrap_or("-");
    let priority = task.priority.as_deref().unwrap_or("-");
    let due = task
        .due_date
        .as_deref()
        .map(|d| format!(" due:{}", d))
        .unwrap_or_default();
    let assignee = task
        .assignee
        .as_deref()
        .map(|a| format!(" @{}", a))
        .unwrap_or_default();
    println!(
        "  {} [{}|{}]{}{} {}",
        task.id, status, priority, due, assignee, task.description
    );
}

fn print_settings(settings: &Settings) {
    println!("Site name:             {}", settings.site_name);
    println!("Theme color:           {}", settings.theme_color);
    println!("Items per page:        {}", settings.items_per_page);
    println!("Notifications:         {}", settings.enable_notifications);
    println!("Default task duration: {}h", settings.default_task_duration);
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;
    let board_dir = root.join(BOARD_DIR);

    if board_dir.exists() {
        return Err(BoardError::AlreadyInitialized);
    }

    fs::create_dir_all(&board_dir)?;
    let config = BoardConfig::default();
    config.save(&board_dir)?;

    let kv = SqliteKv::open(&config.storage_path(&board_dir))?;
    let store = EntityStore::open_with_prefix(kv, &config.key_prefix);
    info!(projects = store.projects().len(), "seeded new board");

    println!("Initialized teamboard in {}", root.display());
    Ok(())
}

pub fn handle_project_add(
    name: String,
    description: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    members: Vec<String>,
    json: bool,
) -> Result<()> {
    require_non_empty("name", &name)?;
    let mut board = open_board()?;

    let id = board.store.add_project(ProjectDraft {
        name: Some(name),
        description: non_empty(description),
        category: non_empty(category),
        priority: non_empty(priority),
        members: Some(members),
    });

    let project = board
        .store
        .project(&id)
        .ok_or_else(|| BoardError::EntityNotFound(id.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(project)?);
    } else {
        println!("Created project {} - {}", project.id, project.name);
    }
    Ok(())
}

pub fn handle_project_list(json: bool) -> Result<()> {
    let board = open_board()?;
    let projects = board.store.projects();

    if json {
        println!("{}", serde_json::to_string_pretty(projects)?);
    } else if projects.is_empty() {
        println!("No projects found.");
    } else {
        println!("Projects:\n");
        for project in projects {
            print_project_line(project);
        }
    }
    Ok(())
}

pub fn handle_project_show(id: String, json: bool) -> Result<()> {
    let board = open_board()?;
    let project = board
        .store
        .project(&id)
        .ok_or_else(|| BoardError::EntityNotFound(id.clone()))?;
    let members = board.store.project_members(&id);
    let tasks = board.store.project_tasks(&id);

    if json {
        let value = serde_json::json!({
            "project": project,
            "members": members,
            "tasks": tasks,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} - {}", project.id, project.name);
    if let Some(description) = &project.description {
        println!("{}", description);
    }
    println!(
        "Category: {}  Priority: {}",
        project.category.as_deref().unwrap_or("-"),
        project.priority.as_deref().unwrap_or("-")
    );

    println!("\nMembers:");
    if members.is_empty() {
        println!("  No members assigned.");
    }
    for member in members {
        print_member_line(member);
    }

    println!("\nTasks:");
    if tasks.is_empty() {
        println!("  No tasks.");
    }
    for task in tasks {
        print_task_line(task);
    }
    Ok(())
}

pub fn handle_project_delete(id: String, force: bool) -> Result<()> {
    let mut board = open_board()?;
    let project = board
        .store
        .project(&id)
        .cloned()
        .ok_or_else(|| BoardError::EntityNotFound(id.clone()))?;

    if !confirm_delete(
        &board.config,
        force,
        &format!("Delete project {} - {}?", project.id, project.name),
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    let unlinked_tasks = board.store.project_tasks(&id).len();
    board.store.delete_project(&id);

    println!(
        "Deleted project {} ({} tasks unlinked)",
        project.id, unlinked_tasks
    );
    Ok(())
}

pub fn handle_member_add(args: MemberAddArgs) -> Result<()> {
    require_non_empty("userId", &args.user_id)?;
    require_non_empty("name", &args.name)?;
    require_non_empty("email", &args.email)?;
    validate_optional_date("birthdate", args.birthdate.as_deref())?;

    let mut board = open_board()?;
    if board.store.member(&args.user_id).is_some() {
        return Err(BoardError::DuplicateMember(args.user_id));
    }

    let mut member = Member::new(args.user_id, args.name, args.email);
    member.role = non_empty(args.role);
    member.position = non_empty(args.position);
    member.birthdate = non_empty(args.birthdate);
    member.phone = non_empty(args.phone);
    member.project_id = non_empty(args.project);
    member.is_active = Some(!args.inactive);

    board.store.add_member(member.clone());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&member)?);
    } else {
        println!("Added member {} - {}", member.user_id, member.name);
    }
    Ok(())
}

pub fn handle_member_list(project: Option<String>, json: bool) -> Result<()> {
    let board = open_board()?;
    let members: Vec<&Member> = board
        .store
        .members()
        .iter()
        .filter(|m| project.is_none() || m.project_id == project)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&members)?);
    } else if members.is_empty() {
        println!("No members found.");
    } else {
        println!("Members:\n");
        for member in members {
            print_member_line(member);
        }
    }
    Ok(())
}

pub fn handle_member_update(args: MemberUpdateArgs) -> Result<()> {
    validate_optional_date("birthdate", args.birthdate.as_deref())?;
    if let Some(name) = &args.name {
        require_non_empty("name", name)?;
    }
    if let Some(email) = &args.email {
        require_non_empty("email", email)?;
    }

    let mut board = open_board()?;
    if board.store.member(&args.user_id).is_none() {
        return Err(BoardError::EntityNotFound(args.user_id));
    }

    let project_id = if args.clear_project {
        Some(None)
    } else {
        args.project.map(Some)
    };

    let update = MemberUpdate {
        user_id: None,
        name: args.name,
        email: args.email,
        role: args.role.map(Some),
        position: args.position.map(Some),
        birthdate: args.birthdate.map(Some),
        phone: args.phone.map(Some),
        project_id,
        is_active: args.active.map(Some),
    };
    if update.is_empty() {
        return Err(BoardError::InvalidInput("nothing to update".to_string()));
    }

    board.store.update_member(&args.user_id, update);
    let member = board
        .store
        .member(&args.user_id)
        .ok_or_else(|| BoardError::EntityNotFound(args.user_id.clone()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(member)?);
    } else {
        println!("Updated member {} - {}", member.user_id, member.name);
    }
    Ok(())
}

pub fn handle_member_delete(user_id: String, force: bool) -> Result<()> {
    let mut board = open_board()?;
    let member = board
        .store
        .member(&user_id)
        .cloned()
        .ok_or_else(|| BoardError::EntityNotFound(user_id.clone()))?;

    if !confirm_delete(
        &board.config,
        force,
        &format!("Delete member {} - {}?", member.user_id, member.name),
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    board.store.delete_member(&user_id);
    println!("Deleted member {}", member.user_id);
    Ok(())
}

pub fn handle_task_add(args: TaskAddArgs) -> Result<()> {
    require_non_empty("description", &args.description)?;
    validate_optional_date("due", args.due.as_deref())?;

    let mut board = open_board()?;
    let id = board.store.add_task(TaskDraft {
        description: Some(args.description),
        project_id: non_empty(args.project),
        status: non_empty(Some(args.status)),
        priority: non_empty(Some(args.priority)),
        assignee: non_empty(args.assignee),
        due_date: non_empty(args.due),
    });

    let task = board
        .store
        .task(&id)
        .ok_or_else(|| BoardError::EntityNotFound(id.clone()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("Created task {} - {}", task.id, task.description);
    }
    Ok(())
}

pub fn handle_task_list(project: Option<String>, page: usize, json: bool) -> Result<()> {
    let board = open_board()?;
    let page_size = board.store.settings().items_per_page as usize;

    let tasks: Vec<&Task> = match &project {
        Some(id) => board.store.project_tasks(id),
        None => board.store.tasks().iter().collect(),
    };
    let page = paginate(&tasks, page, page_size);

    if json {
        let value = serde_json::json!({
            "page": page.page,
            "totalPages": page.total_pages,
            "pageSize": page.page_size,
            "tasks": page.items,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if page.items.is_empty() {
        println!("No tasks found.");
    } else {
        println!("Tasks (page {} / {}):\n", page.page, page.total_pages);
        for task in page.items {
            print_task_line(task);
        }
    }
    Ok(())
}

pub fn handle_task_update(args: TaskUpdateArgs) -> Result<()> {
    if let Some(description) = &args.description {
        require_non_empty("description", description)?;
    }
    validate_optional_date("due", args.due.as_deref())?;

    let mut board = open_board()?;
    if board.store.task(&args.id).is_none() {
        return Err(BoardError::EntityNotFound(args.id));
    }

    let project_id = if args.clear_project {
        Some(None)
    } else {
        args.project.map(Some)
    };
    let assignee = if args.unassign {
        Some(None)
    } else {
        args.assignee.map(Some)
    };
    let due_date = if args.clear_due {
        Some(None)
    } else {
        args.due.map(Some)
    };

    let update = TaskUpdate {
        description: args.description,
        project_id,
        status: args.status.map(Some),
        priority: args.priority.map(Some),
        assignee,
        due_date,
    };
    if update.is_empty() {
        return Err(BoardError::InvalidInput("nothing to update".to_string()));
    }

    board.store.update_task(&args.id, update);
    let task = board
        .store
        .task(&args.id)
        .ok_or_else(|| BoardError::EntityNotFound(args.id.clone()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("Updated task {} - {}", task.id, task.description);
    }
    Ok(())
}

pub fn handle_task_toggle(id: String, json: bool) -> Result<()> {
    let mut board = open_board()?;
    if board.store.task(&id).is_none() {
        return Err(BoardError::EntityNotFound(id));
    }

    board.store.toggle_task_completion(&id);
    let task = board
        .store
        .task(&id)
        .ok_or_else(|| BoardError::EntityNotFound(id.clone()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!(
            "Task {} is now {}",
            task.id,
            task.status.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub fn handle_task_delete(id: String, force: bool) -> Result<()> {
    let mut board = open_board()?;
    let task = board
        .store
        .task(&id)
        .cloned()
        .ok_or_else(|| BoardError::EntityNotFound(id.clone()))?;

    if !confirm_delete(
        &board.config,
        force,
        &format!("Delete task {} - {}?", task.id, task.description),
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    board.store.delete_task(&id);
    println!("Deleted task {}", task.id);
    Ok(())
}

pub fn handle_settings_show(json: bool) -> Result<()> {
    let board = open_board()?;
    let settings = board.store.settings();

    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        print_settings(settings);
    }
    Ok(())
}

pub fn handle_settings_set(args: SettingsSetArgs) -> Result<()> {
    if let Some(site_name) = &args.site_name {
        require_non_empty("site name", site_name)?;
    }
    if args.items_per_page == Some(0) {
        return Err(BoardError::InvalidInput(
            "items per page must be at least 1".to_string(),
        ));
    }

    let update = SettingsUpdate {
        site_name: args.site_name,
        theme_color: args.theme_color,
        items_per_page: args.items_per_page,
        enable_notifications: args.notifications,
        default_task_duration: args.default_task_duration,
    };
    if update.is_empty() {
        return Err(BoardError::InvalidInput("nothing to update".to_string()));
    }

    let mut board = open_board()?;
    board.store.update_settings(update);

    if args.json {
        println!("{}", serde_json::to_string_pretty(board.store.settings())?);
    } else {
        print_settings(board.store.settings());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("due", "2025-11-15").is_ok());
        assert!(validate_date("due", "15/11/2025").is_err());
        assert!(validate_date("due", "2025-02-30").is_err());
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("name", "Docs").is_ok());
        assert!(matches!(
            require_non_empty("name", "   "),
            Err(BoardError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_empty_filters_blank() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("web".to_string())), Some("web".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
