use clap::Parser;
use teamboard::cli::{
    find_project_root, handle_init, handle_member_add, handle_member_delete, handle_member_list,
    handle_member_update, handle_project_add, handle_project_delete, handle_project_list,
    handle_project_show, handle_settings_set, handle_settings_show, handle_task_add,
    handle_task_delete, handle_task_list, handle_task_toggle, handle_task_update, Cli, Commands,
    MemberAction, ProjectAction, SettingsAction, TaskAction,
};
use teamboard::config::BOARD_DIR;
use teamboard::BoardConfig;
use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins over the board's configured filter.
fn init_tracing() {
    let fallback = BoardConfig::load(&find_project_root().join(BOARD_DIR))
        .unwrap_or_default()
        .log_filter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Project(project_cmd) => match project_cmd.action {
            ProjectAction::Add {
                name,
                description,
                category,
                priority,
                members,
                json,
            } => handle_project_add(name, description, category, priority, members, json),
            ProjectAction::List { json } => handle_project_list(json),
            ProjectAction::Show { id, json } => handle_project_show(id, json),
            ProjectAction::Delete { id, force } => handle_project_delete(id, force),
        },
        Commands::Member(member_cmd) => match member_cmd.action {
            MemberAction::Add(args) => handle_member_add(args),
            MemberAction::List { project, json } => handle_member_list(project, json),
            MemberAction::Update(args) => handle_member_update(args),
            MemberAction::Delete { user_id, force } => handle_member_delete(user_id, force),
        },
        Commands::Task(task_cmd) => match task_cmd.action {
            TaskAction::Add(args) => handle_task_add(args),
            TaskAction::List {
                project,
                page,
                json,
            } => handle_task_list(project, page, json),
            TaskAction::Update(args) => handle_task_update(args),
            TaskAction::Toggle { id, json } => handle_task_toggle(id, json),
            TaskAction::Delete { id, force } => handle_task_delete(id, force),
        },
        Commands::Settings(settings_cmd) => match settings_cmd.action {
            SettingsAction::Show { json } => handle_settings_show(json),
            SettingsAction::Set(args) => handle_settings_set(args),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
