mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, MemberAction, MemberAddArgs, MemberCommand, MemberUpdateArgs, ProjectAction,
    ProjectCommand, SettingsAction, SettingsCommand, SettingsSetArgs, TaskAction, TaskAddArgs,
    TaskCommand, TaskUpdateArgs,
};
pub use handlers::{
    find_project_root, handle_init, handle_member_add, handle_member_delete, handle_member_list,
    handle_member_update, handle_project_add, handle_project_delete, handle_project_list,
    handle_project_show, handle_settings_set, handle_settings_show, handle_task_add,
    handle_task_delete, handle_task_list, handle_task_toggle, handle_task_update,
};
