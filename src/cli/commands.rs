use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "teamboard")]
#[command(version, about = "A local-first dashboard for projects, team members and tasks")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new teamboard in the current directory
    Init,

    /// Manage projects
    Project(ProjectCommand),

    /// Manage team members
    Member(MemberCommand),

    /// Manage tasks
    Task(TaskCommand),

    /// Show or change dashboard settings
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Create a project
    Add {
        /// Project name
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Category (web, mobile, ...)
        #[arg(long)]
        category: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// Member user ids (can be specified multiple times)
        #[arg(long = "member", short = 'm')]
        members: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List projects
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a project with its members and tasks
    Show {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a project; its tasks and members are unlinked, not deleted
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct MemberCommand {
    #[command(subcommand)]
    pub action: MemberAction,
}

#[derive(Subcommand, Debug)]
pub enum MemberAction {
    /// Add a team member
    Add(MemberAddArgs),

    /// List team members
    List {
        /// Only members associated with this project
        #[arg(long)]
        project: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a team member
    Update(MemberUpdateArgs),

    /// Delete a team member; their tasks become unassigned
    Delete {
        user_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct MemberAddArgs {
    /// Unique user id
    pub user_id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    /// Birthdate (YYYY-MM-DD)
    #[arg(long)]
    pub birthdate: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Associated project id
    #[arg(long)]
    pub project: Option<String>,

    /// Mark the member as inactive
    #[arg(long)]
    pub inactive: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct MemberUpdateArgs {
    pub user_id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    /// Birthdate (YYYY-MM-DD)
    #[arg(long)]
    pub birthdate: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Associated project id
    #[arg(long, conflicts_with = "clear_project")]
    pub project: Option<String>,

    /// Remove the project association
    #[arg(long)]
    pub clear_project: bool,

    /// Active flag (true/false)
    #[arg(long)]
    pub active: Option<bool>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Create a task
    Add(TaskAddArgs),

    /// List tasks, one settings-sized page at a time
    List {
        /// Only tasks of this project
        #[arg(long)]
        project: Option<String>,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a task
    Update(TaskUpdateArgs),

    /// Mark a task completed, or reopen a completed one
    Toggle {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a task
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct TaskAddArgs {
    /// What needs doing
    pub description: String,

    /// Project id
    #[arg(long)]
    pub project: Option<String>,

    /// Status (Pendiente, En progreso, Completado)
    #[arg(long, default_value = "Pendiente")]
    pub status: String,

    /// Priority (Baja, Media, Alta, Urgente)
    #[arg(long, default_value = "Media")]
    pub priority: String,

    /// Assignee user id
    #[arg(long)]
    pub assignee: Option<String>,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TaskUpdateArgs {
    pub id: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, conflicts_with = "clear_project")]
    pub project: Option<String>,

    /// Remove the project association
    #[arg(long)]
    pub clear_project: bool,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub priority: Option<String>,

    #[arg(long, conflicts_with = "unassign")]
    pub assignee: Option<String>,

    /// Remove the assignee
    #[arg(long)]
    pub unassign: bool,

    /// Due date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one or more settings
    Set(SettingsSetArgs),
}

#[derive(Args, Debug)]
pub struct SettingsSetArgs {
    #[arg(long)]
    pub site_name: Option<String>,

    #[arg(long)]
    pub theme_color: Option<String>,

    /// Page size for listings
    #[arg(long)]
    pub items_per_page: Option<u32>,

    /// Enable notifications (true/false)
    #[arg(long)]
    pub notifications: Option<bool>,

    /// Default task duration in hours
    #[arg(long)]
    pub default_task_duration: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
