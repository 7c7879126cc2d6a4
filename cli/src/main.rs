mod tui;

use anyhow::Result;
use clap::Parser;
use log::info;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tickli_core::{FileTaskStore, Task, TaskListService};

#[derive(Parser)]
#[command(name = "tickli")]
#[command(about = "A persistent single-list task manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a new task (usage: add Buy milk)
    Add {
        /// Task text, joined with spaces
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// List all tasks, newest first
    List,
    /// Remove every completed task
    Clear,
    /// Open the terminal user interface
    Tui,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "")]
    mark: &'static str,
    #[tabled(rename = "Task")]
    text: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        let id_str = task.id.to_string();
        let short_id = if id_str.len() > 8 { &id_str[..8] } else { &id_str };
        TaskRow {
            mark: if task.completed { "✔" } else { "☐" },
            text: task.text.clone(),
            created: task
                .created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            id: short_id.to_string(),
        }
    }
}

fn main() -> Result<()> {
    // File logging only; the TUI owns the terminal.
    if let Err(e) = tickli_core::logging::init(None) {
        eprintln!("Warning: could not start logging: {e}");
    }

    let cli = Cli::parse();
    let store = FileTaskStore::new(None)?;
    let mut service = TaskListService::new(store);

    match cli.command {
        Some(Commands::Add { text }) => {
            let joined = text.join(" ");
            match service.add_task(&joined) {
                Some(task) => println!("Task added: {} (ID: {})", task.text, task.id),
                None => println!("Error: Task text is required."),
            }
        }
        Some(Commands::List) => {
            let tasks = service.tasks();
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from_task).collect();
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{table}");
                println!("{} task(s) left", service.active_count());
            }
        }
        Some(Commands::Clear) => {
            let removed = service.clear_completed();
            println!("Removed {} completed task(s).", removed);
        }
        Some(Commands::Tui) | None => {
            info!("opening tui");
            tui::run(service)?;
        }
    }
    Ok(())
}
