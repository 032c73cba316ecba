//! Task checklist commands.
//!
//! Tasks are addressed by id, by a unique id prefix, or by their 1-based
//! position in `task list`.

use clap::Subcommand;
use hackreminder_core::Store;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task text
        text: String,
        /// Optional time tag (e.g. "Day 1 AM")
        #[arg(long)]
        time: Option<String>,
    },
    /// List tasks with overall progress
    List {
        #[arg(long)]
        json: bool,
    },
    /// Toggle a task between open and done
    Toggle {
        /// Task id, id prefix or position
        task: String,
    },
    /// Replace a task's text
    Edit {
        /// Task id, id prefix or position
        task: String,
        /// New text
        text: String,
    },
    /// Delete a task
    Delete {
        /// Task id, id prefix or position
        task: String,
    },
    /// Remove every completed task
    ClearCompleted,
}

pub fn run(action: TaskAction) -> CmdResult {
    let store = Store::open()?;
    let mut checklist = store.checklist();

    match action {
        TaskAction::Add { text, time } => {
            let task = checklist.add(&text, time.as_deref())?;
            println!("Added task {} ({})", task.text, short_id(&task.id));
            store.save_checklist(&checklist)?;
        }
        TaskAction::List { json } => {
            if json {
                return print_json(&serde_json::json!({
                    "tasks": checklist.tasks(),
                    "progress": checklist.progress(),
                    "progress_pct": checklist.progress().percent(),
                }));
            }
            let progress = checklist.progress();
            println!(
                "{} {}/{} ({}%)",
                store.settings().translations().task_checklist,
                progress.completed,
                progress.total,
                progress.percent()
            );
            for (i, task) in checklist.tasks().iter().enumerate() {
                let mark = if task.completed { "x" } else { " " };
                let tag = task
                    .time_tag
                    .as_deref()
                    .map(|t| format!("  [{t}]"))
                    .unwrap_or_default();
                println!(
                    "{:>3}. [{mark}] {}{tag}  ({})",
                    i + 1,
                    task.text,
                    short_id(&task.id)
                );
            }
        }
        TaskAction::Toggle { task } => {
            let id = checklist.resolve(&task)?.id.clone();
            let done = checklist.toggle(&id)?;
            store.save_checklist(&checklist)?;
            let p = checklist.progress();
            let state = if done { "done" } else { "open" };
            println!("Marked {state} ({}/{} completed)", p.completed, p.total);
        }
        TaskAction::Edit { task, text } => {
            let id = checklist.resolve(&task)?.id.clone();
            if checklist.edit(&id, &text)? {
                store.save_checklist(&checklist)?;
                println!("Task updated");
            } else {
                println!("Empty text, task left unchanged");
            }
        }
        TaskAction::Delete { task } => {
            let id = checklist.resolve(&task)?.id.clone();
            let removed = checklist.delete(&id)?;
            store.save_checklist(&checklist)?;
            println!("Deleted task {}", removed.text);
        }
        TaskAction::ClearCompleted => {
            let removed = checklist.clear_completed();
            store.save_checklist(&checklist)?;
            println!("Removed {removed} completed task(s)");
        }
    }
    Ok(())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
