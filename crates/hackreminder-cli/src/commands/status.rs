//! One-shot countdown view.

use chrono::{Local, Utc};
use hackreminder_core::{compute_remaining, Store, TickContext};
use serde_json::json;

use super::{print_json, CmdResult};

pub fn run(json: bool) -> CmdResult {
    let store = Store::open()?;
    let ctx = TickContext::from_store(&store);
    let t = store.settings().translations();

    let Some(event) = ctx.event.as_ref() else {
        if json {
            return print_json(&json!({ "event": null }));
        }
        println!("{}", t.reminder_system);
        println!("Select a hackathon to start countdown (hackreminder event select <id>)");
        return Ok(());
    };

    let snapshot = compute_remaining(event.deadline, Utc::now());
    if json {
        return print_json(&json!({
            "event": event,
            "snapshot": snapshot,
            "urgent": snapshot.is_urgent(),
            "progress": ctx.progress,
            "progress_pct": ctx.progress.percent(),
            "profile": ctx.profile,
            "thresholds": ctx.thresholds(),
        }));
    }

    println!("{}", t.reminder_system);
    println!();
    println!("  {}", event.name);
    println!(
        "  {}: {}{}",
        t.time_remaining,
        snapshot,
        if snapshot.is_urgent() { "  (!)" } else { "" }
    );
    println!(
        "  Deadline: {}",
        event.deadline.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
    );
    if snapshot.is_past {
        println!("  The deadline has passed.");
    }
    println!();
    println!(
        "  Task Progress: {}/{} completed ({}%)",
        ctx.progress.completed,
        ctx.progress.total,
        ctx.progress.percent()
    );
    if ctx.progress.is_done() {
        println!("  All tasks completed.");
    }
    if let Some(next) = ctx.next_reminder() {
        println!("  Next reminder: {next} minutes before the deadline");
    }
    Ok(())
}
