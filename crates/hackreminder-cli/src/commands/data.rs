//! Persisted state entries: inspect and reset to defaults.

use clap::Subcommand;
use hackreminder_core::storage::keys;
use hackreminder_core::Store;

use super::{confirm, CmdResult};

#[derive(Subcommand)]
pub enum DataAction {
    /// List the entries currently stored
    List,
    /// Remove an entry so it falls back to its default
    Reset {
        /// Entry key (e.g. "tasks", "notes")
        key: Option<String>,
        /// Remove every entry
        #[arg(long, conflicts_with = "key")]
        all: bool,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> CmdResult {
    let store = Store::open()?;

    match action {
        DataAction::List => {
            let stored = store.database().kv_keys()?;
            for key in keys::ALL {
                let state = if stored.iter().any(|k| k == key) { "stored" } else { "default" };
                println!("  {key:<16} {state}");
            }
        }
        DataAction::Reset { key, all, yes } => {
            let targets: Vec<&str> = match (&key, all) {
                (_, true) => keys::ALL.to_vec(),
                (Some(key), false) => {
                    let known = keys::ALL
                        .iter()
                        .find(|k| **k == key.as_str())
                        .ok_or_else(|| format!("unknown entry: {key}"))?;
                    vec![*known]
                }
                (None, false) => return Err("give an entry key or --all".into()),
            };
            if !yes && !confirm(&format!("Reset {}?", targets.join(", "))) {
                return Err("reset not confirmed".into());
            }
            let mut removed = 0;
            for key in targets {
                if store.remove(key)? {
                    removed += 1;
                }
            }
            println!("Reset {removed} entr{}", if removed == 1 { "y" } else { "ies" });
        }
    }
    Ok(())
}
