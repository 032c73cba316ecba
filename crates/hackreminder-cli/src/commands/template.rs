//! Devpost submission templates.

use clap::Subcommand;
use hackreminder_core::{clipboard, Store};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List templates
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print one template
    Show {
        /// Template key (e.g. "built-with", "challenges")
        key: String,
    },
    /// Replace a template's content
    Edit {
        key: String,
        content: String,
    },
    /// Copy a template to the clipboard
    Copy {
        key: String,
    },
    /// Restore defaults for one template, or all of them
    Reset {
        key: Option<String>,
    },
}

pub fn run(action: TemplateAction) -> CmdResult {
    let store = Store::open()?;
    let mut templates = store.templates();

    match action {
        TemplateAction::List { json } => {
            if json {
                return print_json(&templates);
            }
            println!("{}", store.settings().translations().devpost_helper);
            for (key, template) in templates.iter() {
                println!("  {key:<14} {}", template.title);
            }
        }
        TemplateAction::Show { key } => {
            let template = templates.get(&key)?;
            println!("{}", template.title);
            println!();
            println!("{}", template.content);
        }
        TemplateAction::Edit { key, content } => {
            if templates.edit(&key, &content)? {
                store.save_templates(&templates)?;
                println!("Template {key} updated");
            } else {
                println!("Empty content, template left unchanged");
            }
        }
        TemplateAction::Copy { key } => {
            let template = templates.get(&key)?;
            match clipboard::copy(&template.content) {
                Ok(()) => println!("Copied {} to clipboard", template.title),
                Err(e) => {
                    eprintln!("could not copy: {e}");
                    println!("{}", template.content);
                }
            }
        }
        TemplateAction::Reset { key } => {
            templates.reset(key.as_deref())?;
            store.save_templates(&templates)?;
            match key {
                Some(key) => println!("Template {key} reset"),
                None => println!("All templates reset"),
            }
        }
    }
    Ok(())
}
