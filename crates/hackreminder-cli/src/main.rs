use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hackreminder", version, about = "Hackathon deadline countdown and checklist")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the countdown for the tracked event
    Status {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Follow the countdown and fire threshold alerts
    Watch(commands::watch::WatchArgs),
    /// Reminder profile selection
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Tracked event management
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Task checklist
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Quick notes
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Submission templates
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Theme, language and audio settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Persisted state entries
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let default_level = hackreminder_core::Config::load_or_default().log.level;
    let filter = EnvFilter::try_from_env("HACKREMINDER_LOG")
        .or_else(|_| EnvFilter::try_new(&default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Status { json } => commands::status::run(json),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Event { action } => commands::event::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Notes { action } => commands::notes::run(action),
        Commands::Template { action } => commands::template::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "hackreminder", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
