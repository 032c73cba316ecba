use clap::{Subcommand, ValueEnum};
use hackreminder_core::{Language, Store, Theme};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Toggle light/dark, or set it explicitly
    Theme {
        value: Option<ThemeArg>,
    },
    /// Toggle English/Chinese, or set it explicitly
    Language {
        value: Option<LanguageArg>,
    },
    /// Toggle audio alerts, or set them explicitly
    Audio {
        value: Option<bool>,
    },
    /// Team mode (reserved)
    TeamMode {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    En,
    Zh,
}

pub fn run(action: SettingsAction) -> CmdResult {
    let store = Store::open()?;
    let mut settings = store.settings();

    match action {
        SettingsAction::Show { json } => {
            if json {
                return print_json(&settings);
            }
            let t = settings.translations();
            println!("{}", t.settings);
            println!("  Theme:       {}", t.theme_label(settings.theme));
            println!("  Language:    {:?}", settings.language);
            println!(
                "  {}: {}",
                t.audio_alerts,
                if settings.audio_alerts { "on" } else { "off" }
            );
            println!("  Team mode:   {}", if settings.team_mode { "on" } else { "off" });
            return Ok(());
        }
        SettingsAction::Theme { value } => {
            let theme = match value {
                Some(ThemeArg::Light) => Theme::Light,
                Some(ThemeArg::Dark) => Theme::Dark,
                None => settings.toggle_theme(),
            };
            settings.theme = theme;
            println!("Theme: {}", settings.translations().theme_label(theme));
        }
        SettingsAction::Language { value } => {
            settings.language = match value {
                Some(LanguageArg::En) => Language::En,
                Some(LanguageArg::Zh) => Language::Zh,
                None => settings.toggle_language(),
            };
            println!("{}", settings.translations().title);
        }
        SettingsAction::Audio { value } => {
            match value {
                Some(on) => settings.audio_alerts = on,
                None => {
                    settings.toggle_audio();
                }
            }
            println!(
                "Audio alerts {}",
                if settings.audio_alerts { "on" } else { "off" }
            );
        }
        SettingsAction::TeamMode { value } => {
            settings.set_team_mode(value)?;
            println!("Team mode off");
        }
    }
    store.save_settings(&settings)?;
    Ok(())
}
