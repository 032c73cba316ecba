//! User-facing settings and the label tables they select.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
    /// Reserved; cannot be switched on yet.
    #[serde(default)]
    pub team_mode: bool,
    #[serde(default = "default_true")]
    pub audio_alerts: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::En,
            team_mode: false,
            audio_alerts: true,
        }
    }
}

impl Settings {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.theme
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = match self.language {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        };
        self.language
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.audio_alerts = !self.audio_alerts;
        self.audio_alerts
    }

    pub fn set_team_mode(&mut self, enabled: bool) -> Result<(), ValidationError> {
        if enabled {
            return Err(ValidationError::Reserved("team mode"));
        }
        self.team_mode = false;
        Ok(())
    }

    pub fn translations(&self) -> &'static Translations {
        Translations::for_language(self.language)
    }
}

/// Section labels in one language.
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub identity_selector: &'static str,
    pub hackathon_selector: &'static str,
    pub reminder_system: &'static str,
    pub task_checklist: &'static str,
    pub notepad: &'static str,
    pub devpost_helper: &'static str,
    pub settings: &'static str,
    pub time_remaining: &'static str,
    pub add_task: &'static str,
    pub export_notes: &'static str,
    pub copy_template: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub audio_alerts: &'static str,
}

static EN: Translations = Translations {
    title: "HackReminder",
    identity_selector: "Choose Your Profile",
    hackathon_selector: "Select Hackathon",
    reminder_system: "Countdown & Alerts",
    task_checklist: "Task Checklist",
    notepad: "Quick Notes",
    devpost_helper: "Devpost Templates",
    settings: "Settings",
    time_remaining: "Time Remaining",
    add_task: "Add Task",
    export_notes: "Export Notes",
    copy_template: "Copy Template",
    light_mode: "Light Mode",
    dark_mode: "Dark Mode",
    audio_alerts: "Audio Alerts",
};

static ZH: Translations = Translations {
    title: "黑客松提醒器",
    identity_selector: "选择身份",
    hackathon_selector: "选择黑客松",
    reminder_system: "倒计时和提醒",
    task_checklist: "任务清单",
    notepad: "快速笔记",
    devpost_helper: "Devpost 模板",
    settings: "设置",
    time_remaining: "剩余时间",
    add_task: "添加任务",
    export_notes: "导出笔记",
    copy_template: "复制模板",
    light_mode: "浅色模式",
    dark_mode: "深色模式",
    audio_alerts: "音频提醒",
};

impl Translations {
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    pub fn theme_label(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light_mode,
            Theme::Dark => self.dark_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.language, Language::En);
        assert!(!s.team_mode);
        assert!(s.audio_alerts);
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let mut s = Settings::default();
        assert_eq!(s.toggle_theme(), Theme::Dark);
        assert_eq!(s.toggle_theme(), Theme::Light);
        assert_eq!(s.toggle_language(), Language::Zh);
        assert_eq!(s.translations().settings, "设置");
        assert!(!s.toggle_audio());
    }

    #[test]
    fn team_mode_is_reserved() {
        let mut s = Settings::default();
        assert_eq!(s.set_team_mode(true), Err(ValidationError::Reserved("team mode")));
        assert!(s.set_team_mode(false).is_ok());
        assert!(!s.team_mode);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(
            json,
            r#"{"theme":"light","language":"en","teamMode":false,"audioAlerts":true}"#
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(s.theme, Theme::Dark);
        assert!(s.audio_alerts);
    }
}
