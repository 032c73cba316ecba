//! Task checklist.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Free-form time estimate such as "2h".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_tag: Option<String>,
}

/// Completed over total, as shown next to the countdown and in alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Rounded percentage, 0 for an empty list.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Ordered task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    tasks: Vec<Task>,
}

impl Checklist {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.tasks.iter().filter(|t| t.completed).count(),
            total: self.tasks.len(),
        }
    }

    pub fn add(&mut self, text: &str, time_tag: Option<&str>) -> Result<&Task, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::Required("text"));
        }
        let time_tag = time_tag
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        self.tasks.push(Task {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
            time_tag,
        });
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip completion. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ValidationError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Replace the text. A blank edit leaves the task unchanged and
    /// returns `false`.
    pub fn edit(&mut self, id: &str, text: &str) -> Result<bool, ValidationError> {
        let task = self.get_mut(id)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        task.text = text.to_string();
        Ok(true)
    }

    pub fn delete(&mut self, id: &str) -> Result<Task, ValidationError> {
        let pos = self.position(id)?;
        Ok(self.tasks.remove(pos))
    }

    /// Remove completed tasks. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Resolve a full id, a unique id prefix, or a 1-based position.
    pub fn resolve(&self, key: &str) -> Result<&Task, ValidationError> {
        let pos = self.position(key)?;
        Ok(&self.tasks[pos])
    }

    fn position(&self, key: &str) -> Result<usize, ValidationError> {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == key) {
            return Ok(pos);
        }
        if let Ok(n) = key.parse::<usize>() {
            if (1..=self.tasks.len()).contains(&n) {
                return Ok(n - 1);
            }
        }
        let mut matches = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| !key.is_empty() && t.id.starts_with(key));
        match (matches.next(), matches.next()) {
            (Some((pos, _)), None) => Ok(pos),
            _ => Err(ValidationError::NotFound {
                kind: "task",
                id: key.to_string(),
            }),
        }
    }

    fn get_mut(&mut self, key: &str) -> Result<&mut Task, ValidationError> {
        let pos = self.position(key)?;
        Ok(&mut self.tasks[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Checklist {
        let mut list = Checklist::default();
        list.add("Set up repo", Some("30m")).unwrap();
        list.add("Build demo", None).unwrap();
        list.add("Record video", Some("  ")).unwrap();
        list
    }

    #[test]
    fn add_trims_and_rejects_blank() {
        let mut list = Checklist::default();
        assert_eq!(list.add("   ", None).unwrap_err(), ValidationError::Required("text"));
        let task = list.add("  Pitch deck ", Some(" 1h ")).unwrap();
        assert_eq!(task.text, "Pitch deck");
        assert_eq!(task.time_tag.as_deref(), Some("1h"));
        assert!(!task.completed);
    }

    #[test]
    fn blank_time_tag_is_dropped() {
        let list = sample();
        assert!(list.tasks()[2].time_tag.is_none());
    }

    #[test]
    fn one_of_three_is_33_percent() {
        let mut list = sample();
        let id = list.tasks()[0].id.clone();
        assert!(list.toggle(&id).unwrap());
        let progress = list.progress();
        assert_eq!(progress, Progress { completed: 1, total: 3 });
        assert_eq!(progress.percent(), 33);
        assert!(!progress.is_done());
    }

    #[test]
    fn empty_progress_is_zero() {
        assert_eq!(Checklist::default().progress().percent(), 0);
        assert!(!Checklist::default().progress().is_done());
    }

    #[test]
    fn two_of_three_rounds_up() {
        let mut list = sample();
        list.toggle("1").unwrap();
        list.toggle("2").unwrap();
        assert_eq!(list.progress().percent(), 67);
    }

    #[test]
    fn blank_edit_is_ignored() {
        let mut list = sample();
        assert!(!list.edit("1", "  ").unwrap());
        assert_eq!(list.tasks()[0].text, "Set up repo");
        assert!(list.edit("1", "Set up monorepo").unwrap());
        assert_eq!(list.tasks()[0].text, "Set up monorepo");
    }

    #[test]
    fn resolve_by_position_and_prefix() {
        let list = sample();
        let second = list.tasks()[1].clone();
        assert_eq!(list.resolve("2").unwrap(), &second);
        assert_eq!(list.resolve(&second.id[..8]).unwrap(), &second);
        assert!(list.resolve("9").is_err());
        assert!(list.resolve("").is_err());
    }

    #[test]
    fn delete_and_clear_completed() {
        let mut list = sample();
        let removed = list.delete("3").unwrap();
        assert_eq!(removed.text, "Record video");
        list.toggle("1").unwrap();
        assert_eq!(list.clear_completed(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].text, "Build demo");
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = sample();
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));
        let back: Checklist = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
