//! Submission form templates.
//!
//! Ready-to-paste text for the usual project write-up sections. The set is
//! keyed and keeps its display order; users edit the content in place and
//! can reset back to the shipped text.

use indexmap::IndexMap;
use indoc::indoc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    entries: IndexMap<String, Template>,
}

fn entry(title: &str, content: &str) -> Template {
    Template {
        title: title.to_string(),
        content: content.trim_end().to_string(),
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            "built-with".to_string(),
            entry("Built With", "React, TypeScript, Tailwind CSS, Vite"),
        );
        entries.insert(
            "challenges".to_string(),
            entry(
                "Challenges We Ran Into",
                indoc! {"
                    We faced challenges with [specific technical issue], which we overcame by [solution approach].
                "},
            ),
        );
        entries.insert(
            "accomplishments".to_string(),
            entry(
                "Accomplishments",
                indoc! {"
                    We're proud of creating a fully functional [product description] that successfully [key achievement].
                "},
            ),
        );
        entries.insert(
            "learned".to_string(),
            entry(
                "What We Learned",
                indoc! {"
                    This project taught us valuable lessons about [technology/concept] and improved our skills in [area].
                "},
            ),
        );
        entries.insert(
            "next-steps".to_string(),
            entry(
                "What's Next",
                indoc! {"
                    Future improvements include [feature 1], [feature 2], and scaling to support [goal].
                "},
            ),
        );
        Self { entries }
    }
}

impl TemplateSet {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Result<&Template, ValidationError> {
        self.entries.get(key).ok_or_else(|| ValidationError::NotFound {
            kind: "template",
            id: key.to_string(),
        })
    }

    /// Replace a template's content. Blank content is ignored and
    /// returns `false`.
    pub fn edit(&mut self, key: &str, content: &str) -> Result<bool, ValidationError> {
        let template = self
            .entries
            .get_mut(key)
            .ok_or_else(|| ValidationError::NotFound {
                kind: "template",
                id: key.to_string(),
            })?;
        let content = content.trim();
        if content.is_empty() {
            return Ok(false);
        }
        template.content = content.to_string();
        Ok(true)
    }

    /// Restore one template, or all of them when `key` is `None`.
    pub fn reset(&mut self, key: Option<&str>) -> Result<(), ValidationError> {
        let defaults = Self::default();
        match key {
            None => *self = defaults,
            Some(key) => {
                let original = defaults.get(key)?.clone();
                self.entries.insert(key.to_string(), original);
            }
        }
        Ok(())
    }
}
