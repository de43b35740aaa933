//! Checklist Item and Section
//!
//! Items nest at most one level: a parent item may carry sub-items,
//! sub-items carry none.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A single checkbox row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Unique identifier across the assembled checklist
    pub id: String,
    /// Display text
    pub name: String,
    /// Optional reminder like "*Charge Battery*"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Nested sub-checkboxes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<ChecklistItem>,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            note: None,
            sub_items: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_sub_items(mut self, sub_items: Vec<ChecklistItem>) -> Self {
        self.sub_items = sub_items;
        self
    }
}

impl Entity for ChecklistItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A titled, ordered group of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub id: String,
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }

    /// Every row in this section, parents before their sub-items
    pub fn flat_items(&self) -> Vec<&ChecklistItem> {
        flatten_items(&self.items)
    }
}

impl Entity for ChecklistSection {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Flatten one level of nesting, keeping display order.
/// A parent counts as its own row, followed by each of its sub-items.
pub fn flatten_items(items: &[ChecklistItem]) -> Vec<&ChecklistItem> {
    items
        .iter()
        .flat_map(|item| std::iter::once(item).chain(item.sub_items.iter()))
        .collect()
}
