//! Checked State
//!
//! Mapping from item id to its checkbox. An absent id reads as unchecked.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::entity::Entity;
use super::item::ChecklistSection;

/// Checkbox values for one tent size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    checked: HashMap<String, bool>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checked.get(item_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, item_id: impl Into<String>, checked: bool) {
        self.checked.insert(item_id.into(), checked);
    }

    /// True when no id has ever been recorded
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Number of recorded ids, checked or not
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.checked.iter().map(|(id, checked)| (id.as_str(), *checked))
    }

    /// Copy of this state with every row of `section_id` set to `checked`.
    /// Ids outside the section are untouched; an unknown section yields
    /// an unchanged copy.
    pub fn with_section_checked(
        &self,
        section_id: &str,
        checked: bool,
        sections: &[ChecklistSection],
    ) -> ChecklistState {
        let mut next = self.clone();
        match sections.iter().find(|s| s.id() == section_id) {
            Some(section) => {
                for item in section.flat_items() {
                    next.set(item.id.clone(), checked);
                }
            }
            None => log::debug!("Section {} not in assembled checklist, ignoring", section_id),
        }
        next
    }
}

impl FromIterator<(String, bool)> for ChecklistState {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            checked: iter.into_iter().collect(),
        }
    }
}
