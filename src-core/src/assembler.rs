//! Checklist Assembler
//!
//! Turns raw catalog sections plus the crew's selections into the ordered
//! list that is displayed and counted.

use serde::Serialize;

use crate::catalog::{
    get_checklist, lighting_section, walls_section, TentChecklist, CONCRETE_ID, STAKES_ID,
};
use crate::domain::{BallastType, ChecklistItem, ChecklistSection, Selections};

/// Result of assembly.
///
/// `Incomplete` means the page cannot be shown yet (no ballast chosen, or
/// the size is unknown) and must never be read as "nothing left to pack".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "sections", rename_all = "lowercase")]
pub enum Assembly {
    Incomplete,
    Ready(Vec<ChecklistSection>),
}

impl Assembly {
    pub fn is_ready(&self) -> bool {
        matches!(self, Assembly::Ready(_))
    }

    /// Assembled sections; empty while incomplete
    pub fn sections(&self) -> &[ChecklistSection] {
        match self {
            Assembly::Ready(sections) => sections,
            Assembly::Incomplete => &[],
        }
    }

    pub fn section(&self, id: &str) -> Option<&ChecklistSection> {
        self.sections().iter().find(|s| s.id == id)
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.sections()
            .iter()
            .flat_map(|s| s.flat_items())
            .any(|item| item.id == item_id)
    }
}

/// Ballast section with its size-specific maximum item.
/// Stakes list the maximum last, concrete lists it first.
fn ballast_section(checklist: &TentChecklist, ballast: BallastType) -> Option<ChecklistSection> {
    let spec = checklist.spec();
    let mut section = checklist.common_section(ballast.section_id())?.clone();
    match ballast {
        BallastType::Stakes => {
            section
                .items
                .push(ChecklistItem::new("stakes-max", format!("{}x stakes (max)", spec.stakes)));
        }
        BallastType::Concrete => {
            section.items.insert(
                0,
                ChecklistItem::new(
                    "concrete-max",
                    format!("{}x concrete / water barrels (max)", spec.concrete),
                ),
            );
        }
    }
    Some(section)
}

/// Build the displayed section list for `checklist` under `selections`
pub fn assemble(checklist: &TentChecklist, selections: &Selections) -> Assembly {
    let Some(ballast) = selections.ballast_type else {
        return Assembly::Incomplete;
    };

    let mut sections: Vec<ChecklistSection> = checklist
        .common_sections
        .iter()
        .filter(|s| s.id != STAKES_ID && s.id != CONCRETE_ID)
        .cloned()
        .collect();

    sections.extend(checklist.specific_sections.iter().cloned());

    match ballast_section(checklist, ballast) {
        Some(section) => sections.push(section),
        None => log::warn!("No {} section in catalog for {}", ballast, checklist.size),
    }

    if selections.wants_walls() {
        sections.push(walls_section());
    }
    if selections.wants_lighting() {
        sections.push(lighting_section());
    }

    Assembly::Ready(sections)
}

/// Assemble straight from a size string; unknown sizes are incomplete
pub fn assemble_size(size: &str, selections: &Selections) -> Assembly {
    match get_checklist(size) {
        Ok(checklist) => assemble(&checklist, selections),
        Err(e) => {
            log::warn!("Cannot assemble checklist: {}", e);
            Assembly::Incomplete
        }
    }
}
