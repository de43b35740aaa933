//! Checklist Catalog
//!
//! Pure lookup from a tent size to its raw sections.
//! - size_spec: per-size hardware counts
//! - sections: static section content
//! - validate: startup consistency check over every size

mod sections;
mod size_spec;
mod validate;

use serde::Serialize;

use crate::domain::{ChecklistSection, DomainResult, TentSize};

pub use sections::{
    lighting_section, walls_section, COMMON_EQUIPMENT_ID, CONCRETE_ID, LIGHTING_ID,
    SPECIFIC_HARDWARE_ID, STAKES_ID, WALLS_ID,
};
pub use size_spec::SizeSpec;
pub use validate::validate_catalog;

/// Raw catalog output for one size, before any selections apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TentChecklist {
    pub size: TentSize,
    /// Shared sections, including both ballast candidates
    pub common_sections: Vec<ChecklistSection>,
    /// Exactly one size-derived hardware section
    pub specific_sections: Vec<ChecklistSection>,
}

impl TentChecklist {
    pub fn spec(&self) -> &'static SizeSpec {
        SizeSpec::for_size(self.size)
    }

    pub fn common_section(&self, id: &str) -> Option<&ChecklistSection> {
        self.common_sections.iter().find(|s| s.id == id)
    }
}

/// Catalog entry for a known size
pub fn checklist_for(size: TentSize) -> TentChecklist {
    TentChecklist {
        size,
        common_sections: sections::common_sections(size),
        specific_sections: vec![sections::specific_hardware(size)],
    }
}

/// Catalog entry for a size string; `UnknownSize` when not in the catalog
pub fn get_checklist(size: &str) -> DomainResult<TentChecklist> {
    let size: TentSize = size.parse()?;
    Ok(checklist_for(size))
}

/// Sizes offered in the picker, in catalog order
pub fn all_sizes() -> Vec<TentSize> {
    TentSize::ALL.to_vec()
}
