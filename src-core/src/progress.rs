//! Progress Aggregator
//!
//! Counts rows over an assembled checklist. Sub-items count on their own
//! and so does their parent.

use serde::Serialize;

use crate::assembler::Assembly;
use crate::domain::{ChecklistSection, ChecklistState};

/// Completion counts for a progress bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    /// 0.0 ..= 100.0; zero when there is nothing to count
    pub percentage: f64,
}

impl Progress {
    fn from_counts(total: usize, completed: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Self {
            total,
            completed,
            percentage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Section header state, counted over top-level items only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SectionStatus {
    Empty,
    Unchecked,
    Partial { checked: usize, total: usize },
    AllDone,
}

/// Aggregate over a list of assembled sections
pub fn aggregate(sections: &[ChecklistSection], state: &ChecklistState) -> Progress {
    let ids = sections.iter().flat_map(|s| s.flat_items());
    let (total, completed) = ids.fold((0, 0), |(total, completed), item| {
        (total + 1, completed + usize::from(state.is_checked(&item.id)))
    });
    Progress::from_counts(total, completed)
}

/// Aggregate over an assembly; incomplete assemblies count as zero
pub fn aggregate_assembly(assembly: &Assembly, state: &ChecklistState) -> Progress {
    match assembly {
        Assembly::Ready(sections) => aggregate(sections, state),
        Assembly::Incomplete => Progress::default(),
    }
}

/// Progress for a single section, sub-items included
pub fn section_progress(section: &ChecklistSection, state: &ChecklistState) -> Progress {
    aggregate(std::slice::from_ref(section), state)
}

pub fn section_status(section: &ChecklistSection, state: &ChecklistState) -> SectionStatus {
    let total = section.items.len();
    let checked = section
        .items
        .iter()
        .filter(|item| state.is_checked(&item.id))
        .count();
    match (total, checked) {
        (0, _) => SectionStatus::Empty,
        (_, 0) => SectionStatus::Unchecked,
        (t, c) if t == c => SectionStatus::AllDone,
        (total, checked) => SectionStatus::Partial { checked, total },
    }
}

#[cfg(test)]
mod tests {
    use crate::assembler::assemble;
    use crate::catalog::{checklist_for, COMMON_EQUIPMENT_ID, STAKES_ID};
    use crate::domain::{BallastType, Selections, TentSize};
    use super::*;

    fn stakes_30x30() -> Vec<ChecklistSection> {
        let checklist = checklist_for(TentSize::S30x30);
        assemble(&checklist, &Selections::with_ballast(BallastType::Stakes))
            .sections()
            .to_vec()
    }

    #[test]
    fn test_empty_state_counts_everything_unchecked() {
        let sections = stakes_30x30();
        let progress = aggregate(&sections, &ChecklistState::new());
        // 7 common + 4 pulling bag sub-items, 12 hardware, 5 stakes + max
        assert_eq!(progress.total, 29);
        assert_eq!(progress.completed, 0);
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let sections = stakes_30x30();
        let mut state = ChecklistState::new();
        state.set("towels", true);
        state.set("ropes-2x", true);
        state.set("not-in-checklist", true);
        let first = aggregate(&sections, &state);
        let second = aggregate(&sections, &state);
        assert_eq!(first, second);
        assert_eq!(first.completed, 2);
    }

    #[test]
    fn test_false_entries_do_not_count() {
        let sections = stakes_30x30();
        let mut state = ChecklistState::new();
        state.set("towels", false);
        assert_eq!(aggregate(&sections, &state).completed, 0);
    }

    #[test]
    fn test_zero_total_is_zero_percent() {
        let progress = aggregate(&[], &ChecklistState::new());
        assert_eq!(progress, Progress::default());
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_incomplete_assembly_counts_nothing() {
        let mut state = ChecklistState::new();
        state.set("towels", true);
        assert_eq!(aggregate_assembly(&Assembly::Incomplete, &state), Progress::default());
    }

    #[test]
    fn test_section_check_completes_only_that_section() {
        let sections = stakes_30x30();
        let state =
            ChecklistState::new().with_section_checked(COMMON_EQUIPMENT_ID, true, &sections);

        let common = sections
            .iter()
            .find(|s| s.id == COMMON_EQUIPMENT_ID)
            .unwrap();
        let progress = section_progress(common, &state);
        assert_eq!(progress.total, 11);
        assert!(progress.is_complete());
        assert_eq!(progress.percentage, 100.0);

        let stakes = sections.iter().find(|s| s.id == STAKES_ID).unwrap();
        assert_eq!(section_progress(stakes, &state).completed, 0);
        assert_eq!(aggregate(&sections, &state).completed, 11);
    }

    #[test]
    fn test_section_status() {
        let sections = stakes_30x30();
        let stakes = sections.iter().find(|s| s.id == STAKES_ID).unwrap();

        let mut state = ChecklistState::new();
        assert_eq!(section_status(stakes, &state), SectionStatus::Unchecked);

        state.set("stake-caps", true);
        assert_eq!(
            section_status(stakes, &state),
            SectionStatus::Partial { checked: 1, total: 6 }
        );

        let state = state.with_section_checked(STAKES_ID, true, &sections);
        assert_eq!(section_status(stakes, &state), SectionStatus::AllDone);

        let empty = ChecklistSection::new("none", "None", vec![]);
        assert_eq!(section_status(&empty, &state), SectionStatus::Empty);
    }
}
