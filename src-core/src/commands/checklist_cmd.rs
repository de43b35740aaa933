//! Checklist Session Commands
//!
//! The explicit state object the presentation layer drives. It owns the
//! current selections and checkmarks for one size and writes every change
//! back through the repository.

use crate::assembler::{assemble, Assembly};
use crate::catalog::{checklist_for, TentChecklist};
use crate::domain::{
    BallastType, ChecklistState, DomainError, DomainResult, Selections, TentSize, Toggle,
};
use crate::progress::{aggregate_assembly, section_status, Progress, SectionStatus};
use crate::repository::ChecklistRepository;

pub struct ChecklistSession {
    repo: ChecklistRepository,
    checklist: TentChecklist,
    selections: Selections,
    state: ChecklistState,
    assembly: Assembly,
}

impl ChecklistSession {
    /// Open the checklist for a size string, restoring saved progress
    pub fn open(repo: ChecklistRepository, size: &str) -> DomainResult<Self> {
        let size: TentSize = size.parse()?;
        Ok(Self::open_size(repo, size))
    }

    pub fn open_size(repo: ChecklistRepository, size: TentSize) -> Self {
        let checklist = checklist_for(size);
        let selections = repo.load_selections(size);
        let state = repo.load_state(size);
        let assembly = assemble(&checklist, &selections);
        log::debug!(
            "Opened {} with {:?}, {} saved checkmarks",
            size,
            selections,
            state.len()
        );
        Self {
            repo,
            checklist,
            selections,
            state,
            assembly,
        }
    }

    pub fn size(&self) -> TentSize {
        self.checklist.size
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    pub fn progress(&self) -> Progress {
        aggregate_assembly(&self.assembly, &self.state)
    }

    pub fn section_status(&self, section_id: &str) -> Option<SectionStatus> {
        self.assembly
            .section(section_id)
            .map(|section| section_status(section, &self.state))
    }

    // ========================
    // Checkmarks
    // ========================

    /// Check or uncheck one row of the assembled checklist
    pub fn set_item_checked(&mut self, item_id: &str, checked: bool) -> DomainResult<()> {
        if !self.assembly.contains_item(item_id) {
            return Err(DomainError::ItemNotFound(item_id.to_string()));
        }
        self.state.set(item_id, checked);
        self.persist_state();
        Ok(())
    }

    /// Flip one row; returns the new value
    pub fn toggle_item(&mut self, item_id: &str) -> DomainResult<bool> {
        let checked = !self.state.is_checked(item_id);
        self.set_item_checked(item_id, checked)?;
        Ok(checked)
    }

    /// Check or uncheck every row of a section. Unknown ids do nothing.
    pub fn set_section_checked(&mut self, section_id: &str, checked: bool) {
        if self.assembly.section(section_id).is_none() {
            log::debug!("Section {} not shown for {}", section_id, self.size());
            return;
        }
        self.state = self
            .state
            .with_section_checked(section_id, checked, self.assembly.sections());
        self.persist_state();
    }

    // ========================
    // Selections
    // ========================

    pub fn set_ballast_type(&mut self, ballast: BallastType) {
        self.selections.ballast_type = Some(ballast);
        self.repo.save_ballast_type(self.size(), ballast);
        self.reassemble();
    }

    pub fn set_walls(&mut self, option: Toggle) {
        self.selections.walls_option = Some(option);
        self.repo.save_walls_option(self.size(), option);
        self.reassemble();
    }

    pub fn set_lighting(&mut self, option: Toggle) {
        self.selections.lighting_option = Some(option);
        self.repo.save_lighting_option(self.size(), option);
        self.reassemble();
    }

    /// Clear checkmarks and all three selections for this size
    pub fn reset(&mut self) {
        self.repo.reset(self.size());
        self.state = ChecklistState::default();
        self.selections = Selections::default();
        self.reassemble();
    }

    fn reassemble(&mut self) {
        self.assembly = assemble(&self.checklist, &self.selections);
    }

    fn persist_state(&self) {
        self.repo.save_state(self.size(), &self.state);
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{COMMON_EQUIPMENT_ID, LIGHTING_ID, STAKES_ID, WALLS_ID};
    use crate::repository::MemoryStorage;
    use std::sync::Arc;
    use super::*;

    fn repo() -> ChecklistRepository {
        ChecklistRepository::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_open_unknown_size() {
        match ChecklistSession::open(repo(), "25x25") {
            Err(DomainError::UnknownSize(size)) => assert_eq!(size, "25x25"),
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("unknown size should not open"),
        }
    }

    #[test]
    fn test_incomplete_until_ballast_chosen() {
        let mut session = ChecklistSession::open(repo(), "30x30").unwrap();
        assert!(!session.assembly().is_ready());
        assert_eq!(session.progress(), Progress::default());
        assert!(matches!(
            session.set_item_checked("towels", true),
            Err(DomainError::ItemNotFound(_))
        ));

        session.set_ballast_type(BallastType::Stakes);
        assert!(session.assembly().is_ready());
        assert_eq!(session.progress().total, 29);
    }

    #[test]
    fn test_checkmarks_survive_reopen() {
        let repo = repo();
        {
            let mut session = ChecklistSession::open(repo.clone(), "30x45").unwrap();
            session.set_ballast_type(BallastType::Concrete);
            session.set_item_checked("concrete-max", true).unwrap();
            assert!(session.toggle_item("towels").unwrap());
        }

        let session = ChecklistSession::open(repo, "30x45").unwrap();
        assert_eq!(session.selections().ballast_type, Some(BallastType::Concrete));
        assert!(session.state().is_checked("concrete-max"));
        assert!(session.state().is_checked("towels"));
        assert_eq!(session.progress().completed, 2);
    }

    #[test]
    fn test_section_check_all_includes_option_sections() {
        let mut session = ChecklistSession::open(repo(), "40x60").unwrap();
        session.set_ballast_type(BallastType::Stakes);
        session.set_walls(Toggle::Yes);
        session.set_lighting(Toggle::Yes);

        session.set_section_checked(LIGHTING_ID, true);
        assert_eq!(session.section_status(LIGHTING_ID), Some(SectionStatus::AllDone));
        assert_eq!(session.section_status(WALLS_ID), Some(SectionStatus::Unchecked));
        assert_eq!(session.progress().completed, 8);

        session.set_section_checked("no-such-section", true);
        assert_eq!(session.progress().completed, 8);
    }

    #[test]
    fn test_switching_ballast_changes_counted_rows() {
        let mut session = ChecklistSession::open(repo(), "30x30").unwrap();
        session.set_ballast_type(BallastType::Stakes);
        session.set_section_checked(STAKES_ID, true);
        assert_eq!(session.progress().completed, 6);

        session.set_ballast_type(BallastType::Concrete);
        assert_eq!(session.progress().completed, 0);
        assert_eq!(session.section_status(STAKES_ID), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let repo = repo();
        let mut session = ChecklistSession::open(repo.clone(), "30x60").unwrap();
        session.set_ballast_type(BallastType::Stakes);
        session.set_walls(Toggle::Yes);
        session.set_lighting(Toggle::No);
        session.set_section_checked(COMMON_EQUIPMENT_ID, true);

        session.reset();

        assert!(!session.assembly().is_ready());
        assert!(session.state().is_empty());
        assert_eq!(*session.selections(), Selections::default());

        let reopened = ChecklistSession::open(repo, "30x60").unwrap();
        assert!(reopened.state().is_empty());
        assert_eq!(*reopened.selections(), Selections::default());
    }
}
