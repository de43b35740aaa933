//! Catalog Consistency Check
//!
//! Run once at startup. Assembles every size under every selection
//! combination and rejects duplicate ids or deeper-than-two nesting.

use std::collections::HashSet;

use crate::assembler::{assemble, Assembly};
use crate::domain::{BallastType, DomainError, DomainResult, Entity, Selections, TentSize, Toggle};

use super::checklist_for;

fn selection_grid() -> Vec<Selections> {
    let mut grid = Vec::new();
    for ballast in [BallastType::Stakes, BallastType::Concrete] {
        for walls in [Toggle::Yes, Toggle::No] {
            for lighting in [Toggle::Yes, Toggle::No] {
                grid.push(Selections::new(Some(ballast), Some(walls), Some(lighting)));
            }
        }
    }
    grid
}

fn find_duplicate<'a, T: Entity + 'a>(nodes: impl IntoIterator<Item = &'a T>) -> Option<String> {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.id()) {
            return Some(node.id().to_string());
        }
    }
    None
}

/// Check the whole catalog; the first violation is returned as an error
pub fn validate_catalog() -> DomainResult<()> {
    for size in TentSize::ALL {
        let checklist = checklist_for(size);
        if checklist.specific_sections.len() != 1 {
            return Err(DomainError::InvalidCatalog(format!(
                "{} has {} specific sections",
                size,
                checklist.specific_sections.len()
            )));
        }

        for selections in selection_grid() {
            let sections = match assemble(&checklist, &selections) {
                Assembly::Ready(sections) => sections,
                Assembly::Incomplete => {
                    return Err(DomainError::InvalidCatalog(format!(
                        "{} did not assemble with {:?}",
                        size, selections
                    )))
                }
            };

            if let Some(id) = find_duplicate(sections.iter()) {
                return Err(DomainError::InvalidCatalog(format!(
                    "{}: duplicate section id {}",
                    size, id
                )));
            }

            let flat: Vec<_> = sections.iter().flat_map(|s| s.flat_items()).collect();
            if let Some(id) = find_duplicate(flat.iter().copied()) {
                return Err(DomainError::InvalidCatalog(format!(
                    "{}: duplicate item id {}",
                    size, id
                )));
            }

            let too_deep = flat
                .iter()
                .flat_map(|item| item.sub_items.iter())
                .find(|sub| !sub.sub_items.is_empty());
            if let Some(sub) = too_deep {
                return Err(DomainError::InvalidCatalog(format!(
                    "{}: sub-item {} nests further",
                    size, sub.id
                )));
            }
        }
    }

    log::debug!("Catalog validated for {} sizes", TentSize::ALL.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::domain::ChecklistItem;
    use super::*;

    #[test]
    fn test_catalog_is_consistent() {
        validate_catalog().expect("catalog should validate");
    }

    #[test]
    fn test_find_duplicate() {
        let items = vec![
            ChecklistItem::new("a", "A"),
            ChecklistItem::new("b", "B"),
            ChecklistItem::new("a", "Again"),
        ];
        assert_eq!(find_duplicate(items.iter()), Some("a".to_string()));
        assert_eq!(find_duplicate(items[..2].iter()), None);
    }
}
