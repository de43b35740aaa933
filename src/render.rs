//! Text Rendering
//!
//! Plain-text views of the checklist, progress bar and size picker.

use std::fmt::Write;

use tent_checklist_lib::{
    Assembly, ChecklistItem, ChecklistSection, ChecklistSession, ChecklistState, Progress,
    SectionStatus, Selections, TentSize,
};

const BAR_WIDTH: usize = 30;

pub const BALLAST_PROMPT: &str =
    "Please select a ballast type (Stakes or Concrete) to view the checklist.";

pub fn invalid_size(size: &str) -> String {
    format!("Invalid tent size: \"{}\" is not available.", size)
}

/// Size picker; sizes with saved progress are marked
pub fn sizes(all: &[TentSize], in_progress: &[TentSize]) -> String {
    let mut out = String::from("Tent sizes:\n");
    for size in all {
        let marker = if in_progress.contains(size) { "  (in progress)" } else { "" };
        let _ = writeln!(out, "  {:<7} Frame Tent{}", size.as_str(), marker);
    }
    out
}

pub fn progress_bar(progress: &Progress) -> String {
    let filled = (progress.percentage / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let mut out = format!(
        "[{}{}] {} / {} items ({:.0}%)",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        progress.completed,
        progress.total,
        progress.percentage
    );
    if progress.is_complete() {
        out.push_str("  100% Complete");
    }
    out
}

fn status_label(status: SectionStatus) -> String {
    match status {
        SectionStatus::AllDone => "All done".to_string(),
        SectionStatus::Partial { checked, total } => format!("{}/{}", checked, total),
        SectionStatus::Unchecked | SectionStatus::Empty => "Check all".to_string(),
    }
}

fn item_line(out: &mut String, item: &ChecklistItem, state: &ChecklistState, indent: usize) {
    let mark = if state.is_checked(&item.id) { 'x' } else { ' ' };
    let _ = write!(out, "{:indent$}[{}] {}", "", mark, item.name, indent = indent);
    if let Some(note) = &item.note {
        let _ = write!(out, "  {}", note);
    }
    let _ = writeln!(out, "  <{}>", item.id);
}

pub fn section(
    section: &ChecklistSection,
    status: SectionStatus,
    state: &ChecklistState,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==  [{}]  <{}>", section.title, status_label(status), section.id);
    for item in &section.items {
        item_line(&mut out, item, state, 2);
        for sub in &item.sub_items {
            item_line(&mut out, sub, state, 6);
        }
    }
    out
}

pub fn selections(selections: &Selections) -> String {
    fn show<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
    }
    format!(
        "Ballast: {}   Walls: {}   Lighting: {}",
        show(selections.ballast_type),
        show(selections.walls_option),
        show(selections.lighting_option)
    )
}

/// Full checklist page for a session
pub fn checklist(session: &ChecklistSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} Frame Tent", session.size());
    let _ = writeln!(out, "{}", selections(session.selections()));

    match session.assembly() {
        Assembly::Incomplete => {
            let _ = writeln!(out, "\n{}", BALLAST_PROMPT);
        }
        Assembly::Ready(sections) => {
            let _ = writeln!(out, "{}", progress_bar(&session.progress()));
            for s in sections {
                let status = session.section_status(&s.id).unwrap_or(SectionStatus::Empty);
                let _ = write!(out, "\n{}", section(s, status, session.state()));
            }
        }
    }
    out
}
