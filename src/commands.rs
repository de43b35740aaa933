//! Command Handlers
//!
//! One function per CLI subcommand. Each opens a session for the
//! requested size and calls into the core only through its operations.

use anyhow::Result;
use serde::Serialize;

use tent_checklist_lib::{
    all_sizes, Assembly, BallastType, ChecklistRepository, ChecklistSession, ChecklistState,
    Progress, Selections, TentSize, Toggle,
};

use crate::render;

#[derive(Serialize)]
struct ChecklistView<'a> {
    size: TentSize,
    selections: &'a Selections,
    assembly: &'a Assembly,
    state: &'a ChecklistState,
    progress: Progress,
}

#[derive(Serialize)]
struct ProgressView {
    size: TentSize,
    ready: bool,
    #[serde(flatten)]
    progress: Progress,
}

pub fn list_sizes(repo: &ChecklistRepository) -> Result<String> {
    Ok(render::sizes(&all_sizes(), &repo.sizes_with_saved_state()))
}

pub fn show(repo: &ChecklistRepository, size: &str, json: bool) -> Result<String> {
    let session = ChecklistSession::open(repo.clone(), size)?;
    if json {
        let view = ChecklistView {
            size: session.size(),
            selections: session.selections(),
            assembly: session.assembly(),
            state: session.state(),
            progress: session.progress(),
        };
        return Ok(serde_json::to_string_pretty(&view)?);
    }
    Ok(render::checklist(&session))
}

pub fn progress(repo: &ChecklistRepository, size: &str, json: bool) -> Result<String> {
    let session = ChecklistSession::open(repo.clone(), size)?;
    if json {
        let view = ProgressView {
            size: session.size(),
            ready: session.assembly().is_ready(),
            progress: session.progress(),
        };
        return Ok(serde_json::to_string_pretty(&view)?);
    }
    if !session.assembly().is_ready() {
        return Ok(render::BALLAST_PROMPT.to_string());
    }
    Ok(render::progress_bar(&session.progress()))
}

pub fn set_item(
    repo: &ChecklistRepository,
    size: &str,
    item_id: &str,
    checked: bool,
) -> Result<String> {
    let mut session = ChecklistSession::open(repo.clone(), size)?;
    if !session.assembly().is_ready() {
        return Ok(render::BALLAST_PROMPT.to_string());
    }
    session.set_item_checked(item_id, checked)?;
    log::info!("{} {} on {}", if checked { "Checked" } else { "Unchecked" }, item_id, size);
    Ok(render::progress_bar(&session.progress()))
}

pub fn set_section(
    repo: &ChecklistRepository,
    size: &str,
    section_id: &str,
    checked: bool,
) -> Result<String> {
    let mut session = ChecklistSession::open(repo.clone(), size)?;
    if !session.assembly().is_ready() {
        return Ok(render::BALLAST_PROMPT.to_string());
    }
    session.set_section_checked(section_id, checked);
    Ok(render::progress_bar(&session.progress()))
}

pub fn set_ballast(repo: &ChecklistRepository, size: &str, ballast: BallastType) -> Result<String> {
    let mut session = ChecklistSession::open(repo.clone(), size)?;
    session.set_ballast_type(ballast);
    log::info!("Ballast for {} set to {}", size, ballast);
    Ok(render::checklist(&session))
}

pub fn set_walls(repo: &ChecklistRepository, size: &str, option: Toggle) -> Result<String> {
    let mut session = ChecklistSession::open(repo.clone(), size)?;
    session.set_walls(option);
    Ok(render::selections(session.selections()))
}

pub fn set_lighting(repo: &ChecklistRepository, size: &str, option: Toggle) -> Result<String> {
    let mut session = ChecklistSession::open(repo.clone(), size)?;
    session.set_lighting(option);
    Ok(render::selections(session.selections()))
}

pub fn reset(repo: &ChecklistRepository, size: &str, confirmed: bool) -> Result<String> {
    let mut session = ChecklistSession::open(repo.clone(), size)?;
    if !confirmed {
        return Ok(format!(
            "This will reset all checkmarks, ballast type, walls, and lighting for {}. \
             Re-run with --yes to confirm.",
            session.size()
        ));
    }
    session.reset();
    Ok(format!("Reset checklist for {}.", session.size()))
}

pub fn recent_logs() -> Result<String> {
    let mut lines = rolling_logger::recent_lines();
    if let Some(path) = rolling_logger::log_file() {
        lines.insert(0, format!("# {}", path.display()));
    }
    Ok(lines.join("\n"))
}
