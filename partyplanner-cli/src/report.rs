//! Rendering of command results for the console and as JSON.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use partyplanner_core::constants::TRAITS_PER_MEMBER;
use partyplanner_core::{Notice, PartyPlanner, Status, ValidationError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Console,
    Json,
}

#[derive(Debug, Serialize)]
pub struct SlotSummary {
    pub member: usize,
    pub trait_slot: usize,
    pub uid: Option<String>,
    pub trait_name: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub notice: Notice,
    pub build_code: String,
    pub share_url: String,
    pub specialization: Option<String>,
    pub anointment_limit: usize,
    pub anointments: Vec<String>,
    pub slots: Vec<SlotSummary>,
}

impl BuildSummary {
    #[must_use]
    pub fn from_planner(planner: &PartyPlanner, base_url: &str) -> Self {
        let slots = planner
            .party()
            .slots()
            .map(|(pos, slot)| SlotSummary {
                member: pos.member,
                trait_slot: pos.trait_slot,
                uid: slot.uid().map(str::to_string),
                trait_name: slot.monster.as_ref().map(|m| m.trait_name.clone()),
                error: slot.error.clone(),
            })
            .collect();
        Self {
            notice: planner.notice().clone(),
            build_code: planner.build_code().to_string(),
            share_url: planner.share_url(base_url),
            specialization: planner.specialization().map(|s| s.name.clone()),
            anointment_limit: planner.anointment_limit(),
            anointments: planner.anointments().iter().map(|p| p.name.clone()).collect(),
            slots,
        }
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        self.notice.status == Status::Error
    }
}

fn status_label(status: Status) -> colored::ColoredString {
    match status {
        Status::None => "none".normal(),
        Status::Success => "success".green().bold(),
        Status::Warning => "warning".yellow().bold(),
        Status::Error => "error".red().bold(),
    }
}

/// # Errors
/// Returns an error if writing fails.
pub fn write_build(out: &mut dyn Write, summary: &BuildSummary, format: Format) -> Result<()> {
    if format == Format::Json {
        serde_json::to_writer_pretty(&mut *out, summary)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(
        out,
        "Status: {} {}",
        status_label(summary.notice.status),
        summary.notice.message
    )?;
    writeln!(
        out,
        "Specialization: {}",
        summary.specialization.as_deref().unwrap_or("-")
    )?;
    writeln!(
        out,
        "Anointments ({}/{}): {}",
        summary.anointments.len(),
        summary.anointment_limit,
        if summary.anointments.is_empty() {
            "-".to_string()
        } else {
            summary.anointments.join(", ")
        }
    )?;
    for member in summary.slots.chunks(TRAITS_PER_MEMBER) {
        let cells: Vec<String> = member
            .iter()
            .map(|slot| match (&slot.trait_name, &slot.error) {
                (Some(name), _) => name.clone(),
                (None, Some(_)) => "?".red().to_string(),
                (None, None) => "-".to_string(),
            })
            .collect();
        writeln!(
            out,
            "  Creature {}: {}",
            member[0].member + 1,
            cells.join(" / ")
        )?;
    }
    writeln!(out, "Build: {}", summary.build_code)?;
    writeln!(out, "Share: {}", summary.share_url.cyan())?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct DataSummary {
    pub monsters: usize,
    pub specializations: usize,
    pub anointments: usize,
    pub problems: Vec<String>,
}

impl DataSummary {
    #[must_use]
    pub fn new(
        monsters: usize,
        specializations: usize,
        anointments: usize,
        problems: &[ValidationError],
    ) -> Self {
        Self {
            monsters,
            specializations,
            anointments,
            problems: problems.iter().map(ToString::to_string).collect(),
        }
    }
}

/// # Errors
/// Returns an error if writing fails.
pub fn write_data_summary(out: &mut dyn Write, summary: &DataSummary, format: Format) -> Result<()> {
    if format == Format::Json {
        serde_json::to_writer_pretty(&mut *out, summary)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(
        out,
        "{} monsters, {} specializations, {} anointments",
        summary.monsters, summary.specializations, summary.anointments
    )?;
    if summary.problems.is_empty() {
        writeln!(out, "{}", "Reference data OK".green())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("{} problem(s) found:", summary.problems.len()).red().bold()
        )?;
        for problem in &summary.problems {
            writeln!(out, "  - {problem}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{FileDataLoader, default_data_dir};
    use partyplanner_core::PlannerEngine;

    fn engine() -> PlannerEngine {
        PlannerEngine::load(&FileDataLoader::new(default_data_dir())).unwrap()
    }

    #[test]
    fn json_summary_lists_all_slots() {
        let planner = engine().planner_from_query(&format!("b=An01{}&s=RY", "_".repeat(17)));
        let summary = BuildSummary::from_planner(&planner, "https://planner.example/");
        assert!(!summary.failed());
        let mut buf = Vec::new();
        write_build(&mut buf, &summary, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["slots"].as_array().unwrap().len(), 18);
        assert_eq!(value["slots"][0]["trait_name"], "Blood Frenzy");
        assert_eq!(value["specialization"], "Royal");
        assert_eq!(value["notice"]["status"], "success");
    }

    #[test]
    fn console_summary_shows_members_and_build() {
        colored::control::set_override(false);
        let planner = engine().planner_from_query(&format!("b=An01{}", "_".repeat(17)));
        let summary = BuildSummary::from_planner(&planner, "https://planner.example/");
        let mut buf = Vec::new();
        write_build(&mut buf, &summary, Format::Console).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Creature 1: Blood Frenzy / - / -"));
        assert!(text.contains("Creature 6: - / - / -"));
        assert!(text.contains("Share: https://planner.example/?b=An01"));
    }

    #[test]
    fn data_summary_lists_problems() {
        colored::control::set_override(false);
        let summary = DataSummary::new(1, 1, 0, &[ValidationError::MissingRoyal]);
        let mut buf = Vec::new();
        write_data_summary(&mut buf, &summary, Format::Console).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1 problem(s) found"));
        assert!(text.contains("no 'Royal' specialization"));
    }
}
