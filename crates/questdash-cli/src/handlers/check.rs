//! Payload inspection: the same load/validate path as `show`, plus
//! per-record advisories for the asymmetries the renderer tolerates
//! silently. Advisories never fail the check; only the envelope can.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use questdash_types::{DashboardPayload, QuestStatus, STATUS_ORDER};

use crate::args::OutputFormat;
use crate::loader::load_dashboard;

#[derive(Debug, Serialize)]
struct CheckReport {
    quest_count: usize,
    summary_total: u64,
    by_status: Vec<StatusCount>,
    advisories: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StatusCount {
    status: &'static str,
    summary: u64,
    observed: u64,
}

pub fn handle(data_path: &Path, format: OutputFormat) -> Result<()> {
    let payload = match load_dashboard(data_path) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{}", err.banner_message());
            std::process::exit(1);
        }
    };

    let report = build_report(&payload);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print_report(&report),
    }

    Ok(())
}

fn build_report(payload: &DashboardPayload) -> CheckReport {
    let by_status = STATUS_ORDER
        .iter()
        .map(|status| StatusCount {
            status: status.as_str(),
            summary: payload.summary.count(*status),
            observed: payload
                .quests
                .iter()
                .filter(|q| q.status == *status)
                .count() as u64,
        })
        .collect();

    let mut advisories = Vec::new();

    if payload.summary.total != payload.quests.len() as u64 {
        advisories.push(format!(
            "summary.total is {} but {} quest records are present",
            payload.summary.total,
            payload.quests.len()
        ));
    }

    for (index, quest) in payload.quests.iter().enumerate() {
        let name = quest
            .title
            .as_deref()
            .or(quest.slug.as_deref())
            .or(quest.quest_id.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("record #{}", index));

        if quest.quest_id.is_none() {
            advisories.push(format!("{}: missing quest_id", name));
        }
        if quest.title.is_none() {
            advisories.push(format!("{}: missing title", name));
        }
        if quest.status == QuestStatus::Unknown {
            advisories.push(format!("{}: unrecognized status", name));
        }
        if quest.status == QuestStatus::Finished && quest.completed_date.is_none() {
            advisories.push(format!("{}: finished without a completed_date", name));
        }
    }

    CheckReport {
        quest_count: payload.quests.len(),
        summary_total: payload.summary.total,
        by_status,
        advisories,
    }
}

fn print_report(report: &CheckReport) {
    println!("Envelope OK");
    println!(
        "{} quest records (summary.total = {})",
        report.quest_count, report.summary_total
    );
    println!();
    println!("{:<14} {:>8} {:>10}", "STATUS", "SUMMARY", "OBSERVED");
    for count in &report.by_status {
        println!(
            "{:<14} {:>8} {:>10}",
            count.status, count.summary, count.observed
        );
    }

    if report.advisories.is_empty() {
        println!("\nNo advisories.");
    } else {
        println!("\nAdvisories:");
        for advisory in &report.advisories {
            println!("  - {}", advisory);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_advisories_flag_tolerated_defects() {
        let payload = DashboardPayload::from_value(&json!({
            "summary": { "total": 3, "by_status": { "finished": 1 } },
            "quests": [
                { "title": "ok", "quest_id": "q-1", "status": "finished",
                  "completed_date": "2024-01-01" },
                { "title": "undated", "quest_id": "q-2", "status": "finished" },
                { "slug": "odd", "status": "weird" }
            ]
        }))
        .unwrap();

        let report = build_report(&payload);
        assert_eq!(report.quest_count, 3);
        assert!(report
            .advisories
            .iter()
            .any(|a| a.contains("finished without a completed_date")));
        assert!(report
            .advisories
            .iter()
            .any(|a| a.contains("unrecognized status")));
        assert!(report.advisories.iter().any(|a| a.contains("missing quest_id")));
    }

    #[test]
    fn test_clean_payload_has_no_advisories() {
        let payload = DashboardPayload::from_value(&json!({
            "summary": { "total": 1, "by_status": { "finished": 1 } },
            "quests": [
                { "title": "ok", "quest_id": "q-1", "status": "finished",
                  "completed_date": "2024-01-01" }
            ]
        }))
        .unwrap();

        let report = build_report(&payload);
        assert!(report.advisories.is_empty());
    }
}
