use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use serde::Serialize;
use tracing::{info, info_span, warn};

use appform_model::{FieldId, ValidationReport};
use appform_validate::{Validator, base_validators};

use appform_cli::replay::{FormEvent, replay};

use crate::cli::ReplayArgs;
use crate::summary::apply_table_style;
use crate::types::{FieldRow, ReplayResult};

const REPORT_SCHEMA: &str = "appform.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        "Field",
        "Label",
        "Always-on validators",
        "Conditional source",
    ]);
    apply_table_style(&mut table);
    for field in FieldId::ALL {
        let base = base_validators(field);
        let validators = if base.is_empty() {
            "-".to_string()
        } else {
            base.iter()
                .map(Validator::describe)
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            field.as_str().to_string(),
            field.label().to_string(),
            validators,
            conditional_source(field).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn conditional_source(field: FieldId) -> &'static str {
    match field {
        FieldId::ExpertiseLevel => "trigger (tier binder)",
        FieldId::IsJobSearching => "trigger (toggle binder)",
        FieldId::CalculationResult => "tier = junior",
        FieldId::Description => "tier = mid",
        FieldId::CoverLetter => "job searching = false",
        FieldId::FirstName | FieldId::LastName | FieldId::Email => "-",
    }
}

pub fn run_replay(args: &ReplayArgs) -> Result<ReplayResult> {
    let replay_span = info_span!("replay", script = %args.events_file.display());
    let _replay_guard = replay_span.enter();

    let raw = fs::read_to_string(&args.events_file)
        .with_context(|| format!("read events file {}", args.events_file.display()))?;
    let events: Vec<FormEvent> = serde_json::from_str(&raw)
        .with_context(|| format!("parse events file {}", args.events_file.display()))?;
    info!(events = events.len(), "replaying form events");

    let outcome = replay(&events);
    let report = outcome.form.report();
    info!(
        valid = outcome.form.is_valid(),
        issues = report.error_count(),
        "replay finished"
    );

    let mut report_path = None;
    if let Some(path) = &args.report {
        write_report_json(path, &report, outcome.form.is_valid())?;
        report_path = Some(path.clone());
    }

    let mut submission_path = None;
    if let Some(path) = &args.output {
        match &outcome.submission {
            Some(snapshot) => {
                let json = serde_json::to_string_pretty(snapshot).context("serialize submission")?;
                fs::write(path, format!("{json}\n"))
                    .with_context(|| format!("write submission {}", path.display()))?;
                submission_path = Some(path.clone());
            }
            None => warn!(
                "no submission captured, skipping {}",
                path.display()
            ),
        }
    }

    let rows = field_rows(&outcome.form);
    let has_errors = report.has_errors() || outcome.submits_rejected > 0;
    Ok(ReplayResult {
        events_applied: outcome.events_applied,
        submits_attempted: outcome.submits_attempted,
        submits_rejected: outcome.submits_rejected,
        report,
        rows,
        submission: outcome.submission,
        report_path,
        submission_path,
        has_errors,
    })
}

fn field_rows(form: &appform_validate::ApplicationForm) -> Vec<FieldRow> {
    FieldId::ALL
        .iter()
        .map(|&field| {
            let installed = form.validators(field);
            let validators = if installed.is_empty() {
                "-".to_string()
            } else {
                installed
                    .iter()
                    .map(Validator::describe)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            FieldRow {
                field: field.as_str(),
                value: form.value(field).to_string(),
                validators,
                error_count: form.errors(field).len(),
                message: form.message(field),
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    valid: bool,
    report: &'a ValidationReport,
}

fn write_report_json(path: &Path, report: &ValidationReport, valid: bool) -> Result<()> {
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        valid,
        report,
    };
    let json = serde_json::to_string_pretty(&payload).context("serialize validation report")?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write validation report {}", path.display()))?;
    Ok(())
}
