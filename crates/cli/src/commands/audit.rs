//! Module for the `audit` subcommand, which checks contract files for the
//! protections the patch pipeline is supposed to leave behind, without
//! modifying anything.

use crate::commands::PatchCliError;
use aegis_core::{ContractSource, detection};
use async_trait::async_trait;
use clap::Args;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static MOCK_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(mock|fake|test)\b").unwrap());

/// Arguments for the `audit` subcommand.
#[derive(Args)]
pub struct AuditArgs {
    /// Contract files to audit.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Path to emit the audit report as JSON (optional).
    #[arg(long)]
    emit: Option<PathBuf>,
}

/// One hardening check evaluated against a contract.
#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    name: &'static str,
    required: bool,
    passed: bool,
}

#[derive(Debug, Clone, Serialize)]
struct AuditFileReport {
    file: String,
    checks: Vec<CheckResult>,
    missing_required: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct AuditReport {
    files: Vec<AuditFileReport>,
}

/// Executes the `audit` subcommand.
#[async_trait]
impl super::Command for AuditArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let mut files = Vec::with_capacity(self.files.len());

        for path in &self.files {
            let disp = path.display().to_string();
            let report = match audit_file(path) {
                Ok(checks) => {
                    let missing_required =
                        checks.iter().filter(|c| c.required && !c.passed).count();
                    AuditFileReport {
                        file: disp,
                        checks,
                        missing_required,
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::warn!("{}: {e}", disp);
                    AuditFileReport {
                        file: disp,
                        checks: Vec::new(),
                        missing_required: 1,
                        error: Some(e.to_string()),
                    }
                }
            };
            files.push(report);
        }

        for file in &files {
            println!("{}:", file.file);
            for check in &file.checks {
                let mark = match (check.passed, check.required) {
                    (true, _) => "✅",
                    (false, true) => "❌",
                    (false, false) => "⚠️",
                };
                println!(
                    "  {mark} {}: {}",
                    check.name,
                    if check.passed { "ok" } else { "missing" }
                );
            }
            if let Some(error) = &file.error {
                println!("  ❌ {error}");
            }
        }

        let failing = files.iter().filter(|f| f.missing_required > 0).count();

        if let Some(path) = self.emit.as_ref() {
            let report = AuditReport { files };
            fs::write(path, serde_json::to_string_pretty(&report)?)?;
            println!("Wrote audit report to {}", path.display());
        }

        if failing > 0 {
            return Err(PatchCliError::AuditFailed(failing).into());
        }
        Ok(())
    }
}

/// Runs every hardening check against one contract file.
fn audit_file(path: &Path) -> aegis_core::Result<Vec<CheckResult>> {
    let src = ContractSource::load(path)?;
    let text = &src.text;

    let bases = detection::contract_header(text)
        .map(|h| h.bases)
        .unwrap_or_default();
    let functions = detection::function_declarations(text)?;
    let modifiers = detection::modifier_declarations(text)?;
    let events = detection::event_declarations(text)?;

    let has_base = |name: &str| bases.iter().any(|b| b == name);
    let tail_has = |needle: &str| functions.iter().any(|f| f.header_tail(text).contains(needle));

    let checks = vec![
        CheckResult {
            name: "reentrancy protection",
            required: true,
            passed: has_base("ReentrancyGuard")
                || tail_has("nonReentrant")
                || modifiers.iter().any(|m| m.name == "nonReentrant"),
        },
        CheckResult {
            name: "access control",
            required: true,
            passed: has_base("Ownable")
                || tail_has("onlyOwner")
                || modifiers.iter().any(|m| m.name == "onlyOwner"),
        },
        CheckResult {
            name: "input validation",
            required: true,
            passed: functions.iter().any(|f| f.name.starts_with("_validate")),
        },
        CheckResult {
            name: "audit events",
            required: true,
            passed: events
                .iter()
                .any(|e| e.name == "SecurityEvent" || e.name.starts_with("Access")),
        },
        CheckResult {
            name: "no mock data markers",
            required: false,
            passed: !MOCK_MARKERS.is_match(text),
        },
    ];

    Ok(checks)
}
