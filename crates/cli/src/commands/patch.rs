//! Module for the `patch` subcommand, which applies the security patch
//! pipeline to Solidity contract files.
//!
//! This module resolves the requested steps into a valid schedule and uses
//! the pipeline driver from `aegis-transform` to patch each file, printing
//! a per-file, per-step status report.

use crate::commands::PatchCliError;
use aegis_transform::audit_events::AuditEvents;
use aegis_transform::critical_functions::CriticalFunctions;
use aegis_transform::owner_references::OwnerReferences;
use aegis_transform::patcher::{self, PatchConfig};
use aegis_transform::pause_functions::PauseFunctions;
use aegis_transform::remove_duplicates::RemoveDuplicates;
use aegis_transform::security_mixins::SecurityMixins;
use aegis_transform::validation_helpers::ValidationHelpers;
use aegis_transform::{StepId, Transform};
use async_trait::async_trait;
use clap::Args;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Arguments for the `patch` subcommand.
#[derive(Args)]
pub struct PatchArgs {
    /// Contract files to patch, processed in the given order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Comma-separated list of steps to run (default: all). The steps are
    /// rearranged into dependency order before anything runs.
    #[arg(long, default_value = "all")]
    steps: String,
    /// Abort remaining files on the first file-level failure.
    #[arg(long)]
    fail_fast: bool,
    /// Compute and report changes without writing anything back.
    #[arg(long)]
    dry_run: bool,
    /// Path to emit the run report as JSON (optional).
    #[arg(long)]
    emit: Option<PathBuf>,
}

/// Executes the `patch` subcommand using the pipeline driver.
#[async_trait]
impl super::Command for PatchArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let steps = build_steps(&self.steps)?;

        let mut config = PatchConfig::new(steps);
        config.fail_fast = self.fail_fast;
        config.dry_run = self.dry_run;

        let report = patcher::patch_files(&self.files, config)?;
        patcher::print_patch_summary(&report);

        if let Some(path) = self.emit.as_ref() {
            fs::write(path, serde_json::to_string_pretty(&report)?)?;
            println!("Wrote patch report to {}", path.display());
        }

        if report.failed() {
            return Err(PatchCliError::FilesFailed(report.summary.files_failed).into());
        }
        Ok(())
    }
}

/// Builds a list of transform steps from a comma-separated string.
pub(crate) fn build_steps(list: &str) -> Result<Vec<Box<dyn Transform>>, Box<dyn Error>> {
    if list.trim() == "all" {
        return Ok(StepId::ALL.into_iter().map(step_for).collect());
    }
    list.split(',')
        .filter(|s| !s.is_empty())
        .map(|name| Ok(step_for(name.trim().parse::<StepId>()?)))
        .collect()
}

/// Constructs the transform implementing a step.
pub(crate) fn step_for(id: StepId) -> Box<dyn Transform> {
    match id {
        StepId::RemoveDuplicates => Box::new(RemoveDuplicates),
        StepId::AddSecurityMixins => Box::new(SecurityMixins),
        StepId::AddAuditEvents => Box::new(AuditEvents),
        StepId::AddPauseFunctions => Box::new(PauseFunctions),
        StepId::AddValidationHelpers => Box::new(ValidationHelpers),
        StepId::FixOwnerReferences => Box::new(OwnerReferences),
        StepId::TagCriticalFunctions => Box::new(CriticalFunctions),
    }
}
