//! Pipeline driver: computes a valid schedule, applies it to an ordered
//! list of contract files, and collects a per-file, per-step report.

use crate::pass::{DefaultPass, Pass};
use crate::schedule;
use crate::{Outcome, Result, StepId, Transform};
use aegis_core::load_contract;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for the patch pipeline
pub struct PatchConfig {
    /// Steps to apply; rearranged into a valid schedule before any file is
    /// touched.
    pub steps: Vec<Box<dyn Transform>>,
    /// Abort remaining files after the first file-level failure instead of
    /// collecting a full report.
    pub fail_fast: bool,
    /// Compute and report changes without writing anything back.
    pub dry_run: bool,
}

impl PatchConfig {
    /// Create config over the given steps with best-effort defaults.
    pub fn new(steps: Vec<Box<dyn Transform>>) -> Self {
        Self {
            steps,
            fail_fast: false,
            dry_run: false,
        }
    }
}

impl std::fmt::Debug for PatchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatchConfig")
            .field("steps", &format!("{} steps", self.steps.len()))
            .field("fail_fast", &self.fail_fast)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

/// Status of one file after the pipeline ran over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// At least one step mutated the file.
    Patched,
    /// Every step was already satisfied or not applicable.
    Unchanged,
    /// The file does not exist on disk.
    Skipped,
    /// Reading, scanning, or writing the file failed.
    Failed,
}

/// Per-step record in a file report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: StepId,
    pub outcome: Outcome,
}

/// Per-file record in the pipeline report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub status: FileStatus,
    pub steps: Vec<StepRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate counts for the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchSummary {
    pub files_patched: usize,
    pub files_unchanged: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub steps_applied: usize,
    pub steps_already_applied: usize,
    pub steps_not_applicable: usize,
}

/// Result of one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    /// The linear schedule the steps actually ran in.
    pub schedule: Vec<StepId>,
    pub files: Vec<FileReport>,
    pub summary: PatchSummary,
}

impl PatchReport {
    /// Returns true if any file failed outright.
    pub fn failed(&self) -> bool {
        self.summary.files_failed > 0
    }
}

/// Main patch pipeline.
///
/// Files are processed independently and in order; a missing file is
/// skipped with a warning and never aborts the batch. Each changed file is
/// persisted once, atomically, after all of its steps ran.
pub fn patch_files(paths: &[PathBuf], config: PatchConfig) -> Result<PatchReport> {
    let PatchConfig {
        steps,
        fail_fast,
        dry_run,
    } = config;

    let ids: Vec<StepId> = steps.iter().map(|s| s.id()).collect();
    let order = schedule::linearize(&ids)?;
    tracing::debug!(
        "schedule: {:?}",
        order.iter().map(|s| s.as_str()).collect::<Vec<_>>()
    );

    // rearrange the boxed steps into schedule order
    let mut pool: Vec<Option<Box<dyn Transform>>> = steps.into_iter().map(Some).collect();
    let scheduled: Vec<Box<dyn Transform>> = order
        .iter()
        .filter_map(|id| {
            pool.iter_mut()
                .find(|slot| slot.as_ref().is_some_and(|s| s.id() == *id))
                .and_then(|slot| slot.take())
        })
        .collect();

    let mut files = Vec::with_capacity(paths.len());
    let mut summary = PatchSummary::default();

    for path in paths {
        let disp = path.display().to_string();
        if !path.exists() {
            tracing::warn!("{} not found, skipping", disp);
            summary.files_skipped += 1;
            files.push(FileReport {
                file: disp,
                status: FileStatus::Skipped,
                steps: Vec::new(),
                error: None,
            });
            continue;
        }

        info!("patching {}", disp);
        let report = patch_one(path, &scheduled, dry_run);

        match report.status {
            FileStatus::Patched => summary.files_patched += 1,
            FileStatus::Unchanged => summary.files_unchanged += 1,
            FileStatus::Skipped => summary.files_skipped += 1,
            FileStatus::Failed => summary.files_failed += 1,
        }
        for record in &report.steps {
            match record.outcome {
                Outcome::Applied => summary.steps_applied += 1,
                Outcome::AlreadyApplied => summary.steps_already_applied += 1,
                Outcome::NotApplicable { .. } => summary.steps_not_applicable += 1,
            }
        }

        let failed = report.status == FileStatus::Failed;
        files.push(report);
        if failed && fail_fast {
            tracing::warn!("aborting remaining files (fail-fast)");
            break;
        }
    }

    Ok(PatchReport {
        schedule: order,
        files,
        summary,
    })
}

/// Applies the scheduled steps to a single file.
///
/// Step-level errors never propagate past the file: they are recorded in
/// the report, the buffer is discarded unwritten, and the batch moves on.
fn patch_one(path: &Path, steps: &[Box<dyn Transform>], dry_run: bool) -> FileReport {
    let disp = path.display().to_string();

    let mut src = match load_contract(path) {
        Ok(src) => src,
        Err(e) => {
            tracing::error!("{}: {e}", disp);
            return FileReport {
                file: disp,
                status: FileStatus::Failed,
                steps: Vec::new(),
                error: Some(e.to_string()),
            };
        }
    };

    let outcomes = match DefaultPass.run(&mut src, steps) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            tracing::error!("{}: {e}", disp);
            return FileReport {
                file: disp,
                status: FileStatus::Failed,
                steps: Vec::new(),
                error: Some(e.to_string()),
            };
        }
    };

    let steps: Vec<StepRecord> = outcomes
        .into_iter()
        .map(|(step, outcome)| StepRecord { step, outcome })
        .collect();
    let changed = steps.iter().any(|r| r.outcome == Outcome::Applied);

    if changed && !dry_run {
        if let Err(e) = src.persist() {
            tracing::error!("{}: {e}", disp);
            return FileReport {
                file: disp,
                status: FileStatus::Failed,
                steps,
                error: Some(e.to_string()),
            };
        }
    }

    FileReport {
        file: disp,
        status: if changed {
            FileStatus::Patched
        } else {
            FileStatus::Unchanged
        },
        steps,
        error: None,
    }
}

/// Prints a human-readable summary of a pipeline run.
pub fn print_patch_summary(report: &PatchReport) {
    let schedule: Vec<&str> = report.schedule.iter().map(|s| s.as_str()).collect();
    println!("Schedule: {}", schedule.join(" -> "));
    println!();

    for file in &report.files {
        let status = match file.status {
            FileStatus::Patched => "patched",
            FileStatus::Unchanged => "unchanged",
            FileStatus::Skipped => "skipped (not found)",
            FileStatus::Failed => "FAILED",
        };
        println!("{}: {status}", file.file);
        for record in &file.steps {
            println!("  {:>24} {}", record.step.as_str(), record.outcome);
        }
        if let Some(error) = &file.error {
            println!("  error: {error}");
        }
    }

    let s = &report.summary;
    println!();
    println!(
        "{} patched, {} unchanged, {} skipped, {} failed",
        s.files_patched, s.files_unchanged, s.files_skipped, s.files_failed
    );
    println!(
        "steps: {} applied, {} already applied, {} not applicable",
        s.steps_applied, s.steps_already_applied, s.steps_not_applicable
    );
}
