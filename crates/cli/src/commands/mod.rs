use async_trait::async_trait;
use clap::Subcommand;
use std::error::Error;

pub mod audit;
pub mod patch;
pub mod plan;

use thiserror::Error;

/// Errors that can occur while driving the patch pipeline from the CLI.
#[derive(Debug, Error)]
pub enum PatchCliError {
    /// File read/write error.
    #[error("file error: {0}")]
    File(#[from] std::io::Error),
    /// Transform or schedule failure.
    #[error("transform error: {0}")]
    Transform(#[from] aegis_transform::Error),
    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// One or more files failed to patch.
    #[error("patching failed on {0} file(s)")]
    FilesFailed(usize),
    /// One or more contracts are missing required protections.
    #[error("audit found missing protections in {0} contract(s)")]
    AuditFailed(usize),
}

/// CLI subcommands for Aegis.
#[derive(Subcommand)]
pub enum Cmd {
    /// Apply the security patch pipeline to contract files.
    Patch(patch::PatchArgs),
    /// Check contract files for the expected protections without modifying
    /// them.
    Audit(audit::AuditArgs),
    /// Print the linearized step schedule and its dependency edges.
    Plan(plan::PlanArgs),
}

/// Trait for executing CLI subcommands.
///
/// Implementors define the logic for processing the contract file list and
/// producing output (a patch run, an audit table, or a schedule listing).
#[async_trait]
pub trait Command {
    /// Executes the subcommand.
    ///
    /// # Returns
    /// A `Result` indicating success or an error if execution fails.
    async fn execute(self) -> Result<(), Box<dyn Error>>;
}

#[async_trait]
impl Command for Cmd {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        match self {
            Cmd::Patch(args) => args.execute().await,
            Cmd::Audit(args) => args.execute().await,
            Cmd::Plan(args) => args.execute().await,
        }
    }
}
