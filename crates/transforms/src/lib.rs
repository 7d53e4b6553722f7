pub mod audit_events;
pub mod critical_functions;
pub mod owner_references;
pub mod pass;
pub mod patcher;
pub mod pause_functions;
pub mod remove_duplicates;
pub mod schedule;
pub mod security_mixins;
pub mod snippets;
pub mod validation_helpers;

use aegis_core::ContractSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Transform error type encompassing all transform module errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Source scan failed.
    #[error("source scan failed: {0}")]
    Core(#[from] aegis_core::Error),

    /// A requested schedule violates the declared step order.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Unknown step name.
    #[error("unknown step: {0}")]
    UnknownStep(String),
}

/// Transform result type
pub type Result<T> = std::result::Result<T, Error>;

/// Identifier of a patch step, used for scheduling and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    RemoveDuplicates,
    AddSecurityMixins,
    AddAuditEvents,
    AddPauseFunctions,
    AddValidationHelpers,
    FixOwnerReferences,
    TagCriticalFunctions,
}

impl StepId {
    /// Every step in canonical (schedule-valid) order.
    pub const ALL: [StepId; 7] = [
        StepId::RemoveDuplicates,
        StepId::AddSecurityMixins,
        StepId::AddAuditEvents,
        StepId::AddPauseFunctions,
        StepId::AddValidationHelpers,
        StepId::FixOwnerReferences,
        StepId::TagCriticalFunctions,
    ];

    /// Returns the step's kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            StepId::RemoveDuplicates => "remove-duplicates",
            StepId::AddSecurityMixins => "add-security-mixins",
            StepId::AddAuditEvents => "add-audit-events",
            StepId::AddPauseFunctions => "add-pause-functions",
            StepId::AddValidationHelpers => "add-validation-helpers",
            StepId::FixOwnerReferences => "fix-owner-references",
            StepId::TagCriticalFunctions => "tag-critical-functions",
        }
    }

    /// Returns the steps that must run before this one.
    ///
    /// The mixin inserts must land first because the dependent steps emit
    /// references to the inherited bases (`owner()`, `_pause`,
    /// `nonReentrant`), and duplicate declarations must be stripped before
    /// the bases arrive or they would collide with the inherited members.
    pub fn requires(self) -> &'static [StepId] {
        match self {
            StepId::AddSecurityMixins => &[StepId::RemoveDuplicates],
            StepId::AddPauseFunctions
            | StepId::FixOwnerReferences
            | StepId::TagCriticalFunctions => &[StepId::AddSecurityMixins],
            _ => &[],
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StepId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownStep(s.to_string()))
    }
}

/// What applying a step to one file did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The mutation was inserted.
    Applied,
    /// The idempotence guard found the mutation already present.
    AlreadyApplied,
    /// The anchor construct is missing; the file was left byte-for-byte
    /// untouched.
    NotApplicable {
        /// Why the step could not anchor.
        reason: String,
    },
}

impl Outcome {
    /// Builds a `NotApplicable` outcome from a reason string.
    pub fn not_applicable(reason: &str) -> Self {
        Outcome::NotApplicable {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied => f.write_str("applied"),
            Outcome::AlreadyApplied => f.write_str("already applied"),
            Outcome::NotApplicable { reason } => write!(f, "skipped: {reason}"),
        }
    }
}

/// Trait for security-scaffolding patch steps.
///
/// A step is a pure text mutation with a structural precondition: `apply`
/// re-derives "already applied" from the parsed source on every run, so the
/// full step sequence is idempotent. A step that cannot find its anchor
/// reports `NotApplicable` and must never partially insert a snippet.
pub trait Transform: Send + Sync {
    /// Returns the step identifier used for scheduling and reporting.
    fn id(&self) -> StepId;

    /// Returns the step's name for logging.
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Applies the step to the source, returning what happened.
    fn apply(&self, src: &mut ContractSource) -> Result<Outcome>;
}
