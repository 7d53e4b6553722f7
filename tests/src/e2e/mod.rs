//! End to end pipeline tests.
//!
//! These run the full scheduled step set against realistic contract
//! fixtures on disk and assert the properties the pipeline guarantees:
//! one-pass convergence (a second run changes nothing), anchor
//! preservation, and per-file isolation of failures.

use aegis_transform::Transform;
use aegis_transform::audit_events::AuditEvents;
use aegis_transform::critical_functions::CriticalFunctions;
use aegis_transform::owner_references::OwnerReferences;
use aegis_transform::pause_functions::PauseFunctions;
use aegis_transform::remove_duplicates::RemoveDuplicates;
use aegis_transform::security_mixins::SecurityMixins;
use aegis_transform::validation_helpers::ValidationHelpers;


pub const CREDIT_SCORE: &str = include_str!("../../contracts/CreditScore.sol");

/// Every patch step, in no particular order; the driver schedules them.
pub fn all_steps() -> Vec<Box<dyn Transform>> {
    vec![
        Box::new(CriticalFunctions),
        Box::new(OwnerReferences),
        Box::new(ValidationHelpers),
        Box::new(PauseFunctions),
        Box::new(AuditEvents),
        Box::new(SecurityMixins),
        Box::new(RemoveDuplicates),
    ]
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .try_init();
}
