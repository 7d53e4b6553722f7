use crate::snippets::{AUDIT_EVENTS, AUDIT_EVENT_NAMES};
use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use aegis_core::{detection, scanner};
use tracing::debug;

/// Inserts the fixed audit event block immediately after the last existing
/// event declaration.
///
/// Pre-existing events are never removed or reordered; the declarations
/// after this step are a pure superset of the ones before it.
pub struct AuditEvents;

impl Transform for AuditEvents {
    fn id(&self) -> StepId {
        StepId::AddAuditEvents
    }

    fn apply(&self, src: &mut ContractSource) -> Result<Outcome> {
        let events = detection::event_declarations(&src.text)?;
        if events.iter().any(|e| e.name == AUDIT_EVENT_NAMES[0]) {
            return Ok(Outcome::AlreadyApplied);
        }
        let Some(last) = events.last() else {
            return Ok(Outcome::not_applicable("no event declarations found"));
        };

        debug!(
            "inserting audit events after `{}` in {}",
            last.name, src.name
        );
        let insert_at = scanner::line_end(&src.text, last.span.end);
        src.text.insert_str(insert_at, AUDIT_EVENTS);
        Ok(Outcome::Applied)
    }
}
