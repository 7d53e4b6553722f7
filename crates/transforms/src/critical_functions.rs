use crate::snippets::{CRITICAL_FUNCTIONS, GUARD_MODIFIERS, SECURITY_BASES};
use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use aegis_core::detection;
use tracing::debug;

/// Attaches `nonReentrant whenNotPaused` to the signatures of the critical
/// state-changing entry points.
///
/// The guards go directly after the real parameter list, which the
/// Solidity grammar accepts ahead of visibility and the returns clause.
/// Functions already carrying `nonReentrant` are left untouched.
pub struct CriticalFunctions;

impl Transform for CriticalFunctions {
    fn id(&self) -> StepId {
        StepId::TagCriticalFunctions
    }

    fn apply(&self, src: &mut ContractSource) -> Result<Outcome> {
        let functions = detection::function_declarations(&src.text)?;
        let targets: Vec<_> = functions
            .iter()
            .filter(|f| CRITICAL_FUNCTIONS.contains(&f.name.as_str()))
            .collect();
        if targets.is_empty() {
            return Ok(Outcome::not_applicable("no critical functions found"));
        }

        let inherits_guards = detection::contract_header(&src.text).is_some_and(|h| {
            SECURITY_BASES
                .into_iter()
                .all(|base| h.bases.iter().any(|have| have == base))
        });
        if !inherits_guards {
            return Ok(Outcome::not_applicable("security mixins not inherited"));
        }

        let pending: Vec<usize> = targets
            .iter()
            .filter(|f| !f.header_tail(&src.text).contains("nonReentrant"))
            .map(|f| f.params.end)
            .collect();
        if pending.is_empty() {
            return Ok(Outcome::AlreadyApplied);
        }

        debug!(
            "guarding {} of {} critical function(s) in {}",
            pending.len(),
            targets.len(),
            src.name
        );
        for insert_at in pending.into_iter().rev() {
            src.text.insert_str(insert_at, GUARD_MODIFIERS);
        }

        Ok(Outcome::Applied)
    }
}
