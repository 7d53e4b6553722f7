use crate::snippets::{DUPLICATE_MODIFIERS, DUPLICATE_STATE_VARS};
use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use aegis_core::scanner::{self, Span};
use aegis_core::detection;
use tracing::debug;

/// Strips hand-rolled `owner`/`locked` state variables and
/// `onlyOwner`/`nonReentrant`/`whenNotPaused` modifier blocks that would
/// collide with the inherited OpenZeppelin members once the security
/// mixins land.
///
/// Modifier bodies are removed by their balanced span, so a body with
/// nested braces comes out whole.
pub struct RemoveDuplicates;

impl Transform for RemoveDuplicates {
    fn id(&self) -> StepId {
        StepId::RemoveDuplicates
    }

    fn apply(&self, src: &mut ContractSource) -> Result<Outcome> {
        let mut spans: Vec<Span> = Vec::new();

        for var in detection::state_variable_decls(&src.text) {
            if DUPLICATE_STATE_VARS.contains(&var.name.as_str()) {
                debug!("removing duplicate state variable `{}`", var.name);
                spans.push(var.span);
            }
        }
        for modifier in detection::modifier_declarations(&src.text)? {
            if DUPLICATE_MODIFIERS.contains(&modifier.name.as_str()) {
                debug!("removing duplicate modifier `{}`", modifier.name);
                spans.push(Span {
                    start: scanner::line_start(&src.text, modifier.span.start),
                    end: scanner::line_end(&src.text, modifier.span.end),
                });
            }
        }

        if spans.is_empty() {
            return Ok(Outcome::AlreadyApplied);
        }

        // merge overlaps, then delete back to front
        spans.sort_by_key(|s| s.start);
        let mut merged: Vec<Span> = Vec::new();
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start < last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        for span in merged.iter().rev() {
            src.text.replace_range(span.start..span.end, "");
        }

        Ok(Outcome::Applied)
    }
}
