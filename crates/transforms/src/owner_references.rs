use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use aegis_core::{detection, scanner};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static OWNER_COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"msg\.sender\s*==\s*owner\b").unwrap());

static OWNER_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*owner\s*=\s*msg\.sender\s*;[ \t]*\r?\n?").unwrap());

/// Rewrites bare `owner` references for the inherited `Ownable` base:
/// `msg.sender == owner` becomes a call to the accessor, and direct
/// `owner = msg.sender;` assignments are deleted (the base constructor
/// already sets the owner).
///
/// A comparison that already calls the accessor is left alone, so a second
/// run never turns `owner()` into `owner()()`.
pub struct OwnerReferences;

impl Transform for OwnerReferences {
    fn id(&self) -> StepId {
        StepId::FixOwnerReferences
    }

    fn apply(&self, src: &mut ContractSource) -> Result<Outcome> {
        let inherits_ownable = detection::contract_header(&src.text)
            .is_some_and(|h| h.bases.iter().any(|b| b == "Ownable"));
        if !inherits_ownable {
            return Ok(Outcome::not_applicable("Ownable not inherited"));
        }

        // (offset range, replacement) edits, applied back to front
        let mut edits: Vec<(std::ops::Range<usize>, &str)> = Vec::new();

        for m in OWNER_COMPARISON.find_iter(&src.text) {
            let already_call = matches!(
                scanner::next_code_byte(&src.text, m.end())?,
                Some((_, b'('))
            );
            if !already_call {
                edits.push((m.end()..m.end(), "()"));
            }
        }
        for m in OWNER_ASSIGNMENT.find_iter(&src.text) {
            edits.push((m.range(), ""));
        }

        if edits.is_empty() {
            return Ok(Outcome::AlreadyApplied);
        }

        debug!("rewriting {} owner reference(s) in {}", edits.len(), src.name);
        edits.sort_by_key(|(range, _)| range.start);
        for (range, replacement) in edits.into_iter().rev() {
            src.text.replace_range(range, replacement);
        }

        Ok(Outcome::Applied)
    }
}
