use crate::snippets::PAUSE_FUNCTIONS;
use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use aegis_core::{detection, scanner};

/// Inserts the `pause()`/`unpause()` emergency switches immediately after
/// the constructor body.
///
/// The switches call the inherited `_pause`/`_unpause` and are gated on
/// `onlyOwner`, so the security mixins must already be in place.
pub struct PauseFunctions;

impl Transform for PauseFunctions {
    fn id(&self) -> StepId {
        StepId::AddPauseFunctions
    }

    fn apply(&self, src: &mut ContractSource) -> Result<Outcome> {
        let functions = detection::function_declarations(&src.text)?;
        if functions.iter().any(|f| f.name == "pause") {
            return Ok(Outcome::AlreadyApplied);
        }
        let Some(ctor) = detection::constructor_decl(&src.text)? else {
            return Ok(Outcome::not_applicable("no constructor found"));
        };
        let inherits_pausable = detection::contract_header(&src.text)
            .is_some_and(|h| h.bases.iter().any(|b| b == "Pausable"));
        if !inherits_pausable {
            return Ok(Outcome::not_applicable("Pausable not inherited"));
        }

        let insert_at = scanner::line_end(&src.text, ctor.span.end);
        src.text.insert_str(insert_at, PAUSE_FUNCTIONS);
        Ok(Outcome::Applied)
    }
}
