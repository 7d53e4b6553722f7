use crate::snippets::{VALIDATION_HELPERS, VALIDATION_HELPER_NAMES};
use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use aegis_core::{detection, scanner};

/// Inserts the internal pure input-validation helpers (address non-zero,
/// non-empty string, positive amount) after the constructor body.
pub struct ValidationHelpers;

impl Transform for ValidationHelpers {
    fn id(&self) -> StepId {
        StepId::AddValidationHelpers
    }

    fn apply(&self, src: &mut ContractSource) -> Result<Outcome> {
        let functions = detection::function_declarations(&src.text)?;
        if functions
            .iter()
            .any(|f| VALIDATION_HELPER_NAMES.contains(&f.name.as_str()))
        {
            return Ok(Outcome::AlreadyApplied);
        }
        let Some(ctor) = detection::constructor_decl(&src.text)? else {
            return Ok(Outcome::not_applicable("no constructor found"));
        };

        let insert_at = scanner::line_end(&src.text, ctor.span.end);
        src.text.insert_str(insert_at, VALIDATION_HELPERS);
        Ok(Outcome::Applied)
    }
}
