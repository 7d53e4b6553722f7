use crate::snippets::{SECURITY_BASES, SECURITY_IMPORTS};
use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use aegis_core::detection;
use tracing::debug;

/// Inserts the OpenZeppelin security imports after the pragma line and
/// merges the security bases into the contract header's inheritance clause.
///
/// Only missing pieces are added: a contract that already imports one of
/// the mixins or already inherits one of the bases keeps what it has and
/// gains the rest.
pub struct SecurityMixins;

impl Transform for SecurityMixins {
    fn id(&self) -> StepId {
        StepId::AddSecurityMixins
    }

    fn apply(&self, src: &mut ContractSource) -> Result<Outcome> {
        let Some(pragma) = detection::pragma_line(&src.text) else {
            return Ok(Outcome::not_applicable("no pragma line found"));
        };
        let Some(header) = detection::contract_header(&src.text) else {
            return Ok(Outcome::not_applicable("no contract declaration found"));
        };

        let existing = detection::import_paths(&src.text);
        let missing_imports: Vec<&str> = SECURITY_IMPORTS
            .into_iter()
            .filter(|path| !existing.iter().any(|have| have == path))
            .collect();
        let missing_bases: Vec<&str> = SECURITY_BASES
            .into_iter()
            .filter(|base| !header.bases.iter().any(|have| have == base))
            .collect();

        if missing_imports.is_empty() && missing_bases.is_empty() {
            return Ok(Outcome::AlreadyApplied);
        }

        // the header sits after the pragma; edit back to front so the
        // earlier offset stays valid
        if !missing_bases.is_empty() {
            let head = &src.text[header.span.start..header.body_open];
            let insert_at = header.span.start + head.trim_end().len();
            let clause = if header.bases.is_empty() {
                format!(" is {}", missing_bases.join(", "))
            } else {
                format!(", {}", missing_bases.join(", "))
            };
            debug!(
                "extending inheritance of {} with {:?}",
                header.name, missing_bases
            );
            src.text.insert_str(insert_at, &clause);
        }

        if !missing_imports.is_empty() {
            let mut block = String::from("\n");
            for path in &missing_imports {
                block.push_str("import \"");
                block.push_str(path);
                block.push_str("\";\n");
            }
            src.text.insert_str(pragma.end, &block);
        }

        Ok(Outcome::Applied)
    }
}
