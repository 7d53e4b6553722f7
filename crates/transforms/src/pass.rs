use crate::{Outcome, Result, StepId, Transform};
use aegis_core::ContractSource;
use tracing::info;

/// Trait for running a sequence of patch steps on one contract source.
pub trait Pass {
    fn run(
        &self,
        src: &mut ContractSource,
        steps: &[Box<dyn Transform>],
    ) -> Result<Vec<(StepId, Outcome)>>;
}

/// Default implementation of the Pass trait.
///
/// Each step runs against a snapshot of the buffer and is committed only
/// when it reports `Applied`, so a step that errors mid-mutation can never
/// leave a partially inserted snippet behind.
pub struct DefaultPass;

impl Pass for DefaultPass {
    fn run(
        &self,
        src: &mut ContractSource,
        steps: &[Box<dyn Transform>],
    ) -> Result<Vec<(StepId, Outcome)>> {
        let mut outcomes = Vec::with_capacity(steps.len());

        for step in steps {
            let mut snapshot = src.clone();
            let outcome = step.apply(&mut snapshot)?;
            if outcome == Outcome::Applied {
                *src = snapshot;
            }

            info!("{:>24} {}", step.name(), outcome);
            outcomes.push((step.id(), outcome));
        }
        Ok(outcomes)
    }
}
