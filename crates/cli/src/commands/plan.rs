//! Module for the `plan` subcommand, which prints the linear schedule the
//! pipeline would run, together with the declared dependency edges.

use aegis_transform::schedule;
use async_trait::async_trait;
use clap::Args;
use std::error::Error;

/// Arguments for the `plan` subcommand.
#[derive(Args)]
pub struct PlanArgs {
    /// Comma-separated list of steps to schedule (default: all).
    #[arg(long, default_value = "all")]
    steps: String,
}

/// Executes the `plan` subcommand.
#[async_trait]
impl super::Command for PlanArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let steps = super::patch::build_steps(&self.steps)?;
        let ids: Vec<_> = steps.iter().map(|s| s.id()).collect();
        let order = schedule::linearize(&ids)?;

        println!("Schedule:");
        for (i, id) in order.iter().enumerate() {
            println!("  {}. {id}", i + 1);
        }

        let edges: Vec<_> = schedule::dependency_edges()
            .into_iter()
            .filter(|(dep, id)| order.contains(dep) && order.contains(id))
            .collect();
        if !edges.is_empty() {
            println!();
            println!("Dependencies:");
            for (dep, id) in edges {
                println!("  {dep} -> {id}");
            }
        }
        Ok(())
    }
}
