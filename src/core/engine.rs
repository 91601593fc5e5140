use crate::core::{FlowRun, FlowState, ProcessedRecord, Workflow};
use crate::utils::error::Result;
use std::io::Write;

pub struct FlowEngine<W: Workflow> {
    workflow: W,
}

impl<W: Workflow> FlowEngine<W> {
    pub fn new(workflow: W) -> Self {
        Self { workflow }
    }

    pub fn workflow(&self) -> &W {
        &self.workflow
    }

    /// Runs the flow once, writing the workflow's output lines to stdout.
    pub async fn run(&self) -> Result<ProcessedRecord> {
        let (_, outcome) = self.run_with_report().await;
        outcome
    }

    pub async fn run_with_report(&self) -> (FlowRun, Result<ProcessedRecord>) {
        let mut stdout = std::io::stdout();
        self.run_with_report_to(&mut stdout).await
    }

    /// Runs the flow once, writing output lines to `out`, and returns the run
    /// report next to the outcome. Errors from either task are returned as-is.
    pub async fn run_with_report_to<O: Write>(
        &self,
        out: &mut O,
    ) -> (FlowRun, Result<ProcessedRecord>) {
        let mut run = FlowRun::new(self.workflow.name());
        tracing::info!("Flow '{}' started", run.flow_name);

        let outcome = self.drive(&mut run, out).await;

        match &outcome {
            Ok(_) => {
                tracing::info!(
                    "Flow '{}' finished in {:?}",
                    run.flow_name,
                    run.elapsed().map(|d| d.num_milliseconds())
                );
            }
            Err(e) => {
                tracing::error!("Flow '{}' failed in state {}: {}", run.flow_name, run.state, e);
                if let Err(transition) = run.fail(e) {
                    tracing::warn!("Could not mark run as failed: {}", transition);
                }
            }
        }

        (run, outcome)
    }

    async fn drive<O: Write>(&self, run: &mut FlowRun, out: &mut O) -> Result<ProcessedRecord> {
        writeln!(out, "Starting the workflow...")?;

        run.transition(FlowState::Fetching)?;
        let record = self.workflow.fetch().await?;

        run.transition(FlowState::Processing)?;
        let processed = self.workflow.process(&record, out)?;

        writeln!(out, "Workflow finished with result: {}", processed)?;
        run.complete(processed.clone())?;
        Ok(processed)
    }
}
