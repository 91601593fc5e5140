use crate::domain::model::ProcessedRecord;
use crate::utils::error::{FlowError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowState {
    NotStarted,
    Fetching,
    Processing,
    Done,
    Failed,
}

impl FlowState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FlowState::Done | FlowState::Failed)
    }

    /// Forward-only: each step may advance by one, or fail from any
    /// non-terminal state.
    pub fn can_transition_to(self, next: FlowState) -> bool {
        use FlowState::*;
        match (self, next) {
            (NotStarted, Fetching) | (Fetching, Processing) | (Processing, Done) => true,
            (from, Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowState::NotStarted => "NotStarted",
            FlowState::Fetching => "Fetching",
            FlowState::Processing => "Processing",
            FlowState::Done => "Done",
            FlowState::Failed => "Failed",
        };
        f.write_str(name)
    }
}

/// In-memory report of a single flow run.
#[derive(Debug, Clone, Serialize)]
pub struct FlowRun {
    pub flow_name: String,
    pub state: FlowState,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub result: Option<ProcessedRecord>,
    pub failure: Option<String>,
}

impl FlowRun {
    pub fn new(flow_name: impl Into<String>) -> Self {
        Self {
            flow_name: flow_name.into(),
            state: FlowState::NotStarted,
            started_at: None,
            finished_at: None,
            result: None,
            failure: None,
        }
    }

    pub fn transition(&mut self, next: FlowState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(FlowError::InvalidTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }

        tracing::debug!("Flow '{}': {} -> {}", self.flow_name, self.state, next);

        if self.state == FlowState::NotStarted {
            self.started_at = Some(Utc::now());
        }
        if next.is_terminal() {
            self.finished_at = Some(Utc::now());
        }
        self.state = next;
        Ok(())
    }

    pub fn complete(&mut self, record: ProcessedRecord) -> Result<()> {
        self.transition(FlowState::Done)?;
        self.result = Some(record);
        Ok(())
    }

    pub fn fail(&mut self, error: &FlowError) -> Result<()> {
        self.transition(FlowState::Failed)?;
        self.failure = Some(error.to_string());
        Ok(())
    }

    pub fn elapsed(&self) -> Option<chrono::Duration> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let mut run = FlowRun::new("simple_prefect_workflow");
        assert_eq!(run.state, FlowState::NotStarted);
        assert!(run.started_at.is_none());

        run.transition(FlowState::Fetching).unwrap();
        assert!(run.started_at.is_some());
        run.transition(FlowState::Processing).unwrap();
        run.complete(ProcessedRecord::new("T")).unwrap();

        assert_eq!(run.state, FlowState::Done);
        assert!(run.finished_at.is_some());
        assert!(run.elapsed().is_some());
        assert_eq!(run.result, Some(ProcessedRecord::new("T")));
    }

    #[test]
    fn test_failure_from_any_running_state() {
        for steps in [
            vec![],
            vec![FlowState::Fetching],
            vec![FlowState::Fetching, FlowState::Processing],
        ] {
            let mut run = FlowRun::new("flow");
            for step in steps {
                run.transition(step).unwrap();
            }
            run.fail(&FlowError::missing_field("title")).unwrap();
            assert_eq!(run.state, FlowState::Failed);
            assert_eq!(run.failure.as_deref(), Some("Missing field: title"));
        }
    }

    #[test]
    fn test_rejects_skips_and_backward_moves() {
        let mut run = FlowRun::new("flow");
        assert!(matches!(
            run.transition(FlowState::Processing),
            Err(FlowError::InvalidTransition { .. })
        ));

        run.transition(FlowState::Fetching).unwrap();
        run.transition(FlowState::Processing).unwrap();
        assert!(run.transition(FlowState::Fetching).is_err());

        run.transition(FlowState::Done).unwrap();
        assert!(run.transition(FlowState::Failed).is_err());
        assert_eq!(run.state, FlowState::Done);
    }
}
