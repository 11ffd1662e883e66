//! Request workflow
//!
//! Wires the router and the write stage into a fixed two-step pipeline and
//! runs one request through it.

pub mod graph;
pub mod router;
pub mod write_stage;

#[cfg(test)]
pub(crate) mod testing;

use log::debug;

use crate::error::FlowError;
use crate::request::Request;
use crate::storage::FileOps;

pub use graph::Stage;
pub use router::route;
pub use write_stage::write_stage;

/// Outcome of a finished run: the augmented record and the stages it visited.
#[derive(Debug, Clone)]
pub struct Run {
    pub request: Request,
    pub stages: Vec<Stage>,
}

/// Runs requests against a `FileOps` implementation.
pub struct Workflow<F> {
    ops: F,
}

impl<F: FileOps> Workflow<F> {
    pub fn new(ops: F) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &F {
        &self.ops
    }

    /// Runs one request and returns it with `result` filled in.
    pub fn run(&self, request: Request) -> Result<Request, FlowError> {
        self.run_traced(request).map(|run| run.request)
    }

    /// Like `run`, but also reports the stages visited, ending at `Terminal`.
    pub fn run_traced(&self, request: Request) -> Result<Run, FlowError> {
        let mut request = request;
        let mut stages = Vec::with_capacity(3);
        let mut stage = Stage::ENTRY;

        loop {
            stages.push(stage);
            request = match stage {
                Stage::Router => route(&self.ops, request)?,
                Stage::WriteStage => write_stage(&self.ops, request)?,
                Stage::Terminal => break,
            };

            match stage.next(request.action()) {
                Some(next) => {
                    debug!("{} -> {} ({})", stage, next, request.action());
                    stage = next;
                }
                None => break,
            }
        }

        Ok(Run { request, stages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::RecordingOps;

    #[test]
    fn test_non_write_path_skips_write_stage() {
        let workflow = Workflow::new(RecordingOps::default());

        let run = workflow.run_traced(Request::new("create", "t.txt")).unwrap();

        assert_eq!(run.stages, vec![Stage::Router, Stage::Terminal]);
        assert_eq!(run.request.result(), Some("create t.txt"));
    }

    #[test]
    fn test_write_path_visits_both_stages() {
        let workflow = Workflow::new(RecordingOps::default());

        let run = workflow
            .run_traced(Request::new("write", "missing.txt").with_content("hi"))
            .unwrap();

        assert_eq!(
            run.stages,
            vec![Stage::Router, Stage::WriteStage, Stage::Terminal]
        );
        assert_eq!(run.request.result(), Some("write missing.txt hi"));
        assert_eq!(
            workflow.ops().calls(),
            vec!["create missing.txt", "write missing.txt hi"]
        );
    }

    #[test]
    fn test_unknown_action_ends_after_router() {
        let workflow = Workflow::new(RecordingOps::default());

        let run = workflow.run_traced(Request::new("creat", "x")).unwrap();

        assert_eq!(run.stages, vec![Stage::Router, Stage::Terminal]);
        assert_eq!(run.request.result(), Some("Unknown action: creat"));
        assert!(workflow.ops().calls().is_empty());
    }

    #[test]
    fn test_fault_aborts_run() {
        let workflow = Workflow::new(RecordingOps::failing());

        let err = workflow
            .run(Request::new("write", "w.txt").with_content("x"))
            .unwrap_err();

        assert!(matches!(err, FlowError::Storage(_)));
    }
}
