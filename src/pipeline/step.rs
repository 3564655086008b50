use std::fmt;
use crate::core::error::Result;
use crate::pipeline::context::BuildContext;

/// Identifier of a build stage, unique within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepId(pub &'static str);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait BuildStep: Send + Sync {
    fn id(&self) -> StepId;

    /// Steps that must have completed before this one may run.
    fn requires(&self) -> Vec<StepId> {
        Vec::new()
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()>;
}
