use std::collections::HashSet;
use tracing::info;
use crate::core::error::{Error, ErrorKind, Result};
use crate::pipeline::context::BuildContext;
use crate::pipeline::step::{BuildStep, StepId};
use crate::steps::base_image::BaseImageStep;
use crate::steps::bootstrap::BootstrapStep;
use crate::steps::dictionary::DictionaryInstallStep;
use crate::steps::linker::DictionaryLinkStep;
use crate::steps::stopwords::StopWordStep;

/// Explicit ordered list of named build stages.
///
/// Ordering is declared, not encoded in filenames: every step names the
/// steps it requires, and `validate` rejects a plan where a requirement
/// does not run earlier. Execution is strictly sequential and fail-fast;
/// the first error aborts the build with nothing marked usable.
pub struct BuildPlan {
    steps: Vec<Box<dyn BuildStep>>,
}

impl BuildPlan {
    pub fn new() -> Self {
        BuildPlan { steps: Vec::new() }
    }

    /// The five conventional stages, in required order.
    pub fn standard() -> Self {
        let mut plan = BuildPlan::new();
        plan.push(Box::new(BaseImageStep));
        plan.push(Box::new(DictionaryInstallStep));
        plan.push(Box::new(DictionaryLinkStep));
        plan.push(Box::new(StopWordStep));
        plan.push(Box::new(BootstrapStep));
        plan
    }

    pub fn push(&mut self, step: Box<dyn BuildStep>) {
        self.steps.push(step);
    }

    pub fn step_ids(&self) -> Vec<StepId> {
        self.steps.iter().map(|s| s.id()).collect()
    }

    /// Check the declared ordering before anything touches the tree.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<StepId> = HashSet::new();

        for step in &self.steps {
            for dep in step.requires() {
                if !seen.contains(&dep) {
                    return Err(Error::new(
                        ErrorKind::InvalidPlan,
                        format!("step '{}' requires '{}' to run earlier", step.id(), dep),
                    ));
                }
            }
            if !seen.insert(step.id()) {
                return Err(Error::new(
                    ErrorKind::InvalidPlan,
                    format!("duplicate step '{}'", step.id()),
                ));
            }
        }

        Ok(())
    }

    /// Validate, run every stage in order, then verify and save the
    /// placement manifest.
    pub fn execute(&self, ctx: &mut BuildContext) -> Result<()> {
        self.validate()?;

        for step in &self.steps {
            info!(step = %step.id(), "running build stage");
            step.run(ctx)?;
        }

        ctx.manifest.verify(&ctx.layout)?;
        ctx.manifest.save(&ctx.layout)?;
        info!(
            artifacts = ctx.manifest.entries.len(),
            root = %ctx.layout.root.display(),
            "image tree staged"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop(StepId, Vec<StepId>);

    impl BuildStep for Noop {
        fn id(&self) -> StepId {
            self.0
        }
        fn requires(&self) -> Vec<StepId> {
            self.1.clone()
        }
        fn run(&self, _ctx: &mut BuildContext) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn standard_plan_validates() {
        assert!(BuildPlan::standard().validate().is_ok());
    }

    #[test]
    fn requirement_after_dependent_is_rejected() {
        let mut plan = BuildPlan::new();
        plan.push(Box::new(Noop(StepId("link"), vec![StepId("install")])));
        plan.push(Box::new(Noop(StepId("install"), Vec::new())));

        let err = plan.validate().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPlan));
    }

    #[test]
    fn duplicate_step_is_rejected() {
        let mut plan = BuildPlan::new();
        plan.push(Box::new(Noop(StepId("install"), Vec::new())));
        plan.push(Box::new(Noop(StepId("install"), Vec::new())));

        let err = plan.validate().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPlan));
    }
}
