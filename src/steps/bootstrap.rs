use tracing::info;
use crate::core::config::ScriptSource;
use crate::core::error::{Error, ErrorKind, Result};
use crate::image::manifest::ArtifactRole;
use crate::pipeline::context::BuildContext;
use crate::pipeline::step::{BuildStep, StepId};
use crate::steps::place_file;

pub const REGISTER_BOOTSTRAP: StepId = StepId("register-bootstrap");

/// Places the SQL bootstrap scripts into the first-run directory.
///
/// The first-run mechanism executes every `*.sql` there in lexicographic
/// filename order, so this stage assigns zero-padded position prefixes
/// (`0001-create-db.sql`) from the declared list order and rejects any
/// list whose declared dependencies contradict that order. Placement
/// only; execution and SQL errors belong to the first-run mechanism.
pub struct BootstrapStep;

impl BuildStep for BootstrapStep {
    fn id(&self) -> StepId {
        REGISTER_BOOTSTRAP
    }

    fn run(&self, ctx: &mut BuildContext) -> Result<()> {
        validate_order(&ctx.config.scripts)?;

        let scripts = ctx.config.scripts.clone();
        for (index, script) in scripts.iter().enumerate() {
            let filename = placed_name(index, &script.name)?;
            let dest = ctx.layout.script_path(&filename);

            place_file(&script.source, &dest)?;
            ctx.manifest
                .record(ArtifactRole::BootstrapScript, &ctx.layout, &dest)?;

            info!(script = %filename, "bootstrap script registered");
        }

        Ok(())
    }
}

/// Filename under which the script at `index` is placed. Prefixes are
/// zero-padded so lexicographic order equals list order.
pub fn placed_name(index: usize, name: &str) -> Result<String> {
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Error::new(
            ErrorKind::InvalidName,
            format!("script name must be lowercase alphanumeric with dashes: {:?}", name),
        ));
    }

    Ok(format!("{:04}-{}.sql", index + 1, name))
}

/// Every declared dependency must name a script earlier in the list.
pub fn validate_order(scripts: &[ScriptSource]) -> Result<()> {
    for (index, script) in scripts.iter().enumerate() {
        for dep in &script.depends_on {
            let earlier = scripts[..index].iter().any(|s| &s.name == dep);
            if !earlier {
                return Err(Error::new(
                    ErrorKind::InvalidPlan,
                    format!(
                        "script '{}' depends on '{}' which does not run before it",
                        script.name, dep
                    ),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn placed_names_sort_in_list_order() {
        let a = placed_name(0, "create-db").unwrap();
        let b = placed_name(1, "enable-extension").unwrap();
        assert_eq!(a, "0001-create-db.sql");
        assert_eq!(b, "0002-enable-extension.sql");
        assert!(a < b);
    }

    #[test]
    fn uppercase_and_separator_names_are_rejected() {
        assert!(placed_name(0, "Create-DB").is_err());
        assert!(placed_name(0, "create db").is_err());
        assert!(placed_name(0, "").is_err());
    }

    #[test]
    fn dependency_must_precede_dependent() {
        let create = ScriptSource::new("create-db", PathBuf::from("create.sql"));
        let enable =
            ScriptSource::new("enable-extension", PathBuf::from("enable.sql")).after("create-db");

        assert!(validate_order(&[create.clone(), enable.clone()]).is_ok());

        let err = validate_order(&[enable, create]).unwrap_err();
        assert!(matches!(err.kind, crate::core::error::ErrorKind::InvalidPlan));
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        let enable =
            ScriptSource::new("enable-extension", PathBuf::from("enable.sql")).after("create-db");
        assert!(validate_order(&[enable]).is_err());
    }
}
