//! Template mode, backed by minijinja.

use super::helpers::Helpers;
use crate::decompose::VarSet;
use crate::error::{Result, UrlSplitError};
use minijinja::{Environment, ErrorKind, Value};
use std::io::{self, Write};

/// Builds an environment carrying the engine built-ins plus `helpers`.
fn environment<'source>(helpers: &Helpers) -> Environment<'source> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    for (name, helper) in helpers.iter() {
        env.add_filter(name, move |value: Value| helper(&value.to_string()));
        env.add_function(name, move |value: Value| helper(&value.to_string()));
    }
    env
}

/// Unknown helpers count as execution faults whichever stage reports them.
fn is_execution_fault(err: &minijinja::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::UnknownFilter | ErrorKind::UnknownFunction | ErrorKind::UnknownTest
    )
}

/// Compiles `source` and streams its output for `vars` into `out`.
pub fn render_template(
    vars: &VarSet,
    source: &str,
    helpers: &Helpers,
    out: &mut dyn Write,
) -> Result<()> {
    let env = environment(helpers);
    let template = env.template_from_str(source).map_err(|err| {
        if is_execution_fault(&err) {
            UrlSplitError::TemplateExecution(err)
        } else {
            UrlSplitError::TemplateSyntax(err)
        }
    })?;

    let ctx = vars.to_map();
    match template.render_to_write(&ctx, &mut *out) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == ErrorKind::WriteFailure => {
            Err(UrlSplitError::OutputWrite(io::Error::other(err)))
        }
        Err(err) => Err(UrlSplitError::TemplateExecution(err)),
    }
}
