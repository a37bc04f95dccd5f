use anyhow::Context;

use evx_config::EvidexConfig;
use evx_core::enums::ArticleField;
use evx_db::workflow;

use crate::cli::{GlobalFlags, QueryArgs};
use crate::output::output;

pub async fn handle(
    args: &QueryArgs,
    config: &EvidexConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let field: ArticleField = args.field.parse()?;

    let outcome = workflow::query::run(&config.store, field, &args.value)
        .await
        .with_context(|| format!("query workflow failed for {field} = '{}'", args.value))?;

    if outcome.used_fallback && !flags.quiet {
        eprintln!(
            "no article matched {field} = '{}'; showing a sample document instead",
            args.value
        );
    }

    output(&outcome, flags.format)
}
