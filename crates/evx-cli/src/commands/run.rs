use anyhow::Context;
use serde_json::json;

use evx_config::EvidexConfig;
use evx_core::enums::ArticleField;
use evx_db::workflow;

use crate::cli::{GlobalFlags, RunArgs};
use crate::output::output;

/// The combined demonstration flow: seed, then query the seeded data back.
/// Either half can be skipped.
pub async fn handle(
    args: &RunArgs,
    config: &EvidexConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let field: ArticleField = args.field.parse()?;

    let seed_report = if args.query_only {
        None
    } else {
        let report = workflow::seed::run(&config.store).await.with_context(|| {
            format!("seed workflow failed for database '{}'", config.store.database)
        })?;
        Some(report)
    };

    let query_outcome = if args.seed_only {
        None
    } else {
        let outcome = workflow::query::run(&config.store, field, &args.value)
            .await
            .with_context(|| format!("query workflow failed for {field} = '{}'", args.value))?;
        Some(outcome)
    };

    output(
        &json!({
            "seed": seed_report,
            "query": query_outcome,
        }),
        flags.format,
    )
}
