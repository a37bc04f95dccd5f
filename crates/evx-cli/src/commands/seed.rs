use anyhow::Context;

use evx_config::EvidexConfig;
use evx_db::workflow;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(config: &EvidexConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = workflow::seed::run(&config.store)
        .await
        .with_context(|| format!("seed workflow failed for database '{}'", config.store.database))?;

    output(&report, flags.format)
}
