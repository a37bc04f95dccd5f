//! Configuration loading for command handlers.

use anyhow::Context;

use evx_config::EvidexConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply CLI flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EvidexConfig> {
    let mut config = EvidexConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(database) = &flags.database {
        config.store.database = database.clone();
    }
    if let Some(data_dir) = &flags.data_dir {
        config.store.data_dir = data_dir.clone();
    }
    if let Some(url) = &flags.url {
        config.store.url = url.clone();
    }
    if let Some(auth_token) = &flags.auth_token {
        config.store.auth_token = auth_token.clone();
    }

    config
        .store
        .validate()
        .context("invalid store configuration")?;

    tracing::debug!(
        database = %config.store.database,
        remote = config.store.is_remote(),
        "configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use crate::cli::{GlobalFlags, OutputFormat};

    use super::*;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            database: None,
            data_dir: None,
            url: None,
            auth_token: None,
        }
    }

    #[test]
    fn cli_overrides_win_over_config() {
        let mut flags = flags();
        flags.database = Some("evidence-db-override".into());
        flags.data_dir = Some("/tmp/evidex-test".into());

        let config = load_config(&flags).unwrap();
        assert_eq!(config.store.database, "evidence-db-override");
        assert_eq!(config.store.data_dir, "/tmp/evidex-test");
    }

    #[test]
    fn empty_database_override_is_rejected() {
        let mut flags = flags();
        flags.database = Some(String::new());
        assert!(load_config(&flags).is_err());
    }
}
