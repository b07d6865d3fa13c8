//! Assembles a [`Runtime`] from content files and client configuration.
use std::sync::Arc;

use anyhow::{Context, Result};
use stash_content::ContentFactory;
use stash_runtime::{FilePlayerRepository, OracleManager, Runtime, RuntimeConfig};

use crate::config::CliConfig;

pub async fn build_runtime(config: &CliConfig) -> Result<Runtime> {
    let factory = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::info!(content = %factory.data_dir().display(), "loading content");

    let engine = factory.load_config()?;
    let catalog = factory.load_catalog()?;
    let loadout = factory.load_loadout()?;

    let oracles = OracleManager::from_catalog(catalog);
    let player = loadout
        .into_player(oracles.items())
        .context("starting loadout does not fit the catalog")?;

    let save_dir = config.save_dir();
    let repository = FilePlayerRepository::new(&save_dir)
        .with_context(|| format!("cannot open save directory {}", save_dir.display()))?;
    tracing::info!(saves = %repository.base_dir().display(), "save directory ready");

    let mut runtime_config = RuntimeConfig {
        engine,
        session_id: config.session_id().to_owned(),
        autosave: config.autosave,
        ..RuntimeConfig::default()
    };
    if let Some(capacity) = config.command_buffer {
        runtime_config.command_buffer_size = capacity;
    }

    tracing::info!(
        session = %runtime_config.session_id,
        autosave = runtime_config.autosave,
        rule = %engine.requirement_rule,
        policy = %engine.invariant_policy,
        "starting runtime"
    );

    Ok(Runtime::builder()
        .config(runtime_config)
        .oracles(oracles)
        .initial_player(player)
        .repository(Arc::new(repository))
        .build()
        .await?)
}
