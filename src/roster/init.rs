use crate::api::{CmdResult, RosterApi};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Startup overrides, usually taken from flags or the environment.
#[derive(Debug, Default, Clone)]
pub struct InitOptions {
    pub config_dir: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
}

/// The platform config directory, e.g. `~/.config/roster` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "roster", "roster").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Resolves configuration and builds the API over the data file.
///
/// Does not load the data file; call `api.load()` for that.
pub fn initialize(options: &InitOptions) -> Result<RosterApi<FileStore>> {
    let config = match options.config_dir.clone().or_else(default_config_dir) {
        Some(dir) => RosterConfig::load(&dir)?,
        None => {
            debug!("no config directory available, using defaults");
            RosterConfig::default()
        }
    };

    let data_file = config.resolve_data_file(options.data_file.as_deref())?;
    if data_file.is_dir() {
        return Err(RosterError::Config(format!(
            "data file path is a directory: {}",
            data_file.display()
        )));
    }
    debug!(data_file = %data_file.display(), first_id = config.first_id, "resolved configuration");

    Ok(RosterApi::with_roster(
        Roster::with_first_id(config.first_id),
        FileStore::new(data_file),
    )
    .with_id_policy(config.id_policy))
}

/// Like [`initialize`], then loads the data file into the roster. Returns the
/// load outcome alongside the API so the caller can report it.
pub fn initialize_and_load(options: &InitOptions) -> Result<(RosterApi<FileStore>, CmdResult)> {
    let mut api = initialize(options)?;
    let loaded = api.load()?;
    Ok((api, loaded))
}
