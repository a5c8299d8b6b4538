//! Application context for CLI command execution.
//!
//! `App` resolves configuration against command-line overrides, loads the
//! data files once and owns the resulting [`NeoDatabase`].

use crate::config::NeoConfig;
use crate::error::Result;
use neo_core::{NeoDatabase, load_approaches, load_neos};
use std::path::{Path, PathBuf};

/// Data file overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct DataOverrides {
    /// Replaces `data.neos` from the configuration
    pub neofile: Option<PathBuf>,
    /// Replaces `data.approaches` from the configuration
    pub cadfile: Option<PathBuf>,
}

/// Application context for CLI operations.
pub struct App {
    database: NeoDatabase,
    config: NeoConfig,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("neos", &self.database.neos().len())
            .field("approaches", &self.database.approaches().len())
            .finish()
    }
}

impl App {
    /// Load the data files named by `config`, after applying `overrides`.
    ///
    /// Relative paths are resolved against `working_dir`.
    pub fn load(mut config: NeoConfig, overrides: DataOverrides, working_dir: &Path) -> Result<Self> {
        if let Some(neofile) = overrides.neofile {
            config.data.neos = neofile;
        }
        if let Some(cadfile) = overrides.cadfile {
            config.data.approaches = cadfile;
        }

        let neos = load_neos(working_dir.join(&config.data.neos))?;
        let approaches = load_approaches(working_dir.join(&config.data.approaches))?;

        Ok(Self::from_database(NeoDatabase::new(neos, approaches), config))
    }

    /// Wrap an already built database.
    #[must_use]
    pub fn from_database(database: NeoDatabase, config: NeoConfig) -> Self {
        Self { database, config }
    }

    /// The loaded database
    #[must_use]
    pub fn database(&self) -> &NeoDatabase {
        &self.database
    }

    /// The effective configuration
    #[must_use]
    pub fn config(&self) -> &NeoConfig {
        &self.config
    }
}
