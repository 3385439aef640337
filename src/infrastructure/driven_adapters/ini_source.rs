//! INI Configuration Source
//!
//! Reads sectioned database settings from an INI file on every load.

use std::path::PathBuf;

use ini::{Ini, ParseOption, Properties};

use crate::domain::gateways::ConfigurationSource;
use crate::domain::models::configuration::{ConfigurationStore, Section};
use crate::shared::errors::SourceError;

/// Section whose keys every other section inherits
pub const DEFAULT_SECTION_NAME: &str = "DEFAULT";

/// Configuration source backed by an INI file
///
/// Values are read verbatim: quotes and backslashes are kept as written.
/// Keys in `[DEFAULT]` are inherited by every section unless the section
/// sets them itself; `[DEFAULT]` is not a section of its own.
#[derive(Debug, Clone)]
pub struct IniConfigurationSource {
    path: PathBuf,
}

impl IniConfigurationSource {
    /// Create a new IniConfigurationSource for the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_option() -> ParseOption {
        ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        }
    }
}

impl ConfigurationSource for IniConfigurationSource {
    fn load(&self) -> Result<ConfigurationStore, SourceError> {
        tracing::debug!(path = %self.path.display(), "Loading configuration");

        let ini = Ini::load_from_file_opt(&self.path, Self::parse_option())?;
        Ok(store_from_ini(&ini))
    }
}

fn store_from_ini(ini: &Ini) -> ConfigurationStore {
    let defaults: Section = ini
        .section(Some(DEFAULT_SECTION_NAME))
        .map(section_entries)
        .unwrap_or_default();

    let mut store = ConfigurationStore::new();
    for (name, properties) in ini.iter() {
        // keys outside any [section] are not connection settings
        let Some(name) = name else {
            continue;
        };
        if name == DEFAULT_SECTION_NAME {
            continue;
        }

        let mut section = defaults.clone();
        for (key, value) in properties.iter() {
            section.insert(key, value);
        }
        store.insert_section(name, section);
    }

    store
}

fn section_entries(properties: &Properties) -> Section {
    properties.iter().collect()
}
