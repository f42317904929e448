//! Loosely-typed app configuration as it arrives from a config file, an
//! HTTP body or the interactive prompt, and the defaulting step that turns
//! it into a [`MiniAppConfig`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::{
    Category, MiniAppConfig, DEFAULT_DESCRIPTION, DEFAULT_FEATURES, DEFAULT_HOME_URL, DEFAULT_NAME,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Category as supplied by the user: a name or a 1-based menu number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryInput {
    Name(String),
    Choice(i64),
}

impl CategoryInput {
    fn resolve(&self) -> Category {
        match self {
            CategoryInput::Name(name) => Category::from_selection(name),
            CategoryInput::Choice(n) => Category::from_selection(&n.to_string()),
        }
    }
}

/// Every field optional; missing or blank values are filled in by
/// [`AppConfigInput::resolve`] rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfigInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<CategoryInput>,
    pub features: Option<Vec<String>>,
    #[serde(alias = "needs_transaction")]
    pub needs_transaction: Option<bool>,
    #[serde(alias = "needs_agent")]
    pub needs_agent: Option<bool>,
    #[serde(alias = "agent_address")]
    pub agent_address: Option<String>,
    #[serde(alias = "home_url")]
    pub home_url: Option<String>,
    #[serde(alias = "icon_url")]
    pub icon_url: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl AppConfigInput {
    pub fn resolve(&self) -> MiniAppConfig {
        let needs_agent = self.needs_agent.unwrap_or(false);

        let mut features: Vec<String> = self
            .features
            .iter()
            .flatten()
            .filter(|f| !f.trim().is_empty())
            .cloned()
            .collect();
        if features.is_empty() {
            features = DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect();
        }

        MiniAppConfig {
            name: non_blank(self.name.as_ref()).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            description: non_blank(self.description.as_ref())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            category: self
                .category
                .as_ref()
                .map(CategoryInput::resolve)
                .unwrap_or_default(),
            features,
            needs_transaction: self.needs_transaction.unwrap_or(false),
            needs_agent,
            agent_address: if needs_agent {
                non_blank(self.agent_address.as_ref())
            } else {
                None
            },
            home_url: non_blank(self.home_url.as_ref())
                .unwrap_or_else(|| DEFAULT_HOME_URL.to_string()),
            icon_url: non_blank(self.icon_url.as_ref()),
        }
    }
}

/// Load an app config from disk. `.json` files are parsed as JSON,
/// everything else as TOML.
pub fn load_config_file(path: &Path) -> Result<AppConfigInput, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}
