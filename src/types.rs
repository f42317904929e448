use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "My Mini App";
pub const DEFAULT_DESCRIPTION: &str = "A Base Mini App";
pub const DEFAULT_HOME_URL: &str = "https://example.com";
pub const DEFAULT_FEATURES: [&str; 2] = ["Feature 1", "Feature 2"];

/// Placeholder used by the agent page when no address was supplied
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Platform category of the generated Mini App
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Social,
    Gaming,
    Defi,
    Utility,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Social,
        Category::Gaming,
        Category::Defi,
        Category::Utility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Gaming => "gaming",
            Category::Defi => "defi",
            Category::Utility => "utility",
        }
    }

    /// Lenient parse: accepts names (any case) and the numeric menu
    /// choices `1`-`4`. Anything else falls back to `Social`.
    pub fn from_selection(input: &str) -> Self {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .unwrap_or_default();
        }

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(input))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fully defaulted description of the app to scaffold.
///
/// Built from [`crate::config::AppConfigInput::resolve`]; the generator only
/// ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniAppConfig {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub features: Vec<String>,
    pub needs_transaction: bool,
    pub needs_agent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_address: Option<String>,
    pub home_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Default for MiniAppConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            category: Category::Social,
            features: DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect(),
            needs_transaction: false,
            needs_agent: false,
            agent_address: None,
            home_url: DEFAULT_HOME_URL.to_string(),
            icon_url: None,
        }
    }
}

impl MiniAppConfig {
    /// Explicit icon URL, or `{home_url}/icon.png`
    pub fn icon_url(&self) -> String {
        self.icon_url
            .clone()
            .unwrap_or_else(|| format!("{}/icon.png", self.home_url))
    }

    pub fn agent_address(&self) -> &str {
        self.agent_address.as_deref().unwrap_or(ZERO_ADDRESS)
    }
}

/// Which page variant the scaffold gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppType {
    Simple,
    Transaction,
    AgentIntegrated,
    Game,
    Poll,
    NftGallery,
}

impl AppType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Simple => "simple",
            AppType::Transaction => "transaction",
            AppType::AgentIntegrated => "agent-integrated",
            AppType::Game => "game",
            AppType::Poll => "poll",
            AppType::NftGallery => "nft-gallery",
        }
    }
}

impl std::fmt::Display for AppType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One file of the scaffold: POSIX relative path plus its text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_selection_numeric() {
        assert_eq!(Category::from_selection("1"), Category::Social);
        assert_eq!(Category::from_selection("2"), Category::Gaming);
        assert_eq!(Category::from_selection("3"), Category::Defi);
        assert_eq!(Category::from_selection(" 4 "), Category::Utility);
        assert_eq!(Category::from_selection("0"), Category::Social);
        assert_eq!(Category::from_selection("9"), Category::Social);
    }

    #[test]
    fn test_category_from_selection_names() {
        assert_eq!(Category::from_selection("gaming"), Category::Gaming);
        assert_eq!(Category::from_selection("DeFi"), Category::Defi);
        assert_eq!(Category::from_selection(""), Category::Social);
        assert_eq!(Category::from_selection("music"), Category::Social);
    }

    #[test]
    fn test_icon_url_derived_from_home() {
        let config = MiniAppConfig {
            home_url: "https://x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.icon_url(), "https://x.com/icon.png");

        let config = MiniAppConfig {
            icon_url: Some("https://cdn.x.com/i.png".to_string()),
            ..config
        };
        assert_eq!(config.icon_url(), "https://cdn.x.com/i.png");
    }

    #[test]
    fn test_app_type_names() {
        assert_eq!(AppType::AgentIntegrated.to_string(), "agent-integrated");
        assert_eq!(AppType::NftGallery.as_str(), "nft-gallery");
        assert_eq!(
            serde_json::to_string(&AppType::NftGallery).unwrap(),
            "\"nft-gallery\""
        );
    }
}
