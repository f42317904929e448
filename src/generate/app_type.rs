use crate::types::{AppType, Category, MiniAppConfig};

fn any_feature_contains(config: &MiniAppConfig, needle: &str) -> bool {
    config
        .features
        .iter()
        .any(|f| f.to_lowercase().contains(needle))
}

/// Pick the page variant for a config. Checks run in priority order, so an
/// agent app that also needs transactions is still `AgentIntegrated`.
///
/// The "poll"/"nft" checks are plain substring matches on feature text:
/// "Polling rate settings" also selects the poll page.
pub fn determine_app_type(config: &MiniAppConfig) -> AppType {
    if config.needs_agent {
        return AppType::AgentIntegrated;
    }
    if config.needs_transaction {
        return AppType::Transaction;
    }
    if config.category == Category::Gaming {
        return AppType::Game;
    }
    if any_feature_contains(config, "poll") {
        return AppType::Poll;
    }
    if any_feature_contains(config, "nft") {
        return AppType::NftGallery;
    }
    AppType::Simple
}
