mod app_type;
mod auth;
mod pages;
mod render;
mod slug;
mod templates;

pub use app_type::determine_app_type;
pub use auth::{auth_domain, generate_auth_api_route, generate_auth_hook};
pub use pages::{
    generate_agent_integrated_page, generate_explore_page, generate_game_page,
    generate_nft_gallery_page, generate_page, generate_poll_page, generate_profile_page,
    generate_settings_page, generate_simple_page, generate_transaction_page,
};
pub use render::render;
pub use slug::{archive_file_name, archive_slug, dir_slug, package_slug, DEFAULT_ARCHIVE_SLUG};
pub use templates::{
    generate_appkit_config, generate_appkit_context, generate_bottom_nav, generate_brand_footer,
    generate_empty_module, generate_env_example, generate_gitignore, generate_globals_css,
    generate_layout, generate_manifest, generate_next_config, generate_onchainkit_provider,
    generate_package_json, generate_postcss_config, generate_readme, generate_tailwind_config,
    generate_tsconfig,
};

use tracing::debug;

use crate::types::{AppType, GeneratedFile, MiniAppConfig};

pub const MANIFEST_PATH: &str = "public/.well-known/farcaster.json";

/// Result of one generation run: the chosen variant and the files
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub app_type: AppType,
    pub files: Vec<GeneratedFile>,
}

/// Classify the config and assemble every file of the scaffold
pub fn plan(config: &MiniAppConfig) -> GenerationPlan {
    let app_type = determine_app_type(config);
    debug!(app_type = %app_type, name = %config.name, "selected page variant");

    let files = assemble(config, app_type);
    debug!(count = files.len(), "assembled scaffold");

    GenerationPlan { app_type, files }
}

/// The complete, ordered file list for a config. Only `app/page.tsx`
/// depends on the app type; everything else is always emitted.
pub fn generate_files(config: &MiniAppConfig) -> Vec<GeneratedFile> {
    plan(config).files
}

fn assemble(config: &MiniAppConfig, app_type: AppType) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new("app/layout.tsx", generate_layout(config)),
        GeneratedFile::new("app/page.tsx", generate_page(app_type, config)),
        GeneratedFile::new("app/globals.css", generate_globals_css()),
        GeneratedFile::new("hooks/useQuickAuth.ts", generate_auth_hook()),
        GeneratedFile::new("app/api/auth/route.ts", generate_auth_api_route(config)),
        GeneratedFile::new("config/index.ts", generate_appkit_config()),
        GeneratedFile::new("context/index.tsx", generate_appkit_context()),
        GeneratedFile::new(
            "components/OnchainKitProvider.tsx",
            generate_onchainkit_provider(),
        ),
        GeneratedFile::new("components/BottomNav.tsx", generate_bottom_nav()),
        GeneratedFile::new("components/BrandFooter.tsx", generate_brand_footer()),
        GeneratedFile::new("app/explore/page.tsx", generate_explore_page(config)),
        GeneratedFile::new("app/profile/page.tsx", generate_profile_page(config)),
        GeneratedFile::new("app/settings/page.tsx", generate_settings_page(config)),
        GeneratedFile::new(MANIFEST_PATH, generate_manifest(config)),
        GeneratedFile::new("package.json", generate_package_json(config)),
        GeneratedFile::new("tsconfig.json", generate_tsconfig()),
        GeneratedFile::new("next.config.mjs", generate_next_config()),
        GeneratedFile::new("tailwind.config.ts", generate_tailwind_config()),
        GeneratedFile::new("postcss.config.mjs", generate_postcss_config()),
        GeneratedFile::new("src/utils/empty-module.js", generate_empty_module()),
        GeneratedFile::new(".env.example", generate_env_example()),
        GeneratedFile::new(".gitignore", generate_gitignore()),
        GeneratedFile::new("README.md", generate_readme(config)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfigInput;
    use crate::types::Category;
    use serde_json::Value;
    use std::collections::HashSet;

    fn scenario_a() -> MiniAppConfig {
        MiniAppConfig {
            name: "Foo Bar".to_string(),
            description: "d".to_string(),
            category: Category::Social,
            features: vec!["Chat".to_string()],
            needs_transaction: false,
            needs_agent: false,
            agent_address: None,
            home_url: "https://x.com".to_string(),
            icon_url: None,
        }
    }

    fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a GeneratedFile {
        files
            .iter()
            .find(|f| f.path == path)
            .unwrap_or_else(|| panic!("missing {}", path))
    }

    #[test]
    fn test_paths_are_unique() {
        let configs = [
            scenario_a(),
            MiniAppConfig {
                needs_agent: true,
                ..scenario_a()
            },
            MiniAppConfig {
                category: Category::Gaming,
                ..scenario_a()
            },
        ];
        for config in configs {
            let files = generate_files(&config);
            let paths: HashSet<_> = files.iter().map(|f| f.path.as_str()).collect();
            assert_eq!(paths.len(), files.len());
        }
    }

    #[test]
    fn test_fixed_order_and_count() {
        let files = generate_files(&scenario_a());
        assert_eq!(files.len(), 23);
        assert_eq!(files[0].path, "app/layout.tsx");
        assert_eq!(files[1].path, "app/page.tsx");
        assert_eq!(files[13].path, MANIFEST_PATH);
        assert_eq!(files[22].path, "README.md");
    }

    #[test]
    fn test_only_page_varies_by_app_type() {
        let simple = generate_files(&scenario_a());
        let game = generate_files(&MiniAppConfig {
            category: Category::Gaming,
            ..scenario_a()
        });

        for (a, b) in simple.iter().zip(game.iter()) {
            assert_eq!(a.path, b.path);
            if a.path == "app/page.tsx" {
                assert_ne!(a.content, b.content);
            } else if a.path != MANIFEST_PATH {
                assert_eq!(a.content, b.content, "{} changed", a.path);
            }
        }
    }

    #[test]
    fn test_scenario_a_simple() {
        let result = plan(&scenario_a());
        assert_eq!(result.app_type, AppType::Simple);

        let manifest: Value =
            serde_json::from_str(&file(&result.files, MANIFEST_PATH).content).unwrap();
        assert_eq!(manifest["frame"]["homeUrl"], "https://x.com");
        assert_eq!(manifest["frame"]["iconUrl"], "https://x.com/icon.png");
    }

    #[test]
    fn test_scenario_b_transaction() {
        let config = MiniAppConfig {
            needs_transaction: true,
            ..scenario_a()
        };
        let result = plan(&config);
        assert_eq!(result.app_type, AppType::Transaction);
        assert!(file(&result.files, "app/page.tsx")
            .content
            .contains("<TransactionButton />"));
    }

    #[test]
    fn test_scenario_c_game_beats_poll() {
        let config = MiniAppConfig {
            category: Category::Gaming,
            features: vec!["Leaderboard Poll".to_string()],
            ..scenario_a()
        };
        assert_eq!(plan(&config).app_type, AppType::Game);
    }

    #[test]
    fn test_scenario_d_default_name_slug() {
        let input = AppConfigInput {
            name: Some(String::new()),
            ..Default::default()
        };
        let files = generate_files(&input.resolve());
        let package: Value = serde_json::from_str(&file(&files, "package.json").content).unwrap();
        assert_eq!(package["name"], "my-mini-app");
    }

    #[test]
    fn test_no_placeholder_left_unfilled() {
        for config in [
            scenario_a(),
            MiniAppConfig {
                needs_agent: true,
                ..scenario_a()
            },
            MiniAppConfig {
                features: vec!["NFT drops".to_string()],
                ..scenario_a()
            },
        ] {
            for file in generate_files(&config) {
                assert!(!file.content.contains("[["), "{} has a placeholder", file.path);
            }
        }
    }

    #[test]
    fn test_readme_summarises_features() {
        let files = generate_files(&scenario_a());
        assert!(file(&files, "README.md").content.contains("- Chat"));
    }
}
