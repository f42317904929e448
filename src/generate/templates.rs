//! Supporting templates: layout, providers, navigation, manifest and the
//! build/config files of the generated Next.js project.

use serde::Serialize;

use super::render::render;
use super::slug::package_slug;
use crate::types::MiniAppConfig;

// ============================================================================
// MANIFEST
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    account_association: AccountAssociation,
    frame: Frame,
}

/// Left empty; filled in after the domain is verified on the platform
#[derive(Serialize, Default)]
struct AccountAssociation {
    header: String,
    payload: String,
    signature: String,
}

/// Field order here is the order keys appear in the emitted JSON
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Frame {
    version: &'static str,
    name: String,
    home_url: String,
    icon_url: String,
    splash_image_url: String,
    splash_background_color: &'static str,
    webhook_url: String,
    subtitle: String,
    description: String,
    screenshot_urls: Vec<String>,
    primary_category: &'static str,
    tags: [&'static str; 3],
    hero_image_url: String,
    tagline: String,
    og_title: String,
    og_description: String,
    og_image_url: String,
    noindex: bool,
}

impl Frame {
    fn from_config(config: &MiniAppConfig) -> Self {
        let home = &config.home_url;
        let category = config.category.as_str();
        Self {
            version: "1",
            name: config.name.clone(),
            home_url: home.clone(),
            icon_url: config.icon_url(),
            splash_image_url: format!("{}/splash.png", home),
            splash_background_color: "#000000",
            webhook_url: format!("{}/api/webhook", home),
            subtitle: config.description.clone(),
            description: config.description.clone(),
            screenshot_urls: Vec::new(),
            primary_category: category,
            tags: [category, "miniapp", "base"],
            hero_image_url: format!("{}/og.png", home),
            tagline: config.description.clone(),
            og_title: config.name.clone(),
            og_description: config.description.clone(),
            og_image_url: format!("{}/og.png", home),
            noindex: false,
        }
    }
}

/// `public/.well-known/farcaster.json`, pretty-printed with two-space indent
pub fn generate_manifest(config: &MiniAppConfig) -> String {
    let manifest = Manifest {
        account_association: AccountAssociation::default(),
        frame: Frame::from_config(config),
    };
    serde_json::to_string_pretty(&manifest).unwrap_or_else(|_| "{}".to_string())
}

// ============================================================================
// APP SHELL
// ============================================================================

pub fn generate_layout(config: &MiniAppConfig) -> String {
    render(LAYOUT, &[
        ("name", config.name.as_str()),
        ("description", config.description.as_str()),
    ])
}

pub fn generate_globals_css() -> String {
    GLOBALS_CSS.to_string()
}

pub fn generate_appkit_config() -> String {
    APPKIT_CONFIG.to_string()
}

pub fn generate_appkit_context() -> String {
    APPKIT_CONTEXT.to_string()
}

pub fn generate_onchainkit_provider() -> String {
    ONCHAINKIT_PROVIDER.to_string()
}

pub fn generate_bottom_nav() -> String {
    BOTTOM_NAV.to_string()
}

pub fn generate_brand_footer() -> String {
    BRAND_FOOTER.to_string()
}

// ============================================================================
// PROJECT FILES
// ============================================================================

/// `package.json`; the name is the package slug, JSON-encoded so names with
/// quotes still produce valid JSON
pub fn generate_package_json(config: &MiniAppConfig) -> String {
    let name = serde_json::Value::String(package_slug(&config.name)).to_string();
    render(PACKAGE_JSON, &[("package_name", name.as_str())])
}

pub fn generate_tsconfig() -> String {
    TSCONFIG.to_string()
}

pub fn generate_next_config() -> String {
    NEXT_CONFIG.to_string()
}

pub fn generate_tailwind_config() -> String {
    TAILWIND_CONFIG.to_string()
}

pub fn generate_postcss_config() -> String {
    POSTCSS_CONFIG.to_string()
}

pub fn generate_empty_module() -> String {
    "// Empty module stub for optional dependencies\nmodule.exports = {};\n".to_string()
}

pub fn generate_env_example() -> String {
    ENV_EXAMPLE.to_string()
}

pub fn generate_gitignore() -> String {
    GITIGNORE.to_string()
}

pub fn generate_readme(config: &MiniAppConfig) -> String {
    let features = config
        .features
        .iter()
        .map(|f| format!("- {}", f))
        .collect::<Vec<_>>()
        .join("\n");
    render(README, &[
        ("name", config.name.as_str()),
        ("description", config.description.as_str()),
        ("feature_list", features.as_str()),
    ])
}

// ============================================================================
// TEMPLATE TEXT
// ============================================================================

const LAYOUT: &str = r#"import './globals.css';
import { headers } from 'next/headers';
import ContextProvider from '@/context';
import { OnchainKitWrapper } from '@/components/OnchainKitProvider';
import BottomNav from '@/components/BottomNav';
import BrandFooter from '@/components/BrandFooter';

export const metadata = {
  title: '[[ name ]]',
  description: '[[ description ]]',
};

export default async function RootLayout({
  children,
}: {
  children: React.ReactNode;
}) {
  const headersObj = await headers();
  const cookies = headersObj.get('cookie');

  return (
    <html lang="en">
      <body>
        <ContextProvider cookies={cookies}>
          <OnchainKitWrapper>
            {children}
            <BrandFooter />
            <BottomNav />
          </OnchainKitWrapper>
        </ContextProvider>
      </body>
    </html>
  );
}
"#;

const GLOBALS_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

:root {
  --background: #ffffff;
  --foreground: #000000;
}

@media (prefers-color-scheme: dark) {
  :root {
    --background: #000000;
    --foreground: #ffffff;
  }
}

body {
  color: var(--foreground);
  background: var(--background);
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen', 'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue', sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}
"#;

const APPKIT_CONFIG: &str = r#"import { cookieStorage, createStorage, http } from '@wagmi/core';
import { WagmiAdapter } from '@reown/appkit-adapter-wagmi';
import { base } from '@reown/appkit/networks';

// Get projectId from https://dashboard.reown.com
export const projectId = process.env.NEXT_PUBLIC_PROJECT_ID || '';

if (!projectId) {
  console.warn('NEXT_PUBLIC_PROJECT_ID is not defined. WalletConnect will not work properly.');
}

export const networks = [base];

// Set up the Wagmi Adapter (Config)
export const wagmiAdapter = new WagmiAdapter({
  storage: createStorage({
    storage: cookieStorage,
  }),
  ssr: true,
  projectId,
  networks,
});

export const config = wagmiAdapter.wagmiConfig;
"#;

const APPKIT_CONTEXT: &str = r#"'use client';

import { wagmiAdapter, projectId } from '@/config';
import { QueryClient, QueryClientProvider } from '@tanstack/react-query';
import { createAppKit } from '@reown/appkit/react';
import { base } from '@reown/appkit/networks';
import React, { type ReactNode } from 'react';
import { cookieToInitialState, WagmiProvider, type Config } from 'wagmi';

// Set up queryClient
const queryClient = new QueryClient();

// Set up metadata
const metadata = {
  name: process.env.NEXT_PUBLIC_APP_NAME || 'Mini App',
  description: process.env.NEXT_PUBLIC_APP_DESCRIPTION || 'A Base Mini App',
  url: typeof window !== 'undefined' ? window.location.origin : 'https://example.com',
  icons: ['https://avatars.githubusercontent.com/u/179229932'],
};

// Create the modal (only if projectId is available)
if (projectId) {
  createAppKit({
    adapters: [wagmiAdapter],
    projectId,
    networks: [base],
    defaultNetwork: base,
    metadata: metadata,
    features: {
      analytics: true,
    },
  });
}

function ContextProvider({ children, cookies }: { children: ReactNode; cookies: string | null }) {
  const initialState = cookieToInitialState(wagmiAdapter.wagmiConfig as Config, cookies);

  return (
    <WagmiProvider config={wagmiAdapter.wagmiConfig as Config} initialState={initialState}>
      <QueryClientProvider client={queryClient}>{children}</QueryClientProvider>
    </WagmiProvider>
  );
}

export default ContextProvider;
"#;

const ONCHAINKIT_PROVIDER: &str = r#"'use client';

import { OnchainKitProvider } from '@coinbase/onchainkit';
import { base } from 'wagmi/chains';
import type { ReactNode } from 'react';

export function OnchainKitWrapper({ children }: { children: ReactNode }) {
  return (
    <OnchainKitProvider
      apiKey={process.env.NEXT_PUBLIC_ONCHAINKIT_API_KEY || ''}
      chain={base}
      miniKit={{ enabled: true }}
    >
      {children}
    </OnchainKitProvider>
  );
}
"#;

const BOTTOM_NAV: &str = r#"'use client';

import Link from 'next/link';
import { usePathname } from 'next/navigation';

const navItems = [
  { href: '/', label: 'Home', icon: '🏠' },
  { href: '/explore', label: 'Explore', icon: '🧭' },
  { href: '/profile', label: 'Profile', icon: '👤' },
  { href: '/settings', label: 'Settings', icon: '⚙️' },
];

export default function BottomNav() {
  const pathname = usePathname();

  return (
    <nav className="fixed bottom-0 left-0 right-0 z-40 border-t border-gray-200 dark:border-gray-800 bg-white/90 dark:bg-gray-900/90 backdrop-blur">
      <ul className="flex justify-around max-w-md mx-auto">
        {navItems.map((item) => {
          const isActive = pathname === item.href;
          return (
            <li key={item.href}>
              <Link
                href={item.href}
                className={`flex flex-col items-center py-2 px-4 text-xs transition-colors ${
                  isActive
                    ? 'text-blue-500'
                    : 'text-gray-500 hover:text-gray-800 dark:hover:text-gray-200'
                }`}
              >
                <span className="text-lg">{item.icon}</span>
                <span>{item.label}</span>
              </Link>
            </li>
          );
        })}
      </ul>
    </nav>
  );
}
"#;

const BRAND_FOOTER: &str = r#"export default function BrandFooter() {
  return (
    <footer className="pb-24 pt-8 text-center text-xs text-gray-500">
      Built with <span className="font-semibold">DEV ROYALE</span> on Base
    </footer>
  );
}
"#;

const PACKAGE_JSON: &str = r#"{
  "name": [[ package_name ]],
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "next lint"
  },
  "dependencies": {
    "@coinbase/onchainkit": "latest",
    "@coinbase/wallet-sdk": "latest",
    "@farcaster/miniapp-sdk": "latest",
    "@farcaster/quick-auth": "latest",
    "@reown/appkit": "latest",
    "@reown/appkit-adapter-wagmi": "latest",
    "@tanstack/react-query": "^5.0.0",
    "next": "^14.2.0",
    "react": "^18.3.0",
    "react-dom": "^18.3.0",
    "wagmi": "^2.10.0",
    "viem": "^2.10.0"
  },
  "devDependencies": {
    "@types/node": "^20.14.0",
    "@types/react": "^18.3.0",
    "@types/react-dom": "^18.3.0",
    "autoprefixer": "^10.4.19",
    "eslint": "^8.57.0",
    "eslint-config-next": "^14.2.0",
    "postcss": "^8.4.39",
    "tailwindcss": "^3.4.6",
    "typescript": "^5.5.0"
  }
}
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [
      {
        "name": "next"
      }
    ],
    "paths": {
      "@/*": ["./*"]
    }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

const NEXT_CONFIG: &str = r#"import path from 'path';
import { fileURLToPath } from 'url';

const __filename = fileURLToPath(import.meta.url);
const __dirname = path.dirname(__filename);

/** @type {import('next').NextConfig} */
const nextConfig = {
  reactStrictMode: true,
  webpack: (config) => {
    // Add externals for optional dependencies
    config.externals.push('pino-pretty', 'lokijs', 'encoding');

    // Create alias for optional wallet connector dependencies to empty modules
    config.resolve.alias = {
      ...config.resolve.alias,
      '@gemini-wallet/core': path.resolve(__dirname, 'src/utils/empty-module.js'),
      '@solana/kit': path.resolve(__dirname, 'src/utils/empty-module.js'),
    };

    return config;
  },
}

export default nextConfig;
"#;

const TAILWIND_CONFIG: &str = r#"import type { Config } from 'tailwindcss'

const config: Config = {
  content: [
    './app/**/*.{js,ts,jsx,tsx,mdx}',
    './components/**/*.{js,ts,jsx,tsx,mdx}',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
export default config
"#;

const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
"#;

const ENV_EXAMPLE: &str = r#"NEXT_PUBLIC_ONCHAINKIT_API_KEY=your_api_key_here
NEXT_PUBLIC_BACKEND_ORIGIN=http://localhost:3000
NEXT_PUBLIC_PROJECT_ID=your_reown_project_id_here
NEXT_PUBLIC_APP_NAME=Your App Name
NEXT_PUBLIC_APP_DESCRIPTION=Your App Description
QUICK_AUTH_DOMAIN=your-domain.com
"#;

const GITIGNORE: &str = r#"# dependencies
/node_modules
/.pnp
.pnp.js

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# local env files
.env*.local
.env

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
"#;

const README: &str = r#"# [[ name ]]

[[ description ]]

## Getting Started

1. Copy `.env.example` to `.env.local` and fill in your keys:
   ```
   cp .env.example .env.local
   ```

2. Install dependencies:
   ```
   npm install
   ```

   If you encounter dependency conflicts, try:
   ```
   npm install --legacy-peer-deps
   ```

3. Run the development server:
   ```
   npm run dev
   ```

4. Open [http://localhost:3000](http://localhost:3000) in your browser.

## Deploy

Deploy your Mini App to any Next.js hosting platform (Vercel, etc.).

Make sure to:
- Set `NEXT_PUBLIC_ONCHAINKIT_API_KEY` in your environment variables
- Set `NEXT_PUBLIC_PROJECT_ID` to your Reown project id for wallet connections
- Set `QUICK_AUTH_DOMAIN` to match your deployment domain for authentication
- Update the manifest at `public/.well-known/farcaster.json` with your production URLs
- Verify your manifest at [base.dev/preview](https://base.dev/preview)

## Authentication

Authentication is already set up:

- Frontend hook: `hooks/useQuickAuth.ts` - signs in with Farcaster inside a Mini App and falls back to a wallet signature in the browser
- Backend route: `app/api/auth/route.ts` - verifies SIWF messages, wallet signatures and Quick Auth tokens
- All pages are protected and require authentication

## Features

[[ feature_list ]]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use serde_json::Value;

    fn sample() -> MiniAppConfig {
        MiniAppConfig {
            name: "Foo Bar".to_string(),
            description: "d".to_string(),
            category: Category::Social,
            features: vec!["Chat".to_string()],
            home_url: "https://x.com".to_string(),
            ..Default::default()
        }
    }

    const FRAME_KEYS: [&str; 18] = [
        "version",
        "name",
        "homeUrl",
        "iconUrl",
        "splashImageUrl",
        "splashBackgroundColor",
        "webhookUrl",
        "subtitle",
        "description",
        "screenshotUrls",
        "primaryCategory",
        "tags",
        "heroImageUrl",
        "tagline",
        "ogTitle",
        "ogDescription",
        "ogImageUrl",
        "noindex",
    ];

    #[test]
    fn test_manifest_shape() {
        let manifest: Value = serde_json::from_str(&generate_manifest(&sample())).unwrap();
        let root = manifest.as_object().unwrap();
        assert_eq!(root.len(), 2);

        let association = root["accountAssociation"].as_object().unwrap();
        assert_eq!(association.len(), 3);
        assert_eq!(association["header"], "");
        assert_eq!(association["payload"], "");
        assert_eq!(association["signature"], "");

        let frame = root["frame"].as_object().unwrap();
        assert_eq!(frame.len(), FRAME_KEYS.len());
        for key in FRAME_KEYS {
            assert!(frame.contains_key(key), "missing key {}", key);
        }
        assert_eq!(frame["version"], "1");
        assert_eq!(frame["noindex"], false);
        assert_eq!(frame["screenshotUrls"], Value::Array(vec![]));
        assert_eq!(frame["tags"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_manifest_urls() {
        let manifest: Value = serde_json::from_str(&generate_manifest(&sample())).unwrap();
        let frame = &manifest["frame"];
        assert_eq!(frame["homeUrl"], "https://x.com");
        assert_eq!(frame["iconUrl"], "https://x.com/icon.png");
        assert_eq!(frame["splashImageUrl"], "https://x.com/splash.png");
        assert_eq!(frame["webhookUrl"], "https://x.com/api/webhook");
        assert_eq!(frame["heroImageUrl"], "https://x.com/og.png");
        assert_eq!(frame["ogImageUrl"], "https://x.com/og.png");
        assert_eq!(frame["tags"], serde_json::json!(["social", "miniapp", "base"]));
        assert_eq!(frame["primaryCategory"], "social");
    }

    #[test]
    fn test_manifest_icon_override_and_escaping() {
        let config = MiniAppConfig {
            name: "Say \"hi\"".to_string(),
            category: Category::Defi,
            icon_url: Some("https://cdn.x.com/icon.svg".to_string()),
            ..sample()
        };
        let manifest: Value = serde_json::from_str(&generate_manifest(&config)).unwrap();
        assert_eq!(manifest["frame"]["iconUrl"], "https://cdn.x.com/icon.svg");
        assert_eq!(manifest["frame"]["name"], "Say \"hi\"");
        assert_eq!(manifest["frame"]["tags"][0], "defi");
    }

    #[test]
    fn test_manifest_key_order() {
        let manifest = generate_manifest(&sample());
        let version = manifest.find("\"version\"").unwrap();
        let noindex = manifest.find("\"noindex\"").unwrap();
        assert!(manifest.starts_with("{\n  \"accountAssociation\""));
        assert!(version < noindex);
    }

    #[test]
    fn test_package_json_name_is_slug() {
        let package: Value = serde_json::from_str(&generate_package_json(&sample())).unwrap();
        assert_eq!(package["name"], "foo-bar");
        assert_eq!(package["private"], true);
    }

    #[test]
    fn test_package_json_valid_with_quotes_in_name() {
        let config = MiniAppConfig {
            name: "The \"Best\" App".to_string(),
            ..sample()
        };
        let package: Value = serde_json::from_str(&generate_package_json(&config)).unwrap();
        assert_eq!(package["name"], "the-\"best\"-app");
    }

    #[test]
    fn test_tsconfig_is_json() {
        let tsconfig: Value = serde_json::from_str(&generate_tsconfig()).unwrap();
        assert_eq!(tsconfig["compilerOptions"]["paths"]["@/*"][0], "./*");
    }

    #[test]
    fn test_layout_metadata() {
        let layout = generate_layout(&sample());
        assert!(layout.contains("title: 'Foo Bar'"));
        assert!(layout.contains("description: 'd'"));
        assert!(layout.contains("<BottomNav />"));
    }

    #[test]
    fn test_readme_lists_features() {
        let config = MiniAppConfig {
            features: vec!["Chat".to_string(), "Polls".to_string()],
            ..sample()
        };
        let readme = generate_readme(&config);
        assert!(readme.starts_with("# Foo Bar\n\nd\n"));
        assert!(readme.ends_with("## Features\n\n- Chat\n- Polls\n"));
    }
}
