//! Scaffolding for Base Mini Apps.
//!
//! A [`MiniAppConfig`] is classified into an [`AppType`], expanded into the
//! ordered file list of a Next.js project by [`generate::generate_files`], and
//! then written to disk or packed into a zip by [`emit`].

pub mod cli;
pub mod config;
pub mod emit;
pub mod generate;
pub mod types;

pub use config::{AppConfigInput, ConfigError};
pub use generate::{determine_app_type, generate_files, plan, GenerationPlan};
pub use types::{AppType, Category, GeneratedFile, MiniAppConfig};
