use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "miniapp-builder")]
#[command(about = "Scaffold a Base Mini App (Next.js) from a few answers")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbose logging (same as RUST_LOG=miniapp_builder=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a new Mini App (interactive unless --config is given)
    New(NewArgs),

    /// Serve the web form and the /api/generate endpoint
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

#[derive(ClapArgs, Debug, Default, Clone)]
pub struct NewArgs {
    /// Read the app configuration from a TOML or JSON file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output location (default: ./<app-name-slug>, or ./<slug>.zip with --zip)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Replace an existing output directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Write a zip archive instead of a directory tree
    #[arg(long)]
    pub zip: bool,

    /// Print the app type and file list without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// No subcommand means an interactive `new`
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::New(NewArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_new() {
        let args = Args::parse_from(["miniapp-builder"]);
        assert!(matches!(
            args.command_or_default(),
            Command::New(NewArgs { config: None, force: false, .. })
        ));
    }

    #[test]
    fn test_new_flags() {
        let args = Args::parse_from([
            "miniapp-builder",
            "new",
            "--config",
            "app.toml",
            "--output",
            "out",
            "--force",
            "--zip",
        ]);
        match args.command_or_default() {
            Command::New(new) => {
                assert_eq!(new.config, Some(PathBuf::from("app.toml")));
                assert_eq!(new.output, Some(PathBuf::from("out")));
                assert!(new.force);
                assert!(new.zip);
                assert!(!new.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let args = Args::parse_from(["miniapp-builder", "serve", "-v"]);
        assert!(args.verbose);
        match args.command_or_default() {
            Command::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 3000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
