use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use miniapp_builder::cli::{run_new, run_serve, tui::print_error, Args, Command};

fn init_tracing(verbose: bool, serving: bool) {
    let default_level = if verbose {
        "miniapp_builder=debug"
    } else if serving {
        "miniapp_builder=info"
    } else {
        "miniapp_builder=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    match args.command_or_default() {
        Command::New(new_args) => run_new(&new_args),
        Command::Serve { host, port } => run_serve(&host, port).await,
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let serving = matches!(args.command, Some(Command::Serve { .. }));
    init_tracing(args.verbose, serving);

    if let Err(e) = run(args).await {
        print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
