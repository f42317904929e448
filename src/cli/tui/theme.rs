use console::style;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::Path;

use crate::types::{AppType, GeneratedFile};

pub fn miniapp_theme() -> RenderConfig<'static> {
    RenderConfig {
        prompt_prefix: Styled::new("?").with_fg(Color::LightBlue),
        highlighted_option_prefix: Styled::new("❯").with_fg(Color::LightBlue),
        answer: StyleSheet::new().with_fg(Color::LightBlue),
        help_message: StyleSheet::new()
            .with_fg(Color::DarkGrey)
            .with_attr(Attributes::ITALIC),
        ..Default::default()
    }
}

pub fn print_banner() {
    println!();
    println!(
        "  {}  {}",
        style("🚀").blue(),
        style("Mini App Builder").blue().bold()
    );
    println!("  {}", style("Interactive Setup").dim());
    println!();
}

pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), message);
}

pub fn print_plan(app_type: AppType, files: &[GeneratedFile]) {
    println!();
    println!(
        "  {} {}",
        style("App type:").bold(),
        style(app_type).cyan()
    );
    println!("  {} {}", style("Files:").bold(), files.len());
    for file in files {
        println!(
            "    {} {}",
            style(&file.path).green(),
            style(format!("({} bytes)", file.content.len())).dim()
        );
    }
    println!();
}

fn print_brand() {
    println!();
    println!("  ╔════════════════════════════════════╗");
    println!("  ║                                    ║");
    println!("  ║            DEV ROYALE              ║");
    println!("  ║                                    ║");
    println!("  ╚════════════════════════════════════╝");
}

/// Closing banner with next steps; archives only need unpacking first
pub fn print_summary(output: &Path, is_zip: bool) {
    print_brand();
    println!();
    println!(
        "  {} {}",
        style("✅").green(),
        style("Mini App generated successfully!").green().bold()
    );
    println!();
    println!(
        "  {} {}",
        style("📁 Output:").bold(),
        style(output.display()).cyan()
    );
    println!();
    println!("  {}", style("Next steps:").bold());

    let dir_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());

    let mut steps = Vec::new();
    if is_zip {
        steps.push(format!("unzip {}", dir_name));
    } else {
        steps.push(format!("cd {}", dir_name));
    }
    steps.push("cp .env.example .env.local".to_string());
    steps.push("Add your NEXT_PUBLIC_ONCHAINKIT_API_KEY to .env.local".to_string());
    steps.push("npm install".to_string());
    steps.push("npm run dev".to_string());

    for (i, step) in steps.iter().enumerate() {
        println!(
            "    {} {}",
            style(format!("{}.", i + 1)).dim(),
            style(step).cyan()
        );
    }
    println!();
}
