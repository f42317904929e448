use anyhow::Result;
use inquire::{Confirm, Select, Text};
use std::path::Path;

use crate::config::{AppConfigInput, CategoryInput};
use crate::types::{Category, DEFAULT_DESCRIPTION, DEFAULT_HOME_URL, DEFAULT_NAME};

/// Menu entry for the category select; numbered like the classic 1-4 prompt
struct CategoryChoice(usize, Category);

impl std::fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.0, self.1)
    }
}

/// Ask for every config field in order. Blank answers are kept blank here;
/// defaults are applied when the input is resolved.
pub fn collect_config() -> Result<AppConfigInput> {
    let name = Text::new("Mini App name:")
        .with_placeholder(DEFAULT_NAME)
        .prompt()?;

    let description = Text::new("Description:")
        .with_placeholder(DEFAULT_DESCRIPTION)
        .prompt()?;

    let choices: Vec<CategoryChoice> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| CategoryChoice(i + 1, *c))
        .collect();
    let category = Select::new("Category:", choices)
        .with_starting_cursor(0)
        .prompt()?
        .1;

    let home_url = Text::new("Home URL:")
        .with_placeholder(DEFAULT_HOME_URL)
        .with_help_message("e.g. https://your-miniapp.com")
        .prompt()?;

    let mut features = Vec::new();
    loop {
        let feature = Text::new("Feature:")
            .with_help_message("Press Enter on an empty line to finish")
            .prompt()?;
        if feature.trim().is_empty() {
            break;
        }
        features.push(feature);
    }

    let needs_transaction = Confirm::new("Needs transaction support?")
        .with_default(false)
        .prompt()?;
    let needs_agent = Confirm::new("Needs agent integration?")
        .with_default(false)
        .prompt()?;

    let agent_address = if needs_agent {
        Some(
            Text::new("Agent address:")
                .with_placeholder("0x...")
                .prompt()?,
        )
    } else {
        None
    };

    Ok(AppConfigInput {
        name: Some(name),
        description: Some(description),
        category: Some(CategoryInput::Name(category.as_str().to_string())),
        features: Some(features),
        needs_transaction: Some(needs_transaction),
        needs_agent: Some(needs_agent),
        agent_address,
        home_url: Some(home_url),
        icon_url: None,
    })
}

/// Ask before replacing an existing output directory or archive
pub fn confirm_overwrite(dir: &Path) -> Result<bool> {
    let answer = Confirm::new(&format!(
        "\"{}\" already exists. Overwrite?",
        dir.display()
    ))
    .with_default(false)
    .prompt()?;
    Ok(answer)
}
