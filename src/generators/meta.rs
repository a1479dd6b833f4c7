//! Project metadata artifacts: environment template, ignore file, README.

use super::GeneratedFile;
use crate::config::ProjectConfig;

/// Environment variable holding the bot token in generated projects.
/// Used by the environment template, the entry point, and the README.
pub const TOKEN_ENV_KEY: &str = "BOT_TOKEN";

/// Produces `.env` with the token placeholder.
pub fn env_file() -> GeneratedFile {
    GeneratedFile::text(".env", format!("{TOKEN_ENV_KEY}=your-bot-token-here\n"))
}

/// Produces `.gitignore` excluding the dependency cache, the environment
/// file, and the build output.
pub fn gitignore() -> GeneratedFile {
    GeneratedFile::text(".gitignore", "node_modules/\n.env\ndist/\n")
}

/// Produces `README.md` with setup instructions and a feature list
/// reflecting the configuration.
pub fn readme(config: &ProjectConfig) -> GeneratedFile {
    let mut features = vec![
        "- Discord.js v14".to_string(),
        format!("- {} support", config.language),
        "- Organized project structure".to_string(),
        "- Environment variables support".to_string(),
    ];
    if config.interactions.is_enabled() {
        features.push("- Slash commands support".to_string());
    }

    let content = format!(
        r#"# {name}

A Discord bot created with create-discord-app

## Getting Started

1. Clone this repository
2. Run `npm install`
3. Create a `.env` file and add your bot token:
   ```
   {TOKEN_ENV_KEY}=your-bot-token-here
   ```
4. Run `npm start` to start the bot

## Features

{features}
"#,
        name = config.project_name,
        features = features.join("\n"),
    );

    GeneratedFile::text("README.md", content)
}
