//! create-discord-app's main entry point and orchestration logic.
//! Handles command-line argument parsing, answer collection, and the
//! generation flow.

use std::path::Path;

use create_discord_app::{
    cli::get_args,
    config::{collect_config, Language, ProjectConfig},
    error::{default_error_handler, Result},
    processor::generate,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args.project_directory) {
        default_error_handler(err);
    }
}

fn print_summary(target: &Path, config: &ProjectConfig) {
    println!("\nSuccess! Created {} at {}", config.project_name, target.display());
    println!("\nInside that directory, you can run several commands:");
    println!("\n  npm start");
    println!("    Starts the development server.");
    if config.language == Language::TypeScript {
        println!("\n  npm run build");
        println!("    Builds the app for production.");
    }
    println!("\nWe suggest that you begin by typing:");
    println!("\n  cd {}", config.project_name);
    println!("  npm install");
    println!("  npm start");
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects the configuration, prompting for missing answers
/// 2. Creates the directory skeleton under the target root
/// 3. Composes and writes the generated files
/// 4. Prints the success summary with next-step hints
fn run(project_directory: Option<String>) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let config = collect_config(&prompt, project_directory)?;

    let target = std::env::current_dir()?.join(&config.project_name);

    generate(&target, &config)?;
    print_summary(&target, &config);

    Ok(())
}
