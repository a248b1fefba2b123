//! create-vanilla's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the prompt flow and project
//! generation, and prints the follow-up commands.

use console::style;

use create_vanilla::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    generator::{generate, next_steps},
    logger::init_logger,
    prompt::{resolve_options, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration (template root, package manager)
/// 2. Prompts for the choices the flags left open
/// 3. Generates the project
/// 4. Prints the follow-up commands
fn run(args: Args) -> Result<()> {
    let config = Config::from_args(&args)?;
    let prompt = DialoguerPrompter::new();
    let engine = MiniJinjaRenderer::new();

    let options = resolve_options(&args.presets(), &prompt)?;

    println!("\nScaffolding project in {}...", options.project_root(&config.cwd).display());

    let root = generate(&options, &config, &engine)?;

    println!("\nDone. Now run:\n");
    for step in next_steps(&root, &config.cwd, config.package_manager) {
        println!("  {}", style(step).green().bold());
    }
    println!();

    Ok(())
}
