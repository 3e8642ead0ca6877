//! toggle-blocks CLI
//!
//! Enables and disables named blocks (pre-commit hooks, CI jobs, mapping
//! keys) in YAML-like configuration files by commenting them out.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use toggle_engine::BlockState;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::ToggleContext;
use error::Result;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("{} Named block toggler", "toggle-blocks".green().bold());
        println!();
        println!("Run {} for available commands.", "toggle-blocks --help".cyan());
        return Ok(());
    };

    let ctx = ToggleContext::new(cli.profile, cli.config.as_deref())?;
    execute_command(&ctx, command)
}

fn execute_command(ctx: &ToggleContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { path, json } => commands::run_list(ctx, path.as_deref(), json),
        Commands::Show { path, name } => commands::run_show(ctx, &path, &name),
        Commands::Disable {
            path,
            name,
            dry_run,
            json,
        } => commands::run_toggle(ctx, &path, &name, BlockState::Disabled, dry_run, json),
        Commands::Enable {
            path,
            name,
            dry_run,
            json,
        } => commands::run_toggle(ctx, &path, &name, BlockState::Enabled, dry_run, json),
        Commands::Profiles => commands::run_profiles(ctx),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "toggle-blocks",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
