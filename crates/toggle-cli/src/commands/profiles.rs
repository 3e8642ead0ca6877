//! Profiles command

use colored::Colorize;

use crate::context::ToggleContext;
use crate::error::Result;

/// Run the profiles command
pub fn run_profiles(ctx: &ToggleContext) -> Result<()> {
    println!("{}", "Marker Profiles".bold());
    println!();

    for profile in ctx.profiles().iter() {
        println!("  {:<12} {}", profile.name.green(), profile.pattern.dimmed());
        if let Some(indent) = profile.indent {
            println!("  {:<12} indent {}", "", indent);
        }
        if !profile.files.is_empty() {
            println!("  {:<12} files: {}", "", profile.files.join(", "));
        }
    }

    println!();
    println!(
        "{} use {} or add [[profile]] tables to a {} file.",
        "Hint:".dimmed(),
        "--profile <name>".cyan(),
        "--config".cyan()
    );
    Ok(())
}
