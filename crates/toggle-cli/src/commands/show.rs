//! Show command

use std::path::Path;
use toggle_engine::{find, show};

use super::{report_ambiguity, report_warnings};
use crate::context::ToggleContext;
use crate::error::Result;

/// Run the show command
pub fn run_show(ctx: &ToggleContext, path: &Path, name: &str) -> Result<()> {
    let loaded = ctx.load(path)?;
    report_warnings(&loaded.parsed.warnings);

    let located = find(&loaded.parsed.blocks, name)?;
    report_ambiguity(located.ambiguity.as_ref());

    let text = show(&loaded.parsed.document, located.block);
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
