//! Command implementations for toggle-cli

pub mod list;
pub mod profiles;
pub mod show;
pub mod toggle;

pub use list::run_list;
pub use profiles::run_profiles;
pub use show::run_show;
pub use toggle::run_toggle;

use colored::Colorize;
use toggle_engine::{AmbiguousMatch, ParseWarning};

/// Print parse warnings to stderr.
pub(crate) fn report_warnings(warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}

/// Print an ambiguous-name warning to stderr.
pub(crate) fn report_ambiguity(ambiguity: Option<&AmbiguousMatch>) {
    if let Some(ambiguity) = ambiguity {
        eprintln!("{} {}", "warning:".yellow().bold(), ambiguity);
    }
}
