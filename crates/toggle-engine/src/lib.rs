//! Named block toggling for YAML-like configuration files.
//!
//! A document is split into named, nestable blocks located by indentation
//! (see [`parser`]). A block can be disabled by commenting out each of its
//! lines and enabled again by removing exactly that comment marker:
//!
//! ```text
//!       - id: check-yaml            # enabled
//!         args: [--unsafe]
//!
//!       # - id: check-yaml          # disabled
//!         # args: [--unsafe]
//! ```
//!
//! The pipeline is `parse` -> `find` -> `toggle` -> `Document::render`.
//! Every stage is pure; reading and writing files is left to `toggle-fs`.
//!
//! Which lines start a block is described by a [`MarkerProfile`]. Built-in
//! profiles cover pre-commit hooks, GitLab CI jobs and generic mapping keys.

pub mod document;
pub mod error;
pub mod listing;
pub mod locator;
pub mod parser;
pub mod profile;
pub mod toggle;

pub use document::{Document, Line};
pub use error::{Error, Result};
pub use listing::{BlockSummary, list, preview, show};
pub use locator::{AmbiguousMatch, Located, find};
pub use parser::{Block, BlockState, ParseWarning, Parsed, parse};
pub use profile::{BlockMarker, MarkerProfile, ProfileSet};
pub use toggle::{ToggleOutcome, Toggled, toggle};
