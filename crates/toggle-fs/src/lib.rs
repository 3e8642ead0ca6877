//! Filesystem layer for toggle-blocks
//!
//! Provides text reads, atomic writes, one-generation backups and marker
//! profile config loading.

pub mod backup;
pub mod config;
pub mod error;
pub mod io;

pub use backup::{BACKUP_SUFFIX, backup_path, save};
pub use config::{ConfigStore, ToggleConfig, load_profiles};
pub use error::{Error, Result};
