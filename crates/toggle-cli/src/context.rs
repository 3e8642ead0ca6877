//! Profile resolution and document loading shared by all commands.

use std::path::{Path, PathBuf};

use toggle_engine::{MarkerProfile, Parsed, ProfileSet, parse};

use crate::error::{CliError, Result};

/// Global options that apply to every command.
#[derive(Debug, Clone)]
pub struct ToggleContext {
    profiles: ProfileSet,
    explicit: Option<String>,
}

/// A document read from disk and parsed with its profile.
#[derive(Debug)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub profile: String,
    /// The file content exactly as read.
    pub text: String,
    pub parsed: Parsed,
}

impl ToggleContext {
    /// Built-in profiles merged with those from `config`, if given.
    pub fn new(profile: Option<String>, config: Option<&Path>) -> Result<Self> {
        let mut profiles = ProfileSet::new();
        if let Some(config) = config {
            profiles = profiles.merge(toggle_fs::load_profiles(config)?);
        }
        if let Some(name) = profile.as_deref() {
            profiles.get(name)?;
        }
        Ok(Self {
            profiles,
            explicit: profile,
        })
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// The profile for `path`: explicit, then by file name, then pre-commit.
    pub fn profile_for(&self, path: Option<&Path>) -> Result<&MarkerProfile> {
        let file_name = path
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str());
        Ok(self.profiles.resolve(self.explicit.as_deref(), file_name)?)
    }

    /// The document `list` reads when no path is given.
    pub fn default_document(&self) -> Result<PathBuf> {
        let profile = self.profile_for(None)?;
        profile.default_file().map(PathBuf::from).ok_or_else(|| {
            CliError::user(format!(
                "profile '{}' has no default file; pass a document path",
                profile.name
            ))
        })
    }

    /// Read and parse a document.
    pub fn load(&self, path: &Path) -> Result<LoadedDocument> {
        let profile = self.profile_for(Some(path))?;
        let marker = profile.compile()?;
        let text = toggle_fs::io::read_text(path)?;
        tracing::debug!(?path, profile = %profile.name, "Loading document");
        let parsed = parse(&text, &marker);

        Ok(LoadedDocument {
            path: path.to_path_buf(),
            profile: profile.name.clone(),
            text,
            parsed,
        })
    }
}
