//! Marker profiles describing which lines start a named block.
//!
//! Pre-commit hook lists and CI job files mark blocks differently, so the
//! block-start rule is data rather than code. Profiles can be loaded from a
//! TOML config file and override the built-ins by name.
//!
//! Example config:
//! ```toml
//! [[profile]]
//! name = "actions"
//! pattern = '^(?P<name>[\w-]+):\s*$'
//! indent = 2
//! files = ["ci.yml"]
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::Line;
use crate::error::{Error, Result};

pub const PRE_COMMIT: &str = "pre-commit";
pub const GITLAB_CI: &str = "gitlab-ci";
pub const KEYS: &str = "keys";

/// GitLab CI top-level keywords that are not jobs.
const GITLAB_GLOBAL_KEYWORDS: &[&str] = &[
    "stages",
    "variables",
    "default",
    "include",
    "workflow",
    "image",
    "services",
    "cache",
    "before_script",
    "after_script",
];

/// Serializable description of a block-start marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerProfile {
    /// Profile identifier, e.g. `pre-commit`.
    pub name: String,
    /// Regex matched against uncommented line content. Must have a `name` group.
    pub pattern: String,
    /// Only lines at exactly this effective indentation start blocks.
    #[serde(default)]
    pub indent: Option<usize>,
    /// Captured names that never start a block.
    #[serde(default)]
    pub reserved: Vec<String>,
    /// File names this profile is picked for automatically.
    #[serde(default)]
    pub files: Vec<String>,
}

impl MarkerProfile {
    /// `- id: <hook>` entries of a `.pre-commit-config.yaml`.
    pub fn pre_commit() -> Self {
        Self {
            name: PRE_COMMIT.into(),
            pattern: r#"^-\s+id:\s*["']?(?P<name>[^\s"'#]+)["']?\s*(?:#.*)?$"#.into(),
            indent: None,
            reserved: Vec::new(),
            files: vec![".pre-commit-config.yaml".into(), ".pre-commit-config.yml".into()],
        }
    }

    /// Top-level job keys of a `.gitlab-ci.yml`.
    pub fn gitlab_ci() -> Self {
        Self {
            name: GITLAB_CI.into(),
            pattern: r"^(?P<name>\.?[A-Za-z0-9_][\w.\- ]*?):\s*(?:#.*)?$".into(),
            indent: Some(0),
            reserved: GITLAB_GLOBAL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            files: vec![".gitlab-ci.yml".into(), ".gitlab-ci.yaml".into()],
        }
    }

    /// Every mapping key at any depth.
    pub fn keys() -> Self {
        Self {
            name: KEYS.into(),
            pattern: r"^(?P<name>[A-Za-z0-9_][\w.\-]*):(?:\s.*)?$".into(),
            indent: None,
            reserved: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn builtins() -> Vec<Self> {
        vec![Self::pre_commit(), Self::gitlab_ci(), Self::keys()]
    }

    /// The file a command falls back to when no document path is given.
    pub fn default_file(&self) -> Option<&str> {
        self.files.first().map(String::as_str)
    }

    /// Compile the pattern into a [`BlockMarker`].
    pub fn compile(&self) -> Result<BlockMarker> {
        let regex = Regex::new(&self.pattern).map_err(|e| Error::InvalidMarker {
            pattern: self.pattern.clone(),
            message: e.to_string(),
        })?;
        if !regex.capture_names().any(|n| n == Some("name")) {
            return Err(Error::InvalidMarker {
                pattern: self.pattern.clone(),
                message: "pattern has no `name` capture group".into(),
            });
        }
        Ok(BlockMarker {
            profile: self.name.clone(),
            regex,
            indent: self.indent,
            reserved: self.reserved.clone(),
        })
    }
}

/// Built-in profiles with configured ones merged over them.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    profiles: Vec<MarkerProfile>,
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self {
            profiles: MarkerProfile::builtins(),
        }
    }
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add profiles, replacing any existing profile with the same name.
    pub fn merge(mut self, extra: impl IntoIterator<Item = MarkerProfile>) -> Self {
        for profile in extra {
            match self.profiles.iter_mut().find(|p| p.name == profile.name) {
                Some(existing) => *existing = profile,
                None => self.profiles.push(profile),
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerProfile> {
        self.profiles.iter()
    }

    pub fn get(&self, name: &str) -> Result<&MarkerProfile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownProfile { name: name.into() })
    }

    /// Pick a profile: explicit name, then file-name match, then pre-commit.
    pub fn resolve(&self, explicit: Option<&str>, file_name: Option<&str>) -> Result<&MarkerProfile> {
        if let Some(name) = explicit {
            return self.get(name);
        }
        if let Some(file_name) = file_name {
            if let Some(profile) = self
                .profiles
                .iter()
                .find(|p| p.files.iter().any(|f| f == file_name))
            {
                return Ok(profile);
            }
        }
        self.get(PRE_COMMIT)
    }
}

/// A compiled block-start rule.
#[derive(Debug, Clone)]
pub struct BlockMarker {
    profile: String,
    regex: Regex,
    indent: Option<usize>,
    reserved: Vec<String>,
}

impl BlockMarker {
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Return the block name if `line` starts a block.
    pub fn match_line(&self, line: &Line) -> Option<String> {
        if line.is_blank() {
            return None;
        }
        if let Some(indent) = self.indent {
            if line.effective_indent() != indent {
                return None;
            }
        }
        let caps = self.regex.captures(line.content())?;
        let name = caps.name("name")?.as_str().trim();
        if name.is_empty() || self.reserved.iter().any(|r| r == name) {
            return None;
        }
        Some(name.to_string())
    }
}
