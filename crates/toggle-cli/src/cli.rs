//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// toggle-blocks - Enable and disable named blocks in YAML-like config files
#[derive(Parser, Debug)]
#[command(name = "toggle-blocks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Marker profile to use (pre-commit, gitlab-ci, keys, or one from --config)
    ///
    /// When omitted the profile is picked from the document's file name,
    /// falling back to pre-commit.
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// TOML or JSON file with extra [[profile]] definitions
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every block with its enabled/disabled state
    ///
    /// Examples:
    ///   toggle-blocks list                      # .pre-commit-config.yaml
    ///   toggle-blocks list .gitlab-ci.yml       # profile picked from file name
    ///   toggle-blocks list ci.yml -p gitlab-ci --json
    List {
        /// Document to inspect (defaults to the profile's usual file)
        path: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the raw lines of a block
    Show {
        /// Document to inspect
        path: PathBuf,

        /// Block name
        name: String,
    },

    /// Comment out a block
    ///
    /// The previous file content is saved to <path>.backup.
    Disable {
        /// Document to modify
        path: PathBuf,

        /// Block name
        name: String,

        /// Preview the change without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Uncomment a block
    ///
    /// The previous file content is saved to <path>.backup.
    Enable {
        /// Document to modify
        path: PathBuf,

        /// Block name
        name: String,

        /// Preview the change without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List available marker profiles
    Profiles,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["toggle-blocks"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_list_without_path() {
        let cli = Cli::parse_from(["toggle-blocks", "list"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                path: None,
                json: false
            })
        );
    }

    #[test]
    fn parse_list_with_path_and_json() {
        let cli = Cli::parse_from(["toggle-blocks", "list", "ci.yml", "--json"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                path: Some(PathBuf::from("ci.yml")),
                json: true
            })
        );
    }

    #[test]
    fn parse_show_command() {
        let cli = Cli::parse_from(["toggle-blocks", "show", "cfg.yaml", "black"]);
        match cli.command {
            Some(Commands::Show { path, name }) => {
                assert_eq!(path, PathBuf::from("cfg.yaml"));
                assert_eq!(name, "black");
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn parse_disable_dry_run() {
        let cli = Cli::parse_from(["toggle-blocks", "disable", "cfg.yaml", "black", "--dry-run"]);
        match cli.command {
            Some(Commands::Disable {
                name,
                dry_run,
                json,
                ..
            }) => {
                assert_eq!(name, "black");
                assert!(dry_run);
                assert!(!json);
            }
            _ => panic!("Expected Disable command"),
        }
    }

    #[test]
    fn parse_enable_command() {
        let cli = Cli::parse_from(["toggle-blocks", "enable", "cfg.yaml", "black"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Enable {
                dry_run: false,
                json: false,
                ..
            })
        ));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "toggle-blocks",
            "list",
            "-v",
            "--profile",
            "gitlab-ci",
            "--config",
            "toggle.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.profile.as_deref(), Some("gitlab-ci"));
        assert_eq!(cli.config, Some(PathBuf::from("toggle.toml")));
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["toggle-blocks", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }

    #[test]
    fn disable_requires_name() {
        let result = Cli::try_parse_from(["toggle-blocks", "disable", "cfg.yaml"]);
        assert!(result.is_err());
    }
}
