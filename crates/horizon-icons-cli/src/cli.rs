use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::Level;

/// Inspect and resolve freedesktop icon themes.
#[derive(Parser, Clone, Debug)]
#[command(name = "horizon-icons", version, about, long_about = None)]
pub(crate) struct CliParams {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliParams {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Theme selection shared by lookup commands.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ThemeArgs {
    /// Theme to resolve from (overrides the configuration)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Extra search path, searched first (repeatable)
    #[arg(short = 'p', long = "path")]
    pub paths: Vec<PathBuf>,

    /// Only use the paths given with --path and in the configuration
    #[arg(long)]
    pub no_default_paths: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Command {
    /// Resolve an icon name to a file
    Find {
        name: String,
        #[command(flatten)]
        theme: ThemeArgs,
        #[arg(short, long, default_value_t = 48)]
        size: u32,
        #[arg(long)]
        scale: Option<u32>,
        /// Accept an exact size from a parent over a resized icon from the theme
        #[arg(long)]
        prefer_parent: bool,
    },
    /// List discovered themes
    Themes {
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Print the lookup order for a theme
    Chain {
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// List icon names provided by a theme itself
    Icons {
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Resolve randomly chosen icons from a theme
    Sample {
        #[command(flatten)]
        theme: ThemeArgs,
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        #[arg(short, long, default_value_t = 48)]
        size: u32,
        /// Seed for a reproducible selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a stock art request through the art provider
    Art {
        /// Stock identifier (FILE_OPEN, wxART_ERROR, ...) or icon name
        id: String,
        #[command(flatten)]
        theme: ThemeArgs,
        /// Requesting client (toolbar, menu, message-box, ...)
        #[arg(long, default_value = "other")]
        client: String,
        /// Size in pixels; defaults to the client's size
        #[arg(short, long)]
        size: Option<u32>,
    },
    /// Create a new theme skeleton
    Scaffold {
        /// Theme directory to create
        dir: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        comment: Option<String>,
        /// Parent themes, comma separated
        #[arg(long, value_delimiter = ',', default_value = "hicolor")]
        inherits: Vec<String>,
        /// Nominal sizes, comma separated
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<u32>,
        /// Contexts, comma separated (actions, apps, places, ...)
        #[arg(long, value_delimiter = ',')]
        contexts: Vec<String>,
        /// Use Fixed instead of Threshold directories
        #[arg(long)]
        fixed: bool,
        /// Skip scalable/ directories
        #[arg(long)]
        no_scalable: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        CliParams::command().debug_assert();
    }

    #[test]
    fn test_parse_find() {
        let params =
            CliParams::try_parse_from(["horizon-icons", "-vv", "find", "firefox", "-t", "Adwaita"])
                .unwrap();
        assert_eq!(params.log_level(), Level::DEBUG);
        match params.command {
            Command::Find {
                name,
                theme,
                size,
                prefer_parent,
                ..
            } => {
                assert_eq!(name, "firefox");
                assert_eq!(theme.theme.as_deref(), Some("Adwaita"));
                assert_eq!(size, 48);
                assert!(!prefer_parent);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_scaffold_lists() {
        let params = CliParams::try_parse_from([
            "horizon-icons",
            "scaffold",
            "/tmp/Mine",
            "--name",
            "Mine",
            "--sizes",
            "16,24",
            "--contexts",
            "actions,places",
        ])
        .unwrap();
        match params.command {
            Command::Scaffold {
                sizes,
                contexts,
                inherits,
                ..
            } => {
                assert_eq!(sizes, [16, 24]);
                assert_eq!(contexts, ["actions", "places"]);
                assert_eq!(inherits, ["hicolor"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
