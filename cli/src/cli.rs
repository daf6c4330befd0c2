//! Command line surface of the `vibelook` binary.

use clap::{Args, Parser, Subcommand};
use engine::Occasion;
use std::path::PathBuf;

/// Generate makeup looks from an aesthetic, tweak their palettes and keep favorites
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: ./config.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Favorites file, overriding storage.favorites_path
    #[arg(long, global = true, value_name = "FILE")]
    pub favorites: Option<String>,

    /// Log level, overriding logging.level
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the available vibes
    Vibes,
    /// Generate a look and print it
    Generate(GenerateArgs),
    /// Inspect or prune saved looks
    Favorites(FavoritesArgs),
    /// Interactive session (default)
    Session,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Vibe key, e.g. soft-glam
    pub vibe: String,

    /// Occasion tag, e.g. date or night-out
    #[arg(short, long, value_name = "OCCASION")]
    pub occasion: Option<Occasion>,

    /// Save the generated look to favorites
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Clone, Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesCommand {
    /// List saved looks
    List,
    /// Remove a saved look by id
    Remove {
        /// Look id as shown by `favorites list`
        id: String,
    },
}

/// One line typed into the interactive session.
#[derive(Debug, Parser)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum SessionCommand {
    /// generate <vibe> [occasion...]
    Generate {
        vibe: String,
        /// Remaining words form the occasion, so `night out` works unquoted
        occasion: Vec<String>,
    },
    /// set <index> <hex>
    Set { index: usize, color: String },
    /// reset
    Reset,
    /// save
    Save,
    /// remove <id>
    Remove { id: String },
    /// restore <id>
    Restore { id: String },
    /// favorites
    Favorites,
    /// show
    Show,
    /// vibes
    Vibes,
    /// help
    Help,
    /// quit
    #[command(alias = "exit")]
    Quit,
}

impl SessionLine {
    /// Parses a whitespace separated command line.
    pub fn parse_line(line: &str) -> Result<SessionCommand, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

/// Joins the trailing words of `generate` into an occasion.
pub fn parse_occasion(words: &[String]) -> Result<Option<Occasion>, engine::LookError> {
    if words.is_empty() {
        return Ok(None);
    }
    words.join(" ").parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use claims::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
        SessionLine::command().debug_assert();
    }

    #[test]
    fn test_generate_with_occasion_and_save() {
        let cli = assert_ok!(Cli::try_parse_from([
            "vibelook",
            "generate",
            "bold",
            "--occasion",
            "Night Out",
            "--save",
        ]));
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.vibe, "bold");
        assert_eq!(args.occasion, Some(Occasion::NightOut));
        assert!(args.save);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = assert_ok!(Cli::try_parse_from([
            "vibelook",
            "favorites",
            "list",
            "--favorites",
            "/tmp/f.json",
            "--log-level",
            "debug",
        ]));
        assert_eq!(cli.favorites.as_deref(), Some("/tmp/f.json"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_no_subcommand_means_session() {
        let cli = assert_ok!(Cli::try_parse_from(["vibelook"]));
        assert_none!(cli.command);
    }

    #[test]
    fn test_session_lines() {
        assert_eq!(
            assert_ok!(SessionLine::parse_line("generate coquette brunch")),
            SessionCommand::Generate {
                vibe: "coquette".into(),
                occasion: vec!["brunch".into()]
            }
        );
        assert_eq!(
            assert_ok!(SessionLine::parse_line("  set 2   #fcc ")),
            SessionCommand::Set {
                index: 2,
                color: "#fcc".into()
            }
        );
        assert_eq!(assert_ok!(SessionLine::parse_line("help")), SessionCommand::Help);
        assert_eq!(assert_ok!(SessionLine::parse_line("exit")), SessionCommand::Quit);
    }

    #[test]
    fn test_bad_session_lines_are_rejected() {
        assert_err!(SessionLine::parse_line("dance"));
        assert_err!(SessionLine::parse_line("set two #fff"));
        assert_err!(SessionLine::parse_line("generate"));
    }

    #[test]
    fn test_session_occasion_may_span_words() {
        let SessionCommand::Generate { vibe, occasion } =
            assert_ok!(SessionLine::parse_line("generate bold night out"))
        else {
            panic!("expected generate");
        };
        assert_eq!(vibe, "bold");
        assert_eq!(assert_ok!(parse_occasion(&occasion)), Some(Occasion::NightOut));
        assert_eq!(assert_ok!(parse_occasion(&[])), None);
        assert_matches!(
            parse_occasion(&["sometime".to_string()]),
            Err(engine::LookError::NotFound { kind: "occasion", .. })
        );
    }
}
