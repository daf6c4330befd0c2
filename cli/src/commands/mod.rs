//! Handlers behind the `vibelook` subcommands.

pub mod shell;

use crate::cli::{Command, FavoritesCommand, GenerateArgs};
use crate::config::{AppConfig, setup};
use crate::error::AppResult;
use crate::output;
use engine::favorites::{FavoritesStore, FileStorage};
use engine::generator::LookGenerator;
use engine::{LookId, LookSession};
use std::io::{self, Write};

/// Runs `command` against the configured services and favorites file,
/// writing results to stdout.
pub async fn run(command: Command, config: &AppConfig) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Vibes => {
            writeln!(out, "{}", output::format_vibes())?;
        }
        Command::Generate(args) => {
            let mut session = open_session(config, &mut out)?;
            generate_once(&mut session, args, &mut out).await?;
        }
        Command::Favorites(args) => {
            let mut store = open_favorites(config, &mut out)?;
            match args.command {
                FavoritesCommand::List => {
                    writeln!(out, "{}", output::format_favorites(store.list()))?;
                }
                FavoritesCommand::Remove { id } => {
                    if store.remove(&LookId::from(id.as_str()))? {
                        writeln!(out, "Removed {id}.")?;
                    } else {
                        writeln!(out, "No favorite with id {id}.")?;
                    }
                }
            }
        }
        Command::Session => {
            let mut session = open_session(config, &mut out)?;
            let stdin = io::stdin();
            shell::run_shell(&mut session, stdin.lock(), &mut out).await?;
        }
    }

    Ok(())
}

/// Generates one look, prints it and saves it when asked.
pub async fn generate_once<R, W>(
    session: &mut LookSession<R>,
    args: GenerateArgs,
    out: &mut W,
) -> AppResult<()>
where
    R: rand::Rng,
    W: Write,
{
    let look = session.generate(&args.vibe, args.occasion).await?;
    writeln!(out, "{}", output::format_look(look))?;

    if args.save {
        let count = session.save_favorite()?.len();
        writeln!(out, "Saved to favorites ({count} total).")?;
    }
    Ok(())
}

fn open_favorites<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<FavoritesStore> {
    let path = config.storage().resolve_favorites_path()?;
    setup::ensure_parent_dir(&path)?;

    let store = FavoritesStore::open(FileStorage::new(&path));
    if let Some(e) = store.last_recovery() {
        writeln!(
            out,
            "Warning: saved favorites could not be read ({e}). Starting with an empty list."
        )?;
    }
    Ok(store)
}

fn open_session<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<LookSession> {
    let favorites = open_favorites(config, out)?;
    let generator = LookGenerator::from_config(config.services())?;
    Ok(LookSession::new(generator, favorites))
}
