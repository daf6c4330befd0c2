use crate::cli::{SessionCommand, SessionLine, parse_occasion};
use crate::error::{AppError, AppResult};
use crate::output;
use engine::{LookId, LookSession};
use rand::Rng;
use std::io::{BufRead, Write};

const PROMPT: &str = "vibelook> ";

enum Flow {
    Continue,
    Quit,
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Engine rejections and unparseable lines are reported on `out` and the loop
/// keeps going; only I/O failures on `input` or `out` end it early.
pub async fn run_shell<R, I, W>(
    session: &mut LookSession<R>,
    input: I,
    out: &mut W,
) -> AppResult<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Favorites: {} ({} saved)",
        session.favorites().location(),
        session.favorites().len()
    )?;
    writeln!(out, "Type `help` for commands, `quit` to leave.")?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            let outcome = match SessionLine::parse_line(&line) {
                Ok(command) => execute(session, command, out).await,
                Err(e) => Err(AppError::Command(first_line(&e.to_string()))),
            };

            match outcome {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => report(out, &e)?,
            }
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

async fn execute<R, W>(
    session: &mut LookSession<R>,
    command: SessionCommand,
    out: &mut W,
) -> AppResult<Flow>
where
    R: Rng,
    W: Write,
{
    log::debug!("Session command: {command:?}");

    match command {
        SessionCommand::Generate { vibe, occasion } => {
            let occasion = parse_occasion(&occasion)?;
            writeln!(out, "Generating...")?;
            let look = session.generate(&vibe, occasion).await?;
            writeln!(out, "{}", output::format_look(look))?;
        }
        SessionCommand::Set { index, color } => {
            let look = session.set_color(index, &color)?;
            writeln!(out, "{}", output::format_look(look))?;
        }
        SessionCommand::Reset => {
            let look = session.reset_palette()?;
            writeln!(out, "{}", output::format_look(look))?;
        }
        SessionCommand::Save => {
            let count = session.save_favorite()?.len();
            writeln!(out, "Saved ({count} favorites).")?;
        }
        SessionCommand::Remove { id } => {
            let before = session.list_favorites().len();
            let after = session.remove_favorite(&LookId::from(id.as_str()))?.len();
            if after < before {
                writeln!(out, "Removed {id}.")?;
            } else {
                writeln!(out, "No favorite with id {id}.")?;
            }
        }
        SessionCommand::Restore { id } => {
            let look = session.restore_favorite(&LookId::from(id.as_str()))?;
            writeln!(out, "{}", output::format_look(look))?;
        }
        SessionCommand::Favorites => {
            writeln!(out, "{}", output::format_favorites(session.list_favorites()))?;
        }
        SessionCommand::Show => match session.current() {
            Some(look) => writeln!(out, "{}", output::format_look(look))?,
            None => writeln!(out, "No current look. Try `generate soft-glam`.")?,
        },
        SessionCommand::Vibes => writeln!(out, "{}", output::format_vibes())?,
        SessionCommand::Help => writeln!(out, "{}", output::SESSION_HELP)?,
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn report<W: Write>(out: &mut W, error: &AppError) -> AppResult<()> {
    match error {
        AppError::Engine(e) if e.is_rejected_input() => {
            log::debug!("Session input rejected: {error}")
        }
        AppError::Command(_) => log::debug!("Unparsed session line: {error}"),
        _ => log::warn!("Session command failed: {error}"),
    }
    writeln!(out, "error: {error}")?;
    if let Some(hint) = error.hint() {
        writeln!(out, "  {hint}")?;
    }
    Ok(())
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
