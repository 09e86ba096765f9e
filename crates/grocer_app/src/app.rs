use std::io::{self, BufRead, Write};

use anyhow::Context;
use engine_logging::{engine_debug, engine_info, engine_warn};
use grocer_core::{update, Effect, Mode, Msg, Session};

use crate::config::{resolve_config, ConfigSource};
use crate::input::TokenReader;
use crate::{logging, render};

/// Load config, initialize the tracker, then run the menu on stdin/stdout.
pub fn run() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, source) = resolve_config(&cwd);
    logging::initialize(config.log, config.log_level, &config.log_path);
    match source {
        ConfigSource::File(path) => engine_info!("Loaded config from {:?}", path),
        ConfigSource::Defaults => engine_info!("No config file, using defaults"),
        ConfigSource::Fallback(err) => engine_warn!("Ignoring config: {}", err),
    }

    let table = grocer_engine::initialize(&config.tracker_paths())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = run_menu(Session::new(table), stdin.lock(), &mut stdout.lock())?;

    let view = session.view();
    engine_info!(
        "Session over after {} menu cycles ({} items, {} tokens)",
        view.completed_cycles,
        view.distinct_items,
        view.total_items
    );
    Ok(())
}

/// Drive the menu until the operator exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    session: Session,
    input: R,
    out: &mut W,
) -> io::Result<Session> {
    let mut reader = TokenReader::new(input);
    let mut session = dispatch(session, Msg::Started, &mut reader, out)?;

    loop {
        let awaiting_item = match session.mode() {
            Mode::Exited => break,
            Mode::AwaitingChoice => false,
            Mode::AwaitingItem => true,
        };
        let msg = match reader.next_token()? {
            None => {
                engine_info!("Input closed, leaving menu");
                Msg::InputClosed
            }
            Some(token) if awaiting_item => {
                engine_debug!("Lookup {:?}", token);
                Msg::ItemEntered(token)
            }
            Some(token) => {
                engine_debug!("Menu choice {:?}", token);
                Msg::ChoiceEntered(token)
            }
        };
        session = dispatch(session, msg, &mut reader, out)?;
    }

    Ok(session)
}

fn dispatch<R: BufRead, W: Write>(
    session: Session,
    msg: Msg,
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> io::Result<Session> {
    let (session, effects) = update(session, msg);
    for effect in effects {
        match effect {
            Effect::DiscardLine => reader.discard_line(),
            Effect::Unread(token) => reader.unread(token),
            Effect::InvalidInput => {
                engine_warn!("Rejected non-numeric menu input");
                render::render(out, session.table(), &effect)?;
            }
            other => render::render(out, session.table(), &other)?,
        }
    }
    Ok(session)
}
