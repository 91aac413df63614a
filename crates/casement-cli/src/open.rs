//! `casement open`: one interactive window.

use std::sync::Arc;
use std::time::Duration;

use casement_common::{Geometry, Result, SharedState};
use casement_config::CasementConfig;
use casement_store::{SlotStore, Store};
use casement_sync::{FixedGeometry, WindowSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{error, info, warn};

use crate::input::{self, InputCommand};
use crate::render;

type Session = WindowSession<Arc<dyn Store>, FixedGeometry>;

fn print_registry(session: &Session) {
    let current = session.current().map(|w| w.id);
    let commander = session.commander().map(|w| w.id);
    println!("windows ({}):", session.windows().len());
    for line in render::registry_lines(session.windows(), current, commander) {
        println!("  {line}");
    }
}

/// Apply one stdin command. Returns `false` on quit.
fn apply(session: &mut Session, source: &FixedGeometry, cmd: InputCommand) -> Result<bool> {
    match cmd {
        InputCommand::Move(geometry) => {
            source.set(geometry);
            if session.update()? {
                print_registry(session);
            }
        }
        InputCommand::List => print_registry(session),
        InputCommand::State => {
            println!("{}", render::state_line(session.shared_state().as_ref()));
        }
        InputCommand::Command(id) => {
            let mut state = session.shared_state().unwrap_or_else(SharedState::blank);
            state.command = Some(id);
            session.save_3d_infos(&state)?;
            println!("{}", render::state_line(Some(&state)));
        }
        InputCommand::Help => println!("{}", input::HELP),
        InputCommand::Quit => return Ok(false),
    }
    Ok(true)
}

pub async fn run(store: Arc<dyn Store>, config: &CasementConfig, geometry: Geometry) -> Result<()> {
    let source = FixedGeometry::new(geometry);
    let mut session = WindowSession::with_slots(
        SlotStore::from_config(store, &config.store),
        source.clone(),
    );
    let poll = Duration::from_millis(config.watch.poll_interval_ms);
    run_window(&mut session, &source, BufReader::new(tokio::io::stdin()), poll).await
}

/// Register, drive the window until it is closed, then unregister. The
/// entry is removed even when the loop fails.
async fn run_window<R>(
    session: &mut Session,
    source: &FixedGeometry,
    reader: R,
    poll: Duration,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let me = session.add_browser()?;
    println!("registered as #{} at {}", me.id, me.geometry());
    print_registry(session);
    println!("{}", input::HELP);

    let outcome = drive(session, source, reader.lines(), poll).await;
    if let Err(e) = &outcome {
        error!(id = %me.id, "window loop failed: {e}");
    }

    let removed = session.remove_browser();
    outcome?;
    removed?;
    info!(id = %me.id, "window closed");
    Ok(())
}

async fn drive<R>(
    session: &mut Session,
    source: &FixedGeometry,
    mut lines: Lines<R>,
    poll: Duration,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut ticker = tokio::time::interval(poll);
    let mut watching = true;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => return Ok(()),
            _ = ticker.tick() => {
                if session.update()? {
                    print_registry(session);
                }
            }
            change = session.next_change(), if watching => match change {
                Some(_) => print_registry(session),
                None => {
                    warn!("change feed closed; registry view will only refresh locally");
                    watching = false;
                }
            },
            line = lines.next_line() => match line? {
                Some(line) => match input::parse_line(&line) {
                    Ok(Some(cmd)) => {
                        if !apply(session, source, cmd)? {
                            return Ok(());
                        }
                    }
                    Ok(None) => {}
                    Err(e) => eprintln!("{e}"),
                },
                None => return Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_common::{BrowserId, CasementError};
    use casement_store::MemoryHub;
    use casement_sync::GeometrySource;

    const POLL: Duration = Duration::from_millis(10);

    fn session(hub: &MemoryHub, geometry: Geometry) -> (Session, FixedGeometry) {
        let source = FixedGeometry::new(geometry);
        let store: Arc<dyn Store> = Arc::new(hub.connect());
        (
            WindowSession::with_slots(SlotStore::new(store), source.clone()),
            source,
        )
    }

    #[tokio::test]
    async fn quit_unregisters_window() {
        let hub = MemoryHub::new();
        let (mut a, source) = session(&hub, Geometry::new(0, 0, 800, 600));

        run_window(&mut a, &source, &b"list\nquit\n"[..], POLL)
            .await
            .unwrap();

        assert!(!a.is_registered());
        assert!(a.slots().read_registry().is_empty());
    }

    #[tokio::test]
    async fn input_error_still_unregisters_window() {
        let hub = MemoryHub::new();
        let (mut keep, _) = session(&hub, Geometry::new(900, 0, 800, 600));
        keep.add_browser().unwrap();
        let (mut a, source) = session(&hub, Geometry::new(0, 0, 800, 600));

        // Not valid UTF-8, so reading the line fails.
        let result = run_window(&mut a, &source, &b"\xff\xfe\n"[..], POLL).await;

        assert!(matches!(result, Err(CasementError::Io(_))));
        assert!(!a.is_registered());
        let ids: Vec<BrowserId> = a.slots().read_registry().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![BrowserId(1)]);
    }

    #[tokio::test]
    async fn move_updates_entry_before_quit() {
        let hub = MemoryHub::new();
        let (mut keep, _) = session(&hub, Geometry::new(900, 0, 800, 600));
        keep.add_browser().unwrap();
        let (mut a, source) = session(&hub, Geometry::new(0, 0, 800, 600));

        run_window(&mut a, &source, &b"move 10 20 640 480\nquit\n"[..], POLL)
            .await
            .unwrap();

        keep.poll_changes();
        assert_eq!(keep.windows().len(), 1);
        assert_eq!(source.geometry(), Geometry::new(10, 20, 640, 480));
    }
}
