//! Terminal Stackfall runner (default binary).
//!
//! Drives one `GameState` with a fixed 16ms tick, maps key presses to actions,
//! and persists the best score whenever a lock beats it.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use stackfall::core::{GameSnapshot, GameState, HighScoreTracker};
use stackfall::input::{handle_key_event, should_quit};
use stackfall::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use stackfall::types::TICK_MS;
use stackfall::HighScoreStore;

fn main() -> Result<()> {
    let store = HighScoreStore::from_env();
    let best = store.load()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &store, best);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

struct Session<'a> {
    game: GameState,
    tracker: HighScoreTracker,
    store: &'a HighScoreStore,
}

impl Session<'_> {
    /// Forward the latest lock to the tracker and persist a new best.
    fn publish_lock(&mut self) -> Result<()> {
        let Some(event) = self.game.take_last_event() else {
            return Ok(());
        };
        if let Some(best) = self.tracker.observe_event(&event) {
            self.store.save(best)?;
        }
        Ok(())
    }
}

fn run(term: &mut TerminalRenderer, store: &HighScoreStore, best: u32) -> Result<()> {
    let mut session = Session {
        game: GameState::new(clock_seed()),
        tracker: HighScoreTracker::new(best),
        store,
    };

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.game.snapshot_into(&mut snap);
        let hud = Hud {
            best: session.tracker.best(),
        };
        view.render_into(&snap, hud, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.game.apply_action(action);
                        session.publish_lock()?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.game.tick();
            session.publish_lock()?;
        }
    }
}
