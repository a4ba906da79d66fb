use std::io::{self, Write};

use log::warn;

use crate::game::GameEvent;

/// Sound cue requested by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cue {
    Eat,
    Collision,
}

impl Cue {
    #[must_use]
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::FoodEaten { .. } => Self::Eat,
            GameEvent::GameOver { .. } => Self::Collision,
        }
    }
}

/// Sink for sound cues.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell for every cue.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if let Err(error) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            warn!("failed to play {cue:?} cue: {error}");
        }
    }
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Plays the cue for each event in order.
pub fn play_events(player: &mut dyn CuePlayer, events: &[GameEvent]) {
    for event in events {
        player.play(Cue::for_event(event));
    }
}
