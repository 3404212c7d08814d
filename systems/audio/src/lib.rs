#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure audio director that folds world events into playback directives.
//!
//! The director owns no audio resources. It consumes event slices and emits
//! [`AudioSignal`] values for an adapter to realise; background music
//! directives are deduplicated so adapters never receive redundant starts or
//! stops.

use maze_chase_core::{Event, SessionPhase};

/// Fire-and-forget cue identifiers exposed at the audio boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// The player consumed a pellet.
    PelletEaten,
    /// The player's final life was lost.
    PlayerDied,
    /// Every pellet on the level was consumed.
    LevelCleared,
}

/// Playback directives emitted toward the audio adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioSignal {
    /// Begin looping the background music.
    StartMusic,
    /// Stop the background music.
    StopMusic,
    /// Trigger a one-shot cue.
    PlayCue(AudioCue),
}

/// Pure system that translates world events into audio directives.
#[derive(Debug, Default)]
pub struct AudioDirector {
    music_playing: bool,
}

impl AudioDirector {
    /// Creates a new director with the music considered stopped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes world events and appends the resulting playback directives.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<AudioSignal>) {
        for event in events {
            match event {
                Event::SessionStarted { .. } => {
                    if !self.music_playing {
                        self.music_playing = true;
                        out.push(AudioSignal::StartMusic);
                    }
                }
                Event::PelletEaten { .. } => {
                    out.push(AudioSignal::PlayCue(AudioCue::PelletEaten));
                }
                Event::LevelCleared { .. } => {
                    self.stop_music(out);
                    out.push(AudioSignal::PlayCue(AudioCue::LevelCleared));
                }
                Event::GameOver { .. } => {
                    self.stop_music(out);
                    out.push(AudioSignal::PlayCue(AudioCue::PlayerDied));
                }
                Event::PhaseChanged {
                    phase: SessionPhase::LevelSelect,
                } => {
                    self.stop_music(out);
                }
                _ => {}
            }
        }
    }

    fn stop_music(&mut self, out: &mut Vec<AudioSignal>) {
        if self.music_playing {
            self.music_playing = false;
            out.push(AudioSignal::StopMusic);
        }
    }
}
