//! Fire-and-forget sound cues via the terminal bell

use std::io::{stderr, Write};

/// The two discrete signals the game emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Eat,
    Collision,
}

/// Bytes a cue writes to the terminal
fn cue_bytes(cue: AudioCue) -> &'static [u8] {
    match cue {
        AudioCue::Eat => b"\x07",
        // Terminals have a single bell; a double ring marks the crash
        AudioCue::Collision => b"\x07\x07",
    }
}

pub struct Speaker {
    enabled: bool,
}

impl Speaker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Ring the bell for a cue. Fire-and-forget: write errors are ignored.
    pub fn play(&mut self, cue: AudioCue) {
        if !self.enabled {
            return;
        }
        let mut out = stderr();
        let _ = out.write_all(cue_bytes(cue));
        let _ = out.flush();
    }
}
