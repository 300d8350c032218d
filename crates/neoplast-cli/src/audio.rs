use std::io::{self, Write as _};

/// Feedback cues fired after state changes. Playing is fire-and-forget;
/// nothing observes whether a cue was heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cue {
    /// A tool or color was selected.
    Click,
    /// A level was passed.
    Success,
    /// A manual check fell short.
    Failure,
}

/// Something that can play feedback cues.
pub(crate) trait CuePlayer: std::fmt::Debug {
    fn play(&mut self, cue: Cue);
}

/// Plays cues with the terminal bell, the only beep a terminal portably has.
/// The success cue repeats the bell where the original design used a rising
/// arpeggio.
#[derive(Debug, Default)]
pub(crate) struct TerminalBell;

impl CuePlayer for TerminalBell {
    fn play(&mut self, cue: Cue) {
        let bells: &[u8] = match cue {
            Cue::Click | Cue::Failure => b"\x07",
            Cue::Success => b"\x07\x07\x07",
        };
        let mut stdout = io::stdout();
        _ = stdout.write_all(bells);
        _ = stdout.flush();
    }
}

/// Discards every cue (`--no-sound`).
#[derive(Debug, Default)]
pub(crate) struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}
