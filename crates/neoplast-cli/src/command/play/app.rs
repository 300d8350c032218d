use std::path::PathBuf;

use chrono::Utc;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use neoplast_engine::{
    BlockColor, CheckOutcome, GameSeed, GameSession, LevelOutcome, SessionState, Tool,
};
use ratatui::{Frame, layout::Rect, text::Line};

use crate::{
    audio::{Cue, CuePlayer, Silent, TerminalBell},
    score_store::Leaderboard,
    tui::App,
    ui::{
        GameLayout,
        widgets::{SessionDisplay, style},
    },
};

/// Logic ticks per second; one countdown second spans this many ticks.
const FPS: u64 = 30;

pub(super) const TICK_RATE: f64 = 30.0;
pub(super) const FRAME_RATE: f64 = 30.0;

#[derive(Debug)]
pub(crate) struct PlayApp {
    session: GameSession,
    leaderboard: Leaderboard,
    leaderboard_path: PathBuf,
    cues: Box<dyn CuePlayer>,
    save_error: Option<anyhow::Error>,
    is_exiting: bool,
}

impl PlayApp {
    pub(super) fn new(
        seed: Option<GameSeed>,
        leaderboard_path: PathBuf,
        no_sound: bool,
    ) -> anyhow::Result<Self> {
        let session = match seed {
            Some(seed) => GameSession::with_seed(FPS, seed),
            None => GameSession::new(FPS),
        };
        let leaderboard = Leaderboard::load(&leaderboard_path)?;
        let cues: Box<dyn CuePlayer> = if no_sound {
            Box::new(Silent)
        } else {
            Box::new(TerminalBell)
        };

        Ok(Self {
            session,
            leaderboard,
            leaderboard_path,
            cues,
            save_error: None,
            is_exiting: false,
        })
    }

    /// A leaderboard write that failed mid-game, reported once the terminal
    /// is back to normal.
    pub(super) fn into_save_result(self) -> anyhow::Result<()> {
        match self.save_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let state = self.session.session_state().clone();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Enter if !state.is_playing() => self.session.start(),
            KeyCode::Char('r') if state.is_game_over() => self.session.start(),
            KeyCode::Char('h') if state.is_playing() => self.select_tool(Tool::SplitHorizontal),
            KeyCode::Char('v') if state.is_playing() => self.select_tool(Tool::SplitVertical),
            KeyCode::Char('p') if state.is_playing() => self.select_tool(Tool::Paint),
            KeyCode::Char(key @ '1'..='5') if state.is_playing() => {
                let index = key as usize - '1' as usize;
                self.select_color(BlockColor::ALL[index]);
            }
            KeyCode::Char('c') if state.is_playing() => self.check(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        // The renderer derives its layout from the terminal area alone, so
        // recomputing it here lands on the same player canvas cells.
        let Ok((width, height)) = crossterm::terminal::size() else {
            return;
        };
        let layout = GameLayout::compute(Rect::new(0, 0, width, height));
        if let Some((x, y)) = normalized_position(layout.player_canvas(), mouse.column, mouse.row)
        {
            self.session.click(x, y);
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        self.session.select_tool(tool);
        self.cues.play(Cue::Click);
    }

    fn select_color(&mut self, color: BlockColor) {
        self.session.select_color(color);
        self.cues.play(Cue::Click);
    }

    fn check(&mut self) {
        match self.session.check_now() {
            Some(CheckOutcome::Passed { .. }) => self.cues.play(Cue::Success),
            Some(CheckOutcome::BelowThreshold { .. }) => self.cues.play(Cue::Failure),
            None => {}
        }
    }

    fn record_final_score(&mut self) {
        self.leaderboard
            .record(self.session.stats().total_score(), Utc::now());
        if let Err(error) = self.leaderboard.save(&self.leaderboard_path) {
            self.save_error.get_or_insert(error);
        }
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(
            SessionDisplay::new(&self.session, &self.leaderboard),
            frame.area(),
        );

        let help = match self.session.session_state() {
            SessionState::NotStarted => "Enter (Start) | Q (Quit)",
            SessionState::Playing => {
                "Click (Apply Tool) | H V (Split) | P (Paint) | 1-5 (Color) | C (Check) | Q (Quit)"
            }
            SessionState::GameOver => "R (Restart) | Q (Quit)",
        };
        let layout = GameLayout::compute(frame.area());
        frame.render_widget(Line::from(help).style(style::DIMMED).centered(), layout.help);
    }

    fn update(&mut self) {
        match self.session.increment_frame() {
            Some(LevelOutcome::Advanced { .. }) => self.cues.play(Cue::Success),
            Some(LevelOutcome::GameOver { .. }) => {
                self.cues.play(Cue::Failure);
                self.record_final_score();
            }
            None => {}
        }
    }
}

/// Maps a terminal cell to normalized canvas coordinates, using the cell's
/// center so clicks resolve strictly inside `[0, 1)`.
fn normalized_position(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x
        || column >= area.x + area.width
        || row < area.y
        || row >= area.y + area.height
    {
        return None;
    }

    let x = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
    let y = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
    Some((x, y))
}
