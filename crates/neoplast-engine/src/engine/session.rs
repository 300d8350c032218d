use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    core::{Block, BlockColor, SplitAxis},
    engine::{GameSeed, GameStats, generate_target, scorer},
};

/// Seconds on the clock at the start of every level.
pub const LEVEL_SECONDS: u32 = 30;

/// Ratio used by the split tools. Players always split through the middle.
const PLAYER_SPLIT_RATIO: f64 = 0.5;

/// Editing tool applied by [`GameSession::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Tool {
    Paint,
    SplitHorizontal,
    SplitVertical,
}

/// Lifecycle state of a session.
///
/// Level advancement is not a state of its own: completing a level mutates
/// the stats, swaps in a fresh target and player canvas and stays `Playing`,
/// reported to the caller through [`LevelOutcome::Advanced`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    NotStarted,
    Playing,
    GameOver,
}

/// Result of an end-of-level evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// The score reached the pass threshold; the session has already moved
    /// on to the next level.
    Advanced { score: u8 },
    /// The score fell short at the timeout; the session is over.
    GameOver { score: u8 },
}

/// Result of a manual check requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Passed: behaves exactly like a timeout success, the next level has
    /// already begun.
    Passed { score: u8 },
    /// Informational only; nothing changed.
    BelowThreshold { score: u8 },
}

/// The game state machine.
///
/// Owns the player and target canvases, the selected tool and color, the
/// level/score statistics and the countdown. Timing follows an external
/// clock: the session is constructed with an `fps` and the front end calls
/// [`increment_frame`](Self::increment_frame) once per tick, so tests drive
/// time synchronously with `fps = 1`.
///
/// The session is the single writer of both canvases; rendering reads them
/// between mutations through [`player`](Self::player) and
/// [`target`](Self::target).
#[derive(Debug, Clone)]
pub struct GameSession {
    rng: Pcg32,
    player: Block,
    target: Block,
    stats: GameStats,
    state: SessionState,
    selected_tool: Tool,
    selected_color: BlockColor,
    time_left: u32,
    last_score: Option<u8>,
    fps: u64,
    frames_this_second: u64,
}

impl GameSession {
    /// Creates a session with a random seed, idle until
    /// [`start`](Self::start).
    #[must_use]
    pub fn new(fps: u64) -> Self {
        Self::with_seed(fps, rand::rng().random())
    }

    /// Like [`Self::new`], but deterministic: the same seed replays the same
    /// targets and the same similarity sample points.
    #[must_use]
    pub fn with_seed(fps: u64, seed: GameSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.bytes()),
            player: Block::unit(),
            target: Block::unit(),
            stats: GameStats::new(),
            state: SessionState::NotStarted,
            selected_tool: Tool::Paint,
            selected_color: BlockColor::Red,
            time_left: LEVEL_SECONDS,
            last_score: None,
            fps,
            frames_this_second: 0,
        }
    }

    #[must_use]
    pub const fn session_state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn player(&self) -> &Block {
        &self.player
    }

    #[must_use]
    pub const fn target(&self) -> &Block {
        &self.target
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Whole seconds remaining in the current level.
    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub const fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    #[must_use]
    pub const fn selected_color(&self) -> BlockColor {
        self.selected_color
    }

    /// The most recently computed similarity score, refreshed after every
    /// canvas edit and check. `None` until the first edit of a level.
    #[must_use]
    pub const fn last_score(&self) -> Option<u8> {
        self.last_score
    }

    /// Starts a new game from level 1 with a zero total.
    ///
    /// Valid from any state; after a game over this is the restart action.
    pub fn start(&mut self) {
        self.stats.reset();
        self.begin_level();
        self.state = SessionState::Playing;
    }

    /// Advances the clock by one frame; every `fps` frames consume a second.
    ///
    /// When the clock reaches zero the level is evaluated: a score of at
    /// least [`scorer::PASS_THRESHOLD`] moves on to the next level, anything
    /// less ends the game. Outside of `Playing` frames are ignored, so a
    /// finished session never re-evaluates however long the clock keeps
    /// running.
    pub fn increment_frame(&mut self) -> Option<LevelOutcome> {
        if !self.state.is_playing() {
            return None;
        }

        self.frames_this_second += 1;
        if self.frames_this_second < self.fps {
            return None;
        }
        self.frames_this_second = 0;

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return None;
        }
        Some(self.evaluate_level())
    }

    /// Recomputes the similarity score at the player's request.
    ///
    /// A passing score behaves exactly like a timeout success and advances
    /// immediately; a failing one changes nothing. `None` outside `Playing`.
    pub fn check_now(&mut self) -> Option<CheckOutcome> {
        if !self.state.is_playing() {
            return None;
        }

        let score = self.score_player();
        if score >= scorer::PASS_THRESHOLD {
            self.advance_level(score);
            Some(CheckOutcome::Passed { score })
        } else {
            Some(CheckOutcome::BelowThreshold { score })
        }
    }

    /// Applies the selected tool at a normalized point on the player canvas.
    ///
    /// Accepted only while playing. Edits that cannot apply (painting or
    /// splitting a block that already has children) are dropped without
    /// surfacing an error; the player just sees that nothing changed.
    pub fn click(&mut self, x: f64, y: f64) {
        if !self.state.is_playing() {
            return;
        }

        let Some(block) = self.player.block_at_mut(x, y) else {
            tracing::warn!(x, y, "click did not resolve to a block");
            return;
        };
        match self.selected_tool {
            Tool::Paint => _ = block.set_color(self.selected_color),
            Tool::SplitHorizontal => _ = block.split(SplitAxis::Horizontal, PLAYER_SPLIT_RATIO),
            Tool::SplitVertical => _ = block.split(SplitAxis::Vertical, PLAYER_SPLIT_RATIO),
        }

        self.score_player();
    }

    pub const fn select_tool(&mut self, tool: Tool) {
        self.selected_tool = tool;
    }

    /// Selecting a color also switches to the paint tool.
    pub const fn select_color(&mut self, color: BlockColor) {
        self.selected_color = color;
        self.selected_tool = Tool::Paint;
    }

    fn score_player(&mut self) -> u8 {
        let score = scorer::similarity(&self.player, &self.target, &mut self.rng);
        self.last_score = Some(score);
        score
    }

    fn evaluate_level(&mut self) -> LevelOutcome {
        let score = self.score_player();
        if score >= scorer::PASS_THRESHOLD {
            self.advance_level(score);
            LevelOutcome::Advanced { score }
        } else {
            self.state = SessionState::GameOver;
            LevelOutcome::GameOver { score }
        }
    }

    fn advance_level(&mut self, score: u8) {
        self.stats.complete_level(score);
        self.begin_level();
    }

    /// Fresh target, fresh single-leaf player, full clock.
    fn begin_level(&mut self) {
        self.target = generate_target(self.stats.level(), &mut self.rng);
        self.player = Block::unit();
        self.time_left = LEVEL_SECONDS;
        self.frames_this_second = 0;
        self.last_score = None;
    }
}
