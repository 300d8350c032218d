use std::path::PathBuf;

use neoplast_engine::GameSeed;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;

pub(crate) const DEFAULT_LEADERBOARD_PATH: &str = "./data/leaderboard.json";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Replay a specific session seed (32 hex characters)
    #[clap(long)]
    seed: Option<GameSeed>,
    /// Where the leaderboard is stored
    #[clap(long, default_value = DEFAULT_LEADERBOARD_PATH)]
    leaderboard_path: PathBuf,
    /// Disable the terminal-bell feedback cues
    #[clap(long, default_value_t = false)]
    no_sound: bool,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            leaderboard_path: DEFAULT_LEADERBOARD_PATH.into(),
            no_sound: false,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        leaderboard_path,
        no_sound,
    } = arg;

    let mut app = PlayApp::new(*seed, leaderboard_path.clone(), *no_sound)?;
    Tui::new(app::TICK_RATE, app::FRAME_RATE).run(&mut app)?;

    // Surface a persistence failure only after the terminal is restored.
    app.into_save_result()
}
