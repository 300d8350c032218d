use std::path::PathBuf;

use crate::{command::play::DEFAULT_LEADERBOARD_PATH, score_store::Leaderboard};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct LeaderboardArg {
    /// Where the leaderboard is stored
    #[clap(long, default_value = DEFAULT_LEADERBOARD_PATH)]
    leaderboard_path: PathBuf,
}

pub(crate) fn run(arg: &LeaderboardArg) -> anyhow::Result<()> {
    let board = Leaderboard::load(&arg.leaderboard_path)?;
    if board.entries().is_empty() {
        println!("No scores recorded yet.");
        return Ok(());
    }

    for (index, entry) in board.entries().iter().enumerate() {
        println!(
            "#{}  {:>5} pts  {}",
            index + 1,
            entry.score,
            entry.date.format("%Y-%m-%d")
        );
    }
    Ok(())
}
