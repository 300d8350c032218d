mod audio;
mod command;
mod score_store;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
