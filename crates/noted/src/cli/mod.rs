mod commands;
mod render;
mod setup;

use clap::Parser;

pub fn run() -> notedapp::Result<()> {
    let cli = setup::Cli::parse();
    commands::dispatch(cli)
}
